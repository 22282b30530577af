//! Stored birth profiles.

use chrono::{DateTime, NaiveDate, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use tj_core::{EarthlyBranch, FourPillars, SexagenaryCalendar};

use crate::error::{SessionError, SessionResult};

/// Gender recorded on a profile. Only used to phrase prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    /// 男.
    Male,
    /// 女.
    Female,
}

impl Gender {
    /// Parse from English or Chinese (`male`, `m`, `男`, ...).
    pub fn parse(s: &str) -> SessionResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "男" => Ok(Self::Male),
            "female" | "f" | "女" => Ok(Self::Female),
            other => Err(SessionError::InvalidChoice(format!(
                "unknown gender '{other}', use: male, female"
            ))),
        }
    }

    /// Chinese form.
    pub fn chinese(self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.chinese())
    }
}

/// Check that a profile id is non-empty and only uses `[A-Za-z0-9_-]`.
///
/// Ids become file names in [`crate::JsonFileRepository`].
pub fn validate_id(id: &str) -> SessionResult<()> {
    let ok = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if ok {
        Ok(())
    } else {
        Err(SessionError::InvalidProfileId(id.to_string()))
    }
}

/// A person's birth data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Storage key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Solar birth date.
    pub birth_date: NaiveDate,
    /// Double-hour of birth, when known.
    #[serde(default)]
    pub hour_branch: Option<EarthlyBranch>,
    /// Gender, when given.
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Clock time of birth, used for the rising sign.
    #[serde(default)]
    pub birth_time: Option<NaiveTime>,
    /// Last time the profile was saved or edited.
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Create a profile, rejecting ids that are not `[A-Za-z0-9_-]+`.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        birth_date: NaiveDate,
    ) -> SessionResult<Self> {
        let id = id.into();
        validate_id(&id)?;
        Ok(Self {
            id,
            name: name.into(),
            birth_date,
            hour_branch: None,
            gender: None,
            birth_time: None,
            updated_at: Utc::now(),
        })
    }

    /// Set the birth hour branch.
    pub fn with_hour(mut self, hour: EarthlyBranch) -> Self {
        self.hour_branch = Some(hour);
        self
    }

    /// Set the gender.
    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Set the clock time of birth. Also fills the hour branch if unset.
    pub fn with_birth_time(mut self, time: NaiveTime) -> Self {
        self.birth_time = Some(time);
        if self.hour_branch.is_none() {
            self.hour_branch = Some(tj_core::hour_branch_for(time.hour()));
        }
        self
    }

    /// Four pillars of the birth moment.
    pub fn pillars(&self, calendar: &SexagenaryCalendar) -> SessionResult<FourPillars> {
        Ok(calendar.four_pillars(self.birth_date, self.hour_branch)?)
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) {}", self.name, self.id, self.birth_date)?;
        if let Some(hour) = self.hour_branch {
            write!(f, " {hour}时")?;
        }
        if let Some(gender) = self.gender {
            write!(f, " {gender}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn birth() -> NaiveDate {
        NaiveDate::from_ymd_opt(1984, 6, 15).unwrap()
    }

    #[test]
    fn ids() {
        assert!(validate_id("alice_01-b").is_ok());
        for bad in ["", "a b", "../etc", "名字", "a.json"] {
            assert!(
                matches!(validate_id(bad), Err(SessionError::InvalidProfileId(_))),
                "{bad:?} accepted"
            );
        }
        assert!(Profile::new("no/slash", "x", birth()).is_err());
    }

    #[test]
    fn gender_parse() {
        assert_eq!(Gender::parse("Male").unwrap(), Gender::Male);
        assert_eq!(Gender::parse("女").unwrap(), Gender::Female);
        assert!(Gender::parse("other").is_err());
    }

    #[test]
    fn birth_time_sets_hour() {
        let time = NaiveTime::from_hms_opt(23, 30, 0).unwrap();
        let p = Profile::new("a", "A", birth()).unwrap().with_birth_time(time);
        assert_eq!(p.hour_branch, Some(EarthlyBranch::Zi));

        let p = Profile::new("a", "A", birth())
            .unwrap()
            .with_hour(EarthlyBranch::Wu)
            .with_birth_time(time);
        assert_eq!(p.hour_branch, Some(EarthlyBranch::Wu));
    }

    #[test]
    fn pillars_from_profile() {
        let p = Profile::new("a", "A", birth()).unwrap();
        let pillars = p.pillars(&SexagenaryCalendar::new()).unwrap();
        assert_eq!(pillars.to_string(), "甲子 丙午 丙辰 戊子");
    }

    #[test]
    fn display() {
        let p = Profile::new("me", "小明", birth())
            .unwrap()
            .with_hour(EarthlyBranch::Chen)
            .with_gender(Gender::Male);
        assert_eq!(p.to_string(), "小明 (me) 1984-06-15 辰时 男");
    }

    #[test]
    fn json_without_optional_fields() {
        let json = r#"{"id":"a","name":"A","birth_date":"1984-06-15","updated_at":"2026-01-01T00:00:00Z"}"#;
        let p: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(p.hour_branch, None);
        assert_eq!(p.birth_date, birth());
    }
}
