//! Four-pillar (Bazi) calendar.
//!
//! Turns a solar date plus an optional hour branch into year, month, day
//! and hour pillars. The lunar year, month and day come from a
//! [`LunarCalendar`]; the stems are then derived arithmetically:
//!
//! | pillar | stem index                         | branch                     |
//! |--------|------------------------------------|----------------------------|
//! | year   | `(lunarYear - 4) mod 10`           | year zodiac                |
//! | month  | `(lunarMonth*2 + 2 + yearStem) mod 10` | solar-term month       |
//! | day    | `(lunarDay + 6) mod 10`            | day zodiac                 |
//! | hour   | `(dayStem*2 + hourBranch) mod 10`  | the requested hour branch  |
//!
//! The month stem counts lunar months while its branch follows the 节
//! (see [`crate::solar_term`]), and the day stem counts lunar days while
//! its branch follows the continuous cycle. Either pillar may therefore
//! pair a stem and branch of different parity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::CoreResult;
use crate::ganzhi::{GanZhi, Pillar};
use crate::lunar::{LunarCalendar, LunarDate, TableLunarCalendar, day_cycle};
use crate::stem_branch::{EarthlyBranch, HeavenlyStem};

/// Map a clock hour (0-23) to its double-hour branch.
///
/// 23:00-00:59 is 子, 01:00-02:59 is 丑, and so on. Hours past 23 wrap.
pub fn hour_branch_for(clock_hour: u32) -> EarthlyBranch {
    EarthlyBranch::ALL[((clock_hour % 24 + 1) / 2 % 12) as usize]
}

/// Year, month, day and hour pillars of one moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FourPillars {
    /// Year pillar.
    pub year: Pillar,
    /// Month pillar.
    pub month: Pillar,
    /// Day pillar.
    pub day: Pillar,
    /// Hour pillar.
    pub hour: Pillar,
    /// The lunar date the pillars were derived from.
    pub lunar: LunarDate,
}

impl FourPillars {
    /// The day stem, read as the "day master" of the chart.
    pub fn day_master(&self) -> HeavenlyStem {
        self.day.stem
    }

    /// Pillars in year, month, day, hour order.
    pub fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    /// How many of the eight stems and branches carry each element,
    /// indexed by [`Element::index`].
    pub fn element_counts(&self) -> [u32; 5] {
        let mut counts = [0; 5];
        for p in self.pillars() {
            counts[p.stem.element().index()] += 1;
            counts[p.branch.element().index()] += 1;
        }
        counts
    }

    /// Elements absent from all eight positions.
    pub fn missing_elements(&self) -> Vec<Element> {
        let counts = self.element_counts();
        Element::ALL
            .into_iter()
            .filter(|e| counts[e.index()] == 0)
            .collect()
    }
}

impl std::fmt::Display for FourPillars {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

/// The four-pillar calendar over a pluggable lunar adapter.
#[derive(Debug, Clone, Default)]
pub struct SexagenaryCalendar<C: LunarCalendar = TableLunarCalendar> {
    lunar: C,
}

impl SexagenaryCalendar {
    /// Calendar backed by the built-in lunar tables.
    pub fn new() -> Self {
        Self::with_lunar(TableLunarCalendar::new())
    }
}

impl<C: LunarCalendar> SexagenaryCalendar<C> {
    /// Calendar backed by a custom lunar adapter.
    pub fn with_lunar(lunar: C) -> Self {
        Self { lunar }
    }

    /// The lunar adapter in use.
    pub fn lunar(&self) -> &C {
        &self.lunar
    }

    /// Compute the four pillars for `date`.
    ///
    /// An unknown hour falls back to 子 rather than dropping the hour pillar.
    pub fn four_pillars(
        &self,
        date: NaiveDate,
        hour: Option<EarthlyBranch>,
    ) -> CoreResult<FourPillars> {
        let lunar = self.lunar.lunar_date(date)?;
        let hour_branch = hour.unwrap_or_default();

        let year_stem = HeavenlyStem::wrapping(i64::from(lunar.year) - 4);
        let month_stem =
            HeavenlyStem::wrapping(i64::from(lunar.month) * 2 + 2 + year_stem.index() as i64);
        let day_stem = HeavenlyStem::wrapping(i64::from(lunar.day) + 6);
        let hour_stem =
            HeavenlyStem::wrapping(day_stem.index() as i64 * 2 + hour_branch.index() as i64);

        Ok(FourPillars {
            year: Pillar::new(year_stem, lunar.year_zodiac.branch()),
            month: Pillar::new(month_stem, lunar.month_zodiac.branch()),
            day: Pillar::new(day_stem, lunar.day_zodiac.branch()),
            hour: Pillar::new(hour_stem, hour_branch),
            lunar,
        })
    }

    /// The stem-branch of the day itself in the continuous sixty-day cycle.
    ///
    /// Used as the "current day" a daily reading is compared against.
    /// Defined for any date, so it never consults the lunar adapter.
    pub fn day_pillar(&self, date: NaiveDate) -> GanZhi {
        day_cycle(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::stem_branch::ZodiacAnimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    struct FixedLunar(LunarDate);

    impl LunarCalendar for FixedLunar {
        fn lunar_date(&self, _date: NaiveDate) -> CoreResult<LunarDate> {
            Ok(self.0)
        }
    }

    #[test]
    fn hour_branch_boundaries() {
        assert_eq!(hour_branch_for(23), EarthlyBranch::Zi);
        assert_eq!(hour_branch_for(0), EarthlyBranch::Zi);
        assert_eq!(hour_branch_for(1), EarthlyBranch::Chou);
        assert_eq!(hour_branch_for(2), EarthlyBranch::Chou);
        assert_eq!(hour_branch_for(11), EarthlyBranch::Wu);
        assert_eq!(hour_branch_for(12), EarthlyBranch::Wu);
        assert_eq!(hour_branch_for(22), EarthlyBranch::Hai);
    }

    #[test]
    fn pillars_for_lunar_new_year_2024() {
        let cal = SexagenaryCalendar::new();
        let p = cal.four_pillars(date(2024, 2, 10), None).unwrap();
        assert_eq!(p.year.to_string(), "甲辰");
        assert_eq!(p.month.to_string(), "戊寅");
        assert_eq!(p.hour.to_string(), "戊子");
        assert_eq!(p.lunar.year_zodiac, ZodiacAnimal::Dragon);
    }

    #[test]
    fn hour_stem_uses_day_stem() {
        let cal = SexagenaryCalendar::new();
        let p = cal
            .four_pillars(date(2024, 2, 10), Some(EarthlyBranch::Wu))
            .unwrap();
        assert_eq!(p.hour.to_string(), "甲午");
    }

    #[test]
    fn custom_adapter_drives_formulas() {
        let cal = SexagenaryCalendar::with_lunar(FixedLunar(LunarDate {
            year: 1984,
            month: 1,
            day: 4,
            is_leap_month: false,
            year_zodiac: ZodiacAnimal::Rat,
            month_zodiac: ZodiacAnimal::Tiger,
            day_zodiac: ZodiacAnimal::Rat,
        }));
        let p = cal.four_pillars(date(1984, 2, 5), None).unwrap();
        assert_eq!(p.year.to_string(), "甲子");
        assert_eq!(p.month.to_string(), "戊寅");
        assert_eq!(p.day.to_string(), "甲子");
        assert_eq!(p.day_master(), HeavenlyStem::Jia);
        assert_eq!(p.hour.to_string(), "甲子");
    }

    #[test]
    fn out_of_range_propagates() {
        let cal = SexagenaryCalendar::new();
        assert!(matches!(
            cal.four_pillars(date(1850, 6, 1), None),
            Err(CoreError::DateOutOfRange { .. })
        ));
    }

    #[test]
    fn day_pillar_defined_outside_table() {
        let cal = SexagenaryCalendar::new();
        assert_eq!(cal.day_pillar(date(2000, 1, 1)).to_string(), "戊午");
        assert!(cal.day_pillar(date(1800, 1, 1)).cycle_index() < 60);
    }

    #[test]
    fn element_counts_cover_eight_positions() {
        let cal = SexagenaryCalendar::new();
        let p = cal.four_pillars(date(1990, 1, 1), None).unwrap();
        assert_eq!(p.element_counts().iter().sum::<u32>(), 8);
        for e in p.missing_elements() {
            assert_eq!(p.element_counts()[e.index()], 0);
        }
    }

    #[test]
    fn serde_roundtrip() {
        let cal = SexagenaryCalendar::new();
        let p = cal.four_pillars(date(1984, 6, 15), None).unwrap();
        let json = serde_json::to_string(&p).unwrap();
        let back: FourPillars = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }
}
