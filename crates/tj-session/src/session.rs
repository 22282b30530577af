//! Interactive reading sessions.
//!
//! `ReadingSession` takes one line of input at a time, runs the matching
//! reading and records it in the journal. A loaded profile supplies the
//! birth data for commands that need it.

use chrono::{Local, NaiveDate, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;

use tj_core::{EarthlyBranch, Element, SexagenaryCalendar, hour_branch_for};
use tj_narrative::{FortuneComposer, chart};
use tj_oracle::{cast_hexagram, draw_stick, plum_blossom};

use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};
use crate::journal::entry::ReadingEntry;
use crate::journal::log::Journal;
use crate::profile::Profile;

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> SessionResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| SessionError::InvalidChoice(format!("invalid date '{s}', use YYYY-MM-DD")))
}

/// Parse a birth hour given as a branch (`午`, `wu`) or a clock hour (`0`-`23`).
pub fn parse_hour(s: &str) -> SessionResult<EarthlyBranch> {
    let t = s.trim();
    if let Ok(hour) = t.parse::<u32>() {
        if hour < 24 {
            return Ok(hour_branch_for(hour));
        }
        return Err(SessionError::InvalidChoice(format!(
            "invalid hour '{t}', use 0-23 or a branch"
        )));
    }
    Ok(EarthlyBranch::parse(t)?)
}

/// An interactive reading session.
pub struct ReadingSession {
    config: SessionConfig,
    profile: Option<Profile>,
    calendar: SexagenaryCalendar,
    composer: FortuneComposer,
    journal: Journal,
    rng: StdRng,
    today: NaiveDate,
}

impl ReadingSession {
    /// Start a session with no profile loaded.
    pub fn new(config: SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let today = config.today.unwrap_or_else(|| Local::now().date_naive());
        Self {
            composer: FortuneComposer::new(config.composer()),
            config,
            profile: None,
            calendar: SexagenaryCalendar::new(),
            journal: Journal::new(),
            rng,
            today,
        }
    }

    /// Load `profile` as the subject of the session.
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// The loaded profile.
    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    /// Get the journal.
    pub fn journal(&self) -> &Journal {
        &self.journal
    }

    /// The date treated as today.
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> SessionResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");
        tracing::debug!(command = %cmd, "session command");

        match cmd.as_str() {
            "bazi" => self.do_bazi(rest),
            "today" | "fortune" => self.do_today(rest),
            "cast" => self.do_cast(rest),
            "plum" => self.do_plum(rest),
            "stick" => self.do_stick(),
            "sign" => self.do_sign(rest),
            "note" => self.do_note(rest),
            "journal" => self.do_journal_show(),
            "export" => self.do_journal_export(rest),
            "status" => self.do_status(),
            "help" => self.do_help(rest),
            "quit" | "q" => Ok("再会。".to_string()),
            other => Err(SessionError::UnknownCommand(other.to_string())),
        }
    }

    fn require_profile(&self) -> SessionResult<&Profile> {
        self.profile.as_ref().ok_or(SessionError::NoProfile)
    }

    fn do_bazi(&mut self, rest: &str) -> SessionResult<String> {
        let mut args = rest.split_whitespace();
        let (birth, hour, profile_id) = match args.next() {
            Some(date) => {
                let hour = args.next().map(parse_hour).transpose()?;
                (parse_date(date)?, hour, None)
            }
            None => {
                let p = self.require_profile()?;
                (p.birth_date, p.hour_branch, Some(p.id.clone()))
            }
        };

        let pillars = self.calendar.four_pillars(birth, hour)?;
        let master = pillars.day_master();

        let mut out = format!("八字 {birth}（农历{}）\n", pillars.lunar);
        for (label, pillar) in ["年柱", "月柱", "日柱", "时柱"].iter().zip(pillars.pillars()) {
            match pillar.nayin() {
                Some(nayin) => out.push_str(&format!("{label} {pillar} {nayin}\n")),
                None => out.push_str(&format!("{label} {pillar}\n")),
            }
        }
        out.push_str(&format!("日主 {}{}\n", master, master.element().chinese()));
        let counts = pillars.element_counts();
        let distribution: Vec<String> = Element::ALL
            .iter()
            .map(|e| format!("{}{}", e.chinese(), counts[e.index()]))
            .collect();
        out.push_str(&format!("五行 {}", distribution.join(" ")));
        let missing: String = pillars
            .missing_elements()
            .iter()
            .map(|e| e.chinese())
            .collect();
        if !missing.is_empty() {
            out.push_str(&format!("  缺{missing}"));
        }

        self.journal.append(ReadingEntry::Bazi {
            profile: profile_id,
            birth_date: birth,
            pillars: pillars.to_string(),
            day_master: format!("{}{}", master, master.element().chinese()),
            timestamp: Utc::now(),
        });
        Ok(out)
    }

    fn do_today(&mut self, rest: &str) -> SessionResult<String> {
        let day = if rest.is_empty() {
            self.today
        } else {
            parse_date(rest)?
        };
        let profile = self.require_profile()?;
        let fortune = self
            .composer
            .compose(profile.birth_date, profile.hour_branch, day)?;

        self.journal.append(ReadingEntry::Fortune {
            date: day,
            day: fortune.today.to_string(),
            energy: fortune.energy,
            keyword: fortune.keyword.clone(),
            timestamp: Utc::now(),
        });
        Ok(fortune.to_string())
    }

    fn do_cast(&mut self, question: &str) -> SessionResult<String> {
        let hexagram = cast_hexagram(&mut self.rng);
        let info = hexagram.info();
        let changed = hexagram.changed().map(|c| c.info());

        let mut out = String::new();
        if !question.is_empty() {
            out.push_str(&format!("问：{question}\n"));
        }
        out.push_str(&hexagram.to_string());
        out.push_str(&format!("{}\n", info.advice));
        match changed {
            Some(c) => out.push_str(&format!("变卦 → {} {} ({})", c.chinese, c.name, c.meaning)),
            None => out.push_str("无动爻，卦象安静。"),
        }

        self.journal.append(ReadingEntry::Hexagram {
            method: "coins".to_string(),
            question: (!question.is_empty()).then(|| question.to_string()),
            number: hexagram.number(),
            name: info.chinese.to_string(),
            moving: hexagram.moving_lines(),
            changed: changed.map(|c| c.chinese.to_string()),
            timestamp: Utc::now(),
        });
        Ok(out)
    }

    fn do_plum(&mut self, rest: &str) -> SessionResult<String> {
        let date = if rest.is_empty() {
            self.today
        } else {
            parse_date(rest)?
        };
        let cast = plum_blossom(date);
        let changed = cast.changed();

        let mut out = format!("{cast}\n");
        out.push_str(&cast.hexagram.to_string());
        out.push_str(cast.hexagram.info().advice);

        self.journal.append(ReadingEntry::Hexagram {
            method: "plum".to_string(),
            question: None,
            number: cast.hexagram.number(),
            name: cast.hexagram.info().chinese.to_string(),
            moving: vec![cast.moving_line],
            changed: Some(changed.info().chinese.to_string()),
            timestamp: Utc::now(),
        });
        Ok(out)
    }

    fn do_stick(&mut self) -> SessionResult<String> {
        let stick = draw_stick(&mut self.rng);
        self.journal.append(ReadingEntry::Stick {
            number: stick.number,
            title: stick.title.to_string(),
            content: stick.content.to_string(),
            timestamp: Utc::now(),
        });
        Ok(stick.to_string())
    }

    fn do_sign(&mut self, rest: &str) -> SessionResult<String> {
        let (date, time) = if rest.is_empty() {
            let p = self.require_profile()?;
            (p.birth_date, p.birth_time)
        } else {
            (parse_date(rest)?, None)
        };
        let signs = chart(date, time);
        self.journal.append(ReadingEntry::Sign {
            sun: signs.sun.chinese().to_string(),
            moon: signs.moon.chinese().to_string(),
            rising: signs.rising.map(|s| s.chinese().to_string()),
            timestamp: Utc::now(),
        });
        Ok(format!(
            "{signs}\n{}：{}",
            signs.sun.chinese(),
            signs.sun.traits().join("、")
        ))
    }

    fn do_note(&mut self, text: &str) -> SessionResult<String> {
        if text.is_empty() {
            return Err(SessionError::InvalidChoice("usage: note <text>".to_string()));
        }
        self.journal.append(ReadingEntry::Note {
            text: text.to_string(),
            timestamp: Utc::now(),
        });
        Ok("Note recorded.".to_string())
    }

    fn do_journal_show(&self) -> SessionResult<String> {
        if self.journal.is_empty() {
            return Ok("Journal is empty.".to_string());
        }
        let entries = self.journal.entries();
        let start = entries.len().saturating_sub(10);
        let recent = &entries[start..];

        let mut out = format!(
            "Journal ({} entries, showing last {}):\n\n",
            entries.len(),
            recent.len()
        );
        let mut mini = Journal::new();
        for e in recent {
            mini.append(e.clone());
        }
        out.push_str(&mini.export_text());
        Ok(out.trim_end().to_string())
    }

    fn do_journal_export(&self, format: &str) -> SessionResult<String> {
        match format.to_lowercase().as_str() {
            "markdown" | "md" | "" => Ok(self.journal.export_markdown()),
            "text" | "txt" => Ok(self.journal.export_text()),
            "json" => Ok(serde_json::to_string_pretty(&self.journal)?),
            other => Err(SessionError::InvalidChoice(format!(
                "unknown format '{other}', use: markdown, text, json"
            ))),
        }
    }

    fn do_status(&self) -> SessionResult<String> {
        let mut out = match &self.profile {
            Some(p) => format!("Profile: {p}\n"),
            None => "No profile loaded.\n".to_string(),
        };
        let day = self.calendar.day_pillar(self.today);
        out.push_str(&format!("Today: {} {}日\n", self.today, day));
        match self.config.seed {
            Some(seed) => out.push_str(&format!("Seed: {seed}\n")),
            None => out.push_str("Seed: random\n"),
        }
        out.push_str(&format!("Baseline: {}\n", self.composer.config().baseline));
        out.push_str(&format!("Journal: {} entries", self.journal.len()));
        Ok(out)
    }

    fn do_help(&self, topic: &str) -> SessionResult<String> {
        match topic.to_lowercase().as_str() {
            "bazi" | "today" | "fortune" => Ok("\
Chart Commands:
  bazi [YYYY-MM-DD [hour]]      Four pillars (profile birth data if omitted)
  today [YYYY-MM-DD]            Daily fortune for the loaded profile
  sign [YYYY-MM-DD]             Sun, moon and rising signs

Hour: a branch (子, wu) or a clock hour 0-23"
                .to_string()),
            "cast" | "plum" | "stick" | "oracle" => Ok("\
Oracle Commands:
  cast [question]               Six three-coin tosses
  plum [YYYY-MM-DD]             Plum blossom hexagram from a date
  stick                         Draw a fortune stick"
                .to_string()),
            "journal" | "note" | "export" => Ok("\
Journal Commands:
  note <text>                   Record a note
  journal                       Show recent entries
  export [markdown|text|json]   Export the whole journal"
                .to_string()),
            _ => Ok("\
Commands:
  bazi [date [hour]]   today [date]   sign [date]
  cast [question]      plum [date]    stick
  note <text>          journal        export [format]
  status               help [topic]   quit

Type 'help <topic>' for details (bazi, oracle, journal)."
                .to_string()),
        }
    }
}
