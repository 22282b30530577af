//! Journal entry types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single reading or note in the journal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ReadingEntry {
    /// A four-pillar chart.
    Bazi {
        /// Profile the chart belongs to, if one was loaded.
        profile: Option<String>,
        /// Solar birth date.
        birth_date: NaiveDate,
        /// The four pillars, space separated.
        pillars: String,
        /// Day master, e.g. `丙火`.
        day_master: String,
        /// When computed.
        timestamp: DateTime<Utc>,
    },
    /// A daily fortune.
    Fortune {
        /// The day read.
        date: NaiveDate,
        /// That day's stem-branch.
        day: String,
        /// Energy index, 0-100.
        energy: u8,
        /// Keyword of the day.
        keyword: String,
        /// When computed.
        timestamp: DateTime<Utc>,
    },
    /// A hexagram cast.
    Hexagram {
        /// `coins` or `plum`.
        method: String,
        /// The question asked, if any.
        question: Option<String>,
        /// Hexagram number, 1-64.
        number: u8,
        /// Chinese name of the primary hexagram.
        name: String,
        /// Moving line positions.
        moving: Vec<u8>,
        /// Chinese name of the changed hexagram.
        changed: Option<String>,
        /// When cast.
        timestamp: DateTime<Utc>,
    },
    /// A fortune stick draw.
    Stick {
        /// Stick number, 1-8.
        number: u8,
        /// Grade.
        title: String,
        /// Verse.
        content: String,
        /// When drawn.
        timestamp: DateTime<Utc>,
    },
    /// Sun, moon and rising signs.
    Sign {
        /// Sun sign.
        sun: String,
        /// Moon sign.
        moon: String,
        /// Rising sign, when the birth time is known.
        rising: Option<String>,
        /// When computed.
        timestamp: DateTime<Utc>,
    },
    /// A note written by the user.
    Note {
        /// The note text.
        text: String,
        /// When recorded.
        timestamp: DateTime<Utc>,
    },
}

impl ReadingEntry {
    /// When the entry was recorded.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::Bazi { timestamp, .. }
            | Self::Fortune { timestamp, .. }
            | Self::Hexagram { timestamp, .. }
            | Self::Stick { timestamp, .. }
            | Self::Sign { timestamp, .. }
            | Self::Note { timestamp, .. } => *timestamp,
        }
    }
}
