//! Profiles, reading journal, and interactive reading sessions.
//!
//! Profiles are stored through a [`ProfileRepository`] so the caller picks
//! where they live. A [`ReadingSession`] runs line commands against the
//! calendar, oracle and narrative crates and journals every reading.

pub mod config;
pub mod error;
pub mod journal;
pub mod profile;
pub mod repository;
pub mod session;

pub use config::SessionConfig;
pub use error::{SessionError, SessionResult};
pub use journal::{Journal, ReadingEntry};
pub use profile::{Gender, Profile, validate_id};
pub use repository::{JsonFileRepository, MemoryRepository, ProfileRepository};
pub use session::{ReadingSession, parse_date, parse_hour};
