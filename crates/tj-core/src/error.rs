//! Error types for the core calendar and element engine.

use chrono::NaiveDate;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by the calendar and the symbol lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The lunar calendar cannot resolve the requested date.
    #[error("date {date} is outside the supported range {first}..={last}")]
    DateOutOfRange {
        /// The requested solar date.
        date: NaiveDate,
        /// First supported solar date.
        first: NaiveDate,
        /// Last supported solar date.
        last: NaiveDate,
    },

    /// A stem, branch, element, or animal token outside its fixed enumeration.
    #[error("invalid {kind} token: \"{token}\"")]
    InvalidToken {
        /// What kind of token was expected (e.g. "stem", "branch").
        kind: &'static str,
        /// The rejected input.
        token: String,
    },

    /// A stem and branch of different parity, which never occur together
    /// in the sexagenary cycle.
    #[error("{stem}{branch} is not a member of the sexagenary cycle")]
    InvalidPair {
        /// The stem character.
        stem: char,
        /// The branch character.
        branch: char,
    },
}

impl CoreError {
    pub(crate) fn token(kind: &'static str, token: impl Into<String>) -> Self {
        Self::InvalidToken {
            kind,
            token: token.into(),
        }
    }
}
