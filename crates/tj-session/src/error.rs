//! Error types for profiles and sessions.

use thiserror::Error;

/// Result type for session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors raised by profile storage and reading sessions.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Profile ids may only use ASCII letters, digits, `-` and `_`.
    #[error("invalid profile id '{0}': use letters, digits, '-' or '_'")]
    InvalidProfileId(String),

    /// No profile with this id.
    #[error("profile not found: {0}")]
    ProfileNotFound(String),

    /// The command needs a profile and none is loaded.
    #[error("no profile loaded; give a birth date or start with a profile")]
    NoProfile,

    /// Invalid choice or input.
    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    /// Unknown command.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Profile store I/O failed.
    #[error("profile store: {0}")]
    Io(#[from] std::io::Error),

    /// A stored profile could not be read or written as JSON.
    #[error("profile encoding: {0}")]
    Json(#[from] serde_json::Error),

    /// Calendar error.
    #[error("{0}")]
    Core(#[from] tj_core::CoreError),

    /// Oracle error.
    #[error("{0}")]
    Oracle(#[from] tj_oracle::OracleError),

    /// Narrative error.
    #[error("{0}")]
    Narrative(#[from] tj_narrative::NarrativeError),
}
