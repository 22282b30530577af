//! Error types for narrative composition and the narrative service.

use thiserror::Error;

/// Result type for narrative operations.
pub type NarrativeResult<T> = Result<T, NarrativeError>;

/// Errors raised while composing fortunes or calling the narrative service.
#[derive(Debug, Error)]
pub enum NarrativeError {
    /// The calendar could not resolve a date.
    #[error(transparent)]
    Core(#[from] tj_core::CoreError),

    /// A birth time that is not `HH:MM`.
    #[error("invalid birth time: {0}")]
    InvalidTime(String),

    /// The transport failed before a body came back.
    #[error("transport error: {0}")]
    Transport(String),

    /// The body was not JSON.
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The service answered with an error envelope.
    #[error("{0}")]
    Service(String),

    /// The body was JSON but matched no known response shape.
    #[error("unrecognized response shape")]
    Unrecognized,

    /// Every endpoint candidate failed.
    #[error("All API attempts failed. Last error: {last}")]
    AllAttemptsFailed {
        /// How many candidates were tried.
        attempts: usize,
        /// Message of the final failure.
        last: String,
    },

    /// No endpoint candidates are configured.
    #[error("no endpoint candidates configured")]
    NoCandidates,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_attempts_message() {
        let e = NarrativeError::AllAttemptsFailed {
            attempts: 3,
            last: "quota exceeded (1008)".into(),
        };
        assert_eq!(
            e.to_string(),
            "All API attempts failed. Last error: quota exceeded (1008)"
        );
    }

    #[test]
    fn core_error_is_transparent() {
        let core = tj_core::CoreError::InvalidPair {
            stem: '甲',
            branch: '丑',
        };
        let e = NarrativeError::from(core.clone());
        assert_eq!(e.to_string(), core.to_string());
    }
}
