//! Error types for hexagram casting.

use thiserror::Error;

/// Result type for oracle operations.
pub type OracleResult<T> = Result<T, OracleError>;

/// Errors raised when building lines, trigrams or hexagrams from raw numbers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    /// A line sum outside 3..=6.
    #[error("line sum must be 3-6, got {0}")]
    InvalidLineSum(u8),

    /// A line position outside 1..=6.
    #[error("line position must be 1-6, got {0}")]
    InvalidLinePosition(u8),

    /// Six lines are needed for a hexagram.
    #[error("a hexagram needs 6 lines, got {0}")]
    WrongLineCount(usize),

    /// A hexagram number outside 1..=64.
    #[error("hexagram number must be 1-64, got {0}")]
    InvalidHexagramNumber(u32),

    /// A trigram index outside 1..=8.
    #[error("trigram index must be 1-8, got {0}")]
    InvalidTrigramIndex(u8),

    /// A tarot card id outside 0..=77.
    #[error("tarot card id must be 0-77, got {0}")]
    InvalidCardId(u8),

    /// Not a known tarot spread.
    #[error("unknown spread '{0}': use daily or three")]
    UnknownSpread(String),

    /// The exclusions left too few cards for the spread.
    #[error("spread needs {needed} cards, only {available} left")]
    NotEnoughCards {
        /// Cards the spread lays out.
        needed: usize,
        /// Cards left after exclusions.
        available: usize,
    },
}
