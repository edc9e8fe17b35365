// ============================================================================
// Identifier Errors
// ============================================================================

use std::fmt;

/// Errors that can occur while generating identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdError {
    /// Sequence counter exhausted within one millisecond
    RateExceeded {
        /// Unix time in milliseconds of the exhausted slot
        timestamp_ms: i64,
    },
}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdError::RateExceeded { timestamp_ms } => write!(
                f,
                "identifier rate exceeded: sequence exhausted at {} ms",
                timestamp_ms
            ),
        }
    }
}

impl std::error::Error for IdError {}

/// Result type alias for identifier generation
pub type IdResult<T> = Result<T, IdError>;
