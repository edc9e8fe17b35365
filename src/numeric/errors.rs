// ============================================================================
// Precision Errors
// Error types for quantization and precision configuration
// ============================================================================

use std::fmt;

/// Errors that can occur in the precision toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrecisionError {
    /// Quantization step was zero, negative, NaN or infinite
    InvalidStep,
    /// Input string or value is invalid
    InvalidInput,
    /// Configuration failed validation
    InvalidConfig(&'static str),
}

impl fmt::Display for PrecisionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrecisionError::InvalidStep => {
                write!(f, "invalid step: must be finite and strictly positive")
            },
            PrecisionError::InvalidInput => write!(f, "invalid input: could not parse value"),
            PrecisionError::InvalidConfig(reason) => write!(f, "invalid config: {}", reason),
        }
    }
}

impl std::error::Error for PrecisionError {}

/// Result type alias for precision operations
pub type PrecisionResult<T> = Result<T, PrecisionError>;
