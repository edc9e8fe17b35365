// ============================================================================
// Utilities Module
// Process-level helpers that sit outside the numeric and identifier cores
// ============================================================================

mod logging;

pub use logging::{init_logging, logging_is_initialized};
