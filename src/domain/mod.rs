// ============================================================================
// Domain Models Module
// Per-instrument configuration built on the numeric helpers
// ============================================================================

pub mod config;

pub use config::InstrumentPrecision;
