// ============================================================================
// Numeric Module
// Floating-point precision helpers for prices and amounts
// ============================================================================
//
// This module provides:
// - normalize / format_normalized: 8-digit round-half-away-from-zero
// - quantize_down / Step: snapping values down onto a tick or lot grid
// - decimals / first_significant_decimal: fractional digit inference
// - PrecisionError: Error types for invalid steps and configuration
//
// Design principles:
// - Pure functions, safe to call from any thread
// - Ties round away from zero, never to even
// - Invalid steps return Result (no panics)
// - Typical flow: quantize, then infer digits for display

mod digits;
mod errors;
mod normalize;
mod quantize;

pub use digits::{
    decimals, first_significant_decimal, HEURISTIC_DECIMALS_DIGITS, STRICT_DECIMALS_DIGITS,
    UNKNOWN_DECIMALS,
};
pub use errors::{PrecisionError, PrecisionResult};
pub use normalize::{
    format_normalized, format_with_precision, normalize, round_half_away, NORMALIZE_DIGITS,
};
pub use quantize::{quantize_down, Step};
