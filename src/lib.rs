// ============================================================================
// Trade Helpers Library
// Monotonic identifiers and floating-point precision helpers for trading
// ============================================================================

//! # Trade Helpers
//!
//! Two small, independent building blocks used around order management:
//!
//! - **Identifiers** ([`ids`]): 64-bit values whose decimal digits read
//!   `YYMMDDHHMMSSmmmNNN`, increasing per stream, with a 3-digit
//!   per-millisecond sequence and an explicit error when it is exhausted
//! - **Precision** ([`numeric`]): 8-digit round-half-away-from-zero
//!   normalization, tick/lot quantization and fractional digit inference
//! - **Instrument grids** ([`domain`]): tick and lot sizes bundled per
//!   instrument, with quantize-then-format helpers
//!
//! ## Example
//!
//! ```rust
//! use trade_helpers::prelude::*;
//!
//! // One generator per identifier stream, shareable across threads
//! let generator = IdGenerator::new();
//! let order_id = generator.next_id().unwrap();
//! assert_eq!(order_id.sequence(), 0);
//!
//! // Snap a price onto the tick grid, then display it at the tick's precision
//! let tick = 0.05;
//! let price = quantize_down(101.37, tick).unwrap();
//! let digits = decimals(tick);
//! assert_eq!(format_with_precision(price, digits as u32), "101.35");
//!
//! // Or let the instrument configuration do both
//! let btc = InstrumentPrecision::new("BTC-USD").with_tick_size(0.01);
//! assert_eq!(btc.format_price(50123.456).unwrap(), "50123.45");
//! ```

pub mod domain;
pub mod ids;
pub mod numeric;

#[cfg(feature = "logging")]
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::InstrumentPrecision;
    pub use crate::ids::{
        Clock, ClockState, IdError, IdGenerator, IdResult, SystemClock, TestClock, UniqueId,
    };
    pub use crate::numeric::{
        decimals, first_significant_decimal, format_normalized, format_with_precision,
        normalize, quantize_down, round_half_away, PrecisionError, PrecisionResult, Step,
        NORMALIZE_DIGITS, UNKNOWN_DECIMALS,
    };
}
