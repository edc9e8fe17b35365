// ============================================================================
// Identifier Module
// Locally unique, increasing 64-bit identifiers derived from the wall clock
// ============================================================================
//
// This module provides:
// - UniqueId: YYMMDDHHMMSSmmm timestamp digits followed by a 3-digit sequence
// - ClockState: caller-owned stream state (single-threaded use)
// - IdGenerator: mutex-guarded stream state over a Clock (shared use)
// - Clock / SystemClock / TestClock: time sources
// - IdError: sequence exhaustion within one millisecond

mod clock;
mod errors;
mod generator;
mod unique_id;

pub use clock::{Clock, SystemClock, TestClock};
pub use errors::{IdError, IdResult};
pub use generator::{ClockState, IdGenerator};
pub use unique_id::UniqueId;
