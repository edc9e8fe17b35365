// ============================================================================
// Identifier Generator
// Monotonic clock-derived identifiers with a per-millisecond sequence
// ============================================================================
//
// Two ways to drive a stream of identifiers:
// - ClockState::next_id: caller owns the state and feeds the current time.
//   Single-threaded by contract (&mut self).
// - IdGenerator: owns a ClockState behind a mutex and samples its clock while
//   holding the lock, so the whole sample -> branch -> encode -> store
//   sequence is atomic. Share it through Arc.
//
// Rules per stream:
// - A later millisecond than the last issued one resets the sequence to 0
// - The same millisecond increments it
// - An earlier millisecond (clock stepped back) is treated as the last one
// - Sequence 1000 is never issued: the call fails with RateExceeded and the
//   state is left untouched
// ============================================================================

use super::clock::{Clock, SystemClock};
use super::errors::{IdError, IdResult};
use super::unique_id::UniqueId;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;

/// Last issued time and sequence of one identifier stream.
#[derive(Debug, Clone, Default)]
pub struct ClockState {
    last_time: Option<DateTime<Utc>>,
    last_count: u16,
}

impl ClockState {
    /// Fresh state; the first identifier gets sequence 0.
    pub const fn new() -> Self {
        Self {
            last_time: None,
            last_count: 0,
        }
    }

    /// Issue the next identifier for a call made at `now`.
    ///
    /// # Errors
    /// Returns `RateExceeded` when 1000 identifiers were already issued in the
    /// current millisecond. The state is not modified in that case.
    pub fn next_id(&mut self, now: DateTime<Utc>) -> IdResult<UniqueId> {
        let (time, count) = match self.last_time {
            Some(last) if now.timestamp_millis() <= last.timestamp_millis() => {
                if now.timestamp_millis() < last.timestamp_millis() {
                    tracing::warn!(
                        "Clock moved backwards by {} ms, reusing last millisecond",
                        last.timestamp_millis() - now.timestamp_millis()
                    );
                }

                let count = self.last_count + 1;
                if count >= UniqueId::SEQUENCE_LIMIT {
                    tracing::warn!(
                        "Identifier sequence exhausted at {} ms",
                        last.timestamp_millis()
                    );
                    return Err(IdError::RateExceeded {
                        timestamp_ms: last.timestamp_millis(),
                    });
                }
                (last, count)
            },
            Some(last) => {
                if self.last_count > 0 {
                    tracing::debug!(
                        "Sequence reset after {} identifiers at {} ms",
                        self.last_count + 1,
                        last.timestamp_millis()
                    );
                }
                (now, 0)
            },
            None => (now, 0),
        };

        self.last_time = Some(time);
        self.last_count = count;

        Ok(UniqueId::encode(time, count))
    }
}

/// Thread-safe identifier generator over a [`Clock`].
///
/// # Example
/// ```
/// use trade_helpers::ids::IdGenerator;
///
/// let generator = IdGenerator::new();
/// let first = generator.next_id().unwrap();
/// let second = generator.next_id().unwrap();
/// assert!(second > first);
/// ```
#[derive(Debug)]
pub struct IdGenerator<C: Clock = SystemClock> {
    clock: C,
    state: Mutex<ClockState>,
}

impl IdGenerator<SystemClock> {
    /// Generator over the system wall clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for IdGenerator<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> IdGenerator<C> {
    /// Generator over a caller-supplied clock.
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            state: Mutex::new(ClockState::new()),
        }
    }

    /// The clock this generator samples.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Issue the next identifier of this stream.
    ///
    /// The clock is sampled while the state lock is held, so concurrent
    /// callers observe a single total order.
    ///
    /// # Errors
    /// Returns `RateExceeded` when the current millisecond is exhausted; a
    /// retry once the clock has moved on succeeds.
    pub fn next_id(&self) -> IdResult<UniqueId> {
        let mut state = self.state.lock();
        let now = self.clock.now();
        state.next_id(now)
    }
}
