// ============================================================================
// Clock Sources
// Wall-clock access for identifier generation
// ============================================================================

use chrono::{DateTime, TimeDelta, Utc};
use parking_lot::Mutex;
use std::sync::Arc;

/// Source of the current UTC time.
pub trait Clock: Send + Sync {
    /// Sample the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually driven clock for deterministic tests and replays.
#[derive(Debug)]
pub struct TestClock {
    time: Mutex<DateTime<Utc>>,
}

impl TestClock {
    /// Clock starting at the Unix epoch.
    pub fn new() -> Self {
        Self::at(DateTime::default())
    }

    /// Clock starting at `time`.
    pub fn at(time: DateTime<Utc>) -> Self {
        Self {
            time: Mutex::new(time),
        }
    }

    pub fn set(&self, time: DateTime<Utc>) {
        *self.time.lock() = time;
    }

    /// Move the clock by `delta` (may be negative).
    pub fn advance(&self, delta: TimeDelta) {
        let mut time = self.time.lock();
        *time += delta;
    }
}

impl Default for TestClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for TestClock {
    fn now(&self) -> DateTime<Utc> {
        *self.time.lock()
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
