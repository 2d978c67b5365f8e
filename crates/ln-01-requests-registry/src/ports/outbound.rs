//! # Outbound Ports
//!
//! Monotonic clock used for cooldown evaluation.

use parking_lot::Mutex;
use std::time::{Duration, Instant};

/// Time source for cooldown checks.
///
/// Abstracted to allow testing with deterministic time.
pub trait TimeSource: Send + Sync {
    /// Returns the current monotonic instant.
    fn now(&self) -> Instant;
}

/// Default system time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually advanced time source.
///
/// Starts at the instant it was created and only moves on [`advance`].
///
/// [`advance`]: ManualTimeSource::advance
#[derive(Debug)]
pub struct ManualTimeSource {
    now: Mutex<Instant>,
}

impl ManualTimeSource {
    /// Create a clock frozen at the current instant.
    pub fn new() -> Self {
        Self {
            now: Mutex::new(Instant::now()),
        }
    }

    /// Move the clock forward.
    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock();
        *now += by;
    }
}

impl Default for ManualTimeSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> Instant {
        *self.now.lock()
    }
}
