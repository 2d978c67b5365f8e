//! # Sync Poll Configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::DEFAULT_POLL_INTERVAL;

/// Sync poll configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncPollConfig {
    /// Sampling interval shared by both phases, in milliseconds.
    pub poll_interval_ms: u64,

    /// Deadline used by [`SyncPoll::poll_with_timeout`] callers that take
    /// it from config, in seconds.
    ///
    /// [`SyncPoll::poll_with_timeout`]: crate::SyncPoll::poll_with_timeout
    pub timeout_secs: u64,
}

impl Default for SyncPollConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL.as_millis() as u64,
            timeout_secs: 40,
        }
    }
}

impl SyncPollConfig {
    /// Create a config for testing (smaller values).
    pub fn for_testing() -> Self {
        Self {
            poll_interval_ms: 10,
            timeout_secs: 1,
        }
    }

    /// Sampling interval. Zero falls back to the default.
    pub fn poll_interval(&self) -> Duration {
        if self.poll_interval_ms == 0 {
            DEFAULT_POLL_INTERVAL
        } else {
            Duration::from_millis(self.poll_interval_ms)
        }
    }

    /// Overall deadline.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
