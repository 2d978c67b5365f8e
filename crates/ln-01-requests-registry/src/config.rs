//! # Requests Registry Configuration

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::domain::DEFAULT_REQUESTS_DELAY;

/// Requests registry configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestsRegistryConfig {
    /// Minimum time between two accepted requests with the same topics,
    /// in milliseconds. Zero means "use the default".
    pub delay_ms: u64,
}

impl Default for RequestsRegistryConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_REQUESTS_DELAY.as_millis() as u64,
        }
    }
}

impl RequestsRegistryConfig {
    /// Create a config for testing (short cooldown).
    pub fn for_testing() -> Self {
        Self { delay_ms: 50 }
    }

    /// Effective cooldown window.
    pub fn delay(&self) -> Duration {
        if self.delay_ms == 0 {
            DEFAULT_REQUESTS_DELAY
        } else {
            Duration::from_millis(self.delay_ms)
        }
    }
}
