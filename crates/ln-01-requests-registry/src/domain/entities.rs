//! # Domain Entities

use std::time::Instant;

use super::value_objects::RequestId;

/// Bookkeeping for the most recent accepted request of a fingerprint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RequestMeta {
    /// When the request was accepted.
    pub timestamp: Instant,
    /// The request that currently owns the cooldown window.
    pub last_request_id: RequestId,
}

impl RequestMeta {
    /// Whether the cooldown window is still open at `now`.
    pub fn within_cooldown(&self, now: Instant, delay: std::time::Duration) -> bool {
        now.saturating_duration_since(self.timestamp) < delay
    }
}
