//! # Domain Errors

use thiserror::Error;

/// Sync poll failures. Both are terminal for one `poll` run; the caller may
/// start a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyncPollError {
    /// Cancelled before the downloader reported synchronising.
    #[error("node synchronization failed to start")]
    FailedToStart,

    /// Sync started but was cancelled before reaching the highest block.
    #[error("node synchronization is taking too long")]
    TookTooLong,
}

impl SyncPollError {
    /// Metric label for this outcome.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FailedToStart => "failed_to_start",
            Self::TookTooLong => "took_too_long",
        }
    }
}
