//! # Domain Errors
//!
//! Error types for the Requests Registry.

use std::time::Duration;
use thiserror::Error;

/// Requests registry error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestsRegistryError {
    /// A request with the same topics was accepted inside the cooldown
    /// window. Nothing was recorded for the rejected request.
    #[error(
        "another request with same topics was sent less than {delay:?} ago; \
         wait longer or use the non-debounced request API"
    )]
    DuplicateRequest {
        /// Configured cooldown window
        delay: Duration,
    },
}
