//! # LN-02 Sync Poll
//!
//! Waits for a light client's downloader to start syncing and then to catch
//! up with the highest known block.
//!
//! **Subsystem ID:** 2  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## State Machine
//!
//! ```text
//! AwaitingStart --[is_synchronising()]--> AwaitingCompletion --[current >= highest > 0]--> Done
//! AwaitingStart --[cancelled]--> FailedToStart
//! AwaitingCompletion --[cancelled]--> TookTooLong
//! ```
//!
//! Both phases sample the downloader on the same fixed interval and race
//! every sleep against one caller-supplied [`CancellationToken`]. The status
//! source is poll-only; there is no subscription.
//!
//! ## Module Structure
//!
//! ```text
//! ln-02-sync-poll/
//! ├── domain/          # SyncProgress, SyncPhase, SyncPollError
//! ├── ports/           # DownloaderStatus (outbound) + MockDownloader
//! ├── service.rs       # SyncPoll
//! └── config.rs        # SyncPollConfig
//! ```
//!
//! [`CancellationToken`]: tokio_util::sync::CancellationToken

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use config::SyncPollConfig;
pub use domain::{SyncPhase, SyncPollError, SyncProgress, DEFAULT_POLL_INTERVAL};
pub use ports::{DownloaderStatus, MockDownloader};
pub use service::SyncPoll;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
