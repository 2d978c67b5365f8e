//! # Value Objects

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Default sampling interval for both phases.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Block-height pair reported by the downloader.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncProgress {
    /// Height the node has reached.
    pub current_block: u64,
    /// Highest height known on the network.
    pub highest_block: u64,
}

impl SyncProgress {
    /// Construct a reading.
    pub fn new(current_block: u64, highest_block: u64) -> Self {
        Self {
            current_block,
            highest_block,
        }
    }

    /// Caught up with a known network head.
    ///
    /// `{0, 0}` is not complete: no highest block has been discovered yet.
    pub fn is_complete(&self) -> bool {
        self.highest_block > 0 && self.current_block >= self.highest_block
    }

    /// Blocks still to fetch.
    pub fn remaining(&self) -> u64 {
        self.highest_block.saturating_sub(self.current_block)
    }
}

/// Poller state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncPhase {
    /// Waiting for the downloader to report synchronising.
    AwaitingStart,
    /// Waiting for current to reach highest.
    AwaitingCompletion,
    /// Sync finished.
    Done,
}

impl fmt::Display for SyncPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AwaitingStart => "awaiting_start",
            Self::AwaitingCompletion => "awaiting_completion",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}
