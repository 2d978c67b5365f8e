//! # Outbound Ports
//!
//! Read-only view of the light client's block downloader.

use parking_lot::Mutex;

use crate::domain::SyncProgress;

/// Downloader status - outbound port.
///
/// Poll-only: the poller samples these on a fixed interval.
pub trait DownloaderStatus: Send + Sync {
    /// Whether the downloader is actively catching up.
    fn is_synchronising(&self) -> bool;

    /// Current and highest known block heights.
    fn progress(&self) -> SyncProgress;
}

// =============================================================================
// Mock Implementation for Testing
// =============================================================================

/// Scripted downloader.
///
/// Each call to a status method returns the next reading of its script; the
/// last reading repeats forever. Empty scripts read as "not synchronising"
/// and `{0, 0}`.
#[derive(Debug, Default)]
pub struct MockDownloader {
    synchronising: Script<bool>,
    progress: Script<SyncProgress>,
}

#[derive(Debug, Default)]
struct Script<T> {
    readings: Vec<T>,
    cursor: Mutex<usize>,
}

impl<T: Copy + Default> Script<T> {
    fn new(readings: Vec<T>) -> Self {
        Self {
            readings,
            cursor: Mutex::new(0),
        }
    }

    fn next(&self) -> T {
        let mut cursor = self.cursor.lock();
        let index = *cursor;
        *cursor += 1;
        match self.readings.len() {
            0 => T::default(),
            len => self.readings[index.min(len - 1)],
        }
    }

    fn samples(&self) -> usize {
        *self.cursor.lock()
    }
}

impl MockDownloader {
    /// Downloader that never starts.
    pub fn idle() -> Self {
        Self::default()
    }

    /// Script the `is_synchronising` readings.
    pub fn with_synchronising(mut self, readings: Vec<bool>) -> Self {
        self.synchronising = Script::new(readings);
        self
    }

    /// Script the `progress` readings.
    pub fn with_progress(mut self, readings: Vec<SyncProgress>) -> Self {
        self.progress = Script::new(readings);
        self
    }

    /// How many times `is_synchronising` was sampled.
    pub fn synchronising_samples(&self) -> usize {
        self.synchronising.samples()
    }

    /// How many times `progress` was sampled.
    pub fn progress_samples(&self) -> usize {
        self.progress.samples()
    }
}

impl DownloaderStatus for MockDownloader {
    fn is_synchronising(&self) -> bool {
        self.synchronising.next()
    }

    fn progress(&self) -> SyncProgress {
        self.progress.next()
    }
}
