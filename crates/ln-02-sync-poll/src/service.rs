//! # Sync Poll Service
//!
//! Two structurally identical wait loops: sleep one interval, sample the
//! downloader, repeat, with every sleep raced against the cancellation
//! token. Only the exit predicate and the failure differ per phase.

use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use node_telemetry::{HistogramTimer, SYNC_POLL_DURATION, SYNC_POLL_OUTCOMES};

use crate::config::SyncPollConfig;
use crate::domain::{SyncPhase, SyncPollError, DEFAULT_POLL_INTERVAL};
use crate::ports::DownloaderStatus;

/// Watches a downloader until sync has started and then completed.
pub struct SyncPoll {
    downloader: Arc<dyn DownloaderStatus>,
    poll_interval: Duration,
}

impl SyncPoll {
    /// Create a poller sampling every [`DEFAULT_POLL_INTERVAL`].
    pub fn new(downloader: Arc<dyn DownloaderStatus>) -> Self {
        Self {
            downloader,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Create a poller from configuration.
    pub fn with_config(downloader: Arc<dyn DownloaderStatus>, config: &SyncPollConfig) -> Self {
        Self {
            downloader,
            poll_interval: config.poll_interval(),
        }
    }

    /// Sampling interval shared by both phases.
    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    /// Run both phases under one cancellation token.
    ///
    /// Returns [`SyncPollError::FailedToStart`] if `cancel` fires before the
    /// downloader reports synchronising, and [`SyncPollError::TookTooLong`]
    /// if it fires after that but before `current >= highest > 0`. A token
    /// that is already cancelled fails immediately with `FailedToStart`.
    pub async fn poll(&self, cancel: &CancellationToken) -> Result<(), SyncPollError> {
        let _timer = HistogramTimer::new(&SYNC_POLL_DURATION);

        let result = self.run(cancel).await;
        let outcome = match &result {
            Ok(()) => "done",
            Err(e) => e.label(),
        };
        SYNC_POLL_OUTCOMES.with_label_values(&[outcome]).inc();
        result
    }

    /// Run [`poll`](Self::poll) with a token cancelled after `timeout`.
    pub async fn poll_with_timeout(&self, timeout: Duration) -> Result<(), SyncPollError> {
        let cancel = CancellationToken::new();
        let poll = self.poll(&cancel);
        tokio::pin!(poll);

        tokio::select! {
            result = &mut poll => return result,
            _ = tokio::time::sleep(timeout) => {
                debug!(timeout_ms = timeout.as_millis() as u64, "Sync poll deadline reached");
                cancel.cancel();
            }
        }

        poll.await
    }

    async fn run(&self, cancel: &CancellationToken) -> Result<(), SyncPollError> {
        self.poll_sync_start(cancel).await?;
        self.poll_sync_completed(cancel).await
    }

    async fn poll_sync_start(&self, cancel: &CancellationToken) -> Result<(), SyncPollError> {
        let samples = self
            .wait_for(
                cancel,
                SyncPhase::AwaitingStart,
                SyncPollError::FailedToStart,
                |downloader| downloader.is_synchronising(),
            )
            .await?;

        info!(samples, "Node synchronization started");
        Ok(())
    }

    async fn poll_sync_completed(&self, cancel: &CancellationToken) -> Result<(), SyncPollError> {
        let samples = self
            .wait_for(
                cancel,
                SyncPhase::AwaitingCompletion,
                SyncPollError::TookTooLong,
                |downloader| {
                    let progress = downloader.progress();
                    debug!(
                        current_block = progress.current_block,
                        highest_block = progress.highest_block,
                        remaining = progress.remaining(),
                        "Sync progress"
                    );
                    progress.is_complete()
                },
            )
            .await?;

        info!(samples, phase = %SyncPhase::Done, "Node synchronization completed");
        Ok(())
    }

    /// Sample until `reached` holds, or fail with `error` once `cancel`
    /// fires. Returns the number of samples taken.
    async fn wait_for<F>(
        &self,
        cancel: &CancellationToken,
        phase: SyncPhase,
        error: SyncPollError,
        mut reached: F,
    ) -> Result<u64, SyncPollError>
    where
        F: FnMut(&dyn DownloaderStatus) -> bool,
    {
        let mut samples = 0u64;
        loop {
            tokio::select! {
                biased;

                _ = cancel.cancelled() => {
                    warn!(%phase, samples, %error, "Sync poll cancelled");
                    return Err(error);
                }

                _ = tokio::time::sleep(self.poll_interval) => {
                    samples += 1;
                    if reached(self.downloader.as_ref()) {
                        return Ok(samples);
                    }
                }
            }
        }
    }
}
