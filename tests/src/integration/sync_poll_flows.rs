//! # Sync Poll Flows
//!
//! Readiness waits against a downloader whose state is advanced by a
//! separate task, as a light client's downloader would be.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use ln_02_sync_poll::{DownloaderStatus, SyncProgress};

/// Downloader backed by atomics, mutated from outside the poller.
#[derive(Debug, Default)]
pub struct SimulatedDownloader {
    synchronising: AtomicBool,
    current: AtomicU64,
    highest: AtomicU64,
}

impl SimulatedDownloader {
    /// Enter the synchronising state with a known network head.
    pub fn start(&self, highest: u64) {
        self.highest.store(highest, Ordering::SeqCst);
        self.synchronising.store(true, Ordering::SeqCst);
    }

    /// Import `blocks` more blocks, capped at the head.
    pub fn import(&self, blocks: u64) {
        let highest = self.highest.load(Ordering::SeqCst);
        let _ = self
            .current
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |c| {
                Some((c + blocks).min(highest))
            });
    }
}

impl DownloaderStatus for SimulatedDownloader {
    fn is_synchronising(&self) -> bool {
        self.synchronising.load(Ordering::SeqCst)
    }

    fn progress(&self) -> SyncProgress {
        SyncProgress::new(
            self.current.load(Ordering::SeqCst),
            self.highest.load(Ordering::SeqCst),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::Duration;

    use anyhow::Context;
    use tokio_util::sync::CancellationToken;

    use ln_02_sync_poll::{SyncPoll, SyncPollConfig, SyncPollError};

    use crate::init_test_logging;

    /// Node-readiness waiter as the node manager uses it.
    async fn wait_for_node_ready(poll: &SyncPoll, timeout: Duration) -> anyhow::Result<()> {
        poll.poll_with_timeout(timeout)
            .await
            .with_context(|| format!("node not ready within {timeout:?}"))
    }

    #[tokio::test(start_paused = true)]
    async fn test_node_becomes_ready() {
        init_test_logging();
        node_telemetry::register_metrics().unwrap();

        let downloader = Arc::new(SimulatedDownloader::default());
        let poll = SyncPoll::new(downloader.clone());

        let driver = {
            let downloader = downloader.clone();
            tokio::spawn(async move {
                tokio::time::sleep(Duration::from_millis(250)).await;
                downloader.start(1_000);
                for _ in 0..10 {
                    tokio::time::sleep(Duration::from_millis(120)).await;
                    downloader.import(100);
                }
            })
        };

        wait_for_node_ready(&poll, Duration::from_secs(10))
            .await
            .unwrap();
        assert!(downloader.progress().is_complete());
        driver.await.unwrap();

        let text = node_telemetry::encode_metrics().unwrap();
        assert!(text.contains("ln_sync_poll_outcomes_total"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_node_never_syncs() {
        init_test_logging();
        let poll = SyncPoll::new(Arc::new(SimulatedDownloader::default()));

        let err = wait_for_node_ready(&poll, Duration::from_secs(2))
            .await
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<SyncPollError>(),
            Some(&SyncPollError::FailedToStart)
        );
        assert!(err.to_string().contains("not ready"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_sync_stalls_before_head() {
        init_test_logging();
        let downloader = Arc::new(SimulatedDownloader::default());
        downloader.start(500);
        downloader.import(499);
        let poll = SyncPoll::with_config(downloader, &SyncPollConfig::for_testing());

        let result = poll.poll_with_timeout(Duration::from_secs(1)).await;
        assert_eq!(result, Err(SyncPollError::TookTooLong));
    }

    #[tokio::test(start_paused = true)]
    async fn test_head_not_yet_discovered() {
        init_test_logging();
        let downloader = Arc::new(SimulatedDownloader::default());
        // Synchronising, but highest block still unknown.
        downloader.start(0);
        let poll = SyncPoll::new(downloader);

        let result = poll.poll_with_timeout(Duration::from_secs(1)).await;
        assert_eq!(result, Err(SyncPollError::TookTooLong));
    }

    #[tokio::test(start_paused = true)]
    async fn test_shared_token_cancels_every_waiter() {
        init_test_logging();
        let downloader: Arc<dyn DownloaderStatus> = Arc::new(SimulatedDownloader::default());
        let cancel = CancellationToken::new();

        let waiters: Vec<_> = (0..4)
            .map(|_| {
                let poll = SyncPoll::new(downloader.clone());
                let cancel = cancel.clone();
                tokio::spawn(async move { poll.poll(&cancel).await })
            })
            .collect();

        tokio::time::sleep(Duration::from_millis(350)).await;
        cancel.cancel();

        for waiter in waiters {
            assert_eq!(waiter.await.unwrap(), Err(SyncPollError::FailedToStart));
        }
    }
}
