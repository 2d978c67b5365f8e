//! # Requests Registry Flows
//!
//! The registry shared by many OS threads the way a request-handling
//! service shares it across RPC workers.

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Barrier};
    use std::thread;
    use std::time::Duration;

    use anyhow::Context;
    use rand::Rng;

    use ln_01_requests_registry::{
        RequestId, RequestsRegistry, RequestsRegistryApi, RequestsRegistryConfig,
        RequestsRegistryError, TopicType,
    };

    use crate::init_test_logging;

    fn request_id(thread: usize, seq: usize) -> RequestId {
        let mut id = [0u8; 32];
        id[..8].copy_from_slice(&(thread as u64).to_be_bytes());
        id[8..16].copy_from_slice(&(seq as u64).to_be_bytes());
        id
    }

    /// Minimal stand-in for the historic-messages handler: debounce, then
    /// drop the registration if the send fails.
    fn request_messages(
        registry: &dyn RequestsRegistryApi,
        id: RequestId,
        topics: &[TopicType],
        send_ok: bool,
    ) -> anyhow::Result<()> {
        registry.register(id, topics).context("request debounced")?;
        if !send_ok {
            registry.unregister(&id);
            anyhow::bail!("peer rejected request");
        }
        Ok(())
    }

    #[test]
    fn test_concurrent_distinct_topics_all_accepted() {
        init_test_logging();
        const THREADS: usize = 64;
        let registry = Arc::new(RequestsRegistry::new(Duration::from_secs(60)));
        let barrier = Arc::new(Barrier::new(THREADS));

        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let registry = Arc::clone(&registry);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    let topic: TopicType = (t as u32).to_be_bytes();
                    barrier.wait();
                    registry.register(request_id(t, 0), &[topic])
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().expect("thread panicked").is_ok());
        }
        assert_eq!(registry.len(), THREADS);
        assert_eq!(registry.fingerprint_count(), THREADS);
        assert!(registry.is_consistent());
    }

    #[test]
    fn test_concurrent_same_topics_exactly_one_wins() {
        init_test_logging();
        const THREADS: usize = 32;
        let registry = Arc::new(RequestsRegistry::new(Duration::from_secs(60)));
        let barrier = Arc::new(Barrier::new(THREADS));
        let accepted = Arc::new(AtomicUsize::new(0));
        let topics: [TopicType; 2] = [[1, 2, 3, 4], [5, 6, 7, 8]];

        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let registry = Arc::clone(&registry);
                let barrier = Arc::clone(&barrier);
                let accepted = Arc::clone(&accepted);
                thread::spawn(move || {
                    barrier.wait();
                    match registry.register(request_id(t, 0), &topics) {
                        Ok(()) => {
                            accepted.fetch_add(1, Ordering::SeqCst);
                        }
                        Err(RequestsRegistryError::DuplicateRequest { delay }) => {
                            assert_eq!(delay, Duration::from_secs(60));
                        }
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().expect("thread panicked");
        }
        assert_eq!(accepted.load(Ordering::SeqCst), 1);
        assert_eq!(registry.len(), 1);
        assert!(registry.is_consistent());
    }

    #[test]
    fn test_register_unregister_churn_keeps_indexes_consistent() {
        init_test_logging();
        const THREADS: usize = 16;
        const ROUNDS: usize = 500;
        let registry = Arc::new(RequestsRegistry::new(Duration::from_millis(1)));

        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    let mut rng = rand::thread_rng();
                    let mut mine = Vec::new();
                    for seq in 0..ROUNDS {
                        let topic: TopicType = [rng.gen_range(0..8), 0, 0, 0];
                        let id = request_id(t, seq);
                        if registry.register(id, &[topic]).is_ok() {
                            mine.push(id);
                        }
                        if rng.gen_bool(0.5) {
                            if let Some(id) = mine.pop() {
                                registry.unregister(&id);
                            }
                        }
                    }
                    mine
                })
            })
            .collect();

        let mut survivors = Vec::new();
        for handle in handles {
            survivors.extend(handle.join().expect("thread panicked"));
        }

        assert!(registry.is_consistent());
        assert_eq!(registry.len(), survivors.len());
        assert!(registry.fingerprint_count() <= 8);

        for id in &survivors {
            registry.unregister(id);
        }
        assert!(registry.is_empty());
        assert_eq!(registry.fingerprint_count(), 0);
    }

    #[test]
    fn test_wall_clock_cooldown_expires() {
        init_test_logging();
        let registry = RequestsRegistry::with_config(RequestsRegistryConfig { delay_ms: 200 });
        let topics: [TopicType; 1] = [[9, 9, 9, 9]];

        registry.register(request_id(0, 0), &topics).unwrap();
        assert!(registry.register(request_id(0, 1), &topics).is_err());

        thread::sleep(registry.delay() + Duration::from_millis(20));
        assert!(registry.register(request_id(0, 2), &topics).is_ok());
    }

    #[test]
    fn test_failed_send_reopens_window() {
        init_test_logging();
        let registry = RequestsRegistry::new(Duration::from_secs(60));
        let topics: [TopicType; 1] = [[7, 7, 7, 7]];

        let err = request_messages(&registry, request_id(1, 0), &topics, false).unwrap_err();
        assert!(err.to_string().contains("peer rejected"));

        request_messages(&registry, request_id(1, 1), &topics, true).unwrap();

        let err = request_messages(&registry, request_id(1, 2), &topics, true).unwrap_err();
        assert!(err.to_string().contains("debounced"));
        assert!(err.downcast_ref::<RequestsRegistryError>().is_some());
    }
}
