//! # Requests Registry Service
//!
//! Both indexes live in one state struct behind a single mutex, so every
//! public operation is one critical section.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, trace};

use node_telemetry::{REQUESTS_REGISTERED, REQUESTS_REJECTED, REQUESTS_UNREGISTERED};

use crate::algorithms::topics_fingerprint;
use crate::config::RequestsRegistryConfig;
use crate::domain::{
    invariant_index_consistent, Fingerprint, RequestId, RequestMeta, RequestsRegistryError,
    TopicType, DEFAULT_REQUESTS_DELAY,
};
use crate::ports::{RequestsRegistryApi, SystemTimeSource, TimeSource};

/// Internal state guarded by the registry mutex.
#[derive(Default)]
struct RegistryState {
    /// Request id -> fingerprint, for removal by id.
    request_to_fingerprint: HashMap<RequestId, Fingerprint>,
    /// Fingerprint -> most recent accepted request.
    fingerprint_to_meta: HashMap<Fingerprint, RequestMeta>,
}

/// Cooldown registry for outbound topic requests.
pub struct RequestsRegistry {
    delay: Duration,
    state: Mutex<RegistryState>,
    time_source: Arc<dyn TimeSource>,
}

impl RequestsRegistry {
    /// Create a registry with the given cooldown.
    ///
    /// A zero `delay` is treated as unset and replaced by
    /// [`DEFAULT_REQUESTS_DELAY`].
    pub fn new(delay: Duration) -> Self {
        Self::with_time_source(delay, Arc::new(SystemTimeSource))
    }

    /// Create a registry from configuration.
    pub fn with_config(config: RequestsRegistryConfig) -> Self {
        Self::new(config.delay())
    }

    /// Create a registry with an injected clock.
    pub fn with_time_source(delay: Duration, time_source: Arc<dyn TimeSource>) -> Self {
        let delay = if delay.is_zero() {
            DEFAULT_REQUESTS_DELAY
        } else {
            delay
        };
        Self {
            delay,
            state: Mutex::new(RegistryState::default()),
            time_source,
        }
    }

    /// Configured cooldown window.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Register a request for `topics`.
    ///
    /// Fails with [`RequestsRegistryError::DuplicateRequest`] if the same
    /// ordered topic list was accepted less than `delay` ago; nothing is
    /// recorded in that case. On success the new request takes over the
    /// fingerprint, replacing any earlier owner.
    pub fn register(
        &self,
        request_id: RequestId,
        topics: &[TopicType],
    ) -> Result<(), RequestsRegistryError> {
        let mut state = self.state.lock();
        let fingerprint = topics_fingerprint(topics);
        let now = self.time_source.now();

        if let Some(meta) = state.fingerprint_to_meta.get(&fingerprint) {
            if meta.within_cooldown(now, self.delay) {
                REQUESTS_REJECTED.inc();
                debug!(
                    request_id = %hex::encode(request_id),
                    %fingerprint,
                    owner = %hex::encode(meta.last_request_id),
                    delay_ms = self.delay.as_millis() as u64,
                    "Rejecting duplicate request inside cooldown window"
                );
                return Err(RequestsRegistryError::DuplicateRequest { delay: self.delay });
            }
        }

        state.request_to_fingerprint.insert(request_id, fingerprint);
        state.fingerprint_to_meta.insert(
            fingerprint,
            RequestMeta {
                timestamp: now,
                last_request_id: request_id,
            },
        );

        REQUESTS_REGISTERED.inc();
        debug!(
            request_id = %hex::encode(request_id),
            %fingerprint,
            topics = topics.len(),
            "Request registered"
        );
        Ok(())
    }

    /// Remove a request.
    ///
    /// The fingerprint entry is dropped only if `request_id` still owns it;
    /// otherwise a newer request's window stays in place. Unknown or already
    /// removed ids are a no-op.
    pub fn unregister(&self, request_id: &RequestId) {
        let mut state = self.state.lock();
        let Some(fingerprint) = state.request_to_fingerprint.remove(request_id) else {
            trace!(request_id = %hex::encode(request_id), "Unregister of unknown request");
            return;
        };

        let owned = state
            .fingerprint_to_meta
            .get(&fingerprint)
            .is_some_and(|meta| meta.last_request_id == *request_id);
        if owned {
            state.fingerprint_to_meta.remove(&fingerprint);
        }

        REQUESTS_UNREGISTERED.inc();
        debug!(
            request_id = %hex::encode(request_id),
            %fingerprint,
            cleared_window = owned,
            "Request unregistered"
        );
    }

    /// Number of tracked request ids.
    pub fn len(&self) -> usize {
        self.state.lock().request_to_fingerprint.len()
    }

    /// Whether no request ids are tracked.
    pub fn is_empty(&self) -> bool {
        self.state.lock().request_to_fingerprint.is_empty()
    }

    /// Number of fingerprints with an open or expired window on record.
    pub fn fingerprint_count(&self) -> usize {
        self.state.lock().fingerprint_to_meta.len()
    }

    /// Whether `request_id` is tracked.
    pub fn contains_request(&self, request_id: &RequestId) -> bool {
        self.state
            .lock()
            .request_to_fingerprint
            .contains_key(request_id)
    }

    /// Request currently owning the fingerprint of `topics`.
    pub fn owner_of(&self, topics: &[TopicType]) -> Option<RequestId> {
        let fingerprint = topics_fingerprint(topics);
        self.state
            .lock()
            .fingerprint_to_meta
            .get(&fingerprint)
            .map(|meta| meta.last_request_id)
    }

    /// Check the cross-index invariant under the lock.
    pub fn is_consistent(&self) -> bool {
        let state = self.state.lock();
        invariant_index_consistent(&state.request_to_fingerprint, &state.fingerprint_to_meta)
    }
}

impl Default for RequestsRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_REQUESTS_DELAY)
    }
}

impl RequestsRegistryApi for RequestsRegistry {
    fn register(
        &self,
        request_id: RequestId,
        topics: &[TopicType],
    ) -> Result<(), RequestsRegistryError> {
        RequestsRegistry::register(self, request_id, topics)
    }

    fn unregister(&self, request_id: &RequestId) {
        RequestsRegistry::unregister(self, request_id)
    }
}
