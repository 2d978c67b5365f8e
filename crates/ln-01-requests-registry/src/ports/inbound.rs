//! # Inbound Ports
//!
//! API trait the request-handling service talks to.

use crate::domain::{RequestId, RequestsRegistryError, TopicType};

/// Requests Registry API - inbound port.
///
/// Callers generate unique request ids and issue or cancel the underlying
/// protocol request themselves; the registry only decides whether a request
/// may go out now.
pub trait RequestsRegistryApi: Send + Sync {
    /// Record a request for `topics`, or reject it if the same topics were
    /// requested inside the cooldown window.
    fn register(
        &self,
        request_id: RequestId,
        topics: &[TopicType],
    ) -> Result<(), RequestsRegistryError>;

    /// Forget a request. Unknown ids are ignored.
    fn unregister(&self, request_id: &RequestId);
}
