//! # LN-01 Requests Registry
//!
//! Debounces outbound message requests that carry the same topic set.
//!
//! **Subsystem ID:** 1  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! A request-handling service asks the registry before issuing a historic
//! message request. If another request with the same ordered topic list was
//! accepted less than the configured delay ago, the new one is rejected and
//! the caller should back off or use the non-debounced request API.
//!
//! | Rule | Description |
//! |------|-------------|
//! | Cooldown | Same fingerprint rejected until `delay` has elapsed |
//! | Ownership | The newest accepted request owns the fingerprint |
//! | Unregister | Only the owner's removal reopens the window |
//!
//! The fingerprint is a 32-bit FNV-1 digest over the concatenated topic
//! bytes. It is order sensitive and not collision resistant; it is a
//! debounce key and nothing more.
//!
//! ## Module Structure
//!
//! ```text
//! ln-01-requests-registry/
//! ├── domain/          # RequestId, TopicType, Fingerprint, RequestMeta, errors
//! ├── algorithms/      # topics_fingerprint
//! ├── ports/           # RequestsRegistryApi (inbound) + TimeSource (outbound)
//! ├── service.rs       # RequestsRegistry
//! └── config.rs        # RequestsRegistryConfig
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithms;
pub mod config;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use algorithms::topics_fingerprint;
pub use config::RequestsRegistryConfig;
pub use domain::{
    invariant_index_consistent, Fingerprint, RequestId, RequestMeta, RequestsRegistryError,
    TopicType, DEFAULT_REQUESTS_DELAY,
};
pub use ports::{ManualTimeSource, RequestsRegistryApi, SystemTimeSource, TimeSource};
pub use service::RequestsRegistry;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
