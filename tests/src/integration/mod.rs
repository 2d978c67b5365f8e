//! # Integration Flows
//!
//! - `requests_registry_flows`: registry under contention from OS threads
//! - `sync_poll_flows`: readiness waits against a simulated downloader

pub mod requests_registry_flows;
pub mod sync_poll_flows;
