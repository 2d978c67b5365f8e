//! # Algorithms Module
//!
//! Debounce key derivation.

pub mod fingerprint;

pub use fingerprint::{fnv1_32, topics_fingerprint};
