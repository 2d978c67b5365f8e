//! # Domain Module
//!
//! Core domain types for Sync Poll.

pub mod errors;
pub mod value_objects;

pub use errors::*;
pub use value_objects::*;
