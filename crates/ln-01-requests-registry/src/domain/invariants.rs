//! # Domain Invariants
//!
//! Consistency rules between the two registry indexes.

use std::collections::HashMap;

use super::entities::RequestMeta;
use super::value_objects::{Fingerprint, RequestId};

/// Invariant: every fingerprint entry is owned by a tracked request that
/// maps back to the same fingerprint.
///
/// The converse does not hold: a request id may outlive its ownership after
/// a newer request took the fingerprint over.
pub fn invariant_index_consistent(
    request_to_fingerprint: &HashMap<RequestId, Fingerprint>,
    fingerprint_to_meta: &HashMap<Fingerprint, RequestMeta>,
) -> bool {
    fingerprint_to_meta.iter().all(|(fingerprint, meta)| {
        request_to_fingerprint.get(&meta.last_request_id) == Some(fingerprint)
    })
}
