//! # Topic Fingerprint
//!
//! 32-bit FNV-1 over the concatenated topic bytes, in the order given.
//! No canonical sort is applied: `[A, B]` and `[B, A]` are different keys.

use crate::domain::{Fingerprint, TopicType};

const FNV32_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV32_PRIME: u32 = 0x0100_0193;

/// FNV-1 (multiply, then xor) folded over a sequence of byte chunks.
pub fn fnv1_32<'a, I>(chunks: I) -> u32
where
    I: IntoIterator<Item = &'a [u8]>,
{
    chunks
        .into_iter()
        .flatten()
        .fold(FNV32_OFFSET_BASIS, |hash, byte| {
            hash.wrapping_mul(FNV32_PRIME) ^ u32::from(*byte)
        })
}

/// Compute the debounce key for an ordered topic list.
pub fn topics_fingerprint(topics: &[TopicType]) -> Fingerprint {
    Fingerprint::from_digest(fnv1_32(topics.iter().map(|t| t.as_slice())))
}
