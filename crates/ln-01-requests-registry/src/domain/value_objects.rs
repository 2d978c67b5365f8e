//! # Value Objects
//!
//! Identifiers and the debounce key.

use std::fmt;
use std::time::Duration;

/// Opaque 32-byte request identifier supplied by the caller.
pub type RequestId = [u8; 32];

/// 4-byte message topic.
pub type TopicType = [u8; 4];

/// Cooldown used when the caller does not configure one.
pub const DEFAULT_REQUESTS_DELAY: Duration = Duration::from_secs(3);

/// Debounce key derived from an ordered topic list.
///
/// The 32-bit digest occupies the last four bytes, big-endian; the leading
/// bytes are zero.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Wrap a 32-bit digest.
    pub fn from_digest(digest: u32) -> Self {
        let mut bytes = [0u8; 32];
        bytes[28..].copy_from_slice(&digest.to_be_bytes());
        Self(bytes)
    }

    /// The 32-bit digest this fingerprint was built from.
    pub fn digest(&self) -> u32 {
        u32::from_be_bytes([self.0[28], self.0[29], self.0[30], self.0[31]])
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({:#010x})", self.digest())
    }
}
