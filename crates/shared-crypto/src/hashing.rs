//! # SHA-256 Hashing
//!
//! Single and double SHA-256. Double SHA-256 ("SHA-256d") is the digest used
//! for transaction ids, Merkle nodes and block hashes.

use sha2::{Digest, Sha256};
use shared_types::Hash256;

/// Compute SHA-256 hash of data.
#[inline]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// Compute double SHA-256 hash of data.
#[inline]
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    let first_hash = sha256(data);
    sha256(&first_hash)
}

/// Double SHA-256 wrapped as a [`Hash256`] in internal byte order.
#[inline]
pub fn hash256(data: &[u8]) -> Hash256 {
    Hash256::from_bytes(sha256d(data))
}

/// Streaming double SHA-256 hasher.
pub struct Sha256dHasher {
    inner: Sha256,
}

impl Sha256dHasher {
    /// Create new hasher.
    pub fn new() -> Self {
        Self {
            inner: Sha256::new(),
        }
    }

    /// Update with data.
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.inner.update(data);
        self
    }

    /// Finalize and return the double digest.
    pub fn finalize(self) -> Hash256 {
        let first: [u8; 32] = self.inner.finalize().into();
        Hash256::from_bytes(sha256(&first))
    }
}

impl Default for Sha256dHasher {
    fn default() -> Self {
        Self::new()
    }
}
