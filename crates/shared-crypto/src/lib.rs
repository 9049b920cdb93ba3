//! # Shared Crypto - Hash Primitives
//!
//! ## Components
//!
//! | Module | Algorithm | Use Case |
//! |--------|-----------|----------|
//! | `hashing` | SHA-256, SHA-256d | Transaction ids, block hashes |
//! | `merkle` | SHA-256d binary tree | Block Merkle roots |
//!
//! ## Security Properties
//!
//! - **SHA-256d**: double application defeats length extension on the inner digest
//! - **Merkle**: odd levels duplicate their last node; duplicated siblings are
//!   reported so callers can reject mutated transaction lists

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod hashing;
pub mod merkle;

// Re-exports
pub use hashing::{hash256, sha256, sha256d, Sha256dHasher};
pub use merkle::{compute_merkle_root, merkle_root, MerkleRoot};
