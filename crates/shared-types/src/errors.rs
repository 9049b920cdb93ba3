//! # Error Types
//!
//! Defines error types used across crates.

use thiserror::Error;

/// Errors produced when parsing a hex-encoded hash.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    /// The string does not hold exactly 64 hex characters.
    #[error("Invalid hash length: expected 64 hex characters, got {0}")]
    InvalidLength(usize),

    /// The string contains a non-hex character.
    #[error("Invalid hex: {0}")]
    InvalidHex(String),
}

impl From<hex::FromHexError> for HexError {
    fn from(err: hex::FromHexError) -> Self {
        HexError::InvalidHex(err.to_string())
    }
}
