//! Error types for the chain parameter registry

use std::fmt;

use shared_types::Hash256;
use thiserror::Error;

use crate::network::Network;

/// Result type alias for chain parameter operations
pub type Result<T> = std::result::Result<T, ChainParamsError>;

/// Which genesis value failed verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenesisField {
    /// Header hash.
    Hash,
    /// Merkle root of the transaction list.
    MerkleRoot,
}

impl fmt::Display for GenesisField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenesisField::Hash => f.write_str("hash"),
            GenesisField::MerkleRoot => f.write_str("merkle root"),
        }
    }
}

/// Errors that can occur while building or selecting chain parameters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChainParamsError {
    /// Identifier is not one of `main`, `test`, `regtest`
    #[error("Unknown chain {0}")]
    UnknownNetwork(String),

    /// Computed genesis value differs from the hardcoded anchor
    #[error("Genesis {field} mismatch on {network}: expected {expected}, computed {computed}")]
    GenesisMismatch {
        /// Network being built
        network: Network,
        /// Field that differs
        field: GenesisField,
        /// Hardcoded value
        expected: Hash256,
        /// Value computed from the genesis inputs
        computed: Hash256,
    },

    /// Consensus constants violate an invariant
    #[error("Invalid consensus rules for {network}: {reason}")]
    InvalidConsensusRules {
        /// Network being built
        network: Network,
        /// Violated invariant
        reason: String,
    },

    /// Network identity constants violate an invariant
    #[error("Invalid network identity for {network}: {reason}")]
    InvalidIdentity {
        /// Network being built
        network: Network,
        /// Violated invariant
        reason: String,
    },

    /// Checkpoint table is unordered, has duplicates or contradicts genesis
    #[error("Invalid checkpoint table: {0}")]
    InvalidCheckpoints(String),

    /// A different network is already the process-wide selection
    #[error("Chain parameters already selected for {active}, refusing {requested}")]
    AlreadySelected {
        /// Network installed in the process-wide slot
        active: Network,
        /// Network the caller asked for
        requested: Network,
    },
}

impl ChainParamsError {
    /// Check if the caller can recover (reject the config and exit cleanly)
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::UnknownNetwork(_) | Self::AlreadySelected { .. }
        )
    }

    /// Check if the error means the built-in constants are corrupt.
    ///
    /// The node must not continue after a fatal error.
    pub fn is_fatal(&self) -> bool {
        !self.is_recoverable()
    }
}
