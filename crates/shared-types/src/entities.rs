//! # Core Domain Entities
//!
//! Defines the chain entities needed to build and hash a block.
//!
//! ## Clusters
//!
//! - **Values**: [`Hash256`], [`U256`], [`Amount`]
//! - **Chain**: [`OutPoint`], [`TxIn`], [`TxOut`], [`Transaction`],
//!   [`BlockHeader`], [`Block`]

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::HexError;
use crate::script::Script;

// Re-export U256 from primitive-types for use across all crates
pub use primitive_types::U256;

// =============================================================================
// VALUES
// =============================================================================

/// Amount in base units.
pub type Amount = i64;

/// Base units per coin.
pub const COIN: Amount = 100_000_000;

/// A 256-bit hash stored in internal byte order.
///
/// Internal order is the order the digest function produced the bytes in.
/// `Display` and `FromStr` use the reversed order that block explorers and
/// RPC interfaces print.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Hash256(pub [u8; 32]);

impl Hash256 {
    /// The all-zero hash (null previous block, disabled markers).
    pub const ZERO: Self = Self([0u8; 32]);

    /// Wrap bytes already in internal order.
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Build from bytes written in display order.
    ///
    /// Usable in `const` items together with `hex_literal::hex!`.
    pub const fn from_display_bytes(display: [u8; 32]) -> Self {
        let mut bytes = [0u8; 32];
        let mut i = 0;
        while i < 32 {
            bytes[i] = display[31 - i];
            i += 1;
        }
        Self(bytes)
    }

    /// Bytes in internal order.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// True for the all-zero hash.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Hex string in display order.
    pub fn to_display_hex(&self) -> String {
        let mut display = self.0;
        display.reverse();
        hex::encode(display)
    }
}

impl From<[u8; 32]> for Hash256 {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_hex())
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({})", self.to_display_hex())
    }
}

impl FromStr for Hash256 {
    type Err = HexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        if s.len() != 64 {
            return Err(HexError::InvalidLength(s.len()));
        }

        let mut display = [0u8; 32];
        hex::decode_to_slice(s, &mut display)?;
        Ok(Self::from_display_bytes(display))
    }
}

impl Serialize for Hash256 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_display_hex())
    }
}

impl<'de> Deserialize<'de> for Hash256 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

// =============================================================================
// CHAIN
// =============================================================================

/// Reference to a previous transaction output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutPoint {
    /// Transaction that created the output.
    pub txid: Hash256,
    /// Index of the output in that transaction.
    pub vout: u32,
}

impl OutPoint {
    /// The null outpoint spent by coinbase inputs.
    pub const fn null() -> Self {
        Self {
            txid: Hash256::ZERO,
            vout: u32::MAX,
        }
    }

    /// True for the coinbase outpoint.
    pub fn is_null(&self) -> bool {
        self.txid.is_zero() && self.vout == u32::MAX
    }
}

/// Transaction input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxIn {
    /// Output being spent.
    pub prevout: OutPoint,
    /// Unlocking script (arbitrary data for coinbase inputs).
    pub script_sig: Script,
    /// Sequence number.
    pub sequence: u32,
}

impl TxIn {
    /// Final sequence number.
    pub const SEQUENCE_FINAL: u32 = 0xffff_ffff;
}

/// Transaction output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOut {
    /// Value in base units.
    pub value: Amount,
    /// Locking script.
    pub script_pubkey: Script,
}

/// A transaction.
///
/// Proof-of-stake chains carry a per-transaction timestamp (`time`) that is
/// part of the serialized form and therefore of the transaction digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction format version.
    pub version: i32,
    /// Transaction timestamp (Unix seconds).
    pub time: u32,
    /// Inputs.
    pub inputs: Vec<TxIn>,
    /// Outputs.
    pub outputs: Vec<TxOut>,
    /// Lock time.
    pub lock_time: u32,
}

impl Transaction {
    /// True when the transaction has a single input spending the null outpoint.
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].prevout.is_null()
    }

    /// Sum of all output values.
    pub fn total_output(&self) -> Amount {
        self.outputs.iter().map(|out| out.value).sum()
    }
}

/// The header of a block; its digest is the block hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    /// Block format version.
    pub version: i32,
    /// Hash of the parent block (zero for genesis).
    pub prev_block_hash: Hash256,
    /// Merkle root of all transactions in the block.
    pub merkle_root: Hash256,
    /// Unix timestamp.
    pub time: u32,
    /// Difficulty target in compact encoding.
    pub bits: u32,
    /// Proof-of-work nonce.
    pub nonce: u32,
}

/// A block: header plus transactions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// The block header.
    pub header: BlockHeader,
    /// Transactions, coinbase first.
    pub transactions: Vec<Transaction>,
}
