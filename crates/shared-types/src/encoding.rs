//! Consensus serialization
//!
//! The byte layout that is hashed for transaction ids, Merkle leaves and
//! block hashes. All integers are little-endian; collection and script
//! lengths use the compact-size prefix.

use crate::entities::{Block, BlockHeader, Hash256, OutPoint, Transaction, TxIn, TxOut};
use crate::script::Script;

/// Serialized size of a block header in bytes.
pub const HEADER_SIZE: usize = 80;

/// Types with a canonical consensus byte encoding.
pub trait ConsensusEncode {
    /// Append the encoding to `out`.
    fn consensus_encode(&self, out: &mut Vec<u8>);

    /// Encode into a fresh buffer.
    fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.consensus_encode(&mut out);
        out
    }
}

/// Write a compact-size length prefix.
pub fn write_compact_size(out: &mut Vec<u8>, n: u64) {
    if n < 0xfd {
        out.push(n as u8);
    } else if n <= 0xffff {
        out.push(0xfd);
        out.extend_from_slice(&(n as u16).to_le_bytes());
    } else if n <= 0xffff_ffff {
        out.push(0xfe);
        out.extend_from_slice(&(n as u32).to_le_bytes());
    } else {
        out.push(0xff);
        out.extend_from_slice(&n.to_le_bytes());
    }
}

fn encode_vec<T: ConsensusEncode>(items: &[T], out: &mut Vec<u8>) {
    write_compact_size(out, items.len() as u64);
    for item in items {
        item.consensus_encode(out);
    }
}

impl ConsensusEncode for Hash256 {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.as_bytes());
    }
}

impl ConsensusEncode for Script {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        write_compact_size(out, self.len() as u64);
        out.extend_from_slice(self.as_bytes());
    }
}

impl ConsensusEncode for OutPoint {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        self.txid.consensus_encode(out);
        out.extend_from_slice(&self.vout.to_le_bytes());
    }
}

impl ConsensusEncode for TxIn {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        self.prevout.consensus_encode(out);
        self.script_sig.consensus_encode(out);
        out.extend_from_slice(&self.sequence.to_le_bytes());
    }
}

impl ConsensusEncode for TxOut {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.value.to_le_bytes());
        self.script_pubkey.consensus_encode(out);
    }
}

impl ConsensusEncode for Transaction {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.version.to_le_bytes());
        out.extend_from_slice(&self.time.to_le_bytes());
        encode_vec(&self.inputs, out);
        encode_vec(&self.outputs, out);
        out.extend_from_slice(&self.lock_time.to_le_bytes());
    }
}

impl ConsensusEncode for BlockHeader {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.version.to_le_bytes());
        self.prev_block_hash.consensus_encode(out);
        self.merkle_root.consensus_encode(out);
        out.extend_from_slice(&self.time.to_le_bytes());
        out.extend_from_slice(&self.bits.to_le_bytes());
        out.extend_from_slice(&self.nonce.to_le_bytes());
    }
}

impl ConsensusEncode for Block {
    fn consensus_encode(&self, out: &mut Vec<u8>) {
        self.header.consensus_encode(out);
        encode_vec(&self.transactions, out);
    }
}
