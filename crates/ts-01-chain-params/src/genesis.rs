//! Genesis Block Creation
//!
//! Builds the genesis block of each network from a handful of inputs and
//! verifies the result against the hardcoded anchor values. The block carries
//! one coinbase transaction whose input script embeds a fixed message; its
//! single output pays the reward to a placeholder key that nobody can spend.

use hex_literal::hex;
use serde::Serialize;
use shared_crypto::{hash256, merkle_root};
use shared_types::{
    opcodes, Amount, Block, BlockHeader, ConsensusEncode, Hash256, OutPoint, ScriptBuilder,
    Transaction, TxIn, TxOut,
};
use tracing::{debug, error};

use crate::error::{ChainParamsError, GenesisField, Result};
use crate::network::Network;

/// Message embedded in the genesis coinbase input.
pub const COINBASE_MESSAGE: &[u8] =
    b"Tessera 02/Jul/2020 Proof of work hands the chain over to proof of stake";

/// Uncompressed public key of the genesis output.
pub const GENESIS_OUTPUT_PUBKEY: [u8; 65] = hex!(
    "04678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61de"
    "b649f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5f"
);

/// First push of the genesis coinbase script.
const COINBASE_SCRIPT_BITS: i64 = 486_604_799;

/// Values that vary between the networks' genesis blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenesisInputs {
    /// Header and coinbase transaction time.
    pub timestamp: u32,
    /// Header nonce.
    pub nonce: u32,
    /// Difficulty target in compact encoding.
    pub bits: u32,
    /// Header version.
    pub version: i32,
    /// Coinbase output value.
    pub reward: Amount,
}

fn coinbase_transaction(inputs: &GenesisInputs) -> Transaction {
    let script_sig = ScriptBuilder::new()
        .push_int(COINBASE_SCRIPT_BITS)
        .push_num(4)
        .push_slice(COINBASE_MESSAGE)
        .into_script();

    let script_pubkey = ScriptBuilder::new()
        .push_slice(&GENESIS_OUTPUT_PUBKEY)
        .push_opcode(opcodes::OP_CHECKSIG)
        .into_script();

    Transaction {
        version: 1,
        time: inputs.timestamp,
        inputs: vec![TxIn {
            prevout: OutPoint::null(),
            script_sig,
            sequence: TxIn::SEQUENCE_FINAL,
        }],
        outputs: vec![TxOut {
            value: inputs.reward,
            script_pubkey,
        }],
        lock_time: 0,
    }
}

/// Transaction id: SHA-256d of the serialized transaction.
pub fn txid(tx: &Transaction) -> Hash256 {
    hash256(&tx.to_bytes())
}

/// Block hash: SHA-256d of the 80-byte header.
pub fn block_hash(header: &BlockHeader) -> Hash256 {
    hash256(&header.to_bytes())
}

/// Build the genesis block for `inputs`.
///
/// Pure: the same inputs always give the same block. No nonce search is
/// performed, the nonce is taken as given.
pub fn create_genesis_block(inputs: &GenesisInputs) -> Block {
    let coinbase = coinbase_transaction(inputs);
    let merkle_root = merkle_root(&[txid(&coinbase)]);

    Block {
        header: BlockHeader {
            version: inputs.version,
            prev_block_hash: Hash256::ZERO,
            merkle_root,
            time: inputs.timestamp,
            bits: inputs.bits,
            nonce: inputs.nonce,
        },
        transactions: vec![coinbase],
    }
}

/// The genesis block together with its computed hash and Merkle root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenesisAnchor {
    #[serde(skip)]
    block: Block,
    hash: Hash256,
    merkle_root: Hash256,
}

impl GenesisAnchor {
    /// Build the block and compute its anchor values.
    pub fn build(inputs: &GenesisInputs) -> Self {
        let block = create_genesis_block(inputs);
        let hash = block_hash(&block.header);
        let merkle_root = block.header.merkle_root;

        debug!(
            "[genesis] Built block {} (merkle root {}, time {}, nonce {})",
            hash, merkle_root, inputs.timestamp, inputs.nonce
        );

        Self {
            block,
            hash,
            merkle_root,
        }
    }

    /// The genesis block.
    pub fn block(&self) -> &Block {
        &self.block
    }

    /// Computed block hash.
    pub fn hash(&self) -> Hash256 {
        self.hash
    }

    /// Computed Merkle root.
    pub fn merkle_root(&self) -> Hash256 {
        self.merkle_root
    }

    /// Compare the computed values against the hardcoded anchors.
    ///
    /// A mismatch means the built-in constants are corrupt and is fatal.
    pub fn verify(
        &self,
        network: Network,
        expected_hash: Hash256,
        expected_merkle_root: Hash256,
    ) -> Result<()> {
        if self.merkle_root != expected_merkle_root {
            error!(
                "[genesis] {} merkle root mismatch: expected {}, computed {}",
                network, expected_merkle_root, self.merkle_root
            );
            return Err(ChainParamsError::GenesisMismatch {
                network,
                field: GenesisField::MerkleRoot,
                expected: expected_merkle_root,
                computed: self.merkle_root,
            });
        }

        if self.hash != expected_hash {
            error!(
                "[genesis] {} hash mismatch: expected {}, computed {}",
                network, expected_hash, self.hash
            );
            return Err(ChainParamsError::GenesisMismatch {
                network,
                field: GenesisField::Hash,
                expected: expected_hash,
                computed: self.hash,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn regtest_inputs() -> GenesisInputs {
        GenesisInputs {
            timestamp: 1_565_753_832,
            nonce: 300_011_609,
            bits: 0x1f00_ffff,
            version: 1,
            reward: 0,
        }
    }

    #[test]
    fn test_coinbase_script_layout() {
        let block = create_genesis_block(&regtest_inputs());
        let script = block.transactions[0].inputs[0].script_sig.as_bytes();

        assert_eq!(script.len(), 80);
        assert_eq!(&script[..8], &hex!("04ffff001d010448"));
        assert_eq!(&script[8..], COINBASE_MESSAGE);
    }

    #[test]
    fn test_coinbase_transaction_shape() {
        let block = create_genesis_block(&regtest_inputs());
        let tx = &block.transactions[0];

        assert_eq!(block.transactions.len(), 1);
        assert!(tx.is_coinbase());
        assert_eq!(tx.time, 1_565_753_832);
        assert_eq!(tx.total_output(), 0);
        assert_eq!(tx.outputs[0].script_pubkey.len(), 67);
        assert_eq!(tx.to_bytes().len(), 211);
    }

    #[test]
    fn test_merkle_root_is_coinbase_txid() {
        let block = create_genesis_block(&regtest_inputs());

        assert_eq!(block.header.merkle_root, txid(&block.transactions[0]));
        assert!(block.header.prev_block_hash.is_zero());
    }

    #[test]
    fn test_regtest_anchor() {
        let anchor = GenesisAnchor::build(&regtest_inputs());

        assert_eq!(
            anchor.merkle_root().to_string(),
            "37b9a301b3cda78cf324d3ee3b293f16b7d31f6aedb1674f046c50094f6659b8"
        );
        assert_eq!(
            anchor.hash().to_string(),
            "9781ab11e8e5996eeecb31622a0436f894b7cb3b00fd0063211467276cfc8c9b"
        );
    }

    #[test]
    fn test_transaction_time_changes_merkle_root() {
        let mut other = regtest_inputs();
        other.timestamp += 1;

        let a = GenesisAnchor::build(&regtest_inputs());
        let b = GenesisAnchor::build(&other);
        assert_ne!(a.merkle_root(), b.merkle_root());
    }

    #[test]
    fn test_build_is_deterministic() {
        assert_eq!(
            GenesisAnchor::build(&regtest_inputs()),
            GenesisAnchor::build(&regtest_inputs())
        );
    }

    #[test]
    fn test_verify_names_mismatched_field() {
        let anchor = GenesisAnchor::build(&regtest_inputs());

        assert!(anchor
            .verify(Network::Regtest, anchor.hash(), anchor.merkle_root())
            .is_ok());

        let err = anchor
            .verify(Network::Regtest, Hash256::ZERO, anchor.merkle_root())
            .unwrap_err();
        assert!(matches!(
            err,
            ChainParamsError::GenesisMismatch {
                field: GenesisField::Hash,
                ..
            }
        ));

        let err = anchor
            .verify(Network::Regtest, anchor.hash(), Hash256::ZERO)
            .unwrap_err();
        assert!(matches!(
            err,
            ChainParamsError::GenesisMismatch {
                field: GenesisField::MerkleRoot,
                ..
            }
        ));
    }
}
