//! Regression-test network constants.
//!
//! A private network for local testing: no seeds, minimum difficulty allowed
//! and no retargeting.

use hex_literal::hex;
use primitive_types::U256;
use shared_types::Hash256;

use super::NetworkDefinition;
use crate::checkpoints::{ChainTxStats, Checkpoint};
use crate::consensus::ConsensusRules;
use crate::genesis::GenesisInputs;
use crate::identity::{Base58Prefixes, MessageStart, NetworkIdentity};
use crate::network::Network;

const STAKE_TARGET_SPACING: u64 = 2 * 60;
const WARM_UP_POW_BLOCKS: u64 = 720;

const GENESIS_HASH: Hash256 = Hash256::from_display_bytes(hex!(
    "9781ab11e8e5996eeecb31622a0436f894b7cb3b00fd0063211467276cfc8c9b"
));
const GENESIS_MERKLE_ROOT: Hash256 = Hash256::from_display_bytes(hex!(
    "37b9a301b3cda78cf324d3ee3b293f16b7d31f6aedb1674f046c50094f6659b8"
));

const ALERT_PUBKEY: [u8; 65] = hex!(
    "04173a381c9a7c0bf2e8f5dd3c71d059b025b6fee42b92224af842bd40ba1c99"
    "5d4e2e79d2fda539471ffb2cec48f45557c3f34d0269da3b6ae31eb7f48039b719"
);

pub(crate) fn definition() -> NetworkDefinition {
    let consensus = ConsensusRules {
        bip16_height: 0,
        bip34_height: 0,
        pow_limit: U256([u64::MAX, u64::MAX, u64::MAX, 0x0000_ffff_ffff_ffff]),
        target_timespan: 3 * 24 * 60 * 60,
        pow_target_spacing: STAKE_TARGET_SPACING,
        stake_target_spacing: STAKE_TARGET_SPACING,
        target_spacing_work_max: 12 * STAKE_TARGET_SPACING,
        stake_min_confirmations: 2,
        coinbase_maturity: 2,
        dgw_past_blocks: 3,
        warm_up_pow_blocks: WARM_UP_POW_BLOCKS,
        total_pow_blocks: WARM_UP_POW_BLOCKS + 40_000,
        start_mining_time: 1_581_501_960,
        stake_stop_height: None,
        pow_allow_min_difficulty_blocks: true,
        pow_no_retargeting: true,
        minimum_chain_work: U256::zero(),
        default_assume_valid: Hash256::ZERO,
        hash_genesis_block: Hash256::ZERO,
    };

    let identity = NetworkIdentity {
        network: Network::Regtest,
        message_start: MessageStart([0xcb, 0xf2, 0xc0, 0xef]),
        default_port: 8233,
        // Distinct from the test network so addresses never cross over
        base58_prefixes: Base58Prefixes {
            pubkey_address: [0x6f],
            script_address: [0xc4],
            secret_key: [0xef],
            ext_public_key: [0x04, 0x35, 0x87, 0xcf],
            ext_secret_key: [0x04, 0x35, 0x83, 0x94],
        },
        bech32_hrp: "tsrt".to_string(),
        alert_pubkey: Some(ALERT_PUBKEY.to_vec()),
        dns_seeds: Vec::new(),
        fixed_seeds: Vec::new(),
        mining_requires_peers: 0,
        require_standard: false,
        mine_blocks_on_demand: false,
        default_consistency_checks: false,
    };

    NetworkDefinition {
        consensus,
        identity,
        genesis: GenesisInputs {
            timestamp: 1_565_753_832,
            nonce: 300_011_609,
            bits: 0x1f00_ffff,
            version: 1,
            reward: 0,
        },
        expected_genesis_hash: GENESIS_HASH,
        expected_merkle_root: GENESIS_MERKLE_ROOT,
        checkpoints: vec![Checkpoint {
            height: 0,
            hash: GENESIS_HASH,
        }],
        chain_tx_stats: ChainTxStats::default(),
    }
}
