//! Public test network constants.

use hex_literal::hex;
use primitive_types::U256;
use shared_types::Hash256;

use super::NetworkDefinition;
use crate::checkpoints::{ChainTxStats, Checkpoint};
use crate::consensus::ConsensusRules;
use crate::genesis::GenesisInputs;
use crate::identity::{Base58Prefixes, MessageStart, NetworkIdentity, SeedSpec6};
use crate::network::Network;

const DEFAULT_PORT: u16 = 8366;

const STAKE_TARGET_SPACING: u64 = 2 * 60;
const WARM_UP_POW_BLOCKS: u64 = 720;

const GENESIS_HASH: Hash256 = Hash256::from_display_bytes(hex!(
    "6979fa763f3dbb53f756d75c97c14adc2ea62ec3ca5b4c3192be97b435e27006"
));
const GENESIS_MERKLE_ROOT: Hash256 = Hash256::from_display_bytes(hex!(
    "64b0d879eeb5e913394c6221e5c7a67f08424101ba1ff8738a7731b2c217f2b4"
));

const ALERT_PUBKEY: [u8; 65] = hex!(
    "04173a381c9a7c0bf2e8f5dd3c71d059b025b6fee42b92224af842bd40ba1c99"
    "5d4e2e79d2fda539471ffb2cec48f45557c3f34d0269da3b6ae31eb7f48039b719"
);

const SEEDS: [[u8; 4]; 3] = [[3, 128, 150, 218], [3, 13, 93, 73], [3, 128, 85, 98]];

pub(crate) fn definition() -> NetworkDefinition {
    let consensus = ConsensusRules {
        bip16_height: 0,
        bip34_height: 0,
        pow_limit: U256([u64::MAX, u64::MAX, u64::MAX, 0x0000_ffff_ffff_ffff]),
        target_timespan: 24 * 60,
        pow_target_spacing: STAKE_TARGET_SPACING,
        stake_target_spacing: STAKE_TARGET_SPACING,
        target_spacing_work_max: 12 * STAKE_TARGET_SPACING,
        stake_min_confirmations: 240,
        coinbase_maturity: 100,
        dgw_past_blocks: 30,
        warm_up_pow_blocks: WARM_UP_POW_BLOCKS,
        total_pow_blocks: WARM_UP_POW_BLOCKS + 14_400,
        start_mining_time: 1_581_441_000,
        stake_stop_height: None,
        pow_allow_min_difficulty_blocks: false,
        pow_no_retargeting: false,
        minimum_chain_work: U256::zero(),
        default_assume_valid: Hash256::ZERO,
        hash_genesis_block: Hash256::ZERO,
    };

    let identity = NetworkIdentity {
        network: Network::Test,
        message_start: MessageStart([0xcb, 0xf2, 0xc3, 0xef]),
        default_port: DEFAULT_PORT,
        base58_prefixes: Base58Prefixes {
            pubkey_address: [0x80],
            script_address: [0x7a],
            secret_key: [0x2e],
            ext_public_key: [0x04, 0x35, 0x87, 0xcf],
            ext_secret_key: [0x04, 0x35, 0x83, 0x94],
        },
        bech32_hrp: "tst".to_string(),
        alert_pubkey: Some(ALERT_PUBKEY.to_vec()),
        dns_seeds: SEEDS
            .iter()
            .map(|[a, b, c, d]| format!("{a}.{b}.{c}.{d}"))
            .collect(),
        fixed_seeds: SEEDS
            .iter()
            .map(|octets| SeedSpec6::ipv4(*octets, DEFAULT_PORT))
            .collect(),
        mining_requires_peers: 6,
        require_standard: false,
        mine_blocks_on_demand: false,
        default_consistency_checks: false,
    };

    NetworkDefinition {
        consensus,
        identity,
        genesis: GenesisInputs {
            timestamp: 1_593_058_560,
            nonce: 1_000_001_936,
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
