//! Main network constants.

use hex_literal::hex;
use primitive_types::U256;
use shared_types::Hash256;

use super::NetworkDefinition;
use crate::checkpoints::{ChainTxStats, Checkpoint};
use crate::consensus::ConsensusRules;
use crate::genesis::GenesisInputs;
use crate::identity::{Base58Prefixes, MessageStart, NetworkIdentity, SeedSpec6};
use crate::network::Network;

const DEFAULT_PORT: u16 = 8368;

const STAKE_TARGET_SPACING: u64 = 2 * 60;
const WARM_UP_POW_BLOCKS: u64 = 1440;

const GENESIS_HASH: Hash256 = Hash256::from_display_bytes(hex!(
    "0329cb0ca0d7f25e16174d3031d92cbbe3f1e0aef4435006ecaed5d35ead6dcd"
));
const GENESIS_MERKLE_ROOT: Hash256 = Hash256::from_display_bytes(hex!(
    "c0e14fde61bbba2686427125f6b2a215597e94fdbc172b714f6ade96e064c132"
));

const ALERT_PUBKEY: [u8; 65] = hex!(
    "040797a85cafdf223783f0e31b7e3554b61f873efb0abaa6fa56632308ae2d73"
    "09a8afdf6c221a07f73fc288c7626f3cd97a6121241db0d60e0e375aaa87f4b9a2"
);

const SEEDS: [[u8; 4]; 3] = [[3, 128, 150, 218], [3, 13, 93, 73], [3, 128, 85, 98]];

pub(crate) fn definition() -> NetworkDefinition {
    let consensus = ConsensusRules {
        bip16_height: 0,
        bip34_height: 0,
        pow_limit: U256([u64::MAX, u64::MAX, u64::MAX, 0x0000_0fff_ffff_ffff]),
        target_timespan: 24 * 60,
        pow_target_spacing: STAKE_TARGET_SPACING,
        stake_target_spacing: STAKE_TARGET_SPACING,
        target_spacing_work_max: 12 * STAKE_TARGET_SPACING,
        stake_min_confirmations: 240,
        coinbase_maturity: 100,
        dgw_past_blocks: 30,
        warm_up_pow_blocks: WARM_UP_POW_BLOCKS,
        total_pow_blocks: WARM_UP_POW_BLOCKS + 40_000,
        start_mining_time: 1_593_684_000,
        stake_stop_height: Some(16_400),
        pow_allow_min_difficulty_blocks: false,
        pow_no_retargeting: false,
        minimum_chain_work: U256::zero(),
        default_assume_valid: Hash256::ZERO,
        hash_genesis_block: Hash256::ZERO,
    };

    let identity = NetworkIdentity {
        network: Network::Main,
        message_start: MessageStart([0xfb, 0xf3, 0xef, 0xb4]),
        default_port: DEFAULT_PORT,
        base58_prefixes: Base58Prefixes {
            pubkey_address: [0x42],
            script_address: [0x3c],
            secret_key: [0x6c],
            ext_public_key: [0x04, 0x88, 0xb2, 0x1e],
            ext_secret_key: [0x04, 0x88, 0xad, 0xe4],
        },
        bech32_hrp: "ts".to_string(),
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
        require_standard: true,
        mine_blocks_on_demand: false,
        default_consistency_checks: false,
    };

    NetworkDefinition {
        consensus,
        identity,
        genesis: GenesisInputs {
            timestamp: 1_593_684_000,
            nonce: 1_500_976_653,
            bits: 0x1e0f_ffff,
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
