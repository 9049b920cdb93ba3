//! Consensus rules
//!
//! Per-network constants read by chain validation. The chain starts with a
//! proof-of-work phase (a warm-up window followed by regular PoW blocks) and
//! hands issuance over to proof of stake at `total_pow_blocks`.
//!
//! **IMPORTANT**: `pow_limit` is a CEILING on the target: the easiest
//! difficulty the network accepts.

use primitive_types::U256;
use serde::Serialize;
use shared_types::{target_from_compact, target_to_compact, Hash256};

use crate::error::{ChainParamsError, Result};
use crate::network::Network;

/// Consensus constants for one network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsensusRules {
    /// Height at which P2SH (BIP16) is enforced.
    pub bip16_height: u64,
    /// Height at which coinbase height commitments (BIP34) are enforced.
    pub bip34_height: u64,

    /// Easiest allowed proof-of-work target.
    pub pow_limit: U256,
    /// Difficulty retarget timespan (seconds).
    pub target_timespan: u64,
    /// Target block spacing during the proof-of-work phase (seconds).
    pub pow_target_spacing: u64,
    /// Target block spacing during the proof-of-stake phase (seconds).
    pub stake_target_spacing: u64,
    /// Upper bound on proof-of-work spacing (seconds).
    pub target_spacing_work_max: u64,

    /// Confirmations before an output may stake.
    pub stake_min_confirmations: u32,
    /// Confirmations before a coinbase output may be spent.
    pub coinbase_maturity: u32,
    /// Blocks averaged by the Dark Gravity Wave retarget.
    pub dgw_past_blocks: u32,

    /// Proof-of-work blocks mined at warm-up difficulty.
    pub warm_up_pow_blocks: u64,
    /// Total proof-of-work blocks, warm-up included.
    pub total_pow_blocks: u64,
    /// Earliest Unix time at which mining or staking may begin.
    pub start_mining_time: u64,
    /// Height from which staking is disabled, if any.
    pub stake_stop_height: Option<u64>,

    /// Blocks may use the minimum difficulty (permissive test networks only).
    pub pow_allow_min_difficulty_blocks: bool,
    /// Difficulty never retargets (permissive test networks only).
    pub pow_no_retargeting: bool,

    /// Minimum cumulative chain work for a chain to be considered synced.
    pub minimum_chain_work: U256,
    /// Block below which signatures are assumed valid (zero = disabled).
    pub default_assume_valid: Hash256,

    /// Genesis block hash, filled in from the verified genesis anchor.
    pub hash_genesis_block: Hash256,
}

impl ConsensusRules {
    /// Ratio between the proof-of-work spacing ceiling and the stake spacing.
    pub fn work_spacing_ratio(&self) -> u64 {
        self.target_spacing_work_max / self.stake_target_spacing
    }

    /// Last height issued by proof of work.
    pub fn pow_phase_end_height(&self) -> u64 {
        self.total_pow_blocks
    }

    /// Height falls in the warm-up window (genesis included).
    pub fn is_warm_up_height(&self, height: u64) -> bool {
        height <= self.warm_up_pow_blocks
    }

    /// Height is issued by proof of work.
    pub fn is_pow_height(&self, height: u64) -> bool {
        height <= self.total_pow_blocks
    }

    /// Staking is permitted after warm-up and before the stop height.
    pub fn is_staking_allowed_at(&self, height: u64) -> bool {
        height > self.warm_up_pow_blocks
            && self.stake_stop_height.map_or(true, |stop| height < stop)
    }

    /// Mining or staking may begin at this Unix time.
    pub fn is_mining_started(&self, time: u64) -> bool {
        time >= self.start_mining_time
    }

    /// BIP16 is enforced at this height.
    pub fn bip16_active(&self, height: u64) -> bool {
        height >= self.bip16_height
    }

    /// BIP34 is enforced at this height.
    pub fn bip34_active(&self, height: u64) -> bool {
        height >= self.bip34_height
    }

    /// Blocks between epoch retargets.
    pub fn difficulty_adjustment_interval(&self) -> u64 {
        self.target_timespan / self.pow_target_spacing
    }

    /// The assume-valid block, unless disabled.
    pub fn assume_valid(&self) -> Option<Hash256> {
        (!self.default_assume_valid.is_zero()).then_some(self.default_assume_valid)
    }

    /// A minimum chain work floor is configured.
    pub fn has_minimum_chain_work(&self) -> bool {
        !self.minimum_chain_work.is_zero()
    }

    /// Compact encoding of [`Self::pow_limit`].
    pub fn pow_limit_bits(&self) -> u32 {
        target_to_compact(self.pow_limit)
    }

    /// Check the invariants that only involve the rules themselves.
    pub fn validate(&self, network: Network) -> Result<()> {
        let invalid = |reason: String| ChainParamsError::InvalidConsensusRules { network, reason };

        if self.warm_up_pow_blocks > self.total_pow_blocks {
            return Err(invalid(format!(
                "warm-up blocks {} exceed total proof-of-work blocks {}",
                self.warm_up_pow_blocks, self.total_pow_blocks
            )));
        }

        if self.stake_target_spacing == 0 {
            return Err(invalid("stake target spacing is zero".to_string()));
        }

        if self.pow_target_spacing == 0 {
            return Err(invalid("proof-of-work target spacing is zero".to_string()));
        }

        if self.target_spacing_work_max < self.stake_target_spacing {
            return Err(invalid(format!(
                "work spacing ceiling {} below stake spacing {}",
                self.target_spacing_work_max, self.stake_target_spacing
            )));
        }

        let decoded = target_from_compact(self.pow_limit_bits());
        if !decoded.is_valid_target() {
            return Err(invalid(format!(
                "pow limit {:#x} has no valid compact encoding",
                self.pow_limit
            )));
        }

        Ok(())
    }

    /// Check that a compact target is usable and not easier than the limit.
    pub fn check_bits_within_limit(&self, network: Network, bits: u32) -> Result<()> {
        let decoded = target_from_compact(bits);
        if !decoded.is_valid_target() || decoded.target > self.pow_limit {
            return Err(ChainParamsError::InvalidConsensusRules {
                network,
                reason: format!("difficulty bits {bits:#010x} exceed the pow limit"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> ConsensusRules {
        ConsensusRules {
            bip16_height: 0,
            bip34_height: 10,
            pow_limit: U256([u64::MAX, u64::MAX, u64::MAX, 0x0000_ffff_ffff_ffff]),
            target_timespan: 24 * 60,
            pow_target_spacing: 120,
            stake_target_spacing: 120,
            target_spacing_work_max: 12 * 120,
            stake_min_confirmations: 240,
            coinbase_maturity: 100,
            dgw_past_blocks: 30,
            warm_up_pow_blocks: 100,
            total_pow_blocks: 1000,
            start_mining_time: 1_600_000_000,
            stake_stop_height: Some(500),
            pow_allow_min_difficulty_blocks: false,
            pow_no_retargeting: false,
            minimum_chain_work: U256::zero(),
            default_assume_valid: Hash256::ZERO,
            hash_genesis_block: Hash256::ZERO,
        }
    }

    #[test]
    fn test_valid_rules_pass() {
        assert!(rules().validate(Network::Main).is_ok());
    }

    #[test]
    fn test_warm_up_cannot_exceed_total() {
        let mut bad = rules();
        bad.warm_up_pow_blocks = bad.total_pow_blocks + 1;

        assert!(matches!(
            bad.validate(Network::Test),
            Err(ChainParamsError::InvalidConsensusRules {
                network: Network::Test,
                ..
            })
        ));
    }

    #[test]
    fn test_zero_stake_spacing_rejected() {
        let mut bad = rules();
        bad.stake_target_spacing = 0;
        assert!(bad.validate(Network::Main).is_err());
    }

    #[test]
    fn test_zero_pow_limit_rejected() {
        let mut bad = rules();
        bad.pow_limit = U256::zero();
        assert!(bad.validate(Network::Main).is_err());
    }

    #[test]
    fn test_phase_boundaries() {
        let rules = rules();

        assert!(rules.is_warm_up_height(0));
        assert!(rules.is_warm_up_height(100));
        assert!(!rules.is_warm_up_height(101));

        assert!(rules.is_pow_height(1000));
        assert!(!rules.is_pow_height(1001));
        assert_eq!(rules.pow_phase_end_height(), 1000);
    }

    #[test]
    fn test_staking_window() {
        let mut rules = rules();

        assert!(!rules.is_staking_allowed_at(100));
        assert!(rules.is_staking_allowed_at(101));
        assert!(!rules.is_staking_allowed_at(500));

        rules.stake_stop_height = None;
        assert!(rules.is_staking_allowed_at(1_000_000));
    }

    #[test]
    fn test_derived_values() {
        let rules = rules();

        assert_eq!(rules.work_spacing_ratio(), 12);
        assert_eq!(rules.difficulty_adjustment_interval(), 12);
        assert!(!rules.bip34_active(9));
        assert!(rules.bip34_active(10));
        assert!(rules.is_mining_started(1_600_000_000));
        assert!(!rules.is_mining_started(1_599_999_999));
    }

    #[test]
    fn test_placeholders_are_disabled() {
        let mut rules = rules();
        assert_eq!(rules.assume_valid(), None);
        assert!(!rules.has_minimum_chain_work());

        rules.default_assume_valid = Hash256::from_bytes([7u8; 32]);
        assert_eq!(rules.assume_valid(), Some(Hash256::from_bytes([7u8; 32])));
    }

    #[test]
    fn test_bits_checked_against_limit() {
        let rules = rules();

        assert!(rules.check_bits_within_limit(Network::Main, 0x1f00_ffff).is_ok());
        assert!(rules.check_bits_within_limit(Network::Main, 0x1e0f_ffff).is_ok());
        // Easier than 0000ffff... is rejected
        assert!(rules.check_bits_within_limit(Network::Main, 0x2000_ffff).is_err());
        // Negative encodings are never valid
        assert!(rules.check_bits_within_limit(Network::Main, 0x1e8f_ffff).is_err());
    }
}
