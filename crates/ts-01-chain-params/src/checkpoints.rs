//! # Checkpoints
//!
//! Hardcoded (height, hash) anchors. A chain whose block at a checkpointed
//! height has a different hash is rejected without further validation.
//!
//! ## Table Invariants
//!
//! 1. Heights strictly ascending (so also unique)
//! 2. The height-0 entry, when present, is the genesis hash
//!    (checked when the parameter set is assembled)

use serde::Serialize;
use shared_types::Hash256;

use crate::error::{ChainParamsError, Result};

/// A single hardcoded anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Checkpoint {
    /// Block height.
    pub height: u64,
    /// Block hash at that height.
    pub hash: Hash256,
}

/// Checkpoints ordered by height.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CheckpointTable {
    entries: Vec<Checkpoint>,
}

impl CheckpointTable {
    /// Build a table, rejecting unordered or duplicate heights.
    pub fn new(entries: Vec<Checkpoint>) -> Result<Self> {
        if let Some(pair) = entries.windows(2).find(|pair| pair[0].height >= pair[1].height) {
            return Err(ChainParamsError::InvalidCheckpoints(format!(
                "height {} follows height {}",
                pair[1].height, pair[0].height
            )));
        }
        Ok(Self { entries })
    }

    /// Table holding only the genesis block.
    pub fn genesis_only(genesis_hash: Hash256) -> Self {
        Self {
            entries: vec![Checkpoint {
                height: 0,
                hash: genesis_hash,
            }],
        }
    }

    /// Hash checkpointed at `height`.
    pub fn get(&self, height: u64) -> Option<&Hash256> {
        self.entries
            .binary_search_by_key(&height, |checkpoint| checkpoint.height)
            .ok()
            .map(|index| &self.entries[index].hash)
    }

    /// Highest checkpoint.
    pub fn last(&self) -> Option<&Checkpoint> {
        self.entries.last()
    }

    /// Number of checkpoints.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when there are no checkpoints.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checkpoints in ascending height order.
    pub fn iter(&self) -> impl Iterator<Item = &Checkpoint> {
        self.entries.iter()
    }

    /// False only when `height` is checkpointed with a different hash.
    pub fn check_block(&self, height: u64, hash: &Hash256) -> bool {
        self.get(height).map_or(true, |expected| expected == hash)
    }
}

/// Transaction-count snapshot used to estimate sync progress.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ChainTxStats {
    /// Unix time of the snapshot.
    pub time: u64,
    /// Transactions between genesis and `time`.
    pub tx_count: u64,
    /// Estimated transactions per second after `time`.
    pub tx_rate: f64,
}

impl ChainTxStats {
    /// Estimated total transactions at Unix time `now`.
    pub fn estimated_tx_count_at(&self, now: u64) -> f64 {
        let elapsed = now.saturating_sub(self.time);
        self.tx_count as f64 + elapsed as f64 * self.tx_rate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkpoint(height: u64, byte: u8) -> Checkpoint {
        Checkpoint {
            height,
            hash: Hash256::from_bytes([byte; 32]),
        }
    }

    #[test]
    fn test_ascending_table_accepted() {
        let table =
            CheckpointTable::new(vec![checkpoint(0, 1), checkpoint(10, 2), checkpoint(50, 3)])
                .unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.get(10), Some(&Hash256::from_bytes([2; 32])));
        assert_eq!(table.get(11), None);
        assert_eq!(table.last().map(|c| c.height), Some(50));
    }

    #[test]
    fn test_duplicate_height_rejected() {
        let result = CheckpointTable::new(vec![checkpoint(0, 1), checkpoint(0, 2)]);
        assert!(matches!(result, Err(ChainParamsError::InvalidCheckpoints(_))));
    }

    #[test]
    fn test_descending_table_rejected() {
        let result = CheckpointTable::new(vec![checkpoint(10, 1), checkpoint(5, 2)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_check_block() {
        let table = CheckpointTable::genesis_only(Hash256::from_bytes([9; 32]));

        assert!(table.check_block(0, &Hash256::from_bytes([9; 32])));
        assert!(!table.check_block(0, &Hash256::from_bytes([8; 32])));
        // Heights without a checkpoint always pass
        assert!(table.check_block(1, &Hash256::from_bytes([8; 32])));
    }

    #[test]
    fn test_tx_count_estimate() {
        let stats = ChainTxStats {
            time: 1_000,
            tx_count: 500,
            tx_rate: 0.5,
        };

        assert_eq!(stats.estimated_tx_count_at(1_100), 550.0);
        // Clock behind the snapshot never lowers the count
        assert_eq!(stats.estimated_tx_count_at(900), 500.0);
        assert_eq!(ChainTxStats::default().estimated_tx_count_at(5_000), 0.0);
    }
}
