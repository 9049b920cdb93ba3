//! Per-network parameter sets
//!
//! Each network has a builder module holding its literal constants. Assembly
//! is shared: it verifies the genesis anchor and every invariant before a
//! [`ChainParams`] value can exist.

mod mainnet;
mod regtest;
mod testnet;

use serde::Serialize;
use shared_types::Hash256;
use tracing::info;

use crate::checkpoints::{ChainTxStats, Checkpoint, CheckpointTable};
use crate::consensus::ConsensusRules;
use crate::error::{ChainParamsError, Result};
use crate::genesis::{GenesisAnchor, GenesisInputs};
use crate::identity::NetworkIdentity;
use crate::network::Network;

/// Literal constants of one network, before verification.
pub(crate) struct NetworkDefinition {
    pub consensus: ConsensusRules,
    pub identity: NetworkIdentity,
    pub genesis: GenesisInputs,
    pub expected_genesis_hash: Hash256,
    pub expected_merkle_root: Hash256,
    pub checkpoints: Vec<Checkpoint>,
    pub chain_tx_stats: ChainTxStats,
}

/// Complete, verified parameter set of one network.
///
/// Immutable once built. Cloning yields an independent copy.
#[derive(Debug, Clone, Serialize)]
pub struct ChainParams {
    network: Network,
    consensus: ConsensusRules,
    identity: NetworkIdentity,
    genesis: GenesisAnchor,
    checkpoints: CheckpointTable,
    chain_tx_stats: ChainTxStats,
}

impl ChainParams {
    /// Build and verify the parameter set of `network`.
    pub fn for_network(network: Network) -> Result<Self> {
        let definition = match network {
            Network::Main => mainnet::definition(),
            Network::Test => testnet::definition(),
            Network::Regtest => regtest::definition(),
        };
        Self::assemble(network, definition)
    }

    fn assemble(network: Network, definition: NetworkDefinition) -> Result<Self> {
        let NetworkDefinition {
            mut consensus,
            identity,
            genesis: inputs,
            expected_genesis_hash,
            expected_merkle_root,
            checkpoints,
            chain_tx_stats,
        } = definition;

        consensus.validate(network)?;

        let genesis = GenesisAnchor::build(&inputs);
        genesis.verify(network, expected_genesis_hash, expected_merkle_root)?;
        consensus.check_bits_within_limit(network, inputs.bits)?;
        consensus.hash_genesis_block = genesis.hash();

        if identity.network != network {
            return Err(ChainParamsError::InvalidIdentity {
                network,
                reason: format!("identity belongs to {}", identity.network),
            });
        }
        identity.validate()?;

        let checkpoints = CheckpointTable::new(checkpoints)?;
        if let Some(anchor) = checkpoints.get(0) {
            if *anchor != genesis.hash() {
                return Err(ChainParamsError::InvalidCheckpoints(format!(
                    "height 0 is {} but the {} genesis block is {}",
                    anchor,
                    network,
                    genesis.hash()
                )));
            }
        }

        info!(
            "[chain-params] {} parameters ready: genesis {} (merkle root {})",
            network,
            genesis.hash(),
            genesis.merkle_root()
        );

        Ok(Self {
            network,
            consensus,
            identity,
            genesis,
            checkpoints,
            chain_tx_stats,
        })
    }

    /// Network these parameters belong to.
    pub fn network(&self) -> Network {
        self.network
    }

    /// Consensus constants.
    pub fn consensus(&self) -> &ConsensusRules {
        &self.consensus
    }

    /// Network identity and policy flags.
    pub fn identity(&self) -> &NetworkIdentity {
        &self.identity
    }

    /// Verified genesis anchor.
    pub fn genesis(&self) -> &GenesisAnchor {
        &self.genesis
    }

    /// Genesis block hash.
    pub fn genesis_hash(&self) -> Hash256 {
        self.genesis.hash()
    }

    /// Hardcoded checkpoints.
    pub fn checkpoints(&self) -> &CheckpointTable {
        &self.checkpoints
    }

    /// Transaction-count snapshot.
    pub fn chain_tx_stats(&self) -> &ChainTxStats {
        &self.chain_tx_stats
    }

    /// Default P2P port.
    pub fn default_port(&self) -> u16 {
        self.identity.default_port
    }

    /// Copy of the consensus rules that the caller may modify freely.
    pub fn consensus_snapshot(&self) -> ConsensusRules {
        self.consensus.clone()
    }
}
