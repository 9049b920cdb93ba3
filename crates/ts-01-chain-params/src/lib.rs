//! # Chain Parameters
//!
//! The per-network rule sets of the Tessera node and the process-wide
//! selection of one of them.
//!
//! ## Overview
//!
//! | Network | Identifier | Role |
//! |---------|------------|------|
//! | Main | `main` | Production network |
//! | Test | `test` | Public test network |
//! | Regtest | `regtest` | Private local network, permissive rules |
//!
//! Every parameter set carries its genesis block. The block is rebuilt from
//! its inputs on construction and compared with the hardcoded hash and Merkle
//! root, so corrupted constants can never be selected.
//!
//! ## Usage
//!
//! ```no_run
//! use ts_01_chain_params::{params, select_params};
//!
//! select_params("regtest")?;
//! println!("genesis {}", params().genesis_hash());
//! # Ok::<(), ts_01_chain_params::ChainParamsError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod checkpoints;
pub mod consensus;
pub mod error;
pub mod genesis;
pub mod identity;
pub mod network;
pub mod params;
pub mod registry;

pub use checkpoints::{ChainTxStats, Checkpoint, CheckpointTable};
pub use consensus::ConsensusRules;
pub use error::{ChainParamsError, GenesisField, Result};
pub use genesis::{create_genesis_block, GenesisAnchor, GenesisInputs};
pub use identity::{Base58Prefixes, Base58Type, MessageStart, NetworkIdentity, SeedSpec6};
pub use network::Network;
pub use params::ChainParams;
pub use registry::{
    check_network_isolation, create_chain_params, params, select_params, selection_state,
    try_params, SelectionState,
};
