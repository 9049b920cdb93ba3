//! # Node Context
//!
//! The explicit handle through which node components read the active chain
//! parameters. Components receive a `NodeContext` instead of reaching for the
//! process-wide slot themselves.

use std::net::SocketAddr;

use thiserror::Error;
use tracing::info;
use ts_01_chain_params::{select_params, ChainParams, ChainParamsError, Network};

use crate::container::{ConfigError, NodeConfig};

/// Errors raised while building the node context.
#[derive(Debug, Error)]
pub enum NodeError {
    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    /// Chain parameters could not be selected.
    #[error("Chain parameter error: {0}")]
    ChainParams(#[from] ChainParamsError),
}

impl NodeError {
    /// The built-in chain constants are corrupt.
    pub fn is_fatal(&self) -> bool {
        matches!(self, NodeError::ChainParams(err) if err.is_fatal())
    }
}

/// Active parameters plus the operator's overrides.
#[derive(Debug, Clone)]
pub struct NodeContext {
    params: &'static ChainParams,
    config: NodeConfig,
}

impl NodeContext {
    /// Validate `config`, select its network for the process, build the context.
    pub fn new(config: NodeConfig) -> Result<Self, NodeError> {
        config.validate()?;
        let params = select_params(&config.network)?;
        Ok(Self::with_params(config, params))
    }

    /// Context over an already built parameter set.
    pub fn with_params(config: NodeConfig, params: &'static ChainParams) -> Self {
        info!(
            "[node] {} context: p2p port {}, {} dns seeds",
            params.network(),
            config.p2p_port.unwrap_or(params.default_port()),
            params.identity().dns_seeds.len()
        );
        Self { params, config }
    }

    /// Active chain parameters.
    pub fn params(&self) -> &'static ChainParams {
        self.params
    }

    /// Active network.
    pub fn network(&self) -> Network {
        self.params.network()
    }

    /// Startup configuration.
    pub fn config(&self) -> &NodeConfig {
        &self.config
    }

    /// Effective P2P port.
    pub fn p2p_port(&self) -> u16 {
        self.config.p2p_port.unwrap_or(self.params.default_port())
    }

    /// DNS seed hosts.
    pub fn dns_seeds(&self) -> &[String] {
        &self.params.identity().dns_seeds
    }

    /// Fixed seed addresses.
    pub fn fixed_seed_addrs(&self) -> Vec<SocketAddr> {
        self.params
            .identity()
            .fixed_seeds
            .iter()
            .map(|seed| seed.socket_addr())
            .collect()
    }

    /// Mining may start with `peer_count` connected peers at Unix time `now`.
    pub fn mining_allowed(&self, peer_count: u32, now: u64) -> bool {
        let identity = self.params.identity();
        (identity.mine_blocks_on_demand || peer_count >= identity.mining_requires_peers)
            && self.params.consensus().is_mining_started(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ts_01_chain_params::create_chain_params;

    fn leaked(id: &str) -> &'static ChainParams {
        Box::leak(Box::new(create_chain_params(id).unwrap()))
    }

    #[test]
    fn test_default_port_used_without_override() {
        let ctx = NodeContext::with_params(NodeConfig::new("test"), leaked("test"));
        assert_eq!(ctx.p2p_port(), 8366);
        assert_eq!(ctx.network(), Network::Test);
    }

    #[test]
    fn test_port_override_wins() {
        let config = NodeConfig::new("main").with_p2p_port(18_368);
        let ctx = NodeContext::with_params(config, leaked("main"));
        assert_eq!(ctx.p2p_port(), 18_368);
    }

    #[test]
    fn test_main_seeds() {
        let ctx = NodeContext::with_params(NodeConfig::new("main"), leaked("main"));

        assert_eq!(ctx.dns_seeds().len(), 3);
        assert_eq!(
            ctx.fixed_seed_addrs()[0],
            "3.128.150.218:8368".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_mining_requires_peers_on_main() {
        let ctx = NodeContext::with_params(NodeConfig::new("main"), leaked("main"));
        let started = 1_593_684_000;

        assert!(!ctx.mining_allowed(5, started));
        assert!(ctx.mining_allowed(6, started));
        assert!(!ctx.mining_allowed(6, started - 1));
    }

    #[test]
    fn test_regtest_mines_without_peers() {
        let ctx = NodeContext::with_params(NodeConfig::new("regtest"), leaked("regtest"));
        assert!(ctx.mining_allowed(0, 1_581_501_960));
        assert!(ctx.fixed_seed_addrs().is_empty());
    }
}
