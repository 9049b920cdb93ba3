//! # Node Configuration
//!
//! Values the operator chooses at startup. Everything else comes from the
//! selected chain parameters.

use thiserror::Error;

/// Network used when none is configured.
pub const DEFAULT_NETWORK: &str = "main";

/// Node configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeConfig {
    /// Network identifier (`main`, `test` or `regtest`).
    pub network: String,
    /// P2P port override; the network's default port when unset.
    pub p2p_port: Option<u16>,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            network: DEFAULT_NETWORK.to_string(),
            p2p_port: None,
        }
    }
}

impl NodeConfig {
    /// Configuration for `network` with no overrides.
    pub fn new(network: impl Into<String>) -> Self {
        Self {
            network: network.into(),
            p2p_port: None,
        }
    }

    /// Override the P2P port.
    pub fn with_p2p_port(mut self, port: u16) -> Self {
        self.p2p_port = Some(port);
        self
    }

    /// Reject values that can never work.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.network.is_empty() {
            return Err(ConfigError::MissingNetwork);
        }
        if self.p2p_port == Some(0) {
            return Err(ConfigError::ZeroPort);
        }
        Ok(())
    }
}

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No network identifier given.
    #[error("No network selected. Pass --network or set TS_NETWORK.")]
    MissingNetwork,
    /// Port override is zero.
    #[error("P2P port must be non-zero")]
    ZeroPort,
}
