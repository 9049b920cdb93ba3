//! Network identifiers
//!
//! The closed set of networks a node can run on. Adding a variant forces every
//! `match` over it (parameter builders, tests) to be extended.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChainParamsError;

/// One of the mutually exclusive rule sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Main network.
    Main,
    /// Public test network.
    Test,
    /// Local regression-test network.
    Regtest,
}

impl Network {
    /// Every network, production networks first.
    pub const ALL: [Network; 3] = [Network::Main, Network::Test, Network::Regtest];

    /// Identifier used on the command line and in configuration.
    pub const fn as_str(self) -> &'static str {
        match self {
            Network::Main => "main",
            Network::Test => "test",
            Network::Regtest => "regtest",
        }
    }

    /// True for networks reachable by ordinary users (main and test).
    pub const fn is_public(self) -> bool {
        !matches!(self, Network::Regtest)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = ChainParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "main" => Ok(Network::Main),
            "test" => Ok(Network::Test),
            "regtest" => Ok(Network::Regtest),
            other => Err(ChainParamsError::UnknownNetwork(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_identifiers() {
        for network in Network::ALL {
            assert_eq!(network.as_str().parse::<Network>(), Ok(network));
        }
    }

    #[test]
    fn test_parse_is_exact() {
        // No aliases, no case folding
        for bad in ["bogus", "Main", "mainnet", "testnet", " regtest", ""] {
            assert_eq!(
                bad.parse::<Network>(),
                Err(ChainParamsError::UnknownNetwork(bad.to_string()))
            );
        }
    }

    #[test]
    fn test_only_regtest_is_private() {
        assert!(Network::Main.is_public());
        assert!(Network::Test.is_public());
        assert!(!Network::Regtest.is_public());
    }

    #[test]
    fn test_serde_uses_identifier() {
        let json = serde_json::to_string(&Network::Regtest).unwrap();
        assert_eq!(json, "\"regtest\"");
    }
}
