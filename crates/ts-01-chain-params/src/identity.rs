//! Network identity
//!
//! Everything that tells peers and wallets which network they are talking to:
//! the wire magic, default port, address-encoding prefixes, seeds and the
//! operational policy flags.

use std::fmt;
use std::net::{IpAddr, Ipv6Addr, SocketAddr};

use serde::{Serialize, Serializer};

use crate::error::{ChainParamsError, Result};
use crate::network::Network;

/// Four bytes framing every wire message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageStart(pub [u8; 4]);

impl MessageStart {
    /// The raw magic bytes.
    pub const fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl fmt::Display for MessageStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl Serialize for MessageStart {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Kinds of base58-encoded data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base58Type {
    /// Pay-to-public-key-hash address.
    PubkeyAddress,
    /// Pay-to-script-hash address.
    ScriptAddress,
    /// Private key (WIF).
    SecretKey,
    /// Extended public key.
    ExtPublicKey,
    /// Extended private key.
    ExtSecretKey,
}

impl Base58Type {
    /// Every kind.
    pub const ALL: [Base58Type; 5] = [
        Base58Type::PubkeyAddress,
        Base58Type::ScriptAddress,
        Base58Type::SecretKey,
        Base58Type::ExtPublicKey,
        Base58Type::ExtSecretKey,
    ];
}

/// Version prefixes for base58 encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Base58Prefixes {
    /// Public-key address version.
    pub pubkey_address: [u8; 1],
    /// Script address version.
    pub script_address: [u8; 1],
    /// Private key version.
    pub secret_key: [u8; 1],
    /// Extended public key version.
    pub ext_public_key: [u8; 4],
    /// Extended private key version.
    pub ext_secret_key: [u8; 4],
}

impl Base58Prefixes {
    /// Prefix bytes for `kind`.
    pub fn prefix(&self, kind: Base58Type) -> &[u8] {
        match kind {
            Base58Type::PubkeyAddress => &self.pubkey_address,
            Base58Type::ScriptAddress => &self.script_address,
            Base58Type::SecretKey => &self.secret_key,
            Base58Type::ExtPublicKey => &self.ext_public_key,
            Base58Type::ExtSecretKey => &self.ext_secret_key,
        }
    }
}

/// Fixed seed node: IPv6 (or IPv4-mapped) address and port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeedSpec6 {
    /// Address in IPv6 form.
    pub addr: [u8; 16],
    /// TCP port.
    pub port: u16,
}

impl SeedSpec6 {
    /// IPv4 seed stored as an IPv4-mapped IPv6 address.
    pub const fn ipv4(octets: [u8; 4], port: u16) -> Self {
        let mut addr = [0u8; 16];
        addr[10] = 0xff;
        addr[11] = 0xff;
        addr[12] = octets[0];
        addr[13] = octets[1];
        addr[14] = octets[2];
        addr[15] = octets[3];
        Self { addr, port }
    }

    /// Socket address, unmapping IPv4-mapped addresses.
    pub fn socket_addr(&self) -> SocketAddr {
        let v6 = Ipv6Addr::from(self.addr);
        let ip = match v6.to_ipv4_mapped() {
            Some(v4) => IpAddr::V4(v4),
            None => IpAddr::V6(v6),
        };
        SocketAddr::new(ip, self.port)
    }
}

impl Serialize for SeedSpec6 {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(&self.socket_addr())
    }
}

fn serialize_hex_opt<S: Serializer>(
    bytes: &Option<Vec<u8>>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    match bytes {
        Some(bytes) => serializer.serialize_some(&hex::encode(bytes)),
        None => serializer.serialize_none(),
    }
}

/// Identity and operational policy of one network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkIdentity {
    /// Network these values belong to.
    pub network: Network,
    /// Wire message magic.
    pub message_start: MessageStart,
    /// Default P2P listening port.
    pub default_port: u16,
    /// Base58 version prefixes.
    pub base58_prefixes: Base58Prefixes,
    /// Human-readable part of bech32 addresses.
    pub bech32_hrp: String,
    /// Uncompressed public key that signs network alerts.
    #[serde(serialize_with = "serialize_hex_opt")]
    pub alert_pubkey: Option<Vec<u8>>,
    /// Seed hosts queried at startup.
    pub dns_seeds: Vec<String>,
    /// Hardcoded fallback peers.
    pub fixed_seeds: Vec<SeedSpec6>,

    /// Connected peers required before mining is permitted.
    pub mining_requires_peers: u32,
    /// Only standard transactions are relayed and mined.
    pub require_standard: bool,
    /// Blocks may be produced on demand, ignoring timing rules.
    pub mine_blocks_on_demand: bool,
    /// Expensive consistency checks run by default.
    pub default_consistency_checks: bool,
}

impl NetworkIdentity {
    /// Length of an uncompressed secp256k1 public key.
    pub const ALERT_PUBKEY_LEN: usize = 65;

    /// Check the invariants that only involve this identity.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| ChainParamsError::InvalidIdentity {
            network: self.network,
            reason,
        };

        if let Err(err) = bech32::Hrp::parse(&self.bech32_hrp) {
            return Err(invalid(format!(
                "bech32 prefix {:?} is invalid: {err}",
                self.bech32_hrp
            )));
        }
        if self.bech32_hrp != self.bech32_hrp.to_ascii_lowercase() {
            return Err(invalid(format!(
                "bech32 prefix {:?} must be lowercase",
                self.bech32_hrp
            )));
        }

        if self.default_port == 0 {
            return Err(invalid("default port is zero".to_string()));
        }

        if let Some(seed) = self.fixed_seeds.iter().find(|seed| seed.port == 0) {
            return Err(invalid(format!("fixed seed {} has port zero", seed.socket_addr())));
        }

        if let Some(key) = &self.alert_pubkey {
            if key.len() != Self::ALERT_PUBKEY_LEN || key[0] != 0x04 {
                return Err(invalid(
                    "alert key is not an uncompressed public key".to_string(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> NetworkIdentity {
        NetworkIdentity {
            network: Network::Regtest,
            message_start: MessageStart([0xcb, 0xf2, 0xc0, 0xef]),
            default_port: 8233,
            base58_prefixes: Base58Prefixes {
                pubkey_address: [0x6f],
                script_address: [0xc4],
                secret_key: [0xef],
                ext_public_key: [0x04, 0x35, 0x87, 0xcf],
                ext_secret_key: [0x04, 0x35, 0x83, 0x94],
            },
            bech32_hrp: "tsrt".to_string(),
            alert_pubkey: None,
            dns_seeds: Vec::new(),
            fixed_seeds: vec![SeedSpec6::ipv4([127, 0, 0, 1], 8233)],
            mining_requires_peers: 0,
            require_standard: false,
            mine_blocks_on_demand: false,
            default_consistency_checks: false,
        }
    }

    #[test]
    fn test_valid_identity_passes() {
        assert!(identity().validate().is_ok());
    }

    #[test]
    fn test_prefix_lookup() {
        let prefixes = identity().base58_prefixes;
        assert_eq!(prefixes.prefix(Base58Type::PubkeyAddress), &[0x6f]);
        assert_eq!(
            prefixes.prefix(Base58Type::ExtSecretKey),
            &[0x04, 0x35, 0x83, 0x94]
        );
    }

    #[test]
    fn test_ipv4_seed_unmaps() {
        let seed = SeedSpec6::ipv4([3, 128, 150, 218], 8368);
        assert_eq!(seed.socket_addr().to_string(), "3.128.150.218:8368");
    }

    #[test]
    fn test_ipv6_seed_stays_v6() {
        let mut addr = [0u8; 16];
        addr[0] = 0x20;
        addr[1] = 0x01;
        addr[15] = 0x01;
        let seed = SeedSpec6 { addr, port: 8368 };
        assert_eq!(seed.socket_addr().to_string(), "[2001::1]:8368");
    }

    #[test]
    fn test_uppercase_hrp_rejected() {
        let mut bad = identity();
        bad.bech32_hrp = "TSRT".to_string();
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_empty_hrp_rejected() {
        let mut bad = identity();
        bad.bech32_hrp = String::new();
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_short_alert_key_rejected() {
        let mut bad = identity();
        bad.alert_pubkey = Some(vec![0x04; 33]);
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_message_start_display() {
        assert_eq!(identity().message_start.to_string(), "cbf2c0ef");
    }
}
