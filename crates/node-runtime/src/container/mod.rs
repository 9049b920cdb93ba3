//! # Node Container
//!
//! Startup configuration and the context built from it.

pub mod config;

pub use config::{ConfigError, NodeConfig, DEFAULT_NETWORK};
