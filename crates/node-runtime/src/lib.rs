//! # Tessera Node Runtime
//!
//! Library half of the node binary, exposed for testing.
//!
//! ## Startup Sequence
//!
//! 1. Parse configuration (command line, then environment)
//! 2. Select the chain parameters for the process
//! 3. Build the [`NodeContext`] handed to every component
//! 4. Run until Ctrl+C

#![warn(missing_docs)]

pub mod container;
pub mod context;

pub use container::{ConfigError, NodeConfig};
pub use context::{NodeContext, NodeError};
