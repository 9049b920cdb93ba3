//! # Shared Types Crate
//!
//! This crate contains the value types every other crate in the workspace
//! agrees on: 256-bit hashes and integers, the compact difficulty encoding,
//! scripts, and the transaction and block entities with their consensus
//! serialization.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: byte layouts that feed a hash are defined
//!   once, in [`encoding`].
//! - **Display vs. internal order**: [`Hash256`] stores bytes in the order
//!   they are hashed and prints them reversed, the way explorers show them.

pub mod compact;
pub mod encoding;
pub mod entities;
pub mod errors;
pub mod script;

pub use compact::{target_from_compact, target_to_compact, CompactTarget};
pub use encoding::ConsensusEncode;
pub use entities::*;
pub use errors::*;
pub use script::{opcodes, Script, ScriptBuilder};
