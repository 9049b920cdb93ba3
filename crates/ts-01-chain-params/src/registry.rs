//! # Parameter Registry
//!
//! Builds parameter sets by identifier and holds the one selected for the
//! running process.
//!
//! ## Lifecycle
//!
//! ```text
//! Unselected ──select_params──→ Selecting ──ok──→ Selected
//!     ↑                              │
//!     └──────────── error ───────────┘
//! ```
//!
//! Once `Selected` the slot never changes. Selecting the same network again
//! returns the installed set; selecting another one fails.

use std::sync::atomic::{AtomicU8, Ordering};

use once_cell::sync::OnceCell;
use tracing::{info, warn};

use crate::error::{ChainParamsError, Result};
use crate::network::Network;
use crate::params::ChainParams;

static ACTIVE: OnceCell<ChainParams> = OnceCell::new();
static STATE: AtomicU8 = AtomicU8::new(SelectionState::Unselected as u8);

/// Progress of the process-wide selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum SelectionState {
    /// Nothing selected yet.
    Unselected = 0,
    /// A parameter set is being built.
    Selecting = 1,
    /// A parameter set is installed for the rest of the process.
    Selected = 2,
}

impl SelectionState {
    fn from_u8(value: u8) -> Self {
        match value {
            1 => SelectionState::Selecting,
            2 => SelectionState::Selected,
            _ => SelectionState::Unselected,
        }
    }
}

/// Build the parameter set named by `id` without touching the selection.
pub fn create_chain_params(id: &str) -> Result<ChainParams> {
    let network: Network = id.parse()?;
    ChainParams::for_network(network)
}

/// Build and install the parameter set named by `id` for this process.
pub fn select_params(id: &str) -> Result<&'static ChainParams> {
    let requested: Network = id.parse()?;

    if let Some(active) = ACTIVE.get() {
        return check_reselect(active, requested);
    }

    // Concurrent callers block inside the cell until the first one finishes.
    let active = ACTIVE.get_or_try_init(|| {
        STATE.store(SelectionState::Selecting as u8, Ordering::Release);
        match ChainParams::for_network(requested) {
            Ok(params) => Ok(params),
            Err(err) => {
                STATE.store(SelectionState::Unselected as u8, Ordering::Release);
                Err(err)
            }
        }
    })?;
    STATE.store(SelectionState::Selected as u8, Ordering::Release);

    if active.network() == requested {
        info!("[chain-params] Selected {} parameters", requested);
    }
    check_reselect(active, requested)
}

fn check_reselect(active: &'static ChainParams, requested: Network) -> Result<&'static ChainParams> {
    if active.network() == requested {
        return Ok(active);
    }
    warn!(
        "[chain-params] Refusing to select {} while {} is active",
        requested,
        active.network()
    );
    Err(ChainParamsError::AlreadySelected {
        active: active.network(),
        requested,
    })
}

/// The selected parameter set.
///
/// # Panics
///
/// Panics when called before a successful [`select_params`]. Reading
/// parameters before selection is a programming error.
#[track_caller]
pub fn params() -> &'static ChainParams {
    match ACTIVE.get() {
        Some(params) => params,
        None => panic!("chain parameters read before select_params"),
    }
}

/// The selected parameter set, if any.
pub fn try_params() -> Option<&'static ChainParams> {
    ACTIVE.get()
}

/// Current selection state.
pub fn selection_state() -> SelectionState {
    SelectionState::from_u8(STATE.load(Ordering::Acquire))
}

/// Check the cross-network invariants over a group of parameter sets.
///
/// Message starts, public-key address prefixes and bech32 prefixes must be
/// pairwise distinct.
pub fn check_network_isolation(sets: &[&ChainParams]) -> Result<()> {
    for (i, a) in sets.iter().enumerate() {
        for b in &sets[i + 1..] {
            let (ia, ib) = (a.identity(), b.identity());
            let clash = if ia.message_start == ib.message_start {
                Some("message start")
            } else if ia.base58_prefixes.pubkey_address == ib.base58_prefixes.pubkey_address {
                Some("public-key address prefix")
            } else if ia.bech32_hrp == ib.bech32_hrp {
                Some("bech32 prefix")
            } else {
                None
            };

            if let Some(what) = clash {
                return Err(ChainParamsError::InvalidIdentity {
                    network: b.network(),
                    reason: format!("{what} shared with {}", a.network()),
                });
            }
        }
    }
    Ok(())
}
