//! State definitions for the bridge contract.
//!
//! All persistent storage lives here, owned by the contract entry points
//! (the control-proxy side). The execute handlers hold no storage of their
//! own and operate exclusively on these items and maps.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

/// Core bridge configuration.
#[cw_serde]
pub struct Config {
    /// Owner address with full administrative power
    pub owner: Addr,
    /// Relay address permitted to execute deliveries; `None` means disabled
    pub relay: Option<Addr>,
    /// Guardian address permitted only to unset the relay
    pub guardian: Addr,
    /// CW20 ledger contract whose balances this bridge moves
    pub locked_asset: Addr,
    /// Flat fee deducted from every outbound crossing, paid to the relay
    pub fee: Uint128,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:token-bridge";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = "1.0.0";

// ============================================================================
// Storage
// ============================================================================

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Nominated owner, present only while a handover is in flight
pub const PENDING_OWNER: Item<Addr> = Item::new("pending_owner");

/// Active logic unit pointer, swappable by the owner via SetImplementation
pub const LOGIC: Item<Addr> = Item::new("logic");

/// Allow-listed destination routes, replaced wholesale on each SetRoutes
pub const ROUTES: Item<Vec<u64>> = Item::new("routes");

/// Outbound nonce counters, one per destination route (absent = 0)
pub const CROSS_NONCES: Map<u64, u64> = Map::new("cross_nonces");

/// Consumed (source route, nonce) pairs; entries only transition to true
pub const DELIVERED: Map<(u64, u64), bool> = Map::new("delivered");

/// One-shot initialization flag
pub const INITIALIZED: Item<bool> = Item::new("initialized");
