//! Message types for the bridge contract.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message. The sender becomes the owner.
#[cw_serde]
pub struct InstantiateMsg {
    /// Initial logic unit address
    pub logic: String,
    /// Relay address permitted to execute deliveries
    pub relay: String,
    /// Guardian address permitted only to unset the relay
    pub guardian: String,
    /// CW20 ledger contract whose balances this bridge moves
    pub locked_asset: String,
    /// Flat fee deducted from every outbound crossing, paid to the relay
    pub fee: Uint128,
    /// Initial allow-listed destination routes
    pub routes: Vec<u64>,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Proxy Administration (handled directly, never delegated)
    // ========================================================================
    /// Replace the active logic unit pointer
    ///
    /// Authorization: Owner only
    SetImplementation {
        /// New logic unit address
        new_logic: String,
    },

    /// Nominate a new owner (first step of the two-step handover)
    ///
    /// Authorization: Owner only
    ProposeOwner {
        /// Candidate that must actively confirm before power transfers
        candidate: String,
    },

    /// Confirm a pending ownership handover (second step)
    ///
    /// Authorization: Pending owner only
    AcceptOwnership {},

    // ========================================================================
    // Role & Route Administration
    // ========================================================================
    /// Replace the relay address
    ///
    /// Authorization: Owner only
    SetRelay { relay: String },

    /// Disable the relay, halting new deliveries
    ///
    /// Authorization: Guardian only. This is the guardian's sole power.
    UnsetRelay {},

    /// Replace the guardian address
    ///
    /// Authorization: Owner only
    SetGuardian { guardian: String },

    /// Replace the route allow-list wholesale
    ///
    /// Authorization: Owner only
    SetRoutes { routes: Vec<u64> },

    /// Replace the crossing fee
    ///
    /// Authorization: Owner only
    SetFee { fee: Uint128 },

    // ========================================================================
    // Transfers
    // ========================================================================
    /// Lock tokens for an outbound crossing
    ///
    /// Authorization: Anyone. Requires a prior CW20 allowance covering
    /// `amount` in favor of this contract. The fee is forwarded to the
    /// relay and the emitted amount is net of fee.
    Cross {
        /// Destination route identifier (must be allow-listed)
        dest_route: u64,
        /// Recipient identity on the destination network
        recipient: String,
        /// Gross amount to pull from the caller (must exceed the fee)
        amount: Uint128,
    },

    /// Release tokens for an inbound transfer
    ///
    /// Authorization: Relay only. Each (src_route, nonce) pair may be
    /// delivered at most once.
    Deliver {
        /// Source route identifier
        src_route: u64,
        /// Recipient address on this network
        recipient: String,
        /// Amount to release from bridge custody
        amount: Uint128,
        /// Nonce issued by the source network crossing
        nonce: u64,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns the bridge configuration, roles, and logic pointer
    #[returns(ConfigResponse)]
    Config {},

    /// Returns the current route allow-list
    #[returns(RoutesResponse)]
    Routes {},

    /// Check whether a route is allow-listed
    #[returns(CheckRouteResponse)]
    CheckRoute { route: u64 },

    /// Returns the outbound nonce for a route (0 if never crossed)
    #[returns(CrossNonceResponse)]
    CrossNonce { route: u64 },

    /// Check whether a (source route, nonce) pair has been delivered
    #[returns(DeliveredResponse)]
    Delivered { route: u64, nonce: u64 },
}

// ============================================================================
// Response Types
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
    pub pending_owner: Option<Addr>,
    pub relay: Option<Addr>,
    pub guardian: Addr,
    pub locked_asset: Addr,
    pub fee: Uint128,
    pub implementation: Addr,
    pub initialized: bool,
}

#[cw_serde]
pub struct RoutesResponse {
    pub routes: Vec<u64>,
}

#[cw_serde]
pub struct CheckRouteResponse {
    pub route: u64,
    pub allowed: bool,
}

#[cw_serde]
pub struct CrossNonceResponse {
    pub route: u64,
    pub nonce: u64,
}

#[cw_serde]
pub struct DeliveredResponse {
    pub route: u64,
    pub nonce: u64,
    pub delivered: bool,
}
