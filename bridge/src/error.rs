//! Error types for the bridge contract.

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Initialization Errors
    // ========================================================================

    #[error("Bridge may only be initialized once")]
    AlreadyInitialized,

    #[error("Bridge: {field} address is empty")]
    EmptyAddress { field: String },

    // ========================================================================
    // Permission Errors
    // ========================================================================

    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    #[error("Unauthorized: only guardian can unset the relay")]
    UnauthorizedGuardian,

    #[error("Unauthorized: only pending owner can accept ownership")]
    UnauthorizedPendingOwner,

    #[error("Unauthorized: only relay can deliver tokens")]
    UnauthorizedRelay,

    #[error("No pending ownership handover")]
    NoPendingOwner,

    // ========================================================================
    // Argument Errors
    // ========================================================================

    #[error("Bridge: recipient address is empty")]
    EmptyRecipient,

    #[error("Bridge: amount must be more than fee ({fee})")]
    AmountNotAboveFee { fee: Uint128 },

    #[error("Bridge: amount must be positive")]
    AmountNotPositive,

    #[error("Bridge: relay is not set")]
    RelayNotSet,

    // ========================================================================
    // Route Errors
    // ========================================================================

    #[error("Bridge: route {route} is not supported")]
    RouteNotAllowed { route: u64 },

    // ========================================================================
    // Replay Errors
    // ========================================================================

    #[error("Bridge: bad nonce ({nonce} already delivered for route {route})")]
    NonceAlreadyUsed { route: u64, nonce: u64 },
}
