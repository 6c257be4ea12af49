//! Proxy-owned administration handlers.
//!
//! This module handles:
//! - Logic unit replacement (SetImplementation)
//! - Two-step ownership handover (propose/accept)
//!
//! These operations are dispatched directly by the entry point and are
//! never part of the swappable logic, so the upgrade path cannot be
//! upgraded away.

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::{CONFIG, LOGIC, PENDING_OWNER};

/// Replace the active logic unit pointer. No state migration is performed;
/// the new logic must be storage-layout-compatible.
pub fn execute_set_implementation(
    deps: DepsMut,
    info: MessageInfo,
    new_logic: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let new_logic = deps.api.addr_validate(&new_logic)?;
    let old_logic = LOGIC.load(deps.storage)?;
    LOGIC.save(deps.storage, &new_logic)?;

    Ok(Response::new()
        .add_attribute("method", "set_implementation")
        .add_attribute("old_implementation", old_logic)
        .add_attribute("new_implementation", new_logic))
}

/// Nominate a new owner. Ownership does not change until the candidate
/// actively accepts, so a mistyped handover cannot lock out administration.
pub fn execute_propose_owner(
    deps: DepsMut,
    info: MessageInfo,
    candidate: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }

    let candidate = deps.api.addr_validate(&candidate)?;
    PENDING_OWNER.save(deps.storage, &candidate)?;

    Ok(Response::new()
        .add_attribute("method", "propose_owner")
        .add_attribute("pending_owner", candidate))
}

/// Complete a pending ownership handover.
pub fn execute_accept_ownership(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let pending = PENDING_OWNER
        .may_load(deps.storage)?
        .ok_or(ContractError::NoPendingOwner)?;

    if info.sender != pending {
        return Err(ContractError::UnauthorizedPendingOwner);
    }

    let mut config = CONFIG.load(deps.storage)?;
    let old_owner = config.owner.clone();
    config.owner = pending.clone();
    CONFIG.save(deps.storage, &config)?;
    PENDING_OWNER.remove(deps.storage);

    Ok(Response::new()
        .add_attribute("method", "accept_ownership")
        .add_attribute("old_owner", old_owner)
        .add_attribute("new_owner", pending))
}
