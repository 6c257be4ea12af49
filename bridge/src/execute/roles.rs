//! Role, route, and fee administration handlers.
//!
//! This module handles:
//! - Relay rotation (set/unset)
//! - Guardian rotation
//! - Route allow-list replacement
//! - Fee replacement
//!
//! Each mutating operation is guarded by exactly one permission predicate.

use cosmwasm_std::{Addr, DepsMut, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::state::{Config, CONFIG, ROUTES};

/// Check that the sender is the owner.
fn ensure_owner(config: &Config, sender: &Addr) -> Result<(), ContractError> {
    if *sender != config.owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

// ============================================================================
// Relay Management
// ============================================================================

/// Replace the relay address.
pub fn execute_set_relay(
    deps: DepsMut,
    info: MessageInfo,
    relay: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    if relay.is_empty() {
        return Err(ContractError::EmptyAddress {
            field: "relay".to_string(),
        });
    }
    let relay = deps.api.addr_validate(&relay)?;

    config.relay = Some(relay.clone());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_relay")
        .add_attribute("new_relay", relay))
}

/// Disable the relay, halting new deliveries. This is the guardian's sole
/// power: it can stop releases, never redirect funds or change ownership.
pub fn execute_unset_relay(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.guardian {
        return Err(ContractError::UnauthorizedGuardian);
    }

    config.relay = None;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "unset_relay")
        .add_attribute("new_relay", ""))
}

// ============================================================================
// Guardian Management
// ============================================================================

/// Replace the guardian address.
pub fn execute_set_guardian(
    deps: DepsMut,
    info: MessageInfo,
    guardian: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    if guardian.is_empty() {
        return Err(ContractError::EmptyAddress {
            field: "guardian".to_string(),
        });
    }
    let guardian = deps.api.addr_validate(&guardian)?;

    config.guardian = guardian.clone();
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_guardian")
        .add_attribute("new_guardian", guardian))
}

// ============================================================================
// Routes & Fee
// ============================================================================

/// Replace the route allow-list wholesale. The previous list is discarded,
/// never merged.
pub fn execute_set_routes(
    deps: DepsMut,
    info: MessageInfo,
    routes: Vec<u64>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    ROUTES.save(deps.storage, &routes)?;

    let routes_str = routes
        .iter()
        .map(|r| r.to_string())
        .collect::<Vec<_>>()
        .join(",");

    Ok(Response::new()
        .add_attribute("method", "set_routes")
        .add_attribute("new_routes", routes_str))
}

/// Replace the crossing fee.
pub fn execute_set_fee(
    deps: DepsMut,
    info: MessageInfo,
    fee: Uint128,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    ensure_owner(&config, &info.sender)?;

    config.fee = fee;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_fee")
        .add_attribute("new_fee", fee.to_string()))
}
