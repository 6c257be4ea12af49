//! Bridge contract entry points.
//!
//! This file is the control-proxy side of the design: it owns instantiation
//! and the dispatch of every external call. Ownership handover and logic
//! replacement are handled here through handlers that are never part of the
//! swappable logic; all other execute messages route to the logic handlers
//! in `execute/`, which operate on this contract's storage and keep none of
//! their own. Code replacement itself happens through `migrate`, which
//! preserves the address and storage; the new code must be
//! storage-layout-compatible.

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_accept_ownership, execute_cross, execute_deliver, execute_propose_owner,
    execute_set_fee, execute_set_guardian, execute_set_implementation, execute_set_relay,
    execute_set_routes, execute_unset_relay,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_check_route, query_config, query_cross_nonce, query_delivered, query_routes,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, INITIALIZED, LOGIC, ROUTES};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    if INITIALIZED.may_load(deps.storage)?.unwrap_or(false) {
        return Err(ContractError::AlreadyInitialized);
    }

    // Required identities must be present before any state is written.
    for (field, value) in [
        ("relay", &msg.relay),
        ("guardian", &msg.guardian),
        ("locked_asset", &msg.locked_asset),
    ] {
        if value.is_empty() {
            return Err(ContractError::EmptyAddress {
                field: field.to_string(),
            });
        }
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        owner: info.sender.clone(),
        relay: Some(deps.api.addr_validate(&msg.relay)?),
        guardian: deps.api.addr_validate(&msg.guardian)?,
        locked_asset: deps.api.addr_validate(&msg.locked_asset)?,
        fee: msg.fee,
    };
    CONFIG.save(deps.storage, &config)?;

    let logic = deps.api.addr_validate(&msg.logic)?;
    LOGIC.save(deps.storage, &logic)?;

    ROUTES.save(deps.storage, &msg.routes)?;

    INITIALIZED.save(deps.storage, &true)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("guardian", config.guardian)
        .add_attribute("locked_asset", config.locked_asset)
        .add_attribute("fee", config.fee.to_string())
        .add_attribute("implementation", logic))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Proxy-owned administration (never delegated)
        ExecuteMsg::SetImplementation { new_logic } => {
            execute_set_implementation(deps, info, new_logic)
        }
        ExecuteMsg::ProposeOwner { candidate } => execute_propose_owner(deps, info, candidate),
        ExecuteMsg::AcceptOwnership {} => execute_accept_ownership(deps, info),

        // Role & route administration
        ExecuteMsg::SetRelay { relay } => execute_set_relay(deps, info, relay),
        ExecuteMsg::UnsetRelay {} => execute_unset_relay(deps, info),
        ExecuteMsg::SetGuardian { guardian } => execute_set_guardian(deps, info, guardian),
        ExecuteMsg::SetRoutes { routes } => execute_set_routes(deps, info, routes),
        ExecuteMsg::SetFee { fee } => execute_set_fee(deps, info, fee),

        // Transfers
        ExecuteMsg::Cross {
            dest_route,
            recipient,
            amount,
        } => execute_cross(deps, env, info, dest_route, recipient, amount),
        ExecuteMsg::Deliver {
            src_route,
            recipient,
            amount,
            nonce,
        } => execute_deliver(deps, info, src_route, recipient, amount, nonce),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Routes {} => to_json_binary(&query_routes(deps)?),
        QueryMsg::CheckRoute { route } => to_json_binary(&query_check_route(deps, route)?),
        QueryMsg::CrossNonce { route } => to_json_binary(&query_cross_nonce(deps, route)?),
        QueryMsg::Delivered { route, nonce } => {
            to_json_binary(&query_delivered(deps, route, nonce)?)
        }
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("method", "migrate"))
}
