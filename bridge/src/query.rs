//! Query handlers for the bridge contract.

use cosmwasm_std::{Deps, StdResult};

use crate::msg::{
    CheckRouteResponse, ConfigResponse, CrossNonceResponse, DeliveredResponse, RoutesResponse,
};
use crate::state::{CONFIG, CROSS_NONCES, DELIVERED, INITIALIZED, LOGIC, PENDING_OWNER, ROUTES};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
        pending_owner: PENDING_OWNER.may_load(deps.storage)?,
        relay: config.relay,
        guardian: config.guardian,
        locked_asset: config.locked_asset,
        fee: config.fee,
        implementation: LOGIC.load(deps.storage)?,
        initialized: INITIALIZED.may_load(deps.storage)?.unwrap_or(false),
    })
}

pub fn query_routes(deps: Deps) -> StdResult<RoutesResponse> {
    Ok(RoutesResponse {
        routes: ROUTES.load(deps.storage)?,
    })
}

/// Pure membership test against the allow-list; used by the crossing path
/// and by callers pre-validating before spending on an allowance.
pub fn query_check_route(deps: Deps, route: u64) -> StdResult<CheckRouteResponse> {
    let routes = ROUTES.load(deps.storage)?;
    Ok(CheckRouteResponse {
        route,
        allowed: routes.contains(&route),
    })
}

pub fn query_cross_nonce(deps: Deps, route: u64) -> StdResult<CrossNonceResponse> {
    Ok(CrossNonceResponse {
        route,
        nonce: CROSS_NONCES.may_load(deps.storage, route)?.unwrap_or(0),
    })
}

pub fn query_delivered(deps: Deps, route: u64, nonce: u64) -> StdResult<DeliveredResponse> {
    Ok(DeliveredResponse {
        route,
        nonce,
        delivered: DELIVERED
            .may_load(deps.storage, (route, nonce))?
            .unwrap_or(false),
    })
}
