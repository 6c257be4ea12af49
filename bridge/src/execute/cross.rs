//! Outbound crossing handler.
//!
//! A crossing pulls the gross amount from the caller into bridge custody,
//! forwards the flat fee to the relay, and issues a per-route monotonic
//! nonce. The emitted amount is net of fee: it is the value the off-system
//! relayer releases on the destination network, while custody holds the
//! full pull minus the forwarded fee.

use cosmwasm_std::{to_json_binary, CosmosMsg, DepsMut, Env, MessageInfo, Response, Uint128, WasmMsg};
use cw20::Cw20ExecuteMsg;

use crate::error::ContractError;
use crate::state::{CONFIG, CROSS_NONCES, ROUTES};

/// Execute handler for locking tokens toward a destination route.
pub fn execute_cross(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    dest_route: u64,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if amount <= config.fee {
        return Err(ContractError::AmountNotAboveFee { fee: config.fee });
    }

    // The recipient lives on the destination network; it is kept as an
    // opaque identifier and only checked for emptiness here.
    if recipient.is_empty() {
        return Err(ContractError::EmptyRecipient);
    }

    let routes = ROUTES.load(deps.storage)?;
    if !routes.contains(&dest_route) {
        return Err(ContractError::RouteNotAllowed { route: dest_route });
    }

    // The fee needs a payee; crossing halts while the relay is unset.
    if !config.fee.is_zero() && config.relay.is_none() {
        return Err(ContractError::RelayNotSet);
    }

    let nonce = CROSS_NONCES.may_load(deps.storage, dest_route)?.unwrap_or(0) + 1;
    CROSS_NONCES.save(deps.storage, dest_route, &nonce)?;

    let net_amount = amount - config.fee;

    // Pull the gross amount from the caller, then forward the fee out of
    // custody. Allowance failures are the ledger's own and revert the call.
    let mut messages: Vec<CosmosMsg> = vec![CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.locked_asset.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: info.sender.to_string(),
            recipient: env.contract.address.to_string(),
            amount,
        })?,
        funds: vec![],
    })];

    if !config.fee.is_zero() {
        let relay = config.relay.as_ref().ok_or(ContractError::RelayNotSet)?;
        messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: config.locked_asset.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                recipient: relay.to_string(),
                amount: config.fee,
            })?,
            funds: vec![],
        }));
    }

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("method", "cross")
        .add_attribute("from", info.sender)
        .add_attribute("to", recipient)
        .add_attribute("amount", net_amount.to_string())
        .add_attribute("dest_route", dest_route.to_string())
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("fee", config.fee.to_string()))
}
