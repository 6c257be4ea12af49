//! Inbound delivery handler.
//!
//! A delivery releases tokens from bridge custody to a local recipient.
//! The nonce is supplied by the relay and only checked against the replay
//! set; its provenance is trusted to the relay identity, which is the
//! system's explicit trust boundary.

use cosmwasm_std::{to_json_binary, CosmosMsg, DepsMut, MessageInfo, Response, Uint128, WasmMsg};
use cw20::Cw20ExecuteMsg;

use crate::error::ContractError;
use crate::state::{CONFIG, DELIVERED};

/// Execute handler for releasing tokens from an inbound transfer.
pub fn execute_deliver(
    deps: DepsMut,
    info: MessageInfo,
    src_route: u64,
    recipient: String,
    amount: Uint128,
    nonce: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    // An unset relay matches no sender, so deliveries halt after shutoff.
    if config.relay.as_ref() != Some(&info.sender) {
        return Err(ContractError::UnauthorizedRelay);
    }

    if amount.is_zero() {
        return Err(ContractError::AmountNotPositive);
    }

    if recipient.is_empty() {
        return Err(ContractError::EmptyRecipient);
    }
    let recipient = deps.api.addr_validate(&recipient)?;

    let already = DELIVERED
        .may_load(deps.storage, (src_route, nonce))?
        .unwrap_or(false);
    if already {
        return Err(ContractError::NonceAlreadyUsed {
            route: src_route,
            nonce,
        });
    }

    // Mark the nonce consumed before the transfer message so a reentrant
    // delivery observes the updated state.
    DELIVERED.save(deps.storage, (src_route, nonce), &true)?;

    let transfer = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.locked_asset.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(transfer)
        .add_attribute("method", "deliver")
        .add_attribute("src_route", src_route.to_string())
        .add_attribute("to", recipient)
        .add_attribute("amount", amount.to_string())
        .add_attribute("nonce", nonce.to_string()))
}
