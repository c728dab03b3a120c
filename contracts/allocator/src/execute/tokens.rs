//! Token registry handlers.

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response};

use crate::call_guard::{self, CallSite};
use crate::error::ContractError;
use crate::interfaces::{BridgeTokenExecuteMsg, BridgeTokenQueryMsg, UnderlyingResponse};
use crate::ownership::ensure_owner;
use crate::registry;
use crate::token_guard;

/// Register `asset` with the bridge token that wraps it.
///
/// Re-registering replaces the record only once its deployed amount has been
/// returned in full.
pub fn execute_add_token(
    deps: DepsMut,
    info: MessageInfo,
    asset: String,
    bridge_wrapped: String,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info.sender)?;

    let asset = deps.api.addr_validate(&asset)?;
    let bridge_wrapped = deps.api.addr_validate(&bridge_wrapped)?;

    let res: UnderlyingResponse = call_guard::static_call(
        &deps.querier,
        &bridge_wrapped,
        &BridgeTokenQueryMsg::Underlying {},
        CallSite::BridgeUnderlying,
    )?;
    if res.underlying != asset {
        return Err(ContractError::UnderlyingMismatch {
            bridge_wrapped: bridge_wrapped.to_string(),
            expected: asset.to_string(),
            actual: res.underlying.to_string(),
        });
    }

    let record = registry::register_token(deps.storage, asset, bridge_wrapped)?;

    Ok(Response::new()
        .add_attribute("method", "add_token")
        .add_attribute("asset", record.underlying)
        .add_attribute("bridge_wrapped", record.bridge_wrapped))
}

/// Redeem the allocator's whole bridge-wrapped balance for `asset`.
pub fn execute_withdraw_bridge_wrapped(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    asset: String,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info.sender)?;

    let asset = deps.api.addr_validate(&asset)?;
    let record = registry::load_token(deps.storage, &asset)?;

    let balance =
        token_guard::query_balance(&deps.querier, &record.bridge_wrapped, &env.contract.address)?;
    if balance.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: format!("No {} balance to redeem", record.bridge_wrapped),
        });
    }

    let redeem = call_guard::call(
        &deps.querier,
        &record.bridge_wrapped,
        &BridgeTokenExecuteMsg::Withdraw { amount: balance },
        vec![],
        CallSite::BridgeRedeem,
    )?;

    Ok(Response::new()
        .add_submessage(redeem)
        .add_attribute("method", "withdraw_bridge_wrapped")
        .add_attribute("asset", asset)
        .add_attribute("bridge_wrapped", record.bridge_wrapped)
        .add_attribute("amount", balance))
}
