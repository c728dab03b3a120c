//! Bridge collaborators: a wrapped token redeemable for its underlying, and
//! a router that takes the underlying and records the outbound transfer.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response, StdError,
    StdResult, Uint128,
};
use cw20::BalanceResponse;
use cw_multi_test::{Contract, ContractWrapper};
use cw_storage_plus::{Item, Map};

use allocator::interfaces::{RouterExecuteMsg, UnderlyingResponse};

use super::{transfer_from_msg, transfer_msg};

// ============================================================================
// Wrapped Token
// ============================================================================

#[cw_serde]
pub struct WrappedInstantiateMsg {
    pub underlying: String,
}

#[cw_serde]
pub enum WrappedExecuteMsg {
    /// Credit `amount` of wrapped token to `recipient`
    Mint { recipient: String, amount: Uint128 },
    Withdraw { amount: Uint128 },
}

#[cw_serde]
pub enum WrappedQueryMsg {
    Underlying {},
    Balance { address: String },
}

const UNDERLYING: Item<Addr> = Item::new("underlying");
const BALANCES: Map<&Addr, Uint128> = Map::new("balances");

fn wrapped_instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: WrappedInstantiateMsg,
) -> StdResult<Response> {
    UNDERLYING.save(deps.storage, &deps.api.addr_validate(&msg.underlying)?)?;
    Ok(Response::new())
}

fn wrapped_execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: WrappedExecuteMsg,
) -> StdResult<Response> {
    match msg {
        WrappedExecuteMsg::Mint { recipient, amount } => {
            let recipient = deps.api.addr_validate(&recipient)?;
            let balance = BALANCES.may_load(deps.storage, &recipient)?.unwrap_or_default();
            BALANCES.save(deps.storage, &recipient, &(balance + amount))?;
            Ok(Response::new())
        }
        WrappedExecuteMsg::Withdraw { amount } => {
            let balance = BALANCES.may_load(deps.storage, &info.sender)?.unwrap_or_default();
            let remaining = balance
                .checked_sub(amount)
                .map_err(|_| StdError::generic_err("Burn exceeds balance"))?;
            BALANCES.save(deps.storage, &info.sender, &remaining)?;
            let underlying = UNDERLYING.load(deps.storage)?;
            Ok(Response::new().add_message(transfer_msg(&underlying, &info.sender, amount)?))
        }
    }
}

fn wrapped_query(deps: Deps, _env: Env, msg: WrappedQueryMsg) -> StdResult<Binary> {
    match msg {
        WrappedQueryMsg::Underlying {} => to_json_binary(&UnderlyingResponse {
            underlying: UNDERLYING.load(deps.storage)?,
        }),
        WrappedQueryMsg::Balance { address } => {
            let address = deps.api.addr_validate(&address)?;
            to_json_binary(&BalanceResponse {
                balance: BALANCES.may_load(deps.storage, &address)?.unwrap_or_default(),
            })
        }
    }
}

pub fn wrapped_contract() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        wrapped_execute,
        wrapped_instantiate,
        wrapped_query,
    ))
}

// ============================================================================
// Router
// ============================================================================

#[cw_serde]
pub struct SwapOut {
    pub token: Addr,
    pub underlying: Addr,
    pub to: String,
    pub amount: Uint128,
    pub to_chain_id: u64,
}

#[cw_serde]
pub enum RouterQueryMsg {
    SwapOuts {},
}

const SWAP_OUTS: Item<Vec<SwapOut>> = Item::new("swap_outs");

fn router_instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: Empty,
) -> StdResult<Response> {
    SWAP_OUTS.save(deps.storage, &vec![])?;
    Ok(Response::new())
}

fn router_execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: RouterExecuteMsg,
) -> StdResult<Response> {
    match msg {
        RouterExecuteMsg::AnySwapOutUnderlying {
            token,
            to,
            amount,
            to_chain_id,
        } => {
            let token = deps.api.addr_validate(&token)?;
            let res: UnderlyingResponse = deps
                .querier
                .query_wasm_smart(&token, &WrappedQueryMsg::Underlying {})?;

            let mut swap_outs = SWAP_OUTS.load(deps.storage)?;
            swap_outs.push(SwapOut {
                token,
                underlying: res.underlying.clone(),
                to,
                amount,
                to_chain_id,
            });
            SWAP_OUTS.save(deps.storage, &swap_outs)?;

            Ok(Response::new().add_message(transfer_from_msg(
                &res.underlying,
                &info.sender,
                &env.contract.address,
                amount,
            )?))
        }
    }
}

fn router_query(deps: Deps, _env: Env, msg: RouterQueryMsg) -> StdResult<Binary> {
    match msg {
        RouterQueryMsg::SwapOuts {} => to_json_binary(&SWAP_OUTS.load(deps.storage)?),
    }
}

pub fn router_contract() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        router_execute,
        router_instantiate,
        router_query,
    ))
}
