//! Liquidity zap: pulls pool coins and pays LP from its inventory 1:1, and
//! takes LP back for a single coin 1:1.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    Addr, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response, StdError, StdResult, Uint128,
};
use cw_multi_test::{Contract, ContractWrapper};
use cw_storage_plus::Item;

use allocator::interfaces::ZapExecuteMsg;

use super::{transfer_from_msg, transfer_msg};

#[cw_serde]
pub struct InstantiateMsg {
    pub lp_token: String,
    pub coins: Vec<String>,
}

#[cw_serde]
struct State {
    lp_token: Addr,
    coins: Vec<Addr>,
}

const STATE: Item<State> = Item::new("state");

fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> StdResult<Response> {
    let state = State {
        lp_token: deps.api.addr_validate(&msg.lp_token)?,
        coins: msg
            .coins
            .iter()
            .map(|coin| deps.api.addr_validate(coin))
            .collect::<StdResult<_>>()?,
    };
    STATE.save(deps.storage, &state)?;
    Ok(Response::new())
}

fn execute(deps: DepsMut, env: Env, info: MessageInfo, msg: ZapExecuteMsg) -> StdResult<Response> {
    let state = STATE.load(deps.storage)?;
    match msg {
        ZapExecuteMsg::AddLiquidity {
            amounts,
            min_mint_amount,
            ..
        } => {
            let mut response = Response::new();
            let mut minted = Uint128::zero();
            for (coin, amount) in state.coins.iter().zip(amounts) {
                if amount.is_zero() {
                    continue;
                }
                response = response.add_message(transfer_from_msg(
                    coin,
                    &info.sender,
                    &env.contract.address,
                    amount,
                )?);
                minted += amount;
            }
            if minted < min_mint_amount {
                return Err(StdError::generic_err("Slippage screwed you"));
            }
            Ok(response
                .add_message(transfer_msg(&state.lp_token, &info.sender, minted)?)
                .add_attribute("minted", minted))
        }
        ZapExecuteMsg::RemoveLiquidityOneCoin {
            burn_amount,
            i,
            min_amount,
            ..
        } => {
            let coin = state
                .coins
                .get(usize::from(i))
                .ok_or_else(|| StdError::generic_err("Invalid coin index"))?;
            if burn_amount < min_amount {
                return Err(StdError::generic_err("Not enough coins removed"));
            }
            Ok(Response::new()
                .add_message(transfer_from_msg(
                    &state.lp_token,
                    &info.sender,
                    &env.contract.address,
                    burn_amount,
                )?)
                .add_message(transfer_msg(coin, &info.sender, burn_amount)?))
        }
    }
}

fn query(_deps: Deps, _env: Env, _msg: Empty) -> StdResult<Binary> {
    Err(StdError::generic_err("zap has no queries"))
}

pub fn contract() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(execute, instantiate, query))
}
