//! A CW20 look-alike that accepts every call but reports failure in its
//! return data, and claims a fixed balance for every account.

use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response, StdError, StdResult,
    Uint128,
};
use cw20::{
    AllowanceResponse, BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg, Expiration, TokenInfoResponse,
};
use cw_multi_test::{Contract, ContractWrapper};

pub const CLAIMED_BALANCE: u128 = 1_000;

fn instantiate(_deps: DepsMut, _env: Env, _info: MessageInfo, _msg: Empty) -> StdResult<Response> {
    Ok(Response::new())
}

fn execute(
    _deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: Cw20ExecuteMsg,
) -> StdResult<Response> {
    Ok(Response::new().set_data(to_json_binary(&false)?))
}

fn query(_deps: Deps, _env: Env, msg: Cw20QueryMsg) -> StdResult<Binary> {
    match msg {
        Cw20QueryMsg::Balance { .. } => to_json_binary(&BalanceResponse {
            balance: Uint128::new(CLAIMED_BALANCE),
        }),
        Cw20QueryMsg::Allowance { .. } => to_json_binary(&AllowanceResponse {
            allowance: Uint128::zero(),
            expires: Expiration::Never {},
        }),
        Cw20QueryMsg::TokenInfo {} => to_json_binary(&TokenInfoResponse {
            name: "Bad Token".to_string(),
            symbol: "BAD".to_string(),
            decimals: 6,
            total_supply: Uint128::new(CLAIMED_BALANCE),
        }),
        _ => Err(StdError::generic_err("unsupported query")),
    }
}

pub fn contract() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(execute, instantiate, query))
}
