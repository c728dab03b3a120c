//! Safe CW20 operations.
//!
//! Each operation is routed through [`call_guard::call`], so the contract
//! check, revert bubbling and return-data check (`true` or nothing) apply to
//! every token interaction.

use cosmwasm_std::{Addr, QuerierWrapper, SubMsg, Uint128};
use cw20::{AllowanceResponse, BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg, TokenInfoResponse};

use crate::call_guard::{self, CallSite};
use crate::error::ContractError;
use crate::math;

pub fn safe_transfer(
    querier: &QuerierWrapper,
    token: &Addr,
    recipient: &Addr,
    amount: Uint128,
) -> Result<SubMsg, ContractError> {
    call_guard::call(
        querier,
        token,
        &Cw20ExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount,
        },
        vec![],
        CallSite::TokenTransfer,
    )
}

pub fn safe_transfer_from(
    querier: &QuerierWrapper,
    token: &Addr,
    owner: &Addr,
    recipient: &Addr,
    amount: Uint128,
) -> Result<SubMsg, ContractError> {
    call_guard::call(
        querier,
        token,
        &Cw20ExecuteMsg::TransferFrom {
            owner: owner.to_string(),
            recipient: recipient.to_string(),
            amount,
        },
        vec![],
        CallSite::TokenTransferFrom,
    )
}

/// Set `spender`'s allowance over `owner`'s tokens to `value`.
///
/// Moving a non-zero allowance to another non-zero value is rejected; reset
/// to zero first. Returns `None` when the allowance is already at `value`.
pub fn safe_approve(
    querier: &QuerierWrapper,
    token: &Addr,
    owner: &Addr,
    spender: &Addr,
    value: Uint128,
) -> Result<Option<SubMsg>, ContractError> {
    let current = query_allowance(querier, token, owner, spender)?;
    if !value.is_zero() && !current.is_zero() {
        return Err(ContractError::AmbiguousApproval);
    }

    let msg = if !value.is_zero() {
        Cw20ExecuteMsg::IncreaseAllowance {
            spender: spender.to_string(),
            amount: value,
            expires: None,
        }
    } else if !current.is_zero() {
        Cw20ExecuteMsg::DecreaseAllowance {
            spender: spender.to_string(),
            amount: current,
            expires: None,
        }
    } else {
        return Ok(None);
    };

    call_guard::call(querier, token, &msg, vec![], CallSite::TokenApprove).map(Some)
}

pub fn safe_increase_allowance(
    querier: &QuerierWrapper,
    token: &Addr,
    owner: &Addr,
    spender: &Addr,
    value: Uint128,
) -> Result<SubMsg, ContractError> {
    let current = query_allowance(querier, token, owner, spender)?;
    math::add_u128(current, value)?;

    call_guard::call(
        querier,
        token,
        &Cw20ExecuteMsg::IncreaseAllowance {
            spender: spender.to_string(),
            amount: value,
            expires: None,
        },
        vec![],
        CallSite::TokenIncreaseAllowance,
    )
}

pub fn safe_decrease_allowance(
    querier: &QuerierWrapper,
    token: &Addr,
    owner: &Addr,
    spender: &Addr,
    value: Uint128,
) -> Result<SubMsg, ContractError> {
    let current = query_allowance(querier, token, owner, spender)?;
    math::sub_u128(current, value)?;

    call_guard::call(
        querier,
        token,
        &Cw20ExecuteMsg::DecreaseAllowance {
            spender: spender.to_string(),
            amount: value,
            expires: None,
        },
        vec![],
        CallSite::TokenDecreaseAllowance,
    )
}

pub fn query_allowance(
    querier: &QuerierWrapper,
    token: &Addr,
    owner: &Addr,
    spender: &Addr,
) -> Result<Uint128, ContractError> {
    let res: AllowanceResponse = call_guard::static_call(
        querier,
        token,
        &Cw20QueryMsg::Allowance {
            owner: owner.to_string(),
            spender: spender.to_string(),
        },
        CallSite::TokenQuery,
    )?;
    Ok(res.allowance)
}

pub fn query_balance(
    querier: &QuerierWrapper,
    token: &Addr,
    account: &Addr,
) -> Result<Uint128, ContractError> {
    let res: BalanceResponse = call_guard::static_call(
        querier,
        token,
        &Cw20QueryMsg::Balance {
            address: account.to_string(),
        },
        CallSite::TokenQuery,
    )?;
    Ok(res.balance)
}

pub fn query_decimals(querier: &QuerierWrapper, token: &Addr) -> Result<u8, ContractError> {
    let res: TokenInfoResponse =
        call_guard::static_call(querier, token, &Cw20QueryMsg::TokenInfo {}, CallSite::TokenQuery)?;
    Ok(res.decimals)
}
