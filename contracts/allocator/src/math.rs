//! Checked arithmetic for allocator accounting.
//!
//! Every operation fails instead of wrapping. Aggregate counters and
//! normalized values use `Uint256`; per-token amounts use `Uint128` to match
//! CW20 balances.

use cosmwasm_std::{Uint128, Uint256};

use crate::error::ContractError;

fn overflow(a: impl ToString, op: &str, b: impl ToString) -> ContractError {
    ContractError::Overflow {
        operation: format!("{} {} {}", a.to_string(), op, b.to_string()),
    }
}

fn underflow(a: impl ToString, b: impl ToString) -> ContractError {
    ContractError::Underflow {
        operation: format!("{} - {}", a.to_string(), b.to_string()),
    }
}

pub fn add(a: Uint256, b: Uint256) -> Result<Uint256, ContractError> {
    a.checked_add(b).map_err(|_| overflow(a, "+", b))
}

pub fn sub(a: Uint256, b: Uint256) -> Result<Uint256, ContractError> {
    a.checked_sub(b).map_err(|_| underflow(a, b))
}

pub fn mul(a: Uint256, b: Uint256) -> Result<Uint256, ContractError> {
    if a.is_zero() || b.is_zero() {
        return Ok(Uint256::zero());
    }
    a.checked_mul(b).map_err(|_| overflow(a, "*", b))
}

pub fn div(a: Uint256, b: Uint256) -> Result<Uint256, ContractError> {
    a.checked_div(b).map_err(|_| ContractError::DivideByZero)
}

pub fn rem(a: Uint256, b: Uint256) -> Result<Uint256, ContractError> {
    a.checked_rem(b).map_err(|_| ContractError::DivideByZero)
}

/// `10^exp`, failing once the result leaves the 256-bit range.
pub fn pow10(exp: u32) -> Result<Uint256, ContractError> {
    Uint256::from(10u8)
        .checked_pow(exp)
        .map_err(|_| overflow(10u8, "^", exp))
}

pub fn add_u128(a: Uint128, b: Uint128) -> Result<Uint128, ContractError> {
    a.checked_add(b).map_err(|_| overflow(a, "+", b))
}

pub fn sub_u128(a: Uint128, b: Uint128) -> Result<Uint128, ContractError> {
    a.checked_sub(b).map_err(|_| underflow(a, b))
}
