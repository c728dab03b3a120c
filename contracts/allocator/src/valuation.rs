//! Normalized value of reserve assets.
//!
//! Amounts of assets with different decimals are rescaled to a common
//! 9-decimal unit before they enter the aggregate counters.

use cosmwasm_std::{Addr, QuerierWrapper, Uint128, Uint256};

use crate::error::ContractError;
use crate::math;
use crate::state::VALUE_DECIMALS;
use crate::token_guard;

/// Rescale `amount` from `decimals` to 9 decimals. Down-scaling truncates.
pub fn normalize(amount: Uint128, decimals: u8) -> Result<Uint256, ContractError> {
    let amount = Uint256::from(amount);
    match decimals.cmp(&VALUE_DECIMALS) {
        std::cmp::Ordering::Greater => {
            math::div(amount, math::pow10(u32::from(decimals - VALUE_DECIMALS))?)
        }
        std::cmp::Ordering::Less => {
            math::mul(amount, math::pow10(u32::from(VALUE_DECIMALS - decimals))?)
        }
        std::cmp::Ordering::Equal => Ok(amount),
    }
}

/// `amount` of the CW20 `asset`, normalized by its declared decimals.
pub fn value_of(
    querier: &QuerierWrapper,
    asset: &Addr,
    amount: Uint128,
) -> Result<Uint256, ContractError> {
    let decimals = token_guard::query_decimals(querier, asset)?;
    normalize(amount, decimals)
}
