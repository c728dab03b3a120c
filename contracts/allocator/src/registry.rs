//! Reward and token registries.
//!
//! The reward registry is an ordered list of (reward pool, pid) entries,
//! unique by exact pair. The token registry maps each reserve asset to its
//! bridge-wrapped counterpart and its cumulative deployed/returned amounts;
//! every accounting update also moves the aggregate [`Totals`].

use cosmwasm_std::{Addr, Storage, Uint128, Uint256};

use crate::error::ContractError;
use crate::math;
use crate::state::{RewardPoolEntry, TokenRecord, Totals, REWARD_POOLS, REWARD_TOKENS, TOKENS, TOTALS};
use common::AssetInfo;

// ============================================================================
// Reward Registry
// ============================================================================

pub fn reward_pools(storage: &dyn Storage) -> Result<Vec<RewardPoolEntry>, ContractError> {
    Ok(REWARD_POOLS.may_load(storage)?.unwrap_or_default())
}

/// Append `(reward_pool, pid)` unless that exact pair is already registered.
/// Returns whether an entry was added.
pub fn add_reward_pool(
    storage: &mut dyn Storage,
    reward_pool: Addr,
    pid: u64,
) -> Result<bool, ContractError> {
    let mut entries = reward_pools(storage)?;
    if entries
        .iter()
        .any(|entry| entry.reward_pool == reward_pool && entry.pid == pid)
    {
        return Ok(false);
    }
    entries.push(RewardPoolEntry { reward_pool, pid });
    REWARD_POOLS.save(storage, &entries)?;
    Ok(true)
}

/// Remove the matching entry, shifting later entries left.
pub fn remove_reward_pool(
    storage: &mut dyn Storage,
    reward_pool: &Addr,
    pid: u64,
) -> Result<RewardPoolEntry, ContractError> {
    let mut entries = reward_pools(storage)?;
    let index = entries
        .iter()
        .rposition(|entry| &entry.reward_pool == reward_pool && entry.pid == pid)
        .ok_or_else(|| ContractError::RewardPoolNotFound {
            reward_pool: reward_pool.to_string(),
            pid,
        })?;
    let removed = entries.remove(index);
    REWARD_POOLS.save(storage, &entries)?;
    Ok(removed)
}

pub fn is_reward_pool_registered(
    storage: &dyn Storage,
    reward_pool: &Addr,
    pid: u64,
) -> Result<bool, ContractError> {
    Ok(reward_pools(storage)?
        .iter()
        .any(|entry| &entry.reward_pool == reward_pool && entry.pid == pid))
}

/// Registered reward pools in registry order, each listed once even when
/// tracked under several pids.
pub fn distinct_reward_pools(storage: &dyn Storage) -> Result<Vec<Addr>, ContractError> {
    let mut pools: Vec<Addr> = Vec::new();
    for entry in reward_pools(storage)? {
        if !pools.contains(&entry.reward_pool) {
            pools.push(entry.reward_pool);
        }
    }
    Ok(pools)
}

pub fn reward_tokens(storage: &dyn Storage) -> Result<Vec<AssetInfo>, ContractError> {
    Ok(REWARD_TOKENS.may_load(storage)?.unwrap_or_default())
}

/// Returns whether `token` was newly added.
pub fn add_reward_token(storage: &mut dyn Storage, token: AssetInfo) -> Result<bool, ContractError> {
    let mut tokens = reward_tokens(storage)?;
    if tokens.contains(&token) {
        return Ok(false);
    }
    tokens.push(token);
    REWARD_TOKENS.save(storage, &tokens)?;
    Ok(true)
}

// ============================================================================
// Token Registry
// ============================================================================

pub fn load_token(storage: &dyn Storage, asset: &Addr) -> Result<TokenRecord, ContractError> {
    TOKENS
        .may_load(storage, asset)?
        .ok_or_else(|| ContractError::TokenNotRegistered {
            token: asset.to_string(),
        })
}

/// Install a fresh record for `underlying`. An existing record is only
/// superseded once everything it deployed has been returned.
pub fn register_token(
    storage: &mut dyn Storage,
    underlying: Addr,
    bridge_wrapped: Addr,
) -> Result<TokenRecord, ContractError> {
    if let Some(existing) = TOKENS.may_load(storage, &underlying)? {
        if !existing.is_unwound() {
            return Err(ContractError::TokenStillDeployed {
                token: underlying.to_string(),
                outstanding: existing.outstanding(),
            });
        }
    }

    let record = TokenRecord::new(underlying, bridge_wrapped);
    TOKENS.save(storage, &record.underlying, &record)?;
    Ok(record)
}

pub fn load_totals(storage: &dyn Storage) -> Result<Totals, ContractError> {
    Ok(TOTALS.may_load(storage)?.unwrap_or_default())
}

/// Add `amount` to the asset's deployed total and `value` to the aggregate.
pub fn record_deployment(
    storage: &mut dyn Storage,
    asset: &Addr,
    amount: Uint128,
    value: Uint256,
) -> Result<TokenRecord, ContractError> {
    let mut record = load_token(storage, asset)?;
    record.deployed = math::add_u128(record.deployed, amount)?;
    TOKENS.save(storage, asset, &record)?;

    let mut totals = load_totals(storage)?;
    totals.value_deployed = math::add(totals.value_deployed, value)?;
    TOTALS.save(storage, &totals)?;

    Ok(record)
}

/// Add `amount` to the asset's returned total and `value` to the aggregate.
pub fn record_return(
    storage: &mut dyn Storage,
    asset: &Addr,
    amount: Uint128,
    value: Uint256,
) -> Result<TokenRecord, ContractError> {
    let mut record = load_token(storage, asset)?;
    record.returned = math::add_u128(record.returned, amount)?;
    TOKENS.save(storage, asset, &record)?;

    let mut totals = load_totals(storage)?;
    totals.value_returned = math::add(totals.value_returned, value)?;
    TOTALS.save(storage, &totals)?;

    Ok(record)
}
