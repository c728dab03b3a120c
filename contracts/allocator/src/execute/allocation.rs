//! Allocation handlers.
//!
//! This module handles:
//! - Deposit: asset into the pool, LP into the booster
//! - Withdraw: LP out of the booster, asset out of the pool and over the bridge
//! - The self-callbacks that sequence both flows and the operation lock

use cosmwasm_std::{Addr, DepsMut, Env, MessageInfo, QuerierWrapper, Response, Storage, Uint128};

use crate::call_guard::{self, CallSite};
use crate::error::ContractError;
use crate::interfaces::{
    BoosterExecuteMsg, BoosterQueryMsg, PoolInfoResponse, RewardPoolExecuteMsg, RouterExecuteMsg,
    ZapExecuteMsg, POOL_COINS,
};
use crate::msg::CallbackMsg;
use crate::ownership::ensure_owner;
use crate::registry;
use crate::state::{Operation, CONFIG, DESTINATION, OPERATION_LOCK};
use crate::token_guard;
use crate::valuation;

// ============================================================================
// Deposit
// ============================================================================

/// Deposit `amount` of `asset` into the pool and stake the minted LP.
#[allow(clippy::too_many_arguments)]
pub fn execute_deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    asset: String,
    amount: Uint128,
    pool_amounts: [Uint128; POOL_COINS],
    min_mint_amount: Uint128,
    pid: u64,
    expected_pool_token: String,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info.sender)?;
    ensure_unlocked(deps.storage)?;

    let config = CONFIG.load(deps.storage)?;
    let zap = config.liquidity_zap()?;
    let pool = config.curve_pool()?;
    let booster = config.booster()?;

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "Deposit amount must be greater than zero".to_string(),
        });
    }

    let asset = deps.api.addr_validate(&asset)?;
    registry::load_token(deps.storage, &asset)?;

    let pool_info = load_pool_info(&deps.querier, booster, pid, &expected_pool_token)?;
    registry::add_reward_pool(deps.storage, pool_info.reward_pool.clone(), pid)?;

    let value = valuation::value_of(&deps.querier, &asset, amount)?;
    let record = registry::record_deployment(deps.storage, &asset, amount, value)?;

    OPERATION_LOCK.save(
        deps.storage,
        &Operation::Deposit {
            asset: asset.clone(),
            pid,
        },
    )?;

    let approve =
        token_guard::safe_approve(&deps.querier, &asset, &env.contract.address, zap, amount)?;
    let add_liquidity = call_guard::call(
        &deps.querier,
        zap,
        &ZapExecuteMsg::AddLiquidity {
            pool: pool.to_string(),
            amounts: pool_amounts,
            min_mint_amount,
        },
        vec![],
        CallSite::ZapAddLiquidity,
    )?;
    let stake = CallbackMsg::StakeLiquidity {
        pid,
        lp_token: pool_info.lp_token.clone(),
    }
    .into_cosmos_msg(&env.contract.address)?;

    Ok(Response::new()
        .add_submessages(approve)
        .add_submessage(add_liquidity)
        .add_message(stake)
        .add_attribute("method", "deposit")
        .add_attribute("asset", asset)
        .add_attribute("amount", amount)
        .add_attribute("pid", pid.to_string())
        .add_attribute("lp_token", pool_info.lp_token)
        .add_attribute("value", value.to_string())
        .add_attribute("deployed", record.deployed))
}

/// Stake the allocator's whole LP balance with the booster.
pub fn callback_stake_liquidity(
    deps: DepsMut,
    env: Env,
    pid: u64,
    lp_token: Addr,
) -> Result<Response, ContractError> {
    let booster = CONFIG.load(deps.storage)?.booster()?.clone();

    let balance = token_guard::query_balance(&deps.querier, &lp_token, &env.contract.address)?;
    let approve = token_guard::safe_approve(
        &deps.querier,
        &lp_token,
        &env.contract.address,
        &booster,
        balance,
    )?;
    let stake = call_guard::call(
        &deps.querier,
        &booster,
        &BoosterExecuteMsg::Deposit {
            pid,
            amount: balance,
            stake: true,
        },
        vec![],
        CallSite::BoosterDeposit,
    )?;
    let release = CallbackMsg::ReleaseLock {}.into_cosmos_msg(&env.contract.address)?;

    Ok(Response::new()
        .add_submessages(approve)
        .add_submessage(stake)
        .add_message(release)
        .add_attribute("method", "stake_liquidity")
        .add_attribute("pid", pid.to_string())
        .add_attribute("lp_amount", balance))
}

// ============================================================================
// Withdraw
// ============================================================================

/// Unstake `amount` LP and start unwinding it into `asset`.
#[allow(clippy::too_many_arguments)]
pub fn execute_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    asset: String,
    amount: Uint128,
    min_amount_out: Uint128,
    token_index: u8,
    pid: u64,
    expected_pool_token: String,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info.sender)?;
    ensure_unlocked(deps.storage)?;

    let config = CONFIG.load(deps.storage)?;
    config.liquidity_zap()?;
    config.curve_pool()?;
    let booster = config.booster()?;
    config.bridge_router()?;

    let destination = DESTINATION.load(deps.storage)?;
    if destination.active().is_none() {
        return Err(ContractError::NoActiveDestination);
    }

    if amount.is_zero() {
        return Err(ContractError::InvalidAmount {
            reason: "Withdraw amount must be greater than zero".to_string(),
        });
    }

    let asset = deps.api.addr_validate(&asset)?;
    registry::load_token(deps.storage, &asset)?;

    // unstake from the pool the booster staked into for this pid
    let pool_info = load_pool_info(&deps.querier, booster, pid, &expected_pool_token)?;
    let reward_pool = pool_info.reward_pool;
    if !registry::is_reward_pool_registered(deps.storage, &reward_pool, pid)? {
        return Err(ContractError::InvalidRewardPool { pid });
    }

    OPERATION_LOCK.save(
        deps.storage,
        &Operation::Withdraw {
            asset: asset.clone(),
            pid,
        },
    )?;

    let unstake = call_guard::call(
        &deps.querier,
        &reward_pool,
        &RewardPoolExecuteMsg::WithdrawAndUnwrap {
            amount,
            claim: false,
        },
        vec![],
        CallSite::RewardPoolUnstake,
    )?;
    let remove = CallbackMsg::RemoveLiquidity {
        asset: asset.clone(),
        lp_token: pool_info.lp_token,
        amount,
        token_index,
        min_amount_out,
    }
    .into_cosmos_msg(&env.contract.address)?;

    Ok(Response::new()
        .add_submessage(unstake)
        .add_message(remove)
        .add_attribute("method", "withdraw")
        .add_attribute("asset", asset)
        .add_attribute("amount", amount)
        .add_attribute("pid", pid.to_string())
        .add_attribute("reward_pool", reward_pool))
}

/// Burn `amount` LP for the pool coin at `token_index`.
pub fn callback_remove_liquidity(
    deps: DepsMut,
    env: Env,
    asset: Addr,
    lp_token: Addr,
    amount: Uint128,
    token_index: u8,
    min_amount_out: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let zap = config.liquidity_zap()?;
    let pool = config.curve_pool()?;

    let approve =
        token_guard::safe_approve(&deps.querier, &lp_token, &env.contract.address, zap, amount)?;
    let remove = call_guard::call(
        &deps.querier,
        zap,
        &ZapExecuteMsg::RemoveLiquidityOneCoin {
            pool: pool.to_string(),
            burn_amount: amount,
            i: token_index,
            min_amount: min_amount_out,
        },
        vec![],
        CallSite::ZapRemoveLiquidity,
    )?;
    let bridge = CallbackMsg::BridgeOut { asset }.into_cosmos_msg(&env.contract.address)?;

    Ok(Response::new()
        .add_submessages(approve)
        .add_submessage(remove)
        .add_message(bridge)
        .add_attribute("method", "remove_liquidity")
        .add_attribute("lp_amount", amount)
        .add_attribute("token_index", token_index.to_string()))
}

/// Account for the asset the pool returned and send it to the active destination.
pub fn callback_bridge_out(
    deps: DepsMut,
    env: Env,
    asset: Addr,
) -> Result<Response, ContractError> {
    let router = CONFIG.load(deps.storage)?.bridge_router()?.clone();
    let destination = DESTINATION
        .load(deps.storage)?
        .active()
        .cloned()
        .ok_or(ContractError::NoActiveDestination)?;

    let balance = token_guard::query_balance(&deps.querier, &asset, &env.contract.address)?;
    let value = valuation::value_of(&deps.querier, &asset, balance)?;
    let record = registry::record_return(deps.storage, &asset, balance, value)?;

    let approve =
        token_guard::safe_approve(&deps.querier, &asset, &env.contract.address, &router, balance)?;
    let bridge = call_guard::call(
        &deps.querier,
        &router,
        &RouterExecuteMsg::AnySwapOutUnderlying {
            token: record.bridge_wrapped.to_string(),
            to: destination.address.clone(),
            amount: balance,
            to_chain_id: destination.chain_id,
        },
        vec![],
        CallSite::BridgeOut,
    )?;
    let release = CallbackMsg::ReleaseLock {}.into_cosmos_msg(&env.contract.address)?;

    Ok(Response::new()
        .add_submessages(approve)
        .add_submessage(bridge)
        .add_message(release)
        .add_attribute("method", "bridge_out")
        .add_attribute("asset", asset)
        .add_attribute("amount", balance)
        .add_attribute("value", value.to_string())
        .add_attribute("returned", record.returned)
        .add_attribute("to", destination.address)
        .add_attribute("to_chain_id", destination.chain_id.to_string()))
}

// ============================================================================
// Operation Lock
// ============================================================================

pub fn callback_release_lock(deps: DepsMut) -> Result<Response, ContractError> {
    let operation = OPERATION_LOCK.may_load(deps.storage)?;
    OPERATION_LOCK.remove(deps.storage);

    Ok(Response::new()
        .add_attribute("method", "release_lock")
        .add_attribute(
            "operation",
            operation.as_ref().map(Operation::as_str).unwrap_or("none"),
        ))
}

fn ensure_unlocked(storage: &dyn Storage) -> Result<(), ContractError> {
    match OPERATION_LOCK.may_load(storage)? {
        Some(operation) => Err(ContractError::OperationInProgress {
            operation: operation.as_str().to_string(),
        }),
        None => Ok(()),
    }
}

/// Booster pool info for `pid`, checked against the pool token the caller expects.
fn load_pool_info(
    querier: &QuerierWrapper,
    booster: &Addr,
    pid: u64,
    expected_pool_token: &str,
) -> Result<PoolInfoResponse, ContractError> {
    let pool_info: PoolInfoResponse = call_guard::static_call(
        querier,
        booster,
        &BoosterQueryMsg::PoolInfo { pid },
        CallSite::BoosterPoolInfo,
    )?;
    if pool_info.lp_token.as_str() != expected_pool_token {
        return Err(ContractError::PoolTokenMismatch {
            pid,
            expected: expected_pool_token.to_string(),
            actual: pool_info.lp_token.to_string(),
        });
    }
    Ok(pool_info)
}
