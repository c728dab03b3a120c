//! Treasury Allocator Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers
//! - `call_guard` - Reply handling for guarded calls

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult,
};
use cw2::set_contract_version;

use crate::call_guard;
use crate::error::ContractError;
use crate::execute::{
    execute_activate_destination, execute_add_pid_reward_item, execute_add_reward_token,
    execute_add_token, execute_callback, execute_cancel_destination, execute_deposit,
    execute_harvest, execute_pull_ownership, execute_push_ownership, execute_queue_destination,
    execute_remove_pid_reward_item, execute_renounce_ownership, execute_set_reward_collector,
    execute_update_config, execute_withdraw, execute_withdraw_bridge_wrapped, validate_endpoint,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::ownership::Ownership;
use crate::query::{
    query_config, query_destination, query_operation_lock, query_ownership, query_reward_pools,
    query_reward_tokens, query_rewards_pending, query_token_record, query_token_records,
    query_totals, query_value_of,
};
use crate::state::{
    BridgeDestination, Config, Totals, CONFIG, CONTRACT_NAME, CONTRACT_VERSION,
    DEFAULT_DESTINATION_TIMELOCK, DESTINATION, OWNERSHIP, TOTALS,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = match msg.owner {
        Some(owner) => deps.api.addr_validate(&owner)?,
        None => info.sender,
    };

    let validate = |addr: Option<String>| addr.map(|a| deps.api.addr_validate(&a)).transpose();
    let config = Config {
        liquidity_zap: validate(msg.liquidity_zap)?,
        curve_pool: validate(msg.curve_pool)?,
        booster: validate(msg.booster)?,
        bridge_router: validate(msg.bridge_router)?,
        reward_collector: validate(msg.reward_collector)?,
        destination_timelock: msg
            .destination_timelock
            .unwrap_or(DEFAULT_DESTINATION_TIMELOCK),
    };
    CONFIG.save(deps.storage, &config)?;

    OWNERSHIP.save(
        deps.storage,
        &Ownership::Active {
            owner: owner.clone(),
        },
    )?;

    // An initial destination skips the timelock
    if let Some(endpoint) = &msg.destination {
        validate_endpoint(endpoint)?;
    }
    DESTINATION.save(
        deps.storage,
        &BridgeDestination::Settled {
            active: msg.destination,
        },
    )?;

    TOTALS.save(deps.storage, &Totals::default())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute(
            "destination_timelock",
            config.destination_timelock.to_string(),
        ))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Allocation
        ExecuteMsg::Deposit {
            asset,
            amount,
            pool_amounts,
            min_mint_amount,
            pid,
            expected_pool_token,
        } => execute_deposit(
            deps,
            env,
            info,
            asset,
            amount,
            pool_amounts,
            min_mint_amount,
            pid,
            expected_pool_token,
        ),
        ExecuteMsg::Withdraw {
            asset,
            amount,
            min_amount_out,
            token_index,
            pid,
            expected_pool_token,
        } => execute_withdraw(
            deps,
            env,
            info,
            asset,
            amount,
            min_amount_out,
            token_index,
            pid,
            expected_pool_token,
        ),
        ExecuteMsg::WithdrawBridgeWrapped { asset } => {
            execute_withdraw_bridge_wrapped(deps, env, info, asset)
        }

        // Registries
        ExecuteMsg::AddToken {
            asset,
            bridge_wrapped,
        } => execute_add_token(deps, info, asset, bridge_wrapped),
        ExecuteMsg::AddPidRewardItem { reward_pool, pid } => {
            execute_add_pid_reward_item(deps, info, reward_pool, pid)
        }
        ExecuteMsg::RemovePidRewardItem { reward_pool, pid } => {
            execute_remove_pid_reward_item(deps, info, reward_pool, pid)
        }
        ExecuteMsg::AddRewardToken { token } => execute_add_reward_token(deps, info, token),
        ExecuteMsg::Harvest {} => execute_harvest(deps, env),

        // Configuration
        ExecuteMsg::SetRewardCollector { collector } => {
            execute_set_reward_collector(deps, info, collector)
        }
        ExecuteMsg::UpdateConfig {
            liquidity_zap,
            curve_pool,
            booster,
            bridge_router,
            destination_timelock,
        } => execute_update_config(
            deps,
            info,
            liquidity_zap,
            curve_pool,
            booster,
            bridge_router,
            destination_timelock,
        ),
        ExecuteMsg::QueueDestination { chain_id, address } => {
            execute_queue_destination(deps, env, info, chain_id, address)
        }
        ExecuteMsg::ActivateDestination {} => execute_activate_destination(deps, env, info),
        ExecuteMsg::CancelDestination {} => execute_cancel_destination(deps, info),

        // Ownership
        ExecuteMsg::PushOwnership { new_owner } => execute_push_ownership(deps, info, new_owner),
        ExecuteMsg::PullOwnership {} => execute_pull_ownership(deps, info),
        ExecuteMsg::RenounceOwnership {} => execute_renounce_ownership(deps, info),

        // Internal
        ExecuteMsg::Callback(callback) => execute_callback(deps, env, info, callback),
    }
}

// ============================================================================
// Reply
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(_deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    call_guard::handle_reply(msg)
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Ownership {} => to_json_binary(&query_ownership(deps)?),
        QueryMsg::Destination {} => to_json_binary(&query_destination(deps)?),
        QueryMsg::OperationLock {} => to_json_binary(&query_operation_lock(deps)?),

        // Token registry
        QueryMsg::TokenRecord { asset } => to_json_binary(&query_token_record(deps, asset)?),
        QueryMsg::TokenRecords { start_after, limit } => {
            to_json_binary(&query_token_records(deps, start_after, limit)?)
        }
        QueryMsg::Totals {} => to_json_binary(&query_totals(deps)?),
        QueryMsg::ValueOf { asset, amount } => {
            to_json_binary(&query_value_of(deps, asset, amount)?)
        }

        // Reward registry
        QueryMsg::RewardPools {} => to_json_binary(&query_reward_pools(deps)?),
        QueryMsg::RewardTokens {} => to_json_binary(&query_reward_tokens(deps)?),
        QueryMsg::RewardsPending {} => to_json_binary(&query_rewards_pending(deps, env)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("method", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
