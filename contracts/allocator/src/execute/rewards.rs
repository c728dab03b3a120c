//! Reward registry and harvest handlers.

use cosmwasm_std::{coin, DepsMut, Env, MessageInfo, Response};

use crate::call_guard::{self, CallSite};
use crate::error::ContractError;
use crate::interfaces::RewardPoolExecuteMsg;
use crate::msg::CallbackMsg;
use crate::ownership::ensure_owner;
use crate::registry;
use crate::state::CONFIG;
use crate::token_guard;
use common::{Asset, AssetInfo};

// ============================================================================
// Registry
// ============================================================================

/// Track `(reward_pool, pid)` for harvesting.
pub fn execute_add_pid_reward_item(
    deps: DepsMut,
    info: MessageInfo,
    reward_pool: String,
    pid: u64,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info.sender)?;

    let reward_pool = deps.api.addr_validate(&reward_pool)?;
    call_guard::ensure_contract(&deps.querier, &reward_pool)?;
    let added = registry::add_reward_pool(deps.storage, reward_pool.clone(), pid)?;

    Ok(Response::new()
        .add_attribute("method", "add_pid_reward_item")
        .add_attribute("reward_pool", reward_pool)
        .add_attribute("pid", pid.to_string())
        .add_attribute("added", added.to_string()))
}

pub fn execute_remove_pid_reward_item(
    deps: DepsMut,
    info: MessageInfo,
    reward_pool: String,
    pid: u64,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info.sender)?;

    let reward_pool = deps.api.addr_validate(&reward_pool)?;
    let removed = registry::remove_reward_pool(deps.storage, &reward_pool, pid)?;

    Ok(Response::new()
        .add_attribute("method", "remove_pid_reward_item")
        .add_attribute("reward_pool", removed.reward_pool)
        .add_attribute("pid", removed.pid.to_string()))
}

pub fn execute_add_reward_token(
    deps: DepsMut,
    info: MessageInfo,
    token: AssetInfo,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info.sender)?;

    let token = match token {
        AssetInfo::Native { denom } => {
            if denom.is_empty() {
                return Err(ContractError::InvalidAddress {
                    reason: "Reward denom cannot be empty".to_string(),
                });
            }
            AssetInfo::Native { denom }
        }
        AssetInfo::Cw20 { contract_addr } => AssetInfo::Cw20 {
            contract_addr: deps.api.addr_validate(contract_addr.as_str())?,
        },
    };
    let added = registry::add_reward_token(deps.storage, token.clone())?;

    Ok(Response::new()
        .add_attribute("method", "add_reward_token")
        .add_attribute("token", token.to_string())
        .add_attribute("added", added.to_string()))
}

// ============================================================================
// Harvest
// ============================================================================

/// Claim once from each registered reward pool, then sweep rewards to the collector.
pub fn execute_harvest(deps: DepsMut, env: Env) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let collector = config.reward_collector()?;

    let pools = registry::distinct_reward_pools(deps.storage)?;
    let claims = pools
        .iter()
        .map(|pool| {
            call_guard::call(
                &deps.querier,
                pool,
                &RewardPoolExecuteMsg::GetReward {},
                vec![],
                CallSite::RewardPoolClaim,
            )
        })
        .collect::<Result<Vec<_>, _>>()?;
    let sweep = CallbackMsg::SweepRewards {}.into_cosmos_msg(&env.contract.address)?;

    Ok(Response::new()
        .add_submessages(claims)
        .add_message(sweep)
        .add_attribute("method", "harvest")
        .add_attribute("reward_pools", pools.len().to_string())
        .add_attribute("collector", collector.as_str()))
}

/// Send every non-zero reward token balance to the collector.
pub fn callback_sweep_rewards(deps: DepsMut, env: Env) -> Result<Response, ContractError> {
    let collector = CONFIG.load(deps.storage)?.reward_collector()?.clone();
    let this = &env.contract.address;

    let mut response = Response::new().add_attribute("method", "sweep_rewards");
    for token in registry::reward_tokens(deps.storage)? {
        let balance = token.query_balance(&deps.querier, this)?;
        if balance.is_zero() {
            continue;
        }
        response = match &token {
            AssetInfo::Native { denom } => response.add_message(call_guard::send_value(
                &deps.querier,
                this,
                &collector,
                coin(balance.u128(), denom),
            )?),
            AssetInfo::Cw20 { contract_addr } => response.add_submessage(
                token_guard::safe_transfer(&deps.querier, contract_addr, &collector, balance)?,
            ),
        };
        let swept = Asset {
            info: token,
            amount: balance,
        };
        response = response.add_attribute("swept", swept.to_string());
    }

    Ok(response.add_attribute("collector", collector))
}
