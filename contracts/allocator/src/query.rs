//! Query handlers for the treasury allocator contract.

use cosmwasm_std::{Deps, Env, Order, StdResult, Uint128, Uint256};
use cw_storage_plus::Bound;

use crate::call_guard::{self, CallSite};
use crate::interfaces::RewardPoolQueryMsg;
use crate::math;
use crate::msg::{
    ConfigResponse, DestinationResponse, OperationLockResponse, OwnershipResponse,
    RewardPoolsResponse, RewardTokensResponse, RewardsPendingResponse, TokenRecordResponse,
    TokenRecordsResponse, TotalsResponse, ValueResponse,
};
use crate::registry;
use crate::state::{
    BridgeDestination, TokenRecord, CONFIG, DESTINATION, OPERATION_LOCK, OWNERSHIP, TOKENS,
};
use crate::valuation;

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 50;

// ============================================================================
// Core Queries
// ============================================================================

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        liquidity_zap: config.liquidity_zap,
        curve_pool: config.curve_pool,
        booster: config.booster,
        bridge_router: config.bridge_router,
        reward_collector: config.reward_collector,
        destination_timelock: config.destination_timelock,
    })
}

pub fn query_ownership(deps: Deps) -> StdResult<OwnershipResponse> {
    let ownership = OWNERSHIP.load(deps.storage)?;
    Ok(OwnershipResponse {
        owner: ownership.owner().cloned(),
        pending_owner: ownership.candidate().cloned(),
    })
}

pub fn query_destination(deps: Deps) -> StdResult<DestinationResponse> {
    Ok(match DESTINATION.load(deps.storage)? {
        BridgeDestination::Settled { active } => DestinationResponse {
            active,
            candidate: None,
            activation_height: None,
        },
        BridgeDestination::Rotating {
            active,
            candidate,
            activation_height,
        } => DestinationResponse {
            active,
            candidate: Some(candidate),
            activation_height: Some(activation_height),
        },
    })
}

pub fn query_operation_lock(deps: Deps) -> StdResult<OperationLockResponse> {
    Ok(OperationLockResponse {
        operation: OPERATION_LOCK
            .may_load(deps.storage)?
            .map(|operation| operation.as_str().to_string()),
    })
}

// ============================================================================
// Token Registry
// ============================================================================

fn token_record_response(record: TokenRecord) -> TokenRecordResponse {
    TokenRecordResponse {
        underlying: record.underlying,
        bridge_wrapped: record.bridge_wrapped,
        deployed: record.deployed,
        returned: record.returned,
    }
}

pub fn query_token_record(deps: Deps, asset: String) -> StdResult<TokenRecordResponse> {
    let asset = deps.api.addr_validate(&asset)?;
    let record = registry::load_token(deps.storage, &asset)?;
    Ok(token_record_response(record))
}

/// Query paginated list of token records.
pub fn query_token_records(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<TokenRecordsResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start_addr = start_after
        .map(|addr| deps.api.addr_validate(&addr))
        .transpose()?;
    let start = start_addr.as_ref().map(Bound::exclusive);

    let tokens = TOKENS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, record)| token_record_response(record)))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(TokenRecordsResponse { tokens })
}

pub fn query_totals(deps: Deps) -> StdResult<TotalsResponse> {
    let totals = registry::load_totals(deps.storage)?;
    Ok(TotalsResponse {
        value_deployed: totals.value_deployed,
        value_returned: totals.value_returned,
    })
}

pub fn query_value_of(deps: Deps, asset: String, amount: Uint128) -> StdResult<ValueResponse> {
    let asset = deps.api.addr_validate(&asset)?;
    let value = valuation::value_of(&deps.querier, &asset, amount)?;
    Ok(ValueResponse { value })
}

// ============================================================================
// Reward Registry
// ============================================================================

pub fn query_reward_pools(deps: Deps) -> StdResult<RewardPoolsResponse> {
    Ok(RewardPoolsResponse {
        entries: registry::reward_pools(deps.storage)?,
    })
}

pub fn query_reward_tokens(deps: Deps) -> StdResult<RewardTokensResponse> {
    Ok(RewardTokensResponse {
        tokens: registry::reward_tokens(deps.storage)?,
    })
}

/// Rewards claimable by this contract, counting each reward pool once.
pub fn query_rewards_pending(deps: Deps, env: Env) -> StdResult<RewardsPendingResponse> {
    let mut pending = Uint256::zero();
    for reward_pool in registry::distinct_reward_pools(deps.storage)? {
        let earned: Uint128 = call_guard::static_call(
            &deps.querier,
            &reward_pool,
            &RewardPoolQueryMsg::Earned {
                account: env.contract.address.to_string(),
            },
            CallSite::RewardPoolEarned,
        )?;
        pending = math::add(pending, earned.into())?;
    }
    Ok(RewardsPendingResponse { pending })
}
