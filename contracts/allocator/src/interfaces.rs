//! Message types of the external contracts the allocator talks to.
//!
//! These mirror the entry points of the liquidity zap, the yield booster, its
//! reward pools and the bridge (wrapped token + router). CW20 messages come
//! from the `cw20` crate.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

/// Number of coins accepted by the liquidity pool
pub const POOL_COINS: usize = 4;

// ============================================================================
// Liquidity Zap
// ============================================================================

#[cw_serde]
pub enum ZapExecuteMsg {
    /// Pull `amounts` of each pool coin from the caller and mint LP tokens to it
    AddLiquidity {
        pool: String,
        amounts: [Uint128; POOL_COINS],
        min_mint_amount: Uint128,
    },
    /// Burn caller's LP tokens and return a single coin of the pool
    RemoveLiquidityOneCoin {
        pool: String,
        burn_amount: Uint128,
        i: u8,
        min_amount: Uint128,
    },
}

// ============================================================================
// Booster
// ============================================================================

#[cw_serde]
pub enum BoosterExecuteMsg {
    Deposit {
        pid: u64,
        amount: Uint128,
        stake: bool,
    },
    Withdraw {
        pid: u64,
        amount: Uint128,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum BoosterQueryMsg {
    #[returns(PoolInfoResponse)]
    PoolInfo { pid: u64 },
}

#[cw_serde]
pub struct PoolInfoResponse {
    pub lp_token: Addr,
    pub token: Addr,
    pub gauge: Addr,
    pub reward_pool: Addr,
    pub stash: Addr,
    pub shutdown: bool,
}

// ============================================================================
// Reward Pool
// ============================================================================

#[cw_serde]
pub enum RewardPoolExecuteMsg {
    GetReward {},
    /// Unstake `amount` and send the raw LP token back to the caller
    WithdrawAndUnwrap { amount: Uint128, claim: bool },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum RewardPoolQueryMsg {
    #[returns(Uint128)]
    Earned { account: String },
}

// ============================================================================
// Bridge
// ============================================================================

#[cw_serde]
pub enum BridgeTokenExecuteMsg {
    /// Redeem `amount` of the wrapped token for its underlying
    Withdraw { amount: Uint128 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum BridgeTokenQueryMsg {
    #[returns(UnderlyingResponse)]
    Underlying {},
}

#[cw_serde]
pub struct UnderlyingResponse {
    pub underlying: Addr,
}

#[cw_serde]
pub enum RouterExecuteMsg {
    /// Pull `amount` of the wrapped token's underlying from the caller and
    /// release it to `to` on `to_chain_id`
    AnySwapOutUnderlying {
        token: String,
        to: String,
        amount: Uint128,
        to_chain_id: u64,
    },
}
