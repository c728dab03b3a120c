//! Message types for the treasury allocator contract
//!
//! This module defines all messages for instantiation, execution, internal
//! callbacks and queries.

use common::AssetInfo;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, StdResult, Uint128, Uint256, WasmMsg};

use crate::interfaces::POOL_COINS;
use crate::state::{Endpoint, RewardPoolEntry};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Initial owner (defaults to the instantiating account)
    pub owner: Option<String>,
    pub liquidity_zap: Option<String>,
    pub curve_pool: Option<String>,
    pub booster: Option<String>,
    pub bridge_router: Option<String>,
    pub reward_collector: Option<String>,
    /// Bridge destination active from the start, skipping the timelock
    pub destination: Option<Endpoint>,
    /// Blocks between queueing and activating a destination
    /// (defaults to `DEFAULT_DESTINATION_TIMELOCK`)
    pub destination_timelock: Option<u64>,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Allocation
    // ========================================================================
    /// Move `amount` of `asset` into the pool and stake the LP tokens
    ///
    /// Authorization: Owner only
    Deposit {
        asset: String,
        amount: Uint128,
        pool_amounts: [Uint128; POOL_COINS],
        min_mint_amount: Uint128,
        pid: u64,
        expected_pool_token: String,
    },

    /// Unstake `amount` LP, pull `asset` out of the pool and bridge it to
    /// the active destination
    ///
    /// Authorization: Owner only
    Withdraw {
        asset: String,
        amount: Uint128,
        min_amount_out: Uint128,
        token_index: u8,
        pid: u64,
        expected_pool_token: String,
    },

    /// Redeem the contract's whole balance of the asset's bridge-wrapped token
    ///
    /// Authorization: Owner only
    WithdrawBridgeWrapped { asset: String },

    // ========================================================================
    // Registries
    // ========================================================================
    /// Register `asset` with its bridge-wrapped counterpart
    ///
    /// Authorization: Owner only
    AddToken {
        asset: String,
        bridge_wrapped: String,
    },

    /// Authorization: Owner only
    AddPidRewardItem { reward_pool: String, pid: u64 },

    /// Authorization: Owner only
    RemovePidRewardItem { reward_pool: String, pid: u64 },

    /// Authorization: Owner only
    AddRewardToken { token: AssetInfo },

    /// Claim from every registered reward pool and sweep reward tokens to the
    /// collector
    ///
    /// Authorization: Anyone
    Harvest {},

    // ========================================================================
    // Configuration
    // ========================================================================
    /// Authorization: Owner only
    SetRewardCollector { collector: String },

    /// Overwrite each provided field
    ///
    /// Authorization: Owner only
    UpdateConfig {
        liquidity_zap: Option<String>,
        curve_pool: Option<String>,
        booster: Option<String>,
        bridge_router: Option<String>,
        destination_timelock: Option<u64>,
    },

    /// Queue a new bridge destination behind the timelock
    ///
    /// Authorization: Owner only
    QueueDestination { chain_id: u64, address: String },

    /// Promote the queued destination once the timelock has passed
    ///
    /// Authorization: Owner only
    ActivateDestination {},

    /// Authorization: Owner only
    CancelDestination {},

    // ========================================================================
    // Ownership
    // ========================================================================
    /// Authorization: Owner only
    PushOwnership { new_owner: String },

    /// Authorization: Pending owner only
    PullOwnership {},

    /// Authorization: Owner only
    RenounceOwnership {},

    // ========================================================================
    // Internal
    // ========================================================================
    /// Continuation steps dispatched by the contract to itself
    ///
    /// Authorization: Contract only
    Callback(CallbackMsg),
}

#[cw_serde]
pub enum CallbackMsg {
    /// Deposit freshly minted LP into the booster
    StakeLiquidity { pid: u64, lp_token: Addr },
    /// Burn unstaked LP for a single pool coin
    RemoveLiquidity {
        asset: Addr,
        lp_token: Addr,
        amount: Uint128,
        token_index: u8,
        min_amount_out: Uint128,
    },
    /// Account for the returned asset and send it over the bridge
    BridgeOut { asset: Addr },
    /// Sweep reward token balances to the collector
    SweepRewards {},
    /// End of a deposit or withdraw
    ReleaseLock {},
}

impl CallbackMsg {
    /// Wrap as a message from the contract to itself.
    pub fn into_cosmos_msg(self, contract: &Addr) -> StdResult<CosmosMsg> {
        Ok(WasmMsg::Execute {
            contract_addr: contract.to_string(),
            msg: to_json_binary(&ExecuteMsg::Callback(self))?,
            funds: vec![],
        }
        .into())
    }
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(OwnershipResponse)]
    Ownership {},

    #[returns(DestinationResponse)]
    Destination {},

    #[returns(TokenRecordResponse)]
    TokenRecord { asset: String },

    /// Paginated by asset address
    #[returns(TokenRecordsResponse)]
    TokenRecords {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    #[returns(RewardPoolsResponse)]
    RewardPools {},

    #[returns(RewardTokensResponse)]
    RewardTokens {},

    #[returns(TotalsResponse)]
    Totals {},

    /// Sum of rewards claimable by this contract across all reward pools
    #[returns(RewardsPendingResponse)]
    RewardsPending {},

    /// `amount` of `asset` normalized to 9 decimals
    #[returns(ValueResponse)]
    ValueOf { asset: String, amount: Uint128 },

    #[returns(OperationLockResponse)]
    OperationLock {},
}

// ============================================================================
// Response Types
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub liquidity_zap: Option<Addr>,
    pub curve_pool: Option<Addr>,
    pub booster: Option<Addr>,
    pub bridge_router: Option<Addr>,
    pub reward_collector: Option<Addr>,
    pub destination_timelock: u64,
}

#[cw_serde]
pub struct OwnershipResponse {
    pub owner: Option<Addr>,
    pub pending_owner: Option<Addr>,
}

#[cw_serde]
pub struct DestinationResponse {
    pub active: Option<Endpoint>,
    pub candidate: Option<Endpoint>,
    pub activation_height: Option<u64>,
}

#[cw_serde]
pub struct TokenRecordResponse {
    pub underlying: Addr,
    pub bridge_wrapped: Addr,
    pub deployed: Uint128,
    pub returned: Uint128,
}

#[cw_serde]
pub struct TokenRecordsResponse {
    pub tokens: Vec<TokenRecordResponse>,
}

#[cw_serde]
pub struct RewardPoolsResponse {
    pub entries: Vec<RewardPoolEntry>,
}

#[cw_serde]
pub struct RewardTokensResponse {
    pub tokens: Vec<AssetInfo>,
}

#[cw_serde]
pub struct TotalsResponse {
    pub value_deployed: Uint256,
    pub value_returned: Uint256,
}

#[cw_serde]
pub struct RewardsPendingResponse {
    pub pending: Uint256,
}

#[cw_serde]
pub struct ValueResponse {
    pub value: Uint256,
}

#[cw_serde]
pub struct OperationLockResponse {
    /// "deposit" or "withdraw" while an operation is in flight
    pub operation: Option<String>,
}
