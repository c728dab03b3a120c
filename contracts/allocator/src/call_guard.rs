//! Guarded calls to other contracts.
//!
//! Every state-changing call leaves as a `SubMsg::reply_always` whose reply id
//! names its [`CallSite`]. The `reply` entry point routes the result through
//! [`handle_reply`], which bubbles the callee's error verbatim (or the call
//! site's default message when the callee gave none) and checks token return
//! data. Read-only calls go through [`static_call`].

use cosmwasm_std::{
    from_json, to_json_binary, Addr, BankMsg, Binary, Coin, CosmosMsg, Event, QuerierWrapper,
    Reply, Response, SubMsg, WasmMsg,
};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ContractError;

/// Where a guarded call originates; doubles as the reply id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallSite {
    TokenTransfer,
    TokenTransferFrom,
    TokenApprove,
    TokenIncreaseAllowance,
    TokenDecreaseAllowance,
    TokenQuery,
    ZapAddLiquidity,
    ZapRemoveLiquidity,
    BoosterDeposit,
    BoosterPoolInfo,
    RewardPoolClaim,
    RewardPoolUnstake,
    RewardPoolEarned,
    BridgeUnderlying,
    BridgeRedeem,
    BridgeOut,
}

impl CallSite {
    pub const ALL: [CallSite; 16] = [
        CallSite::TokenTransfer,
        CallSite::TokenTransferFrom,
        CallSite::TokenApprove,
        CallSite::TokenIncreaseAllowance,
        CallSite::TokenDecreaseAllowance,
        CallSite::TokenQuery,
        CallSite::ZapAddLiquidity,
        CallSite::ZapRemoveLiquidity,
        CallSite::BoosterDeposit,
        CallSite::BoosterPoolInfo,
        CallSite::RewardPoolClaim,
        CallSite::RewardPoolUnstake,
        CallSite::RewardPoolEarned,
        CallSite::BridgeUnderlying,
        CallSite::BridgeRedeem,
        CallSite::BridgeOut,
    ];

    pub fn id(self) -> u64 {
        self as u64 + 1
    }

    pub fn from_id(id: u64) -> Option<Self> {
        Self::ALL.iter().copied().find(|site| site.id() == id)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CallSite::TokenTransfer => "token_transfer",
            CallSite::TokenTransferFrom => "token_transfer_from",
            CallSite::TokenApprove => "token_approve",
            CallSite::TokenIncreaseAllowance => "token_increase_allowance",
            CallSite::TokenDecreaseAllowance => "token_decrease_allowance",
            CallSite::TokenQuery => "token_query",
            CallSite::ZapAddLiquidity => "zap_add_liquidity",
            CallSite::ZapRemoveLiquidity => "zap_remove_liquidity",
            CallSite::BoosterDeposit => "booster_deposit",
            CallSite::BoosterPoolInfo => "booster_pool_info",
            CallSite::RewardPoolClaim => "reward_pool_claim",
            CallSite::RewardPoolUnstake => "reward_pool_unstake",
            CallSite::RewardPoolEarned => "reward_pool_earned",
            CallSite::BridgeUnderlying => "bridge_underlying",
            CallSite::BridgeRedeem => "bridge_redeem",
            CallSite::BridgeOut => "bridge_out",
        }
    }

    /// Failure reason used when the callee reverts without one.
    pub fn default_error(self) -> &'static str {
        match self {
            CallSite::TokenTransfer => "SafeERC20: transfer failed",
            CallSite::TokenTransferFrom => "SafeERC20: transferFrom failed",
            CallSite::TokenApprove => "SafeERC20: approve failed",
            CallSite::TokenIncreaseAllowance => "SafeERC20: increase allowance failed",
            CallSite::TokenDecreaseAllowance => "SafeERC20: decrease allowance failed",
            CallSite::TokenQuery => "SafeERC20: token query failed",
            CallSite::ZapAddLiquidity => "Allocator: add liquidity failed",
            CallSite::ZapRemoveLiquidity => "Allocator: remove liquidity failed",
            CallSite::BoosterDeposit => "Allocator: booster deposit failed",
            CallSite::BoosterPoolInfo => "Allocator: pool info lookup failed",
            CallSite::RewardPoolClaim => "Allocator: reward claim failed",
            CallSite::RewardPoolUnstake => "Allocator: unstake failed",
            CallSite::RewardPoolEarned => "Allocator: earned lookup failed",
            CallSite::BridgeUnderlying => "Allocator: underlying lookup failed",
            CallSite::BridgeRedeem => "Allocator: bridge redeem failed",
            CallSite::BridgeOut => "Allocator: bridge transfer failed",
        }
    }

    pub fn is_token_op(self) -> bool {
        matches!(
            self,
            CallSite::TokenTransfer
                | CallSite::TokenTransferFrom
                | CallSite::TokenApprove
                | CallSite::TokenIncreaseAllowance
                | CallSite::TokenDecreaseAllowance
        )
    }
}

/// Fails with `NotAContract` if no contract is instantiated at `target`.
pub fn ensure_contract(querier: &QuerierWrapper, target: &Addr) -> Result<(), ContractError> {
    querier
        .query_wasm_contract_info(target)
        .map(|_| ())
        .map_err(|_| ContractError::NotAContract {
            target: target.to_string(),
        })
}

/// Execute `msg` on `target`, forwarding `funds`.
pub fn call<M: Serialize>(
    querier: &QuerierWrapper,
    target: &Addr,
    msg: &M,
    funds: Vec<Coin>,
    site: CallSite,
) -> Result<SubMsg, ContractError> {
    ensure_contract(querier, target)?;
    let execute = WasmMsg::Execute {
        contract_addr: target.to_string(),
        msg: to_json_binary(msg)?,
        funds,
    };
    Ok(SubMsg::reply_always(execute, site.id()))
}

/// Read-only smart query against `target`.
pub fn static_call<Q: Serialize, T: DeserializeOwned>(
    querier: &QuerierWrapper,
    target: &Addr,
    query: &Q,
    site: CallSite,
) -> Result<T, ContractError> {
    ensure_contract(querier, target)?;
    querier
        .query_wasm_smart(target, query)
        .map_err(|e| ContractError::CallFailed {
            reason: failure_reason(e.to_string(), site),
        })
}

/// Send native `amount` from `contract` to `recipient`.
pub fn send_value(
    querier: &QuerierWrapper,
    contract: &Addr,
    recipient: &Addr,
    amount: Coin,
) -> Result<CosmosMsg, ContractError> {
    let available = querier.query_balance(contract, &amount.denom)?.amount;
    if available < amount.amount {
        return Err(ContractError::InsufficientBalance {
            needed: amount.amount,
            available,
        });
    }
    Ok(BankMsg::Send {
        to_address: recipient.to_string(),
        amount: vec![amount],
    }
    .into())
}

/// Completion of a guarded call.
pub fn handle_reply(msg: Reply) -> Result<Response, ContractError> {
    let site = CallSite::from_id(msg.id).ok_or(ContractError::UnknownReply { id: msg.id })?;

    let response = msg
        .result
        .into_result()
        .map_err(|reason| ContractError::CallFailed {
            reason: failure_reason(reason, site),
        })?;

    if site.is_token_op() {
        let data = response.data.map(unwrap_execute_data);
        if !returned_success(data.as_ref()) {
            return Err(ContractError::TokenOperationFailed {
                token: callee_address(&response.events).unwrap_or_else(|| "unknown".to_string()),
                operation: site.as_str().to_string(),
            });
        }
    }

    Ok(Response::new()
        .add_attribute("method", "reply")
        .add_attribute("call_site", site.as_str()))
}

fn failure_reason(reason: String, site: CallSite) -> String {
    if reason.trim().is_empty() {
        site.default_error().to_string()
    } else {
        reason
    }
}

/// Strips the `MsgExecuteContractResponse` envelope the host puts around
/// execute data. Data that does not parse as one is taken as-is.
fn unwrap_execute_data(data: Binary) -> Binary {
    match cw_utils::parse_execute_response_data(data.as_slice()) {
        Ok(parsed) => parsed.data.unwrap_or_default(),
        Err(_) => data,
    }
}

/// Empty return data counts as success; anything else must be JSON `true`.
fn returned_success(data: Option<&Binary>) -> bool {
    match data {
        None => true,
        Some(bytes) if bytes.is_empty() => true,
        Some(bytes) => from_json::<bool>(bytes).unwrap_or(false),
    }
}

fn callee_address(events: &[Event]) -> Option<String> {
    events
        .iter()
        .filter(|event| event.ty == "execute")
        .flat_map(|event| event.attributes.iter())
        .find(|attr| attr.key == "_contract_address")
        .map(|attr| attr.value.clone())
}
