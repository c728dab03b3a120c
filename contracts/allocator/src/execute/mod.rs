//! Execute handlers for the treasury allocator contract.
//!
//! This module contains all execute message handlers, organized by category:
//! - `allocation` - Deposit and Withdraw with their callback steps
//! - `rewards` - Reward registry maintenance and harvesting
//! - `tokens` - Token registration and bridge-wrapped redemption
//! - `config` - Collaborator addresses and the bridge destination
//! - `admin` - Ownership transfer

mod admin;
mod allocation;
mod config;
mod rewards;
mod tokens;

pub use admin::*;
pub use allocation::*;
pub use config::*;
pub use rewards::*;
pub use tokens::*;

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response};

use crate::error::ContractError;
use crate::msg::CallbackMsg;

/// Route a self-callback to its handler.
pub fn execute_callback(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: CallbackMsg,
) -> Result<Response, ContractError> {
    if info.sender != env.contract.address {
        return Err(ContractError::UnauthorizedCallback);
    }

    match msg {
        CallbackMsg::StakeLiquidity { pid, lp_token } => {
            callback_stake_liquidity(deps, env, pid, lp_token)
        }
        CallbackMsg::RemoveLiquidity {
            asset,
            lp_token,
            amount,
            token_index,
            min_amount_out,
        } => callback_remove_liquidity(
            deps,
            env,
            asset,
            lp_token,
            amount,
            token_index,
            min_amount_out,
        ),
        CallbackMsg::BridgeOut { asset } => callback_bridge_out(deps, env, asset),
        CallbackMsg::SweepRewards {} => callback_sweep_rewards(deps, env),
        CallbackMsg::ReleaseLock {} => callback_release_lock(deps),
    }
}
