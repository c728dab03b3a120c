//! Error types for the treasury allocator contract
//!
//! Every variant is fatal: the host discards all state changes and dispatched
//! messages of the enclosing transaction and surfaces the message verbatim.

use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    #[error("Unauthorized: only pending owner can pull ownership")]
    UnauthorizedCandidate,

    #[error("Unauthorized: callbacks may only be sent by the contract itself")]
    UnauthorizedCallback,

    #[error("No pending owner")]
    NoPendingOwner,

    // ========================================================================
    // Configuration Errors
    // ========================================================================

    #[error("Configuration missing: {field} is not set")]
    ConfigurationMissing { field: String },

    #[error("No active bridge destination")]
    NoActiveDestination,

    // ========================================================================
    // Validation Errors
    // ========================================================================

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    #[error("Invalid chain ID: {chain_id}")]
    InvalidChainId { chain_id: u64 },

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Pool token mismatch for pid {pid}: expected {expected}, booster reports {actual}")]
    PoolTokenMismatch {
        pid: u64,
        expected: String,
        actual: String,
    },

    #[error("Underlying mismatch: {bridge_wrapped} wraps {actual}, not {expected}")]
    UnderlyingMismatch {
        bridge_wrapped: String,
        expected: String,
        actual: String,
    },

    #[error("Token not registered: {token}")]
    TokenNotRegistered { token: String },

    #[error("Token still deployed: {token} has {outstanding} outstanding")]
    TokenStillDeployed { token: String, outstanding: Uint128 },

    #[error("Invalid reward pool: no reward pool registered for pid {pid}")]
    InvalidRewardPool { pid: u64 },

    #[error("Reward pool not found: {reward_pool} (pid {pid})")]
    RewardPoolNotFound { reward_pool: String, pid: u64 },

    #[error("No pending destination")]
    NoPendingDestination,

    #[error("Timelock not expired: {remaining_blocks} blocks remaining")]
    TimelockNotExpired { remaining_blocks: u64 },

    #[error("Operation in progress: {operation}")]
    OperationInProgress { operation: String },

    // ========================================================================
    // Arithmetic Errors
    // ========================================================================

    #[error("Arithmetic overflow: {operation}")]
    Overflow { operation: String },

    #[error("Arithmetic underflow: {operation}")]
    Underflow { operation: String },

    #[error("Division by zero")]
    DivideByZero,

    // ========================================================================
    // External Call Errors
    // ========================================================================

    #[error("Call to non-contract: {target}")]
    NotAContract { target: String },

    #[error("{reason}")]
    CallFailed { reason: String },

    #[error("Insufficient balance: needed {needed}, available {available}")]
    InsufficientBalance { needed: Uint128, available: Uint128 },

    #[error("Unknown reply id: {id}")]
    UnknownReply { id: u64 },

    // ========================================================================
    // Token Operation Errors
    // ========================================================================

    #[error("Token operation did not succeed: {operation} on {token}")]
    TokenOperationFailed { token: String, operation: String },

    #[error("Approve from non-zero to non-zero allowance")]
    AmbiguousApproval,
}

impl From<ContractError> for StdError {
    fn from(err: ContractError) -> Self {
        match err {
            ContractError::Std(err) => err,
            other => StdError::generic_err(other.to_string()),
        }
    }
}
