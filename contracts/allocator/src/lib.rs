//! Treasury Allocator Contract - Reserve Deployment into a Stable Pool
//!
//! This contract moves reserve assets into a multi-coin liquidity pool,
//! stakes the resulting LP position with a yield booster and later unwinds
//! it, bridging the recovered assets to a timelocked remote destination.
//!
//! # Deposit Flow
//! 1. Owner calls `Deposit`; the booster's pool token is checked against the
//!    expected one and the pid's reward pool is registered
//! 2. The asset is approved to the liquidity zap, which mints LP
//! 3. A self-callback stakes the minted LP with the booster
//!
//! # Withdraw Flow
//! 1. Owner calls `Withdraw`; LP is unstaked from the pid's reward pool
//! 2. A self-callback burns the LP for a single pool coin
//! 3. A final self-callback accounts for the returned asset and sends it
//!    through the bridge router to the active destination
//!
//! # Security
//! - Two-phase ownership transfer
//! - Every outgoing call is guarded: non-contract targets are rejected and
//!   callee errors are bubbled verbatim through the reply entry point
//! - CW20 calls must report success, and approvals never move a non-zero
//!   allowance to another non-zero value
//! - One deposit or withdraw in flight at a time
//! - Bridge destination changes are timelocked

pub mod call_guard;
pub mod contract;
pub mod error;
mod execute;
pub mod interfaces;
pub mod math;
pub mod msg;
pub mod ownership;
mod query;
pub mod registry;
pub mod state;
pub mod token_guard;
pub mod valuation;

pub use crate::call_guard::CallSite;
pub use crate::error::ContractError;
pub use crate::ownership::Ownership;
