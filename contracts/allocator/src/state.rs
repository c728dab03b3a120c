//! State definitions for the treasury allocator contract
//!
//! This module defines all storage structures and state items for the
//! allocator: collaborator configuration, token and reward registries,
//! aggregate accounting and the timelocked bridge destination.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128, Uint256};
use cw_storage_plus::{Item, Map};

use crate::error::ContractError;
use crate::ownership::Ownership;
use common::AssetInfo;

// ============================================================================
// Core Configuration
// ============================================================================

/// Collaborator addresses and tunables
#[cw_serde]
pub struct Config {
    /// Deposit zap used to add/remove pool liquidity
    pub liquidity_zap: Option<Addr>,
    /// Pool the zap operates on
    pub curve_pool: Option<Addr>,
    /// Yield booster holding staked LP positions
    pub booster: Option<Addr>,
    /// Router that moves assets to the bridge destination
    pub bridge_router: Option<Addr>,
    /// Recipient of harvested rewards
    pub reward_collector: Option<Addr>,
    /// Blocks between queueing and activating a bridge destination
    pub destination_timelock: u64,
}

impl Config {
    pub fn liquidity_zap(&self) -> Result<&Addr, ContractError> {
        required(&self.liquidity_zap, "liquidity_zap")
    }

    pub fn curve_pool(&self) -> Result<&Addr, ContractError> {
        required(&self.curve_pool, "curve_pool")
    }

    pub fn booster(&self) -> Result<&Addr, ContractError> {
        required(&self.booster, "booster")
    }

    pub fn bridge_router(&self) -> Result<&Addr, ContractError> {
        required(&self.bridge_router, "bridge_router")
    }

    pub fn reward_collector(&self) -> Result<&Addr, ContractError> {
        required(&self.reward_collector, "reward_collector")
    }
}

fn required<'a>(value: &'a Option<Addr>, field: &str) -> Result<&'a Addr, ContractError> {
    value.as_ref().ok_or(ContractError::ConfigurationMissing {
        field: field.to_string(),
    })
}

// ============================================================================
// Registries & Accounting
// ============================================================================

/// Per-asset allocation record
#[cw_serde]
pub struct TokenRecord {
    /// Asset held in reserve
    pub underlying: Addr,
    /// Bridge token wrapping `underlying`
    pub bridge_wrapped: Addr,
    /// Cumulative amount sent into the pool (never decreases)
    pub deployed: Uint128,
    /// Cumulative amount routed back out through the bridge (never decreases)
    pub returned: Uint128,
}

impl TokenRecord {
    pub fn new(underlying: Addr, bridge_wrapped: Addr) -> Self {
        Self {
            underlying,
            bridge_wrapped,
            deployed: Uint128::zero(),
            returned: Uint128::zero(),
        }
    }

    /// Deployed amount not yet matched by returns.
    pub fn outstanding(&self) -> Uint128 {
        self.deployed.saturating_sub(self.returned)
    }

    pub fn is_unwound(&self) -> bool {
        self.deployed <= self.returned
    }
}

/// A reward pool position tracked for harvesting
#[cw_serde]
pub struct RewardPoolEntry {
    pub reward_pool: Addr,
    pub pid: u64,
}

/// Aggregate normalized value (9 decimals) across all assets
#[cw_serde]
#[derive(Default)]
pub struct Totals {
    pub value_deployed: Uint256,
    pub value_returned: Uint256,
}

// ============================================================================
// Bridge Destination
// ============================================================================

/// Address and chain that bridged assets are sent to
#[cw_serde]
pub struct Endpoint {
    /// Recipient on the remote chain (hex or bech32, not validated locally)
    pub address: String,
    pub chain_id: u64,
}

/// Timelocked destination rotation
#[cw_serde]
pub enum BridgeDestination {
    Settled {
        active: Option<Endpoint>,
    },
    Rotating {
        active: Option<Endpoint>,
        candidate: Endpoint,
        activation_height: u64,
    },
}

impl BridgeDestination {
    pub fn active(&self) -> Option<&Endpoint> {
        match self {
            BridgeDestination::Settled { active } | BridgeDestination::Rotating { active, .. } => {
                active.as_ref()
            }
        }
    }

    /// Queue `candidate`, replacing any earlier candidate and restarting the timelock.
    pub fn queue(self, candidate: Endpoint, height: u64, timelock: u64) -> Self {
        let active = self.into_active();
        BridgeDestination::Rotating {
            active,
            candidate,
            activation_height: height.saturating_add(timelock),
        }
    }

    /// Promote the candidate once `height` reaches its activation height.
    pub fn activate(self, height: u64) -> Result<Self, ContractError> {
        match self {
            BridgeDestination::Settled { .. } => Err(ContractError::NoPendingDestination),
            BridgeDestination::Rotating {
                candidate,
                activation_height,
                ..
            } => {
                if height < activation_height {
                    return Err(ContractError::TimelockNotExpired {
                        remaining_blocks: activation_height - height,
                    });
                }
                Ok(BridgeDestination::Settled {
                    active: Some(candidate),
                })
            }
        }
    }

    pub fn cancel(self) -> Result<Self, ContractError> {
        match self {
            BridgeDestination::Settled { .. } => Err(ContractError::NoPendingDestination),
            BridgeDestination::Rotating { active, .. } => Ok(BridgeDestination::Settled { active }),
        }
    }

    fn into_active(self) -> Option<Endpoint> {
        match self {
            BridgeDestination::Settled { active } | BridgeDestination::Rotating { active, .. } => {
                active
            }
        }
    }
}

// ============================================================================
// Operation Lock
// ============================================================================

/// Multi-step operation currently in flight
#[cw_serde]
pub enum Operation {
    Deposit { asset: Addr, pid: u64 },
    Withdraw { asset: Addr, pid: u64 },
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Deposit { .. } => "deposit",
            Operation::Withdraw { .. } => "withdraw",
        }
    }
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:treasury-allocator";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default destination timelock (~24h at 6s blocks)
pub const DEFAULT_DESTINATION_TIMELOCK: u64 = 14_400;

/// Reference precision for normalized value accounting
pub const VALUE_DECIMALS: u8 = 9;

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

pub const OWNERSHIP: Item<Ownership> = Item::new("ownership");

pub const DESTINATION: Item<BridgeDestination> = Item::new("destination");

pub const TOTALS: Item<Totals> = Item::new("totals");

/// Key: underlying asset address, Value: TokenRecord
pub const TOKENS: Map<&Addr, TokenRecord> = Map::new("tokens");

/// Ordered (reward pool, pid) entries
pub const REWARD_POOLS: Item<Vec<RewardPoolEntry>> = Item::new("reward_pools");

/// Ordered reward assets swept on harvest
pub const REWARD_TOKENS: Item<Vec<AssetInfo>> = Item::new("reward_tokens");

/// Present only while a deposit or withdraw is in flight
pub const OPERATION_LOCK: Item<Operation> = Item::new("operation_lock");
