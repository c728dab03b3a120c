//! Configuration handlers.
//!
//! This module handles:
//! - Reward collector and collaborator addresses
//! - Timelocked bridge destination rotation (queue/activate/cancel)

use cosmwasm_std::{DepsMut, Env, MessageInfo, Response};

use crate::error::ContractError;
use crate::ownership::ensure_owner;
use crate::state::{Endpoint, CONFIG, DESTINATION};

// ============================================================================
// Collaborators
// ============================================================================

pub fn execute_set_reward_collector(
    deps: DepsMut,
    info: MessageInfo,
    collector: String,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info.sender)?;

    let collector = deps.api.addr_validate(&collector)?;
    let mut config = CONFIG.load(deps.storage)?;
    config.reward_collector = Some(collector.clone());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "set_reward_collector")
        .add_attribute("collector", collector))
}

pub fn execute_update_config(
    deps: DepsMut,
    info: MessageInfo,
    liquidity_zap: Option<String>,
    curve_pool: Option<String>,
    booster: Option<String>,
    bridge_router: Option<String>,
    destination_timelock: Option<u64>,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info.sender)?;

    let mut config = CONFIG.load(deps.storage)?;
    let mut response = Response::new().add_attribute("method", "update_config");

    if let Some(addr) = liquidity_zap {
        let addr = deps.api.addr_validate(&addr)?;
        response = response.add_attribute("liquidity_zap", addr.as_str());
        config.liquidity_zap = Some(addr);
    }
    if let Some(addr) = curve_pool {
        let addr = deps.api.addr_validate(&addr)?;
        response = response.add_attribute("curve_pool", addr.as_str());
        config.curve_pool = Some(addr);
    }
    if let Some(addr) = booster {
        let addr = deps.api.addr_validate(&addr)?;
        response = response.add_attribute("booster", addr.as_str());
        config.booster = Some(addr);
    }
    if let Some(addr) = bridge_router {
        let addr = deps.api.addr_validate(&addr)?;
        response = response.add_attribute("bridge_router", addr.as_str());
        config.bridge_router = Some(addr);
    }
    if let Some(blocks) = destination_timelock {
        response = response.add_attribute("destination_timelock", blocks.to_string());
        config.destination_timelock = blocks;
    }

    CONFIG.save(deps.storage, &config)?;
    Ok(response)
}

// ============================================================================
// Bridge Destination
// ============================================================================

/// Validate a remote endpoint. The address is opaque to this chain, so only
/// emptiness is checked.
pub fn validate_endpoint(endpoint: &Endpoint) -> Result<(), ContractError> {
    if endpoint.chain_id == 0 {
        return Err(ContractError::InvalidChainId {
            chain_id: endpoint.chain_id,
        });
    }
    if endpoint.address.trim().is_empty() {
        return Err(ContractError::InvalidAddress {
            reason: "Destination address cannot be empty".to_string(),
        });
    }
    Ok(())
}

/// Queue a destination, activatable `destination_timelock` blocks from now.
pub fn execute_queue_destination(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    chain_id: u64,
    address: String,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info.sender)?;

    let candidate = Endpoint { address, chain_id };
    validate_endpoint(&candidate)?;

    let timelock = CONFIG.load(deps.storage)?.destination_timelock;
    let destination = DESTINATION.load(deps.storage)?.queue(
        candidate.clone(),
        env.block.height,
        timelock,
    );
    DESTINATION.save(deps.storage, &destination)?;

    Ok(Response::new()
        .add_attribute("method", "queue_destination")
        .add_attribute("address", candidate.address)
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute(
            "activation_height",
            env.block.height.saturating_add(timelock).to_string(),
        ))
}

pub fn execute_activate_destination(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info.sender)?;

    let destination = DESTINATION.load(deps.storage)?.activate(env.block.height)?;
    DESTINATION.save(deps.storage, &destination)?;

    let mut response = Response::new().add_attribute("method", "activate_destination");
    if let Some(active) = destination.active() {
        response = response
            .add_attribute("address", active.address.as_str())
            .add_attribute("chain_id", active.chain_id.to_string());
    }
    Ok(response)
}

pub fn execute_cancel_destination(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info.sender)?;

    let destination = DESTINATION.load(deps.storage)?.cancel()?;
    DESTINATION.save(deps.storage, &destination)?;

    Ok(Response::new().add_attribute("method", "cancel_destination"))
}
