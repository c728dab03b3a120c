//! Ownership transfer handlers.

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::OWNERSHIP;

/// Nominate `new_owner`. Ownership moves only once they pull it.
pub fn execute_push_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    if new_owner.trim().is_empty() {
        return Err(ContractError::InvalidAddress {
            reason: "New owner cannot be empty".to_string(),
        });
    }
    let candidate = deps.api.addr_validate(&new_owner)?;

    let ownership = OWNERSHIP
        .load(deps.storage)?
        .push(&info.sender, candidate.clone())?;
    OWNERSHIP.save(deps.storage, &ownership)?;

    Ok(Response::new()
        .add_attribute("method", "ownership_pushed")
        .add_attribute("owner", info.sender)
        .add_attribute("candidate", candidate))
}

pub fn execute_pull_ownership(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let previous = OWNERSHIP.load(deps.storage)?;
    let previous_owner = previous.owner().cloned();

    let ownership = previous.pull(&info.sender)?;
    OWNERSHIP.save(deps.storage, &ownership)?;

    Ok(Response::new()
        .add_attribute("method", "ownership_pulled")
        .add_attribute(
            "previous_owner",
            previous_owner.map(String::from).unwrap_or_default(),
        )
        .add_attribute("new_owner", info.sender))
}

/// Give up ownership for good. Owner-only operations are closed afterwards.
pub fn execute_renounce_ownership(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let ownership = OWNERSHIP.load(deps.storage)?.renounce(&info.sender)?;
    OWNERSHIP.save(deps.storage, &ownership)?;

    Ok(Response::new()
        .add_attribute("method", "ownership_renounced")
        .add_attribute("previous_owner", info.sender))
}
