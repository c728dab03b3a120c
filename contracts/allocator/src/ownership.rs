//! Two-phase ownership.
//!
//! The owner pushes a candidate, and only that candidate can pull ownership.
//! Renouncing is terminal: no caller passes [`ensure_owner`] afterwards.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Storage};

use crate::error::ContractError;
use crate::state::OWNERSHIP;

#[cw_serde]
pub enum Ownership {
    Active { owner: Addr },
    PendingHandoff { owner: Addr, candidate: Addr },
    Renounced,
}

impl Ownership {
    pub fn owner(&self) -> Option<&Addr> {
        match self {
            Ownership::Active { owner } | Ownership::PendingHandoff { owner, .. } => Some(owner),
            Ownership::Renounced => None,
        }
    }

    pub fn candidate(&self) -> Option<&Addr> {
        match self {
            Ownership::PendingHandoff { candidate, .. } => Some(candidate),
            _ => None,
        }
    }

    pub fn is_owner(&self, sender: &Addr) -> bool {
        self.owner() == Some(sender)
    }

    /// Nominate `candidate`, replacing any earlier nomination.
    pub fn push(self, sender: &Addr, candidate: Addr) -> Result<Self, ContractError> {
        if !self.is_owner(sender) {
            return Err(ContractError::Unauthorized);
        }
        Ok(Ownership::PendingHandoff {
            owner: sender.clone(),
            candidate,
        })
    }

    pub fn pull(self, sender: &Addr) -> Result<Self, ContractError> {
        match self {
            Ownership::PendingHandoff { candidate, .. } => {
                if &candidate != sender {
                    return Err(ContractError::UnauthorizedCandidate);
                }
                Ok(Ownership::Active { owner: candidate })
            }
            _ => Err(ContractError::NoPendingOwner),
        }
    }

    pub fn renounce(self, sender: &Addr) -> Result<Self, ContractError> {
        if !self.is_owner(sender) {
            return Err(ContractError::Unauthorized);
        }
        Ok(Ownership::Renounced)
    }
}

/// Fails with `Unauthorized` unless `sender` is the current owner.
pub fn ensure_owner(storage: &dyn Storage, sender: &Addr) -> Result<(), ContractError> {
    let ownership = OWNERSHIP.load(storage)?;
    if !ownership.is_owner(sender) {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}
