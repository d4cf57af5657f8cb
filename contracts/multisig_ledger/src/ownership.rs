//! Two-step owner handover: the owner nominates, the nominee claims.

use soroban_sdk::{Address, Env};

use crate::errors::MultisigError;
use crate::events;
use crate::registry;
use crate::types::DataKey;

pub fn pending_owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::PendingOwner)
}

pub fn nominate(env: &Env, caller: &Address, candidate: &Address) -> Result<(), MultisigError> {
    if registry::owner(env)? != *caller {
        return Err(MultisigError::UnauthorizedOwnerAction);
    }

    env.storage().instance().set(&DataKey::PendingOwner, candidate);
    events::ownership_nominated(env, caller, candidate);
    Ok(())
}

pub fn claim(env: &Env, caller: &Address) -> Result<(), MultisigError> {
    match pending_owner(env) {
        Some(nominee) if nominee == *caller => {
            let previous = registry::owner(env)?;
            registry::set_owner(env, caller);
            env.storage().instance().remove(&DataKey::PendingOwner);
            events::ownership_claimed(env, &previous, caller);
            Ok(())
        }
        _ => Err(MultisigError::UnauthorizedClaim),
    }
}
