//! Signer membership, owner identity and quorum.
//!
//! Everything here lives in instance storage and is written once by
//! [`init`]; only the owner changes afterwards, through the ownership module.

use soroban_sdk::{Address, Env, Vec};

use crate::errors::MultisigError;
use crate::types::DataKey;

pub fn require_initialized(env: &Env) -> Result<(), MultisigError> {
    if !env.storage().instance().has(&DataKey::Initialized) {
        return Err(MultisigError::NotInitialized);
    }
    Ok(())
}

pub fn init(
    env: &Env,
    owner: &Address,
    signers: &Vec<Address>,
    quorum: u32,
    token: &Address,
) -> Result<(), MultisigError> {
    if env.storage().instance().has(&DataKey::Initialized) {
        return Err(MultisigError::AlreadyInitialized);
    }

    if quorum == 0 {
        return Err(MultisigError::InvalidQuorum);
    }

    // Check for duplicate signers
    for i in 0..signers.len() {
        for j in (i + 1)..signers.len() {
            if signers.get_unchecked(i) == signers.get_unchecked(j) {
                return Err(MultisigError::DuplicateSigner);
            }
        }
    }

    // The owner signs without being listed.
    if quorum > signers.len() + 1 {
        return Err(MultisigError::QuorumExceedsSigners);
    }

    let storage = env.storage().instance();
    storage.set(&DataKey::Initialized, &true);
    storage.set(&DataKey::Owner, owner);
    storage.set(&DataKey::Signers, signers);
    storage.set(&DataKey::Quorum, &quorum);
    storage.set(&DataKey::Token, token);
    storage.set(&DataKey::TxCount, &0u64);

    for signer in signers.iter() {
        storage.set(&DataKey::Signer(signer), &true);
    }

    Ok(())
}

pub fn owner(env: &Env) -> Result<Address, MultisigError> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(MultisigError::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn signers(env: &Env) -> Result<Vec<Address>, MultisigError> {
    env.storage()
        .instance()
        .get(&DataKey::Signers)
        .ok_or(MultisigError::NotInitialized)
}

pub fn quorum(env: &Env) -> Result<u32, MultisigError> {
    env.storage()
        .instance()
        .get(&DataKey::Quorum)
        .ok_or(MultisigError::NotInitialized)
}

pub fn token(env: &Env) -> Result<Address, MultisigError> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(MultisigError::NotInitialized)
}

/// True for the current owner and for every listed signer.
pub fn is_signer(env: &Env, identity: &Address) -> Result<bool, MultisigError> {
    if owner(env)? == *identity {
        return Ok(true);
    }
    Ok(env
        .storage()
        .instance()
        .has(&DataKey::Signer(identity.clone())))
}

pub fn require_signer(env: &Env, identity: &Address) -> Result<(), MultisigError> {
    if !is_signer(env, identity)? {
        return Err(MultisigError::UnauthorizedSigner);
    }
    Ok(())
}
