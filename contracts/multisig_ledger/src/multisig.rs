use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

use crate::errors::MultisigError;
use crate::types::Transaction;
use crate::{events, ledger, ownership, registry};

/// Shared account released by a quorum of signers.
///
/// The owner counts as a signer without being listed and is the only
/// identity that may hand the owner role over.
#[contract]
pub struct MultiSigLedger;

#[contractimpl]
impl MultiSigLedger {
    pub fn initialize(
        env: Env,
        owner: Address,
        signers: Vec<Address>,
        quorum: u32,
        token: Address,
    ) -> Result<(), MultisigError> {
        owner.require_auth();
        registry::init(&env, &owner, &signers, quorum, &token)?;
        events::initialized(&env, &owner, quorum);
        Ok(())
    }

    pub fn owner(env: Env) -> Result<Address, MultisigError> {
        registry::require_initialized(&env)?;
        registry::owner(&env)
    }

    pub fn get_signers(env: Env) -> Result<Vec<Address>, MultisigError> {
        registry::require_initialized(&env)?;
        registry::signers(&env)
    }

    pub fn quorum(env: Env) -> Result<u32, MultisigError> {
        registry::require_initialized(&env)?;
        registry::quorum(&env)
    }

    pub fn token(env: Env) -> Result<Address, MultisigError> {
        registry::require_initialized(&env)?;
        registry::token(&env)
    }

    pub fn is_signer(env: Env, identity: Address) -> Result<bool, MultisigError> {
        registry::require_initialized(&env)?;
        registry::is_signer(&env, &identity)
    }

    /// Proposes sending `amount` of the token to `recipient`. The proposer's
    /// signature is recorded immediately.
    pub fn initiate_transaction(
        env: Env,
        caller: Address,
        amount: i128,
        recipient: Address,
    ) -> Result<u64, MultisigError> {
        registry::require_initialized(&env)?;
        caller.require_auth();
        ledger::initiate(&env, &caller, amount, &recipient)
    }

    /// Signs transaction `id`; the signature that reaches quorum also
    /// releases the funds.
    pub fn approve_transaction(env: Env, caller: Address, id: u64) -> Result<(), MultisigError> {
        registry::require_initialized(&env)?;
        caller.require_auth();
        ledger::approve(&env, id, &caller)
    }

    pub fn has_signed(env: Env, id: u64, identity: Address) -> Result<bool, MultisigError> {
        registry::require_initialized(&env)?;
        Ok(ledger::has_signed(&env, id, &identity))
    }

    pub fn tx_count(env: Env) -> Result<u64, MultisigError> {
        registry::require_initialized(&env)?;
        Ok(ledger::tx_count(&env))
    }

    pub fn get_transaction(env: Env, id: u64) -> Result<Transaction, MultisigError> {
        registry::require_initialized(&env)?;
        ledger::load(&env, id)
    }

    pub fn get_all_transactions(env: Env) -> Result<Vec<Transaction>, MultisigError> {
        registry::require_initialized(&env)?;
        ledger::all(&env)
    }

    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        candidate: Address,
    ) -> Result<(), MultisigError> {
        registry::require_initialized(&env)?;
        caller.require_auth();
        ownership::nominate(&env, &caller, &candidate)
    }

    pub fn claim_ownership(env: Env, caller: Address) -> Result<(), MultisigError> {
        registry::require_initialized(&env)?;
        caller.require_auth();
        ownership::claim(&env, &caller)
    }

    pub fn pending_owner(env: Env) -> Result<Option<Address>, MultisigError> {
        registry::require_initialized(&env)?;
        Ok(ownership::pending_owner(&env))
    }
}
