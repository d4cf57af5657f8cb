//! Append-only transaction ledger and the per-transaction signature set.
//!
//! Transactions and signature records live in persistent storage keyed by
//! id; ids run from 1 to the instance-level `TxCount` and are never reused.

use soroban_sdk::{token, Address, Env, Vec};

use crate::errors::MultisigError;
use crate::events;
use crate::registry;
use crate::types::{DataKey, Transaction};

const DAY_IN_LEDGERS: u32 = 17_280;
const ENTRY_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const ENTRY_LIFETIME_THRESHOLD: u32 = ENTRY_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub fn tx_count(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::TxCount)
        .unwrap_or(0u64)
}

pub fn load(env: &Env, id: u64) -> Result<Transaction, MultisigError> {
    if id == 0 || id > tx_count(env) {
        return Err(MultisigError::InvalidTransactionId);
    }
    env.storage()
        .persistent()
        .get(&DataKey::Transaction(id))
        .ok_or(MultisigError::InvalidTransactionId)
}

pub fn all(env: &Env) -> Result<Vec<Transaction>, MultisigError> {
    let mut transactions = Vec::new(env);
    for id in 1..=tx_count(env) {
        transactions.push_back(load(env, id)?);
    }
    Ok(transactions)
}

pub fn has_signed(env: &Env, id: u64, signer: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Signed(id, signer.clone()))
        .unwrap_or(false)
}

/// Registers a new transaction carrying the proposer's signature.
pub fn initiate(
    env: &Env,
    proposer: &Address,
    amount: i128,
    recipient: &Address,
) -> Result<u64, MultisigError> {
    registry::require_signer(env, proposer)?;
    if amount <= 0 {
        return Err(MultisigError::ZeroAmount);
    }

    let id = tx_count(env) + 1;
    env.storage().instance().set(&DataKey::TxCount, &id);

    let transaction = Transaction {
        id,
        proposer: proposer.clone(),
        amount,
        recipient: recipient.clone(),
        executed: false,
        signature_count: 0,
    };

    events::proposed(env, &transaction);
    sign(env, transaction, proposer)?;

    Ok(id)
}

/// Adds `signer`'s signature to transaction `id`.
///
/// Validation order matters: a signer who already signed an executed
/// transaction sees `DuplicateSignature`, not `TransactionAlreadyExecuted`.
pub fn approve(env: &Env, id: u64, signer: &Address) -> Result<(), MultisigError> {
    let transaction = load(env, id)?;
    registry::require_signer(env, signer)?;

    if has_signed(env, id, signer) {
        return Err(MultisigError::DuplicateSignature);
    }

    if transaction.executed {
        return Err(MultisigError::TransactionAlreadyExecuted);
    }

    sign(env, transaction, signer)
}

fn sign(env: &Env, mut transaction: Transaction, signer: &Address) -> Result<(), MultisigError> {
    let id = transaction.id;
    let signed_key = DataKey::Signed(id, signer.clone());
    env.storage().persistent().set(&signed_key, &true);
    bump(env, &signed_key);

    transaction.signature_count += 1;
    events::approved(env, id, signer, transaction.signature_count);

    let quorum = registry::quorum(env)?;
    if transaction.signature_count >= quorum {
        transaction.executed = true;
        store(env, &transaction);
        release_funds(env, &transaction)?;
        events::executed(env, &transaction);
    } else {
        store(env, &transaction);
    }

    Ok(())
}

fn store(env: &Env, transaction: &Transaction) {
    let key = DataKey::Transaction(transaction.id);
    env.storage().persistent().set(&key, transaction);
    bump(env, &key);
}

fn bump(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, ENTRY_LIFETIME_THRESHOLD, ENTRY_BUMP_AMOUNT);
}

fn release_funds(env: &Env, transaction: &Transaction) -> Result<(), MultisigError> {
    let token_client = token::Client::new(env, &registry::token(env)?);

    // A failing transfer traps and rolls back the executed flag with it.
    token_client.transfer(
        &env.current_contract_address(),
        &transaction.recipient,
        &transaction.amount,
    );

    Ok(())
}
