use soroban_sdk::{contractevent, log, Address, Env};

use crate::types::Transaction;

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Initialized {
    #[topic]
    pub owner: Address,
    pub quorum: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Proposed {
    #[topic]
    pub id: u64,
    pub proposer: Address,
    pub recipient: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Approved {
    #[topic]
    pub id: u64,
    pub signer: Address,
    pub signature_count: u32,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Executed {
    #[topic]
    pub id: u64,
    pub recipient: Address,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Nominated {
    #[topic]
    pub owner: Address,
    pub candidate: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Claimed {
    #[topic]
    pub previous: Address,
    pub owner: Address,
}

pub fn initialized(env: &Env, owner: &Address, quorum: u32) {
    log!(env, "multisig initialized", owner.clone(), quorum);
    Initialized {
        owner: owner.clone(),
        quorum,
    }
    .publish(env);
}

pub fn proposed(env: &Env, transaction: &Transaction) {
    log!(env, "transaction proposed", transaction.id, transaction.amount);
    Proposed {
        id: transaction.id,
        proposer: transaction.proposer.clone(),
        recipient: transaction.recipient.clone(),
        amount: transaction.amount,
    }
    .publish(env);
}

pub fn approved(env: &Env, id: u64, signer: &Address, signature_count: u32) {
    log!(env, "transaction signed", id, signer.clone(), signature_count);
    Approved {
        id,
        signer: signer.clone(),
        signature_count,
    }
    .publish(env);
}

pub fn executed(env: &Env, transaction: &Transaction) {
    log!(env, "transaction executed", transaction.id);
    Executed {
        id: transaction.id,
        recipient: transaction.recipient.clone(),
        amount: transaction.amount,
    }
    .publish(env);
}

pub fn ownership_nominated(env: &Env, owner: &Address, candidate: &Address) {
    log!(env, "ownership nominated", candidate.clone());
    Nominated {
        owner: owner.clone(),
        candidate: candidate.clone(),
    }
    .publish(env);
}

pub fn ownership_claimed(env: &Env, previous: &Address, owner: &Address) {
    log!(env, "ownership claimed", owner.clone());
    Claimed {
        previous: previous.clone(),
        owner: owner.clone(),
    }
    .publish(env);
}
