use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Owner,
    PendingOwner,
    Signers,
    Signer(Address),
    Quorum,
    Token,
    TxCount,
    Transaction(u64),
    Signed(u64, Address),
}

/// A proposed transfer out of the shared account.
///
/// `signature_count` includes the proposer's own signature, so a freshly
/// initiated transaction always starts at 1.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transaction {
    pub id: u64,
    pub proposer: Address,
    pub amount: i128,
    pub recipient: Address,
    pub executed: bool,
    pub signature_count: u32,
}
