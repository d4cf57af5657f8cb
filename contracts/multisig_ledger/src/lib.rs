#![no_std]

mod errors;
mod events;
mod ledger;
mod multisig;
mod ownership;
mod registry;
mod types;

pub use errors::MultisigError;
pub use multisig::{MultiSigLedger, MultiSigLedgerClient};
pub use types::Transaction;
