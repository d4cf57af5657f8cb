use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MultisigError {
    NotInitialized = 0,
    AlreadyInitialized = 1,
    InvalidQuorum = 3,
    DuplicateSigner = 5,
    QuorumExceedsSigners = 7,
    ZeroAmount = 10,
    UnauthorizedSigner = 11,
    InvalidTransactionId = 12,
    DuplicateSignature = 13,
    TransactionAlreadyExecuted = 14,
    UnauthorizedOwnerAction = 20,
    UnauthorizedClaim = 21,
}

impl MultisigError {
    /// Stable, human readable cause of the failure.
    pub fn reason(&self) -> &'static str {
        match self {
            MultisigError::NotInitialized => "not initialized",
            MultisigError::AlreadyInitialized => "already initialized",
            MultisigError::InvalidQuorum => "invalid quorum",
            MultisigError::DuplicateSigner => "duplicate signer",
            MultisigError::QuorumExceedsSigners => "quorum exceeds signers",
            MultisigError::ZeroAmount => "no zero value allowed",
            MultisigError::UnauthorizedSigner => "not valid signer",
            MultisigError::InvalidTransactionId => "invalid transaction id",
            MultisigError::DuplicateSignature => "can't sign twice",
            MultisigError::TransactionAlreadyExecuted => "transaction already executed",
            MultisigError::UnauthorizedOwnerAction => "not owner",
            MultisigError::UnauthorizedClaim => "not nominee",
        }
    }
}
