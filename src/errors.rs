pub const ERR_UNAUTHORIZED: &str = "Unauthorized";
pub const ERR_PAUSED: &str = "Paused";
pub const ERR_REENTRANCY_VIOLATION: &str = "ReentrancyViolation";
pub const ERR_INVALID_POOL: &str = "InvalidPool";
pub const ERR_INVALID_RECIPIENT: &str = "InvalidRecipient";
pub const ERR_NOT_ELIGIBLE: &str = "NotEligible";
pub const ERR_TIME_LOCKED: &str = "TimeLocked";
pub const ERR_INVALID_AMOUNT: &str = "InvalidAmount";
pub const ERR_INSUFFICIENT_FUNDS: &str = "InsufficientFunds";
pub const ERR_BATCH_LIMIT_EXCEEDED: &str = "BatchLimitExceeded";
pub const ERR_INVALID_PROPOSAL: &str = "InvalidProposal";
pub const ERR_ALREADY_VOTED: &str = "AlreadyVoted";
pub const ERR_ALREADY_EXECUTED: &str = "AlreadyExecuted";
pub const ERR_QUORUM_NOT_MET: &str = "GovernanceQuorumNotMet";
pub const ERR_INVALID_ADDRESS: &str = "InvalidAddress";

/// Failures that can occur while the disbursement guard is held.
///
/// These are returned rather than raised so the guard is always released
/// before the transaction is failed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum DisbursementError {
    InvalidPool,
    InvalidRecipient,
    NotEligible,
    TimeLocked,
    InvalidAmount,
    InsufficientFunds,
}

impl DisbursementError {
    pub fn message(self) -> &'static str {
        match self {
            DisbursementError::InvalidPool => ERR_INVALID_POOL,
            DisbursementError::InvalidRecipient => ERR_INVALID_RECIPIENT,
            DisbursementError::NotEligible => ERR_NOT_ELIGIBLE,
            DisbursementError::TimeLocked => ERR_TIME_LOCKED,
            DisbursementError::InvalidAmount => ERR_INVALID_AMOUNT,
            DisbursementError::InsufficientFunds => ERR_INSUFFICIENT_FUNDS,
        }
    }
}
