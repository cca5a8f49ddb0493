multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Ledger — append-only disbursement records
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum DisbursementStatus {
    Disbursed,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct DisbursementRecord<M: ManagedTypeApi> {
    pub id: u64,
    pub recipient: ManagedAddress<M>,
    pub pool_id: u64,
    pub amount: BigUint<M>,
    pub block: u64,
    pub timestamp: u64,
    pub status: DisbursementStatus,
    pub metadata: ManagedBuffer<M>,
}

/// Per (recipient, pool) state. Only a committed disbursement writes it.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct RecipientHistory<M: ManagedTypeApi> {
    pub last_disbursed_amount: BigUint<M>,
    pub cumulative_received: BigUint<M>,
    /// Block nonce of the last disbursement; the time-lock counts from here.
    pub last_disbursement_block: u64,
}

// ============================================================
// Pools
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct PoolConfig<M: ManagedTypeApi> {
    pub min_amount: BigUint<M>,
    pub max_amount: BigUint<M>,
    pub time_lock_blocks: u64,
    /// Eligibility gateway contract consulted for this pool.
    pub evaluator: ManagedAddress<M>,
    pub active: bool,
}

// ============================================================
// Collaborator payloads
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct RecipientProfile<M: ManagedTypeApi> {
    pub id: ManagedAddress<M>,
    pub verified: bool,
    pub achievements_digest: ManagedBuffer<M>,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub struct EvaluationDetail {
    pub score: u64,
    pub passed: bool,
    pub timestamp: u64,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct PoolEscrow<M: ManagedTypeApi> {
    pub amount: BigUint<M>,
    pub locked_until_block: u64,
}

// ============================================================
// Governance
// ============================================================

pub const PAUSE_ACTION: &str = "pause";
pub const UNPAUSE_ACTION: &str = "unpause";

/// Engine-wide effects a proposal can apply once executed.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum GovernanceAction {
    Pause,
    Unpause,
}

impl GovernanceAction {
    /// Resolves an action name as submitted by a proposer.
    pub fn from_name<M: ManagedTypeApi>(name: &ManagedBuffer<M>) -> Option<Self> {
        if *name == ManagedBuffer::<M>::from(PAUSE_ACTION) {
            Some(GovernanceAction::Pause)
        } else if *name == ManagedBuffer::<M>::from(UNPAUSE_ACTION) {
            Some(GovernanceAction::Unpause)
        } else {
            None
        }
    }
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct GovernanceProposal<M: ManagedTypeApi> {
    pub id: u64,
    pub proposer: ManagedAddress<M>,
    pub description: ManagedBuffer<M>,
    pub action: GovernanceAction,
    pub votes_for: BigUint<M>,
    pub votes_against: BigUint<M>,
    pub created_at: u64,
    /// First block at which voting is closed and execution is allowed.
    pub end_block: u64,
    pub executed: bool,
}

/// Lifecycle as seen from the outside. Only `executed` is stored;
/// the rest is derived from the current block and the tallies.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Voting window still open.
    Open,
    /// Window closed, quorum holds, waiting for someone to execute.
    Passed,
    /// Window closed without quorum.
    Rejected,
    /// Action applied. Terminal.
    Executed,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum VoteDirection {
    For,
    Against,
}

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct VoteRecord<M: ManagedTypeApi> {
    pub voter: ManagedAddress<M>,
    pub direction: VoteDirection,
    pub weight: BigUint<M>,
}
