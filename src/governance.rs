multiversx_sc::imports!();

use crate::engine_state;
use crate::errors::{
    ERR_ALREADY_EXECUTED, ERR_ALREADY_VOTED, ERR_INVALID_PROPOSAL, ERR_QUORUM_NOT_MET,
    ERR_UNAUTHORIZED,
};
use crate::events;
use crate::gateways::{ProxyWeightSource, WeightSource};
use crate::types::{GovernanceAction, GovernanceProposal, ProposalStatus, VoteDirection, VoteRecord};

/// Votes-for must be strictly greater than 51% of all votes cast.
pub const QUORUM_PERCENTAGE: u64 = 51;

pub const MAX_DESCRIPTION_LEN: usize = 512;

pub fn quorum_reached<M: ManagedTypeApi>(votes_for: &BigUint<M>, votes_against: &BigUint<M>) -> bool {
    let total = votes_for + votes_against;
    votes_for * 100u64 > total * QUORUM_PERCENTAGE
}

/// Token-weighted governance over engine-wide flags.
///
/// `Open` until `end_block`, then either executable (quorum holds) or
/// implicitly rejected. Execution happens at most once.
#[multiversx_sc::module]
pub trait GovernanceModule: engine_state::EngineStateModule + events::EventsModule {
    // ========================================================
    // ENDPOINTS
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(
        &self,
        description: ManagedBuffer,
        action: ManagedBuffer,
        duration_blocks: u64,
    ) -> u64 {
        let weights = ProxyWeightSource::new(self, self.weight_source().get());
        self.create_proposal_with(&weights, description, action, duration_blocks)
    }

    #[endpoint(vote)]
    fn vote(&self, proposal_id: u64, support: bool) {
        let weights = ProxyWeightSource::new(self, self.weight_source().get());
        self.vote_with(&weights, proposal_id, support);
    }

    #[endpoint(executeProposal)]
    fn execute_proposal(&self, proposal_id: u64) {
        require!(!self.proposals(proposal_id).is_empty(), ERR_INVALID_PROPOSAL);
        let mut proposal = self.proposals(proposal_id).get();

        let now = self.blockchain().get_block_nonce();
        require!(now >= proposal.end_block, ERR_INVALID_PROPOSAL);
        require!(!proposal.executed, ERR_ALREADY_EXECUTED);
        require!(
            quorum_reached(&proposal.votes_for, &proposal.votes_against),
            ERR_QUORUM_NOT_MET
        );

        proposal.executed = true;
        self.proposals(proposal_id).set(&proposal);

        match proposal.action {
            GovernanceAction::Pause => self.set_paused(true),
            GovernanceAction::Unpause => self.set_paused(false),
        }

        self.proposal_executed_event(proposal_id, proposal.action);
    }

    // ========================================================
    // WORKFLOW — weight source injected
    // ========================================================

    fn create_proposal_with<W: WeightSource<Self::Api>>(
        &self,
        weights: &W,
        description: ManagedBuffer,
        action: ManagedBuffer,
        duration_blocks: u64,
    ) -> u64 {
        let caller = self.blockchain().get_caller();
        require!(weights.weight_of(&caller) > 0u64, ERR_UNAUTHORIZED);

        // Unknown actions are refused here, before anything is stored.
        let action = match GovernanceAction::from_name(&action) {
            Some(action) => action,
            None => sc_panic!(ERR_INVALID_PROPOSAL),
        };
        require!(description.len() <= MAX_DESCRIPTION_LEN, ERR_INVALID_PROPOSAL);

        let now = self.blockchain().get_block_nonce();
        let end_block = match now.checked_add(duration_blocks) {
            Some(end_block) => end_block,
            None => sc_panic!(ERR_INVALID_PROPOSAL),
        };

        let proposal_id = self.proposal_count().get() + 1;
        let proposal = GovernanceProposal {
            id: proposal_id,
            proposer: caller.clone(),
            description,
            action,
            votes_for: BigUint::zero(),
            votes_against: BigUint::zero(),
            created_at: now,
            end_block,
            executed: false,
        };

        self.proposals(proposal_id).set(&proposal);
        self.proposal_count().set(proposal_id);

        self.proposal_created_event(proposal_id, &caller, action, end_block);

        proposal_id
    }

    fn vote_with<W: WeightSource<Self::Api>>(&self, weights: &W, proposal_id: u64, support: bool) {
        require!(!self.proposals(proposal_id).is_empty(), ERR_INVALID_PROPOSAL);
        let mut proposal = self.proposals(proposal_id).get();

        let now = self.blockchain().get_block_nonce();
        require!(now < proposal.end_block, ERR_INVALID_PROPOSAL);

        let caller = self.blockchain().get_caller();
        require!(!self.has_voted(proposal_id, &caller).get(), ERR_ALREADY_VOTED);

        let weight = weights.weight_of(&caller);
        let direction = if support {
            proposal.votes_for += &weight;
            VoteDirection::For
        } else {
            proposal.votes_against += &weight;
            VoteDirection::Against
        };

        self.vote_records(proposal_id).push(&VoteRecord {
            voter: caller.clone(),
            direction,
            weight: weight.clone(),
        });
        self.has_voted(proposal_id, &caller).set(true);
        self.proposals(proposal_id).set(&proposal);

        self.vote_event(proposal_id, &caller, support, &weight);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, proposal_id: u64) -> OptionalValue<GovernanceProposal<Self::Api>> {
        if self.proposals(proposal_id).is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(self.proposals(proposal_id).get())
        }
    }

    #[view(getProposalStatus)]
    fn get_proposal_status(&self, proposal_id: u64) -> OptionalValue<ProposalStatus> {
        if self.proposals(proposal_id).is_empty() {
            return OptionalValue::None;
        }
        let proposal = self.proposals(proposal_id).get();
        let status = if proposal.executed {
            ProposalStatus::Executed
        } else if self.blockchain().get_block_nonce() < proposal.end_block {
            ProposalStatus::Open
        } else if quorum_reached(&proposal.votes_for, &proposal.votes_against) {
            ProposalStatus::Passed
        } else {
            ProposalStatus::Rejected
        };
        OptionalValue::Some(status)
    }

    #[view(getProposals)]
    fn get_proposals(
        &self,
        from: u64,
        count: u64,
    ) -> MultiValueEncoded<GovernanceProposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_count().get();
        if count == 0 || total == 0 {
            return result;
        }
        let start = if from == 0 { 1u64 } else { from };
        if start > total {
            return result;
        }
        let end = core::cmp::min(start.saturating_add(count - 1), total);

        for proposal_id in start..=end {
            if !self.proposals(proposal_id).is_empty() {
                result.push(self.proposals(proposal_id).get());
            }
        }
        result
    }

    #[view(getProposalCount)]
    fn get_proposal_count(&self) -> u64 {
        self.proposal_count().get()
    }

    #[view(hasVoted)]
    fn has_account_voted(&self, proposal_id: u64, voter: ManagedAddress) -> bool {
        self.has_voted(proposal_id, &voter).get()
    }

    #[view(getVoteRecords)]
    fn get_vote_records(&self, proposal_id: u64) -> MultiValueEncoded<VoteRecord<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for record in self.vote_records(proposal_id).iter() {
            result.push(record);
        }
        result
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("proposalCount")]
    fn proposal_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, proposal_id: u64) -> SingleValueMapper<GovernanceProposal<Self::Api>>;

    #[storage_mapper("voteRecords")]
    fn vote_records(&self, proposal_id: u64) -> VecMapper<VoteRecord<Self::Api>>;

    #[storage_mapper("hasVoted")]
    fn has_voted(&self, proposal_id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;
}
