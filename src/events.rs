multiversx_sc::imports!();

use crate::types::GovernanceAction;

#[multiversx_sc::module]
pub trait EventsModule {
    // ── Disbursements ──

    /// Audit trail: one entry per committed disbursement.
    #[event("disbursed")]
    fn disbursed_event(
        &self,
        #[indexed] id: u64,
        #[indexed] recipient: &ManagedAddress,
        #[indexed] pool_id: u64,
        amount: &BigUint,
    );

    // ── Administration ──

    #[event("poolConfigUpdated")]
    fn pool_config_updated_event(
        &self,
        #[indexed] pool_id: u64,
        #[indexed] evaluator: &ManagedAddress,
        #[indexed] active: bool,
        time_lock_blocks: u64,
    );

    #[event("poolRemoved")]
    fn pool_removed_event(&self, #[indexed] pool_id: u64);

    #[event("pausedChanged")]
    fn paused_changed_event(&self, #[indexed] paused: bool, #[indexed] block: u64);

    #[event("gatewaysUpdated")]
    fn gateways_updated_event(
        &self,
        #[indexed] recipient_directory: &ManagedAddress,
        #[indexed] funding_gateway: &ManagedAddress,
        #[indexed] weight_source: &ManagedAddress,
    );

    // ── Governance ──

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        #[indexed] action: GovernanceAction,
        end_block: u64,
    );

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] support: bool,
        weight: &BigUint,
    );

    #[event("proposalExecuted")]
    fn proposal_executed_event(
        &self,
        #[indexed] proposal_id: u64,
        #[indexed] action: GovernanceAction,
    );
}
