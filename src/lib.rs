#![no_std]

multiversx_sc::imports!();

pub mod engine_state;
pub mod errors;
pub mod events;
pub mod gateways;
pub mod governance;
pub mod guard;
pub mod ledger;
pub mod pools;
pub mod types;

pub mod eligibility_proxy;
pub mod funding_proxy;
pub mod recipient_directory_proxy;
pub mod weight_source_proxy;

use errors::{DisbursementError, ERR_BATCH_LIMIT_EXCEEDED, ERR_INVALID_AMOUNT};
use gateways::{DisbursementGateways, ProxyGateways};

// ============================================================
// Constants
// ============================================================

/// Maximum number of (recipient, amount) pairs in one batch.
pub const MAX_BATCH_SIZE: usize = 50;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait DisbursementEngine:
    engine_state::EngineStateModule
    + events::EventsModule
    + guard::GuardModule
    + ledger::LedgerModule
    + pools::PoolsModule
    + governance::GovernanceModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        recipient_directory: ManagedAddress,
        funding_gateway: ManagedAddress,
        weight_source: ManagedAddress,
    ) {
        self.store_gateways(recipient_directory, funding_gateway, weight_source);
        self.paused().set(false);
        self.reentrancy_locked().set(false);
        self.total_disbursed().set(BigUint::zero());
        self.disbursement_count().set(0u64);
        self.proposal_count().set(0u64);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: disburse
    // ========================================================

    #[endpoint(disburse)]
    fn disburse(
        &self,
        recipient: ManagedAddress,
        amount: BigUint,
        pool_id: u64,
        metadata: ManagedBuffer,
    ) -> u64 {
        let gateways = ProxyGateways::new(
            self,
            self.recipient_directory().get(),
            self.funding_gateway().get(),
        );
        self.disburse_with(&gateways, recipient, amount, pool_id, metadata)
    }

    // ========================================================
    // ENDPOINT: disburseBatch
    // Fail-fast: the first failing item fails the whole call.
    // ========================================================

    #[endpoint(disburseBatch)]
    fn disburse_batch(
        &self,
        pool_id: u64,
        metadata: ManagedBuffer,
        recipients: ManagedVec<ManagedAddress>,
        amounts: ManagedVec<BigUint>,
    ) -> ManagedVec<u64> {
        let gateways = ProxyGateways::new(
            self,
            self.recipient_directory().get(),
            self.funding_gateway().get(),
        );
        self.disburse_batch_with(&gateways, pool_id, metadata, recipients, amounts)
    }

    // ========================================================
    // WORKFLOW — collaborators injected
    // ========================================================

    fn disburse_with<G: DisbursementGateways<Self::Api>>(
        &self,
        gateways: &G,
        recipient: ManagedAddress,
        amount: BigUint,
        pool_id: u64,
        metadata: ManagedBuffer,
    ) -> u64 {
        self.require_not_paused();
        self.acquire_guard();

        let outcome = self.validate_and_commit(gateways, &recipient, &amount, pool_id, metadata);

        self.release_guard();
        match outcome {
            Ok(id) => id,
            Err(err) => sc_panic!(err.message()),
        }
    }

    fn disburse_batch_with<G: DisbursementGateways<Self::Api>>(
        &self,
        gateways: &G,
        pool_id: u64,
        metadata: ManagedBuffer,
        recipients: ManagedVec<ManagedAddress>,
        amounts: ManagedVec<BigUint>,
    ) -> ManagedVec<u64> {
        require!(recipients.len() <= MAX_BATCH_SIZE, ERR_BATCH_LIMIT_EXCEEDED);
        require!(recipients.len() == amounts.len(), ERR_INVALID_AMOUNT);

        let mut ids = ManagedVec::new();
        for index in 0..recipients.len() {
            let recipient = (*recipients.get(index)).clone();
            let amount = (*amounts.get(index)).clone();
            let id = self.disburse_with(gateways, recipient, amount, pool_id, metadata.clone());
            ids.push(id);
        }
        ids
    }

    /// Checks 3 to 10 of the disbursement order, then the commit.
    /// Must only run while the guard is held.
    fn validate_and_commit<G: DisbursementGateways<Self::Api>>(
        &self,
        gateways: &G,
        recipient: &ManagedAddress,
        amount: &BigUint,
        pool_id: u64,
        metadata: ManagedBuffer,
    ) -> Result<u64, DisbursementError> {
        let pool = self
            .active_pool(pool_id)
            .ok_or(DisbursementError::InvalidPool)?;

        let profile = gateways
            .recipient_profile(recipient)
            .ok_or(DisbursementError::InvalidRecipient)?;
        if !profile.verified {
            return Err(DisbursementError::InvalidRecipient);
        }

        if gateways.is_eligible(&pool.evaluator, recipient, pool_id) != Some(true) {
            return Err(DisbursementError::NotEligible);
        }
        let detail = gateways
            .evaluation_detail(&pool.evaluator, recipient, pool_id)
            .ok_or(DisbursementError::NotEligible)?;
        if !detail.passed {
            return Err(DisbursementError::NotEligible);
        }

        let now = self.blockchain().get_block_nonce();
        if let Some(release_block) =
            self.time_lock_release_block(recipient, pool_id, pool.time_lock_blocks)
        {
            if now < release_block {
                return Err(DisbursementError::TimeLocked);
            }
        }

        if *amount == 0u64 || *amount < pool.min_amount || *amount > pool.max_amount {
            return Err(DisbursementError::InvalidAmount);
        }

        if gateways.balance() < *amount {
            return Err(DisbursementError::InsufficientFunds);
        }

        let escrow = gateways
            .pool_escrow(pool_id)
            .ok_or(DisbursementError::InsufficientFunds)?;
        if escrow.amount < *amount {
            return Err(DisbursementError::InsufficientFunds);
        }
        if now < escrow.locked_until_block {
            return Err(DisbursementError::TimeLocked);
        }

        if !gateways.withdraw(amount, recipient) {
            return Err(DisbursementError::InsufficientFunds);
        }

        Ok(self.commit_disbursement(recipient, pool_id, amount, metadata))
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getEngineStats)]
    fn get_engine_stats(&self) -> MultiValue4<BigUint, u64, u64, bool> {
        (
            self.total_disbursed().get(),
            self.disbursement_count().get(),
            self.proposal_count().get(),
            self.paused().get(),
        )
            .into()
    }
}
