multiversx_sc::imports!();

use crate::events;
use crate::types::{DisbursementRecord, DisbursementStatus, RecipientHistory};

/// Append-only disbursement ledger plus the per (recipient, pool) history
/// the time-lock is measured against.
#[multiversx_sc::module]
pub trait LedgerModule: events::EventsModule {
    /// Writes record, history and counters for one disbursement.
    /// Callers must have run every validation first; nothing here fails.
    fn commit_disbursement(
        &self,
        recipient: &ManagedAddress,
        pool_id: u64,
        amount: &BigUint,
        metadata: ManagedBuffer,
    ) -> u64 {
        let id = self.disbursement_count().get() + 1;
        let block = self.blockchain().get_block_nonce();

        let record = DisbursementRecord {
            id,
            recipient: recipient.clone(),
            pool_id,
            amount: amount.clone(),
            block,
            timestamp: self.blockchain().get_block_timestamp(),
            status: DisbursementStatus::Disbursed,
            metadata,
        };
        self.disbursements(id).set(&record);
        self.disbursement_count().set(id);

        let history_mapper = self.recipient_history(recipient, pool_id);
        let cumulative_received = if history_mapper.is_empty() {
            amount.clone()
        } else {
            history_mapper.get().cumulative_received + amount
        };
        history_mapper.set(&RecipientHistory {
            last_disbursed_amount: amount.clone(),
            cumulative_received,
            last_disbursement_block: block,
        });

        self.total_disbursed().update(|total| *total += amount);

        self.disbursed_event(id, recipient, pool_id, amount);

        id
    }

    /// First block at which `recipient` may receive from `pool_id` again.
    /// `None` if nothing was ever disbursed for that key.
    fn time_lock_release_block(
        &self,
        recipient: &ManagedAddress,
        pool_id: u64,
        time_lock_blocks: u64,
    ) -> Option<u64> {
        let history_mapper = self.recipient_history(recipient, pool_id);
        if history_mapper.is_empty() {
            return None;
        }
        Some(
            history_mapper
                .get()
                .last_disbursement_block
                .saturating_add(time_lock_blocks),
        )
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getDisbursement)]
    fn get_disbursement(&self, id: u64) -> OptionalValue<DisbursementRecord<Self::Api>> {
        if self.disbursements(id).is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(self.disbursements(id).get())
        }
    }

    #[view(getRecipientHistory)]
    fn get_recipient_history(
        &self,
        recipient: ManagedAddress,
        pool_id: u64,
    ) -> OptionalValue<RecipientHistory<Self::Api>> {
        let history_mapper = self.recipient_history(&recipient, pool_id);
        if history_mapper.is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(history_mapper.get())
        }
    }

    #[view(getTotalDisbursed)]
    fn get_total_disbursed(&self) -> BigUint {
        self.total_disbursed().get()
    }

    #[view(getDisbursementCount)]
    fn get_disbursement_count(&self) -> u64 {
        self.disbursement_count().get()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("disbursementCount")]
    fn disbursement_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("disbursements")]
    fn disbursements(&self, id: u64) -> SingleValueMapper<DisbursementRecord<Self::Api>>;

    #[storage_mapper("recipientHistory")]
    fn recipient_history(
        &self,
        recipient: &ManagedAddress,
        pool_id: u64,
    ) -> SingleValueMapper<RecipientHistory<Self::Api>>;

    #[storage_mapper("totalDisbursed")]
    fn total_disbursed(&self) -> SingleValueMapper<BigUint>;
}
