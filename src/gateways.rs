//! Capability interfaces for the collaborators the engine consumes.
//!
//! The workflow only ever sees these traits. On chain they are backed by
//! [`ProxyGateways`] and [`ProxyWeightSource`], which forward each call to
//! the configured collaborator contract; tests substitute their own
//! implementations.

multiversx_sc::imports!();

use crate::eligibility_proxy::EligibilityProxy;
use crate::funding_proxy::FundingProxy;
use crate::recipient_directory_proxy::RecipientDirectoryProxy;
use crate::types::{EvaluationDetail, PoolEscrow, RecipientProfile};
use crate::weight_source_proxy::WeightSourceProxy;

/// Everything a disbursement needs to know from outside the engine.
/// `None` stands for the collaborator's "not found" / "not evaluated".
pub trait DisbursementGateways<M: ManagedTypeApi> {
    fn recipient_profile(&self, recipient: &ManagedAddress<M>) -> Option<RecipientProfile<M>>;

    fn is_eligible(
        &self,
        evaluator: &ManagedAddress<M>,
        recipient: &ManagedAddress<M>,
        pool_id: u64,
    ) -> Option<bool>;

    fn evaluation_detail(
        &self,
        evaluator: &ManagedAddress<M>,
        recipient: &ManagedAddress<M>,
        pool_id: u64,
    ) -> Option<EvaluationDetail>;

    fn balance(&self) -> BigUint<M>;

    fn pool_escrow(&self, pool_id: u64) -> Option<PoolEscrow<M>>;

    /// Atomic withdrawal to the recipient. `false` means insufficient funds.
    fn withdraw(&self, amount: &BigUint<M>, recipient: &ManagedAddress<M>) -> bool;
}

/// Governance weight lookup. Zero is a valid answer (no voting power).
pub trait WeightSource<M: ManagedTypeApi> {
    fn weight_of(&self, account: &ManagedAddress<M>) -> BigUint<M>;
}

pub struct ProxyGateways<'a, C: ContractBase> {
    sc: &'a C,
    recipient_directory: ManagedAddress<C::Api>,
    funding_gateway: ManagedAddress<C::Api>,
}

impl<'a, C: ContractBase> ProxyGateways<'a, C> {
    pub fn new(
        sc: &'a C,
        recipient_directory: ManagedAddress<C::Api>,
        funding_gateway: ManagedAddress<C::Api>,
    ) -> Self {
        ProxyGateways {
            sc,
            recipient_directory,
            funding_gateway,
        }
    }
}

impl<C: ContractBase> DisbursementGateways<C::Api> for ProxyGateways<'_, C> {
    fn recipient_profile(
        &self,
        recipient: &ManagedAddress<C::Api>,
    ) -> Option<RecipientProfile<C::Api>> {
        let profile: OptionalValue<RecipientProfile<C::Api>> = self
            .sc
            .tx()
            .to(&self.recipient_directory)
            .typed(RecipientDirectoryProxy)
            .get_profile(recipient.clone())
            .returns(ReturnsResult)
            .sync_call_readonly();
        profile.into_option()
    }

    fn is_eligible(
        &self,
        evaluator: &ManagedAddress<C::Api>,
        recipient: &ManagedAddress<C::Api>,
        pool_id: u64,
    ) -> Option<bool> {
        let eligible: OptionalValue<bool> = self
            .sc
            .tx()
            .to(evaluator)
            .typed(EligibilityProxy)
            .evaluate(recipient.clone(), pool_id)
            .returns(ReturnsResult)
            .sync_call_readonly();
        eligible.into_option()
    }

    fn evaluation_detail(
        &self,
        evaluator: &ManagedAddress<C::Api>,
        recipient: &ManagedAddress<C::Api>,
        pool_id: u64,
    ) -> Option<EvaluationDetail> {
        let detail: OptionalValue<EvaluationDetail> = self
            .sc
            .tx()
            .to(evaluator)
            .typed(EligibilityProxy)
            .get_evaluation_detail(recipient.clone(), pool_id)
            .returns(ReturnsResult)
            .sync_call_readonly();
        detail.into_option()
    }

    fn balance(&self) -> BigUint<C::Api> {
        self.sc
            .tx()
            .to(&self.funding_gateway)
            .typed(FundingProxy)
            .get_balance()
            .returns(ReturnsResult)
            .sync_call_readonly()
    }

    fn pool_escrow(&self, pool_id: u64) -> Option<PoolEscrow<C::Api>> {
        let escrow: OptionalValue<PoolEscrow<C::Api>> = self
            .sc
            .tx()
            .to(&self.funding_gateway)
            .typed(FundingProxy)
            .get_pool_escrow(pool_id)
            .returns(ReturnsResult)
            .sync_call_readonly();
        escrow.into_option()
    }

    // Not readonly: the funding contract moves the funds.
    fn withdraw(&self, amount: &BigUint<C::Api>, recipient: &ManagedAddress<C::Api>) -> bool {
        self.sc
            .tx()
            .to(&self.funding_gateway)
            .typed(FundingProxy)
            .withdraw(amount.clone(), recipient.clone())
            .returns(ReturnsResult)
            .sync_call()
    }
}

pub struct ProxyWeightSource<'a, C: ContractBase> {
    sc: &'a C,
    weight_source: ManagedAddress<C::Api>,
}

impl<'a, C: ContractBase> ProxyWeightSource<'a, C> {
    pub fn new(sc: &'a C, weight_source: ManagedAddress<C::Api>) -> Self {
        ProxyWeightSource { sc, weight_source }
    }
}

impl<C: ContractBase> WeightSource<C::Api> for ProxyWeightSource<'_, C> {
    fn weight_of(&self, account: &ManagedAddress<C::Api>) -> BigUint<C::Api> {
        self.sc
            .tx()
            .to(&self.weight_source)
            .typed(WeightSourceProxy)
            .get_weight(account.clone())
            .returns(ReturnsResult)
            .sync_call_readonly()
    }
}
