multiversx_sc::imports!();

use crate::errors::{ERR_INVALID_ADDRESS, ERR_PAUSED, ERR_UNAUTHORIZED};
use crate::events;

/// Engine-wide flags and collaborator wiring. The deployer is the owner.
#[multiversx_sc::module]
pub trait EngineStateModule: events::EventsModule {
    // ========================================================
    // ADMIN — owner only
    // ========================================================

    #[endpoint(pause)]
    fn pause(&self) {
        self.require_owner();
        self.set_paused(true);
    }

    #[endpoint(unpause)]
    fn unpause(&self) {
        self.require_owner();
        self.set_paused(false);
    }

    #[endpoint(setGateways)]
    fn set_gateways(
        &self,
        recipient_directory: ManagedAddress,
        funding_gateway: ManagedAddress,
        weight_source: ManagedAddress,
    ) {
        self.require_owner();
        self.store_gateways(recipient_directory, funding_gateway, weight_source);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn store_gateways(
        &self,
        recipient_directory: ManagedAddress,
        funding_gateway: ManagedAddress,
        weight_source: ManagedAddress,
    ) {
        require!(!recipient_directory.is_zero(), ERR_INVALID_ADDRESS);
        require!(!funding_gateway.is_zero(), ERR_INVALID_ADDRESS);
        require!(!weight_source.is_zero(), ERR_INVALID_ADDRESS);

        self.gateways_updated_event(&recipient_directory, &funding_gateway, &weight_source);

        self.recipient_directory().set(recipient_directory);
        self.funding_gateway().set(funding_gateway);
        self.weight_source().set(weight_source);
    }

    /// Shared by the owner endpoints and executed governance proposals.
    fn set_paused(&self, paused: bool) {
        self.paused().set(paused);
        self.paused_changed_event(paused, self.blockchain().get_block_nonce());
    }

    fn require_owner(&self) {
        require!(
            self.blockchain().get_caller() == self.blockchain().get_owner_address(),
            ERR_UNAUTHORIZED
        );
    }

    fn require_not_paused(&self) {
        require!(!self.paused().get(), ERR_PAUSED);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(isPaused)]
    fn is_paused(&self) -> bool {
        self.paused().get()
    }

    #[view(getGateways)]
    fn get_gateways(&self) -> MultiValue3<ManagedAddress, ManagedAddress, ManagedAddress> {
        (
            self.recipient_directory().get(),
            self.funding_gateway().get(),
            self.weight_source().get(),
        )
            .into()
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("paused")]
    fn paused(&self) -> SingleValueMapper<bool>;

    #[storage_mapper("recipientDirectory")]
    fn recipient_directory(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("fundingGateway")]
    fn funding_gateway(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("weightSource")]
    fn weight_source(&self) -> SingleValueMapper<ManagedAddress>;
}
