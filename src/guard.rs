multiversx_sc::imports!();

use crate::errors::ERR_REENTRANCY_VIOLATION;

/// Single-flight lock around the disbursement critical section.
///
/// Not a queue: a second acquire while held is rejected on the spot.
/// Guards against a collaborator calling back into the engine during a
/// sync call; transactions themselves are already serialized.
#[multiversx_sc::module]
pub trait GuardModule {
    fn acquire_guard(&self) {
        require!(!self.reentrancy_locked().get(), ERR_REENTRANCY_VIOLATION);
        self.reentrancy_locked().set(true);
    }

    fn release_guard(&self) {
        self.reentrancy_locked().set(false);
    }

    #[view(isGuardLocked)]
    fn is_guard_locked(&self) -> bool {
        self.reentrancy_locked().get()
    }

    #[storage_mapper("reentrancyLocked")]
    fn reentrancy_locked(&self) -> SingleValueMapper<bool>;
}
