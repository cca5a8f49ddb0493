multiversx_sc::imports!();

use crate::engine_state;
use crate::events;
use crate::types::PoolConfig;

/// Pool registry. Only the owner writes; every domain check on the
/// configured values happens in the disbursement workflow.
#[multiversx_sc::module]
pub trait PoolsModule: engine_state::EngineStateModule + events::EventsModule {
    /// Creates or replaces a pool. Affects subsequent disbursements only.
    #[endpoint(updatePoolConfig)]
    fn update_pool_config(
        &self,
        pool_id: u64,
        min_amount: BigUint,
        max_amount: BigUint,
        time_lock_blocks: u64,
        evaluator: ManagedAddress,
        active: bool,
    ) {
        self.require_owner();

        self.pool_config_updated_event(pool_id, &evaluator, active, time_lock_blocks);

        let config = PoolConfig {
            min_amount,
            max_amount,
            time_lock_blocks,
            evaluator,
            active,
        };
        self.pool_configs(pool_id).set(&config);
        self.pool_ids().insert(pool_id);
    }

    #[endpoint(removePool)]
    fn remove_pool(&self, pool_id: u64) {
        self.require_owner();
        if self.pool_configs(pool_id).is_empty() {
            return;
        }

        self.pool_configs(pool_id).clear();
        self.pool_ids().swap_remove(&pool_id);
        self.pool_removed_event(pool_id);
    }

    fn active_pool(&self, pool_id: u64) -> Option<PoolConfig<Self::Api>> {
        if self.pool_configs(pool_id).is_empty() {
            return None;
        }
        let config = self.pool_configs(pool_id).get();
        if config.active {
            Some(config)
        } else {
            None
        }
    }

    #[view(getPoolConfig)]
    fn get_pool_config(&self, pool_id: u64) -> OptionalValue<PoolConfig<Self::Api>> {
        if self.pool_configs(pool_id).is_empty() {
            OptionalValue::None
        } else {
            OptionalValue::Some(self.pool_configs(pool_id).get())
        }
    }

    #[view(getPoolIds)]
    fn get_pool_ids(&self) -> MultiValueEncoded<u64> {
        let mut result = MultiValueEncoded::new();
        for pool_id in self.pool_ids().iter() {
            result.push(pool_id);
        }
        result
    }

    #[storage_mapper("poolConfigs")]
    fn pool_configs(&self, pool_id: u64) -> SingleValueMapper<PoolConfig<Self::Api>>;

    #[storage_mapper("poolIds")]
    fn pool_ids(&self) -> UnorderedSetMapper<u64>;
}
