#![allow(dead_code)]

use multiversx_sc::types::{Address, BigUint, ManagedAddress, ManagedBuffer};
use multiversx_sc_scenario::{
    api::DebugApi, managed_address, managed_biguint, rust_biguint, whitebox_legacy::*,
};

use disbursement_engine::gateways::{DisbursementGateways, WeightSource};
use disbursement_engine::pools::PoolsModule;
use disbursement_engine::types::{EvaluationDetail, PoolEscrow, RecipientProfile};
use disbursement_engine::DisbursementEngine;

pub const WASM_PATH: &str = "output/disbursement-engine.wasm";

pub const POOL_ID: u64 = 7;
pub const POOL_MIN: u64 = 100;
pub const POOL_MAX: u64 = 1_000;
pub const POOL_TIME_LOCK: u64 = 100;
pub const START_BLOCK: u64 = 1_000;

pub type EngineContract = disbursement_engine::ContractObj<DebugApi>;

pub struct EngineSetup<Builder>
where
    Builder: 'static + Copy + Fn() -> EngineContract,
{
    pub world: BlockchainStateWrapper,
    pub owner: Address,
    pub recipient: Address,
    pub second_recipient: Address,
    pub voter_for: Address,
    pub voter_against: Address,
    pub outsider: Address,
    pub evaluator: Address,
    pub engine: ContractObjWrapper<EngineContract, Builder>,
}

/// Deploys the engine with one active pool
/// {min = 100, max = 1000, time lock = 100 blocks} and moves to block 1000.
pub fn setup<Builder>(builder: Builder) -> EngineSetup<Builder>
where
    Builder: 'static + Copy + Fn() -> EngineContract,
{
    let rust_zero = rust_biguint!(0u64);
    let mut world = BlockchainStateWrapper::new();

    let owner = world.create_user_account(&rust_zero);
    let recipient = world.create_user_account(&rust_zero);
    let second_recipient = world.create_user_account(&rust_zero);
    let voter_for = world.create_user_account(&rust_zero);
    let voter_against = world.create_user_account(&rust_zero);
    let outsider = world.create_user_account(&rust_zero);
    let evaluator = world.create_user_account(&rust_zero);
    let directory = world.create_user_account(&rust_zero);
    let funding = world.create_user_account(&rust_zero);
    let weights = world.create_user_account(&rust_zero);

    let engine = world.create_sc_account(&rust_zero, Some(&owner), builder, WASM_PATH);

    world
        .execute_tx(&owner, &engine, &rust_zero, |sc| {
            sc.init(
                managed_address!(&directory),
                managed_address!(&funding),
                managed_address!(&weights),
            );
            sc.update_pool_config(
                POOL_ID,
                managed_biguint!(POOL_MIN),
                managed_biguint!(POOL_MAX),
                POOL_TIME_LOCK,
                managed_address!(&evaluator),
                true,
            );
        })
        .assert_ok();

    world.set_block_nonce(START_BLOCK);

    EngineSetup {
        world,
        owner,
        recipient,
        second_recipient,
        voter_for,
        voter_against,
        outsider,
        evaluator,
        engine,
    }
}

/// Configurable stand-in for the recipient directory, the pool's
/// evaluator and the funding contract.
pub struct StubGateways {
    pub registered: bool,
    pub verified: bool,
    pub eligible: Option<bool>,
    pub detail_passed: Option<bool>,
    pub balance: u64,
    /// (amount, locked_until_block)
    pub escrow: Option<(u64, u64)>,
    pub withdraw_succeeds: bool,
}

impl StubGateways {
    /// Every collaborator answers favourably.
    pub fn ready() -> Self {
        StubGateways {
            registered: true,
            verified: true,
            eligible: Some(true),
            detail_passed: Some(true),
            balance: 1_000_000,
            escrow: Some((1_000_000, 0)),
            withdraw_succeeds: true,
        }
    }

    /// Every collaborator answers unfavourably.
    pub fn hostile() -> Self {
        StubGateways {
            registered: false,
            verified: false,
            eligible: None,
            detail_passed: None,
            balance: 0,
            escrow: None,
            withdraw_succeeds: false,
        }
    }
}

impl DisbursementGateways<DebugApi> for StubGateways {
    fn recipient_profile(
        &self,
        recipient: &ManagedAddress<DebugApi>,
    ) -> Option<RecipientProfile<DebugApi>> {
        if !self.registered {
            return None;
        }
        Some(RecipientProfile {
            id: recipient.clone(),
            verified: self.verified,
            achievements_digest: ManagedBuffer::new_from_bytes(b"digest"),
        })
    }

    fn is_eligible(
        &self,
        _evaluator: &ManagedAddress<DebugApi>,
        _recipient: &ManagedAddress<DebugApi>,
        _pool_id: u64,
    ) -> Option<bool> {
        self.eligible
    }

    fn evaluation_detail(
        &self,
        _evaluator: &ManagedAddress<DebugApi>,
        _recipient: &ManagedAddress<DebugApi>,
        _pool_id: u64,
    ) -> Option<EvaluationDetail> {
        self.detail_passed.map(|passed| EvaluationDetail {
            score: if passed { 90 } else { 10 },
            passed,
            timestamp: 0,
        })
    }

    fn balance(&self) -> BigUint<DebugApi> {
        BigUint::from(self.balance)
    }

    fn pool_escrow(&self, _pool_id: u64) -> Option<PoolEscrow<DebugApi>> {
        self.escrow.map(|(amount, locked_until_block)| PoolEscrow {
            amount: BigUint::from(amount),
            locked_until_block,
        })
    }

    fn withdraw(&self, _amount: &BigUint<DebugApi>, _recipient: &ManagedAddress<DebugApi>) -> bool {
        self.withdraw_succeeds
    }
}

/// A funding contract that calls back into the engine while paying out.
pub struct ReentrantGateways<'a> {
    pub inner: StubGateways,
    pub engine: &'a EngineContract,
}

impl DisbursementGateways<DebugApi> for ReentrantGateways<'_> {
    fn recipient_profile(
        &self,
        recipient: &ManagedAddress<DebugApi>,
    ) -> Option<RecipientProfile<DebugApi>> {
        self.inner.recipient_profile(recipient)
    }

    fn is_eligible(
        &self,
        evaluator: &ManagedAddress<DebugApi>,
        recipient: &ManagedAddress<DebugApi>,
        pool_id: u64,
    ) -> Option<bool> {
        self.inner.is_eligible(evaluator, recipient, pool_id)
    }

    fn evaluation_detail(
        &self,
        evaluator: &ManagedAddress<DebugApi>,
        recipient: &ManagedAddress<DebugApi>,
        pool_id: u64,
    ) -> Option<EvaluationDetail> {
        self.inner.evaluation_detail(evaluator, recipient, pool_id)
    }

    fn balance(&self) -> BigUint<DebugApi> {
        self.inner.balance()
    }

    fn pool_escrow(&self, pool_id: u64) -> Option<PoolEscrow<DebugApi>> {
        self.inner.pool_escrow(pool_id)
    }

    fn withdraw(&self, amount: &BigUint<DebugApi>, recipient: &ManagedAddress<DebugApi>) -> bool {
        self.engine.disburse_with(
            &self.inner,
            recipient.clone(),
            amount.clone(),
            POOL_ID,
            ManagedBuffer::new(),
        );
        true
    }
}

/// Fixed governance weights; unknown accounts weigh zero.
pub struct StubWeights {
    pub entries: Vec<(Address, u64)>,
}

impl StubWeights {
    pub fn new(entries: &[(&Address, u64)]) -> Self {
        StubWeights {
            entries: entries
                .iter()
                .map(|(address, weight)| ((*address).clone(), *weight))
                .collect(),
        }
    }
}

impl WeightSource<DebugApi> for StubWeights {
    fn weight_of(&self, account: &ManagedAddress<DebugApi>) -> BigUint<DebugApi> {
        let address = account.to_address();
        let weight = self
            .entries
            .iter()
            .find(|(candidate, _)| *candidate == address)
            .map(|(_, weight)| *weight)
            .unwrap_or(0);
        BigUint::from(weight)
    }
}
