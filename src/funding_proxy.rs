use multiversx_sc::proxy_imports::*;

use crate::types::PoolEscrow;

pub struct FundingProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for FundingProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = FundingProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        FundingProxyMethods { wrapped_tx: tx }
    }
}

pub struct FundingProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> FundingProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn get_balance(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getBalance")
            .original_result()
    }

    pub fn get_pool_escrow<Arg0: ProxyArg<u64>>(
        self,
        pool_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OptionalValue<PoolEscrow<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getPoolEscrow")
            .argument(&pool_id)
            .original_result()
    }

    /// Moves `amount` out of the fund to `recipient`. Returns `false` when
    /// the fund cannot cover it.
    pub fn withdraw<Arg0: ProxyArg<BigUint<Env::Api>>, Arg1: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        amount: Arg0,
        recipient: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdraw")
            .argument(&amount)
            .argument(&recipient)
            .original_result()
    }
}
