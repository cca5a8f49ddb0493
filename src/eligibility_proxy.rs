use multiversx_sc::proxy_imports::*;

use crate::types::EvaluationDetail;

/// Per-pool eligibility evaluator. Each pool names its own instance.
pub struct EligibilityProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for EligibilityProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = EligibilityProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        EligibilityProxyMethods { wrapped_tx: tx }
    }
}

pub struct EligibilityProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> EligibilityProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn evaluate<Arg0: ProxyArg<ManagedAddress<Env::Api>>, Arg1: ProxyArg<u64>>(
        self,
        recipient: Arg0,
        pool_id: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OptionalValue<bool>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("evaluate")
            .argument(&recipient)
            .argument(&pool_id)
            .original_result()
    }

    pub fn get_evaluation_detail<Arg0: ProxyArg<ManagedAddress<Env::Api>>, Arg1: ProxyArg<u64>>(
        self,
        recipient: Arg0,
        pool_id: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OptionalValue<EvaluationDetail>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getEvaluationDetail")
            .argument(&recipient)
            .argument(&pool_id)
            .original_result()
    }
}
