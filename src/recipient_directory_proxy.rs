use multiversx_sc::proxy_imports::*;

use crate::types::RecipientProfile;

pub struct RecipientDirectoryProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for RecipientDirectoryProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = RecipientDirectoryProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        RecipientDirectoryProxyMethods { wrapped_tx: tx }
    }
}

pub struct RecipientDirectoryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, To, Gas> RecipientDirectoryProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn get_profile<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        recipient: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, OptionalValue<RecipientProfile<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getProfile")
            .argument(&recipient)
            .original_result()
    }
}
