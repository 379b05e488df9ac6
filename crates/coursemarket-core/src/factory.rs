//! Contract binding construction
//!
//! The loader never talks to a chain itself. It hands the artifact's ABI and
//! the resolved address to a [`ContractFactory`] supplied by the caller, which
//! owns the connection and decides what a binding is.

use alloy::contract::{ContractInstance, Interface};
use alloy::json_abi::JsonAbi;
use alloy::primitives::Address;
use alloy::providers::Provider;

use crate::error::{Error, Result};

/// Client handle able to build a contract binding from `(abi, address)`
pub trait ContractFactory: Send + Sync {
    /// The binding handed back to the loader's caller
    type Binding;

    fn construct(&self, abi: &JsonAbi, address: Address) -> Result<Self::Binding>;
}

impl<F: ContractFactory + ?Sized> ContractFactory for &F {
    type Binding = F::Binding;

    fn construct(&self, abi: &JsonAbi, address: Address) -> Result<Self::Binding> {
        (**self).construct(abi, address)
    }
}

/// Builds alloy [`ContractInstance`]s sharing one provider
#[derive(Debug, Clone)]
pub struct AlloyContractFactory<P> {
    provider: P,
}

impl<P> AlloyContractFactory<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }
}

impl<P> ContractFactory for AlloyContractFactory<P>
where
    P: Provider + Clone + Send + Sync,
{
    type Binding = ContractInstance<P>;

    fn construct(&self, abi: &JsonAbi, address: Address) -> Result<Self::Binding> {
        // Truffle records the zero address for contracts whose migration never ran.
        if address.is_zero() {
            return Err(Error::BindingConstruction(
                "refusing to bind the zero address".into(),
            ));
        }

        Ok(ContractInstance::new(
            address,
            self.provider.clone(),
            Interface::new(abi.clone()),
        ))
    }
}
