#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

mod call;
mod credential;
mod error;
mod event;
mod genesis;
mod query;


pub use call::CallMessage;
pub use credential::{Credential, CredentialId};
pub use error::RegistryError;
pub use event::RegistryEvent;
use serde::{Deserialize, Serialize};
use ballot_modules_api::{
    CallResponse, Context, Module, ModuleError, Prefix, StateMap, StateValue, WorkingSet,
};

const MODULE_NAME: &str = "CredentialRegistry";

/// Config for the CredentialRegistry module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRegistryConfig {
    /// Name of the credential collection.
    pub name: String,
}

/// Module issuing voting credentials.
///
/// Every instance built with [`Default`] addresses the same state, so a module embedding a
/// `CredentialRegistry` reads exactly what the registry itself wrote.
#[derive(Clone, Debug)]
pub struct CredentialRegistry<C: Context> {
    /// Name given to the collection at genesis.
    pub(crate) name: StateValue<String>,

    /// Number of credentials issued so far. Also the id of the most recent credential.
    pub(crate) total_issued: StateValue<u64>,

    /// Mapping of holders to their credential.
    pub(crate) credentials_by_holder: StateMap<C::Address, CredentialId>,

    /// Mapping of credentials to their holder.
    pub(crate) holders_by_credential: StateMap<CredentialId, C::Address>,
}

impl<C: Context> Default for CredentialRegistry<C> {
    fn default() -> Self {
        Self {
            name: StateValue::new(Prefix::new_storage(MODULE_NAME, "name")),
            total_issued: StateValue::new(Prefix::new_storage(MODULE_NAME, "total_issued")),
            credentials_by_holder: StateMap::new(Prefix::new_storage(
                MODULE_NAME,
                "credentials_by_holder",
            )),
            holders_by_credential: StateMap::new(Prefix::new_storage(
                MODULE_NAME,
                "holders_by_credential",
            )),
        }
    }
}

impl<C: Context> Module for CredentialRegistry<C> {
    type Context = C;

    type Config = CredentialRegistryConfig;

    type CallMessage = CallMessage<C>;

    type Event = RegistryEvent<C>;

    fn genesis(
        &self,
        config: &Self::Config,
        working_set: &mut WorkingSet<C>,
    ) -> Result<(), ModuleError> {
        Ok(self.init_module(config, working_set)?)
    }

    fn call(
        &self,
        msg: Self::CallMessage,
        _context: &Self::Context,
        working_set: &mut WorkingSet<C>,
    ) -> Result<CallResponse, ModuleError> {
        let call_result = match msg {
            CallMessage::Issue { holder } => self
                .issue(&holder, working_set)
                .map(|_| CallResponse::default()),
        };
        Ok(call_result.map_err(anyhow::Error::from)?)
    }
}
