//! Wires the modules together and applies calls atomically.

use anyhow::Context as _;
use ballot_credentials::{CredentialRegistry, CredentialRegistryConfig};
use ballot_election::{Election, ElectionConfig};
use ballot_modules_api::{
    CallResponse, Context, Event, Module, ModuleError, StateCheckpoint, WorkingSet,
};
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

/// The modules of the demo.
///
/// The election reads credentials through its own embedded registry, which addresses the same
/// state as `registry`.
#[derive(Clone, Debug)]
pub struct Runtime<C: Context> {
    /// Issues voting credentials.
    pub registry: CredentialRegistry<C>,
    /// Runs the ballot.
    pub election: Election<C>,
}

impl<C: Context> Default for Runtime<C> {
    fn default() -> Self {
        Self {
            registry: CredentialRegistry::default(),
            election: Election::default(),
        }
    }
}

/// Genesis configuration of every module in the [`Runtime`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "C::Address: serde::Serialize",
    deserialize = "C::Address: serde::Deserialize<'de>"
))]
pub struct GenesisConfig<C: Context> {
    /// Config of the credential registry.
    pub registry: CredentialRegistryConfig,
    /// Config of the election.
    pub election: ElectionConfig<C>,
}

/// A call message addressed to one of the runtime modules.
#[derive(BorshDeserialize, BorshSerialize, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(bound(
    serialize = "C::Address: serde::Serialize",
    deserialize = "C::Address: serde::Deserialize<'de>"
))]
pub enum RuntimeCall<C: Context> {
    /// Dispatched to [`Runtime::registry`].
    Registry(ballot_credentials::CallMessage<C>),
    /// Dispatched to [`Runtime::election`].
    Election(ballot_election::CallMessage),
}

impl<C: Context> Runtime<C> {
    /// Runs the genesis of every module on empty state.
    pub fn genesis(&self, config: &GenesisConfig<C>) -> anyhow::Result<StateCheckpoint<C>> {
        let mut working_set = WorkingSet::new();
        self.registry
            .genesis(&config.registry, &mut working_set)
            .context("CredentialRegistry genesis failed")?;
        self.election
            .genesis(&config.election, &mut working_set)
            .context("Election genesis failed")?;
        tracing::info!("Genesis applied");
        Ok(working_set.checkpoint())
    }

    fn dispatch_call(
        &self,
        call: RuntimeCall<C>,
        context: &C,
        working_set: &mut WorkingSet<C>,
    ) -> Result<CallResponse, ModuleError> {
        match call {
            RuntimeCall::Registry(msg) => self.registry.call(msg, context, working_set),
            RuntimeCall::Election(msg) => self.election.call(msg, context, working_set),
        }
    }

    /// Applies `call` on top of `checkpoint`.
    ///
    /// On success the writes and events of the call are committed and the events are returned.
    /// On failure the returned checkpoint is the one that was passed in.
    pub fn apply(
        &self,
        call: RuntimeCall<C>,
        context: &C,
        checkpoint: StateCheckpoint<C>,
    ) -> (StateCheckpoint<C>, Result<Vec<Event>, ModuleError>) {
        let mut working_set = checkpoint.to_revertable();
        match self.dispatch_call(call, context, &mut working_set) {
            Ok(_) => {
                let events = working_set.events().to_vec();
                (working_set.checkpoint(), Ok(events))
            }
            Err(e) => {
                tracing::warn!(sender = %context.sender(), "Call rejected: {}", e);
                (working_set.revert(), Err(e))
            }
        }
    }
}
