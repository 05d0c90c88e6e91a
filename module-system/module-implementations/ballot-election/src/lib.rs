#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

mod call;
mod error;
mod event;
mod genesis;
mod phase;
mod query;

#[cfg(test)]
mod tests;

use ballot_credentials::{CredentialId, CredentialRegistry};
use ballot_modules_api::{
    CallResponse, Context, Module, ModuleError, Prefix, StateMap, StateValue, WorkingSet,
};
pub use call::CallMessage;
pub use error::ElectionError;
pub use event::ElectionEvent;
pub use phase::{Phase, VotingWindow};
pub use query::CandidateTally;
use serde::{Deserialize, Serialize};

const MODULE_NAME: &str = "Election";

/// Genesis configuration of the Election module. Immutable once applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "C::Address: serde::Serialize",
    deserialize = "C::Address: serde::Deserialize<'de>"
))]
pub struct ElectionConfig<C: Context> {
    /// Identity allowed to administer the election.
    pub admin: C::Address,
    /// Candidate names. Indices into this list identify candidates everywhere else.
    pub candidates: Vec<String>,
    /// First second at which votes are accepted.
    pub start_time: u64,
    /// Last second at which votes are accepted.
    pub end_time: u64,
}

/// Module running a single time-boxed ballot.
#[derive(Clone, Debug)]
pub struct Election<C: Context> {
    pub(crate) admin: StateValue<C::Address>,

    pub(crate) candidates: StateValue<Vec<String>>,

    pub(crate) voting_window: StateValue<VotingWindow>,

    /// One counter per candidate, aligned with `candidates`.
    pub(crate) vote_counts: StateValue<Vec<u64>>,

    /// Credentials that already voted, mapped to the identity that used them.
    pub(crate) spent_credentials: StateMap<CredentialId, C::Address>,

    /// Reference to the CredentialRegistry module. Only its queries are used.
    pub(crate) registry: CredentialRegistry<C>,
}

impl<C: Context> Default for Election<C> {
    fn default() -> Self {
        Self {
            admin: StateValue::new(Prefix::new_storage(MODULE_NAME, "admin")),
            candidates: StateValue::new(Prefix::new_storage(MODULE_NAME, "candidates")),
            voting_window: StateValue::new(Prefix::new_storage(MODULE_NAME, "voting_window")),
            vote_counts: StateValue::new(Prefix::new_storage(MODULE_NAME, "vote_counts")),
            spent_credentials: StateMap::new(Prefix::new_storage(
                MODULE_NAME,
                "spent_credentials",
            )),
            registry: CredentialRegistry::default(),
        }
    }
}

impl<C: Context> Module for Election<C> {
    type Context = C;

    type Config = ElectionConfig<C>;

    type CallMessage = CallMessage;

    type Event = ElectionEvent<C>;

    fn genesis(
        &self,
        config: &Self::Config,
        working_set: &mut WorkingSet<C>,
    ) -> Result<(), ModuleError> {
        Ok(self
            .init_module(config, working_set)
            .map_err(anyhow::Error::from)?)
    }

    fn call(
        &self,
        msg: Self::CallMessage,
        context: &Self::Context,
        working_set: &mut WorkingSet<C>,
    ) -> Result<CallResponse, ModuleError> {
        let call_result = match msg {
            CallMessage::Vote {
                credential_id,
                candidate_index,
            } => self.vote(credential_id, candidate_index, context, working_set),
        };
        Ok(call_result.map_err(anyhow::Error::from)?)
    }
}
