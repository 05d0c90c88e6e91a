use ballot_credentials::CredentialId;
use ballot_modules_api::Context;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

/// Events emitted by the Election module.
#[derive(BorshDeserialize, BorshSerialize, Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(bound(
    serialize = "C::Address: serde::Serialize",
    deserialize = "C::Address: serde::Deserialize<'de>"
))]
pub enum ElectionEvent<C: Context> {
    /// A vote was accepted. Emitted once per accepted vote, after the tally was updated.
    VoteCast {
        /// The caller that cast the vote.
        voter: C::Address,
        /// The credential that was spent.
        credential_id: CredentialId,
        /// The candidate that received the vote.
        candidate_index: u32,
    },
}
