use ballot_credentials::CredentialId;
use ballot_modules_api::{CallResponse, Context, WorkingSet};

use crate::{Election, ElectionError, ElectionEvent, Phase};

/// Call actions supported by the module.
#[derive(borsh::BorshDeserialize, borsh::BorshSerialize, Debug, PartialEq, Eq, Clone)]
#[derive(serde::Serialize, serde::Deserialize, schemars::JsonSchema)]
#[schemars(rename = "CallMessage")]
pub enum CallMessage {
    /// Cast the vote of `credential_id` for the candidate at `candidate_index`.
    Vote {
        /// Credential held by the caller.
        credential_id: CredentialId,
        /// Index into the configured candidate list.
        candidate_index: u32,
    },
}

impl<C: Context> Election<C> {
    /// Votes for a candidate. Must be called by the holder of `credential_id`.
    ///
    /// Every check runs before the first write, so a rejected vote changes nothing.
    pub(crate) fn vote(
        &self,
        credential_id: CredentialId,
        candidate_index: u32,
        context: &C,
        working_set: &mut WorkingSet<C>,
    ) -> Result<CallResponse, ElectionError> {
        match self.phase(context.timestamp(), working_set)? {
            Phase::NotStarted => return Err(ElectionError::ElectionNotStarted),
            Phase::Ended => return Err(ElectionError::ElectionEnded),
            Phase::Active => {}
        }

        self.exit_if_not_credential_owner(credential_id, context, working_set)?;

        if self.spent_credentials.contains(&credential_id, working_set) {
            return Err(ElectionError::AlreadyVoted(credential_id));
        }

        let mut vote_counts = self
            .vote_counts
            .get(working_set)
            .ok_or(ElectionError::NotInitialized)?;
        let candidates = vote_counts.len();

        // Check if a candidate exists.
        let count = usize::try_from(candidate_index)
            .ok()
            .and_then(|index| vote_counts.get_mut(index))
            .ok_or(ElectionError::InvalidCandidate {
                index: candidate_index,
                candidates,
            })?;

        *count = count
            .checked_add(1)
            .ok_or(ElectionError::VoteCountOverflow)?;

        self.vote_counts.set(&vote_counts, working_set);
        self.spent_credentials
            .set(&credential_id, context.sender(), working_set);

        working_set.add_event(
            "Election: vote",
            &ElectionEvent::<C>::VoteCast {
                voter: context.sender().clone(),
                credential_id,
                candidate_index,
            },
        );
        tracing::debug!(
            voter = %context.sender(),
            %credential_id,
            candidate_index,
            "Vote accepted"
        );

        Ok(CallResponse::default())
    }

    fn exit_if_not_credential_owner(
        &self,
        credential_id: CredentialId,
        context: &C,
        working_set: &mut WorkingSet<C>,
    ) -> Result<(), ElectionError> {
        match self.registry.owner_of(credential_id, working_set) {
            Ok(owner) if &owner == context.sender() => Ok(()),
            _ => Err(ElectionError::NotCredentialOwner(credential_id)),
        }
    }
}
