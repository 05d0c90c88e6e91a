use ballot_modules_api::{Context, WorkingSet};
use serde::{Deserialize, Serialize};

use crate::{Election, ElectionError, Phase, VotingWindow};

/// A candidate together with its final count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateTally {
    /// Candidate name.
    pub name: String,
    /// Votes received.
    pub count: u64,
}

impl<C: Context> Election<C> {
    /// Phase of the election at time `now`.
    pub fn phase(&self, now: u64, working_set: &mut WorkingSet<C>) -> Result<Phase, ElectionError> {
        Ok(self.voting_window(working_set)?.phase_at(now))
    }

    /// Whether the credential issued to `voter` was used. An identity without a credential has
    /// not voted.
    pub fn has_voted(&self, voter: &C::Address, working_set: &mut WorkingSet<C>) -> bool {
        match self.registry.credential_of(voter, working_set) {
            Some(credential_id) => self.spent_credentials.contains(&credential_id, working_set),
            None => false,
        }
    }

    /// Per candidate counts, aligned with [`Election::candidates`].
    ///
    /// Fails with [`ElectionError::ElectionActive`] until `now` is past the end of the voting window.
    /// The returned vector is a copy: changing it does not affect the election.
    pub fn results(
        &self,
        now: u64,
        working_set: &mut WorkingSet<C>,
    ) -> Result<Vec<u64>, ElectionError> {
        if self.phase(now, working_set)? != Phase::Ended {
            return Err(ElectionError::ElectionActive);
        }
        self.vote_counts
            .get(working_set)
            .ok_or(ElectionError::NotInitialized)
    }

    /// Same as [`Election::results`], paired with the candidate names.
    pub fn standings(
        &self,
        now: u64,
        working_set: &mut WorkingSet<C>,
    ) -> Result<Vec<CandidateTally>, ElectionError> {
        let counts = self.results(now, working_set)?;
        let names = self.candidates(working_set)?;
        Ok(names
            .into_iter()
            .zip(counts)
            .map(|(name, count)| CandidateTally { name, count })
            .collect())
    }

    /// Number of accepted votes. Available in every phase.
    pub fn total_votes(&self, working_set: &mut WorkingSet<C>) -> u64 {
        self.vote_counts
            .get(working_set)
            .unwrap_or_default()
            .iter()
            .sum()
    }

    /// Configured candidate names.
    pub fn candidates(&self, working_set: &mut WorkingSet<C>) -> Result<Vec<String>, ElectionError> {
        self.candidates
            .get(working_set)
            .ok_or(ElectionError::NotInitialized)
    }

    /// Configured administrator.
    pub fn admin(&self, working_set: &mut WorkingSet<C>) -> Result<C::Address, ElectionError> {
        self.admin
            .get(working_set)
            .ok_or(ElectionError::NotInitialized)
    }

    /// Configured voting window.
    pub fn voting_window(
        &self,
        working_set: &mut WorkingSet<C>,
    ) -> Result<VotingWindow, ElectionError> {
        self.voting_window
            .get(working_set)
            .ok_or(ElectionError::NotInitialized)
    }
}
