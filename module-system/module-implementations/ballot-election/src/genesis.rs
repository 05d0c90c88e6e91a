use ballot_modules_api::{Context, WorkingSet};

use crate::{Election, ElectionConfig, ElectionError, VotingWindow};

impl<C: Context> Election<C> {
    pub(crate) fn init_module(
        &self,
        config: &ElectionConfig<C>,
        working_set: &mut WorkingSet<C>,
    ) -> Result<(), ElectionError> {
        if self.voting_window.get(working_set).is_some() {
            return Err(ElectionError::AlreadyInitialized);
        }
        if config.candidates.is_empty() {
            return Err(ElectionError::NoCandidates);
        }
        let voting_window = VotingWindow::new(config.start_time, config.end_time)?;

        self.admin.set(&config.admin, working_set);
        self.candidates.set(&config.candidates, working_set);
        self.voting_window.set(&voting_window, working_set);
        self.vote_counts
            .set(&vec![0; config.candidates.len()], working_set);

        tracing::debug!(
            admin = %config.admin,
            candidates = config.candidates.len(),
            start_time = config.start_time,
            end_time = config.end_time,
            "Election initialized"
        );

        Ok(())
    }
}
