use anyhow::{ensure, Result};
use ballot_modules_api::{Context, WorkingSet};

use crate::{CredentialRegistry, CredentialRegistryConfig};

impl<C: Context> CredentialRegistry<C> {
    pub(crate) fn init_module(
        &self,
        config: &CredentialRegistryConfig,
        working_set: &mut WorkingSet<C>,
    ) -> Result<()> {
        ensure!(
            self.name.get(working_set).is_none(),
            "Credential registry is already initialized"
        );

        self.name.set(&config.name, working_set);
        self.total_issued.set(&0, working_set);

        Ok(())
    }
}
