use ballot_modules_api::{Context, WorkingSet};

use crate::{Credential, CredentialId, CredentialRegistry, RegistryError};

impl<C: Context> CredentialRegistry<C> {
    /// Returns the holder of the credential `credential_id`.
    pub fn owner_of(
        &self,
        credential_id: CredentialId,
        working_set: &mut WorkingSet<C>,
    ) -> Result<C::Address, RegistryError> {
        self.holders_by_credential
            .get(&credential_id, working_set)
            .ok_or(RegistryError::NotFound(credential_id))
    }

    /// Returns `1` if `holder` was issued a credential, `0` otherwise.
    pub fn balance_of(&self, holder: &C::Address, working_set: &mut WorkingSet<C>) -> u64 {
        u64::from(self.credentials_by_holder.contains(holder, working_set))
    }

    /// Returns the credential issued to `holder`, if any.
    pub fn credential_of(
        &self,
        holder: &C::Address,
        working_set: &mut WorkingSet<C>,
    ) -> Option<CredentialId> {
        self.credentials_by_holder.get(holder, working_set)
    }

    /// Returns the credential with the given id, if it was issued.
    pub fn credential(
        &self,
        credential_id: CredentialId,
        working_set: &mut WorkingSet<C>,
    ) -> Option<Credential<C::Address>> {
        let holder = self.holders_by_credential.get(&credential_id, working_set)?;
        Some(Credential {
            id: credential_id,
            holder,
        })
    }

    /// Number of credentials issued so far.
    pub fn total_issued(&self, working_set: &mut WorkingSet<C>) -> u64 {
        self.total_issued.get(working_set).unwrap_or_default()
    }

    /// Name of the credential collection, once the module went through genesis.
    pub fn name(&self, working_set: &mut WorkingSet<C>) -> Option<String> {
        self.name.get(working_set)
    }
}
