use ballot_modules_api::{Context, WorkingSet};

use crate::{CredentialId, CredentialRegistry, RegistryError, RegistryEvent};

/// A transaction handled by the CredentialRegistry module.
#[derive(borsh::BorshDeserialize, borsh::BorshSerialize, Debug, PartialEq, Clone)]
#[derive(serde::Serialize, serde::Deserialize, schemars::JsonSchema)]
#[serde(bound(
    serialize = "C::Address: serde::Serialize",
    deserialize = "C::Address: serde::Deserialize<'de>"
))]
#[schemars(bound = "C::Address: ::schemars::JsonSchema", rename = "CallMessage")]
pub enum CallMessage<C: Context> {
    /// Issue a credential to `holder`.
    Issue {
        /// Identity receiving the credential.
        holder: C::Address,
    },
}

impl<C: Context> CredentialRegistry<C> {
    /// Issues the next sequential credential to `holder`.
    ///
    /// Fails with [`RegistryError::AlreadyRegistered`] if `holder` already holds one, in which case
    /// nothing is written.
    pub fn issue(
        &self,
        holder: &C::Address,
        working_set: &mut WorkingSet<C>,
    ) -> Result<CredentialId, RegistryError> {
        if let Some(credential_id) = self.credentials_by_holder.get(holder, working_set) {
            return Err(RegistryError::AlreadyRegistered {
                holder: holder.to_string(),
                credential_id,
            });
        }

        let total_issued = self.total_issued.get(working_set).unwrap_or_default();
        let credential_id = total_issued
            .checked_add(1)
            .map(CredentialId)
            .ok_or(RegistryError::IdSpaceExhausted)?;

        self.credentials_by_holder
            .set(holder, &credential_id, working_set);
        self.holders_by_credential
            .set(&credential_id, holder, working_set);
        self.total_issued.set(&credential_id.get(), working_set);

        working_set.add_event(
            "CredentialRegistry: issue",
            &RegistryEvent::<C>::CredentialIssued {
                holder: holder.clone(),
                credential_id,
            },
        );
        tracing::debug!(%holder, %credential_id, "Credential issued");

        Ok(credential_id)
    }
}
