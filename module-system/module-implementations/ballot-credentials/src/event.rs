use ballot_modules_api::Context;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::CredentialId;

/// Events emitted by the CredentialRegistry module.
#[derive(BorshDeserialize, BorshSerialize, Serialize, Deserialize, Debug, PartialEq, Clone)]
#[serde(bound(
    serialize = "C::Address: serde::Serialize",
    deserialize = "C::Address: serde::Deserialize<'de>"
))]
pub enum RegistryEvent<C: Context> {
    /// A credential was issued.
    CredentialIssued {
        /// The new holder.
        holder: C::Address,
        /// The id assigned to the credential.
        credential_id: CredentialId,
    },
}
