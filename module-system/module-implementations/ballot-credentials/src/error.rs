use thiserror::Error;

use crate::CredentialId;

/// Rejections of the CredentialRegistry module. A rejected call leaves the registry unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The identity already holds a credential.
    #[error("User already registered: {holder} holds credential {credential_id}")]
    AlreadyRegistered {
        /// The identity that asked for a second credential.
        holder: String,
        /// The credential it already holds.
        credential_id: CredentialId,
    },

    /// No credential with this id was ever issued.
    #[error("Credential {0} does not exist")]
    NotFound(CredentialId),

    /// The sequential id space is used up.
    #[error("Credential id space exhausted")]
    IdSpaceExhausted,
}
