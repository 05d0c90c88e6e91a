use core::fmt;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

/// Sequential identifier of an issued credential. The first credential is `1`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    BorshDeserialize,
    BorshSerialize,
    Serialize,
    Deserialize,
    schemars::JsonSchema,
)]
#[serde(transparent)]
pub struct CredentialId(pub u64);

impl CredentialId {
    /// The numeric value of the id.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for CredentialId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for CredentialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An issued credential: the right of `holder` to cast one vote.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "A: serde::Serialize",
    deserialize = "A: serde::Deserialize<'de>"
))]
pub struct Credential<A> {
    /// Identifier assigned at issuance.
    pub id: CredentialId,
    /// Identity the credential is bound to.
    pub holder: A,
}
