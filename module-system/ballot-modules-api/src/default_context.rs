//! The context used by the demo runtime and the tests.

use serde::{Deserialize, Serialize};

use crate::{Address, Context, Spec};

/// A [`Context`] backed by [`Address`] and SHA-256.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultContext {
    /// The caller.
    pub sender: Address,
    /// Seconds reported by the host for this call.
    pub timestamp: u64,
}

impl Spec for DefaultContext {
    type Address = Address;
    type Hasher = sha2::Sha256;
}

impl Context for DefaultContext {
    fn sender(&self) -> &Self::Address {
        &self.sender
    }

    fn timestamp(&self) -> u64 {
        self.timestamp
    }

    fn new(sender: Self::Address, timestamp: u64) -> Self {
        Self { sender, timestamp }
    }
}
