use core::fmt::{Debug, Display};
use core::hash::Hash;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Bounds shared by every address type usable as a caller identity.
pub trait AddressTrait:
    Clone
    + Debug
    + Display
    + PartialEq
    + Eq
    + Hash
    + BorshSerialize
    + BorshDeserialize
    + Serialize
    + DeserializeOwned
    + From<[u8; 32]>
    + AsRef<[u8]>
    + Send
    + Sync
    + 'static
{
}

/// A minimal hashing interface producing 32 byte digests.
pub trait Hasher {
    /// Creates an empty hasher.
    fn new() -> Self;

    /// Feeds `data` into the hasher.
    fn update(&mut self, data: &[u8]);

    /// Consumes the hasher and returns the digest.
    fn finalize(self) -> [u8; 32];

    /// Hashes `data` in one go.
    fn hash(data: impl AsRef<[u8]>) -> [u8; 32]
    where
        Self: Sized,
    {
        let mut hasher = Self::new();
        hasher.update(data.as_ref());
        hasher.finalize()
    }
}

impl Hasher for sha2::Sha256 {
    fn new() -> Self {
        <sha2::Sha256 as sha2::Digest>::new()
    }

    fn update(&mut self, data: &[u8]) {
        sha2::Digest::update(self, data)
    }

    fn finalize(self) -> [u8; 32] {
        sha2::Digest::finalize(self).into()
    }
}

/// The `Spec` trait fixes the primitive types used by a particular execution environment.
/// It is almost always implemented on a [`Context`]; since every module is generic over its
/// context, swapping the context swaps the address and hashing scheme without touching module code.
pub trait Spec {
    /// The identity type of callers and credential holders.
    type Address: AddressTrait;

    /// The hasher preferred by the environment.
    type Hasher: Hasher;
}

/// A context carries the information the hosting environment passes to a module for a single
/// call: the identity of the caller and the current time.
///
/// Modules must not read the time from anywhere else. Everything time dependent (for example the
/// phase of an election) is derived from [`Context::timestamp`] on every call.
pub trait Context: Spec + Clone + Debug + PartialEq + 'static {
    /// Sender of the call.
    fn sender(&self) -> &Self::Address;

    /// Current time as reported by the hosting environment, in seconds.
    fn timestamp(&self) -> u64;

    /// Constructor for the Context.
    fn new(sender: Self::Address, timestamp: u64) -> Self;
}
