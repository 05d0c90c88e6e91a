use core::fmt;

use borsh::{BorshDeserialize, BorshSerialize};

use super::Prefix;

/// The key type suitable for use in [`super::WorkingSet::get`] and friends.
/// It combines the prefix of a container with the borsh encoding of the user key.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StorageKey {
    key: Vec<u8>,
}

impl StorageKey {
    /// Creates a new StorageKey that combines a prefix and a key.
    pub fn new<K: BorshSerialize + ?Sized>(prefix: &Prefix, key: &K) -> Self {
        let encoded_key = key.try_to_vec().expect("Failed to serialize key");
        let mut full_key = Vec::with_capacity(prefix.len() + encoded_key.len());
        full_key.extend(prefix.as_bytes());
        full_key.extend(encoded_key);
        Self { key: full_key }
    }

    /// Creates the key of a container holding a single value.
    pub fn singleton(prefix: &Prefix) -> Self {
        Self {
            key: prefix.as_bytes().to_vec(),
        }
    }

    /// Raw bytes of the key.
    pub fn key(&self) -> &[u8] {
        &self.key
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.key))
    }
}

/// A borsh encoded value suitable for storing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageValue {
    value: Vec<u8>,
}

impl StorageValue {
    /// Create a new storage value by serializing the input.
    pub fn new<V: BorshSerialize>(value: &V) -> Self {
        Self {
            value: value.try_to_vec().expect("Failed to serialize value"),
        }
    }

    /// Decodes the stored bytes.
    pub fn decode<V: BorshDeserialize>(&self) -> std::io::Result<V> {
        V::try_from_slice(&self.value)
    }

    /// Raw bytes of the value.
    pub fn value(&self) -> &[u8] {
        &self.value
    }
}
