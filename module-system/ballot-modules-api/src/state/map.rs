use std::marker::PhantomData;

use borsh::{BorshDeserialize, BorshSerialize};

use super::{Prefix, StateError, StorageKey, WorkingSet};
use crate::Context;

/// A container that maps keys to values.
///
/// Keys and values are borsh encoded. Iteration is not supported: modules that need to walk
/// their entries keep a separate index.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct StateMap<K, V> {
    _phantom: (PhantomData<K>, PhantomData<V>),
    prefix: Prefix,
}

impl<K, V> StateMap<K, V>
where
    K: BorshSerialize,
    V: BorshSerialize + BorshDeserialize,
{
    /// Creates a new [`StateMap`] with the given prefix.
    pub fn new(prefix: Prefix) -> Self {
        Self {
            _phantom: (PhantomData, PhantomData),
            prefix,
        }
    }

    /// Returns the prefix used when this [`StateMap`] was created.
    pub fn prefix(&self) -> &Prefix {
        &self.prefix
    }

    /// Inserts a key-value pair into the map.
    pub fn set<C: Context>(&self, key: &K, value: &V, working_set: &mut WorkingSet<C>) {
        working_set.set_value(self.prefix(), key, value)
    }

    /// Returns the value corresponding to the key or None if key is absent in the StateMap.
    pub fn get<C: Context>(&self, key: &K, working_set: &mut WorkingSet<C>) -> Option<V> {
        working_set.get_value(self.prefix(), key)
    }

    /// Returns the value corresponding to the key or Error if key is absent in the StateMap.
    pub fn get_or_err<C: Context>(
        &self,
        key: &K,
        working_set: &mut WorkingSet<C>,
    ) -> Result<V, StateError> {
        self.get(key, working_set).ok_or_else(|| {
            StateError::MissingKey(self.prefix().clone(), StorageKey::new(self.prefix(), key))
        })
    }

    /// Whether the map holds an entry for `key`.
    pub fn contains<C: Context>(&self, key: &K, working_set: &mut WorkingSet<C>) -> bool {
        self.get(key, working_set).is_some()
    }

    /// Removes a key from the StateMap, returning the corresponding value (or None if the key is absent).
    pub fn remove<C: Context>(&self, key: &K, working_set: &mut WorkingSet<C>) -> Option<V> {
        working_set.remove_value(self.prefix(), key)
    }
}
