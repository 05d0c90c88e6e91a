use std::marker::PhantomData;

use borsh::{BorshDeserialize, BorshSerialize};

use super::{Prefix, StateError, WorkingSet};
use crate::Context;

/// Container for a single value.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct StateValue<V> {
    _phantom: PhantomData<V>,
    prefix: Prefix,
}

impl<V: BorshSerialize + BorshDeserialize> StateValue<V> {
    /// Creates a new [`StateValue`] stored under the given prefix.
    pub fn new(prefix: Prefix) -> Self {
        Self {
            _phantom: PhantomData,
            prefix,
        }
    }

    /// Sets a value in the StateValue.
    pub fn set<C: Context>(&self, value: &V, working_set: &mut WorkingSet<C>) {
        working_set.set_singleton(self.prefix(), value)
    }

    /// Gets a value from the StateValue or None if the value is absent.
    pub fn get<C: Context>(&self, working_set: &mut WorkingSet<C>) -> Option<V> {
        working_set.get_singleton(self.prefix())
    }

    /// Gets a value from the StateValue or Error if the value is absent.
    pub fn get_or_err<C: Context>(&self, working_set: &mut WorkingSet<C>) -> Result<V, StateError> {
        self.get(working_set)
            .ok_or_else(|| StateError::MissingValue(self.prefix().clone()))
    }

    /// Removes a value from the StateValue, returning the value (or None if the key is absent).
    pub fn remove<C: Context>(&self, working_set: &mut WorkingSet<C>) -> Option<V> {
        working_set.remove_singleton(self.prefix())
    }

    /// Returns the prefix used when this [`StateValue`] was created.
    pub fn prefix(&self) -> &Prefix {
        &self.prefix
    }
}
