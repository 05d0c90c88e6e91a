use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::marker::PhantomData;

use borsh::{BorshDeserialize, BorshSerialize};

use super::{Event, Prefix, StorageKey, StorageValue};
use crate::Context;

/// The committed state of a set of modules together with every event emitted by the calls that
/// produced it.
///
/// A checkpoint cannot be written to directly. Writes go through a [`WorkingSet`] obtained with
/// [`StateCheckpoint::to_revertable`], and land here only when that working set is committed.
pub struct StateCheckpoint<C: Context> {
    committed: BTreeMap<StorageKey, StorageValue>,
    events: Vec<Event>,
    _phantom: PhantomData<C>,
}

impl<C: Context> Default for StateCheckpoint<C> {
    fn default() -> Self {
        Self {
            committed: BTreeMap::new(),
            events: Vec::new(),
            _phantom: PhantomData,
        }
    }
}

impl<C: Context> Debug for StateCheckpoint<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCheckpoint")
            .field("entries", &self.committed.len())
            .field("events", &self.events.len())
            .finish()
    }
}

impl<C: Context> StateCheckpoint<C> {
    /// Creates an empty checkpoint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a working set on top of this checkpoint.
    pub fn to_revertable(self) -> WorkingSet<C> {
        WorkingSet {
            checkpoint: self,
            writes: HashMap::new(),
            events: Vec::new(),
        }
    }

    /// Every event committed so far, in emission order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Number of committed storage entries.
    pub fn len(&self) -> usize {
        self.committed.len()
    }

    /// Whether nothing has been committed yet.
    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }
}

/// This structure contains the writes and the events collected during the execution of a call.
/// There are two ways to convert it back into a [`StateCheckpoint`]:
/// 1. By using the [`WorkingSet::checkpoint`] method, where all the changes are added to the underlying checkpoint.
/// 2. By using the [`WorkingSet::revert`] method, where the changes are dropped and the previous checkpoint is returned untouched.
pub struct WorkingSet<C: Context> {
    checkpoint: StateCheckpoint<C>,
    /// Most recent writes. Reads are first checked against this map, and if the key is not
    /// present, the checkpoint is checked. `None` marks a deletion.
    writes: HashMap<StorageKey, Option<StorageValue>>,
    events: Vec<Event>,
}

impl<C: Context> Debug for WorkingSet<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorkingSet")
            .field("checkpoint", &self.checkpoint)
            .field("pending_writes", &self.writes.len())
            .field("pending_events", &self.events.len())
            .finish()
    }
}

impl<C: Context> Default for WorkingSet<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Context> WorkingSet<C> {
    /// Opens a working set over empty state.
    pub fn new() -> Self {
        StateCheckpoint::new().to_revertable()
    }

    /// Commits the pending writes and events.
    pub fn checkpoint(self) -> StateCheckpoint<C> {
        let mut checkpoint = self.checkpoint;

        for (key, value) in self.writes.into_iter() {
            match value {
                Some(value) => {
                    checkpoint.committed.insert(key, value);
                }
                None => {
                    checkpoint.committed.remove(&key);
                }
            }
        }
        checkpoint.events.extend(self.events);

        checkpoint
    }

    /// Drops the pending writes and events.
    pub fn revert(self) -> StateCheckpoint<C> {
        tracing::trace!(
            writes = self.writes.len(),
            events = self.events.len(),
            "Reverting working set"
        );
        self.checkpoint
    }

    /// Records an event emitted by the current call.
    pub fn add_event<E: BorshSerialize>(&mut self, key: &str, value: &E) {
        self.events.push(Event::new(key, value));
    }

    /// Removes and returns the events emitted by the current call.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    /// Events emitted by the current call.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub(crate) fn get(&self, key: &StorageKey) -> Option<StorageValue> {
        if let Some(value) = self.writes.get(key) {
            return value.clone();
        }
        self.checkpoint.committed.get(key).cloned()
    }

    pub(crate) fn set(&mut self, key: StorageKey, value: StorageValue) {
        self.writes.insert(key, Some(value));
    }

    pub(crate) fn delete(&mut self, key: StorageKey) {
        self.writes.insert(key, None);
    }
}

impl<C: Context> WorkingSet<C> {
    pub(crate) fn set_value<K, V>(&mut self, prefix: &Prefix, storage_key: &K, value: &V)
    where
        K: BorshSerialize + ?Sized,
        V: BorshSerialize,
    {
        let storage_key = StorageKey::new(prefix, storage_key);
        let storage_value = StorageValue::new(value);
        self.set(storage_key, storage_value);
    }

    pub(crate) fn get_value<K, V>(&mut self, prefix: &Prefix, storage_key: &K) -> Option<V>
    where
        K: BorshSerialize + ?Sized,
        V: BorshDeserialize,
    {
        let storage_key = StorageKey::new(prefix, storage_key);
        self.get_decoded(&storage_key)
    }

    pub(crate) fn remove_value<K, V>(&mut self, prefix: &Prefix, storage_key: &K) -> Option<V>
    where
        K: BorshSerialize + ?Sized,
        V: BorshDeserialize,
    {
        let storage_key = StorageKey::new(prefix, storage_key);
        let storage_value = self.get_decoded(&storage_key)?;
        self.delete(storage_key);
        Some(storage_value)
    }

    pub(crate) fn set_singleton<V: BorshSerialize>(&mut self, prefix: &Prefix, value: &V) {
        self.set(StorageKey::singleton(prefix), StorageValue::new(value));
    }

    pub(crate) fn get_singleton<V: BorshDeserialize>(&mut self, prefix: &Prefix) -> Option<V> {
        self.get_decoded(&StorageKey::singleton(prefix))
    }

    pub(crate) fn remove_singleton<V: BorshDeserialize>(&mut self, prefix: &Prefix) -> Option<V> {
        let storage_key = StorageKey::singleton(prefix);
        let storage_value = self.get_decoded(&storage_key)?;
        self.delete(storage_key);
        Some(storage_value)
    }

    fn get_decoded<V: BorshDeserialize>(&self, storage_key: &StorageKey) -> Option<V> {
        let storage_value = self.get(storage_key)?;

        // It is ok to panic here. Deserialization problem means that something is terribly wrong.
        Some(
            storage_value
                .decode()
                .unwrap_or_else(|e| panic!("Unable to deserialize storage value {e:?}")),
        )
    }
}
