//! Module state: prefixed storage, typed containers, and the revertable working set.

mod event;
mod map;
mod prefix;
mod scratchpad;
mod storage;
mod value;

pub use event::Event;
pub use map::StateMap;
pub use prefix::Prefix;
pub use scratchpad::{StateCheckpoint, WorkingSet};
pub use storage::{StorageKey, StorageValue};
pub use value::StateValue;

use thiserror::Error;

/// Error type for the `get_or_err` methods of the state containers.
#[derive(Debug, Error)]
pub enum StateError {
    /// A [`StateValue`] was read before it was ever set.
    #[error("Value not found for prefix: {0}")]
    MissingValue(Prefix),
    /// A [`StateMap`] has no entry for the requested key.
    #[error("Value not found for prefix: {0} and: storage key {1}")]
    MissingKey(Prefix, StorageKey),
}
