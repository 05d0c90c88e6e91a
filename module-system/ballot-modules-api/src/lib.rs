#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

mod address;
pub mod default_context;
mod error;
mod module;
mod spec;
mod state;
pub mod utils;


pub use address::{Address, Bech32ParseError};
pub use error::ModuleError;
pub use module::{CallResponse, Module};
pub use spec::{AddressTrait, Context, Hasher, Spec};
pub use state::{
    Event, Prefix, StateCheckpoint, StateError, StateMap, StateValue, StorageKey, StorageValue,
    WorkingSet,
};
