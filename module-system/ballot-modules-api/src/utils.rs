//! Helpers shared by tests and the demo runtime.

use crate::{Context, Hasher, Spec};

/// Derives a deterministic address from a human readable label.
pub fn generate_address<C: Context>(key: &str) -> <C as Spec>::Address {
    let hash = <C as Spec>::Hasher::hash(key.as_bytes());
    C::Address::from(hash)
}
