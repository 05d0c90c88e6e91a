use core::fmt;

use borsh::{BorshDeserialize, BorshSerialize};

// separator == "/"
const DOMAIN_SEPARATOR: [u8; 1] = [47];

/// A unique identifier for each state variable in a module.
///
/// Two containers built with the same module and storage names address the same
/// state. This is how a module reads the state of another module it depends on.
#[derive(Debug, Clone, PartialEq, Eq, BorshDeserialize, BorshSerialize)]
pub struct Prefix {
    prefix: Vec<u8>,
}

impl Prefix {
    /// Builds the prefix of the `storage_name` field of `module_name`.
    pub fn new_storage(module_name: &str, storage_name: &str) -> Self {
        let mut prefix = Vec::with_capacity(
            module_name.len() + storage_name.len() + 2 * DOMAIN_SEPARATOR.len(),
        );
        prefix.extend(module_name.as_bytes());
        prefix.extend(DOMAIN_SEPARATOR);
        prefix.extend(storage_name.as_bytes());
        prefix.extend(DOMAIN_SEPARATOR);
        Self { prefix }
    }

    /// Raw bytes of the prefix.
    pub fn as_bytes(&self) -> &[u8] {
        &self.prefix
    }

    /// Length of the prefix in bytes.
    pub fn len(&self) -> usize {
        self.prefix.len()
    }

    /// Whether the prefix is empty.
    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty()
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.prefix))
    }
}
