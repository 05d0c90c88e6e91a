use borsh::{BorshDeserialize, BorshSerialize};

/// An event emitted by a module during a call.
///
/// The key names the emitting operation, the value is the borsh encoding of the
/// module's typed event (see [`crate::Module::Event`]).
#[derive(Debug, Clone, PartialEq, Eq, BorshDeserialize, BorshSerialize)]
pub struct Event {
    key: String,
    value: Vec<u8>,
}

impl Event {
    /// Encodes `value` under `key`.
    pub fn new<E: BorshSerialize>(key: &str, value: &E) -> Self {
        Self {
            key: key.to_owned(),
            value: value.try_to_vec().expect("Failed to serialize event"),
        }
    }

    /// The operation that emitted the event.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The encoded payload.
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Decodes the payload back into the module's typed event.
    pub fn decode<E: BorshDeserialize>(&self) -> std::io::Result<E> {
        E::try_from_slice(&self.value)
    }
}
