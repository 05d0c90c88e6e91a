use core::fmt;
use core::str::FromStr;

use bech32::{FromBase32, ToBase32, Variant};
use borsh::{BorshDeserialize, BorshSerialize};
use schemars::gen::SchemaGenerator;
use schemars::schema::Schema;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::AddressTrait;

const HRP: &str = "vote";

/// An opaque 32 byte identity.
///
/// Addresses are rendered as bech32m strings with the `vote` human readable part,
/// both by [`fmt::Display`] and by their serde representation.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    BorshDeserialize,
    BorshSerialize,
    Serialize,
    Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Address {
    addr: [u8; 32],
}

/// Errors returned when parsing an [`Address`] from its bech32m representation.
#[derive(Debug, Error)]
pub enum Bech32ParseError {
    /// The string is not valid bech32.
    #[error("Bech32 error: {0}")]
    Bech32(#[from] bech32::Error),
    /// The human readable part is not `vote`.
    #[error("Wrong HRP: {0}")]
    WrongHrp(String),
    /// The payload does not decode to 32 bytes.
    #[error("Invalid address length {0}, should be 32")]
    InvalidLength(usize),
}

impl Address {
    /// Returns the raw bytes of the address.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.addr
    }

    fn to_bech32m(self) -> Result<String, bech32::Error> {
        bech32::encode(HRP, self.addr.to_base32(), Variant::Bech32m)
    }
}

impl AddressTrait for Address {}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.addr
    }
}

impl From<[u8; 32]> for Address {
    fn from(addr: [u8; 32]) -> Self {
        Self { addr }
    }
}

impl<'a> TryFrom<&'a [u8]> for Address {
    type Error = Bech32ParseError;

    fn try_from(addr: &'a [u8]) -> Result<Self, Self::Error> {
        let addr: [u8; 32] = addr
            .try_into()
            .map_err(|_| Bech32ParseError::InvalidLength(addr.len()))?;
        Ok(Self { addr })
    }
}

impl FromStr for Address {
    type Err = Bech32ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hrp, data, _) = bech32::decode(s)?;
        if hrp != HRP {
            return Err(Bech32ParseError::WrongHrp(hrp));
        }
        let bytes = Vec::<u8>::from_base32(&data)?;
        Address::try_from(bytes.as_slice())
    }
}

impl TryFrom<String> for Address {
    type Error = Bech32ParseError;

    fn try_from(addr: String) -> Result<Self, Self::Error> {
        Address::from_str(&addr)
    }
}

impl From<Address> for String {
    fn from(addr: Address) -> Self {
        addr.to_string()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = self.to_bech32m().map_err(|_| fmt::Error)?;
        write!(f, "{encoded}")
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({self})")
    }
}

impl JsonSchema for Address {
    fn schema_name() -> String {
        "Address".to_owned()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        <String as JsonSchema>::json_schema(gen)
    }
}
