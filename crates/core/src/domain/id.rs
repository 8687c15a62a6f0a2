// Entity Identifier (object-id style reference token)

use super::error::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Length of an identifier in hex characters (12 bytes).
pub const ID_HEX_LEN: usize = 24;

/// Opaque 24-character hexadecimal identifier.
///
/// Stored and compared in lower case; parsing accepts either case.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityId(String);

impl EntityId {
    /// Parse a reference token, rejecting anything that is not 24 hex characters
    pub fn parse(raw: &str) -> Result<Self> {
        if is_valid_id(raw) {
            Ok(Self(raw.to_ascii_lowercase()))
        } else {
            Err(DomainError::InvalidIdentifier(raw.to_string()))
        }
    }

    /// Build an identifier from its 12 raw bytes
    pub fn from_bytes(bytes: [u8; 12]) -> Self {
        let hex = bytes.iter().map(|b| format!("{:02x}", b)).collect();
        Self(hex)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Syntactic check only: says nothing about existence in any store.
pub fn is_valid_id(raw: &str) -> bool {
    raw.len() == ID_HEX_LEN && raw.bytes().all(|b| b.is_ascii_hexdigit())
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EntityId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for EntityId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<EntityId> for String {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

impl AsRef<str> for EntityId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
