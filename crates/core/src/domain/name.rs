// Entity Name (shared by Notion and Workshop)

use super::error::{DomainError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound on a name, counted in characters after trimming.
pub const MAX_NAME_CHARS: usize = 200;

/// Trimmed, non-empty display name of at most 200 characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityName(String);

impl EntityName {
    /// Trim surrounding whitespace and enforce the length bounds
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidName(
                "\"name\" is not allowed to be empty".to_string(),
            ));
        }
        if trimmed.chars().count() > MAX_NAME_CHARS {
            return Err(DomainError::InvalidName(format!(
                "\"name\" length must be less than or equal to {} characters long",
                MAX_NAME_CHARS
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for EntityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
