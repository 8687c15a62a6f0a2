// Domain Error Types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("{0}")]
    InvalidName(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
