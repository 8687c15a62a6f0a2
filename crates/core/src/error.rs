// Central Error Type for the Application

use crate::domain::DomainError;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed creation payload. Never reaches a store.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Identifier is not syntactically valid for lookup.
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// Malformed non-identifier argument (e.g. list limit).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Store unreachable or rejected the operation.
    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidIdentifier(value) => AppError::InvalidIdentifier(value),
            DomainError::InvalidName(msg) => AppError::Validation(msg),
        }
    }
}

// Note: sqlx::Error conversion is handled in infra-sqlite crate
// by converting to AppError::Persistence(String)
