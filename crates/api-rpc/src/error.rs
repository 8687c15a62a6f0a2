//! RPC Error Types
//!
//! Maps application errors to JSON-RPC error codes.

use atelier_core::error::AppError;
use jsonrpsee::types::ErrorObjectOwned;
use serde_json::json;
use tracing::error;

/// RPC Error Codes
pub mod code {
    pub const VALIDATION_ERROR: i32 = 4000;
    pub const NOT_FOUND: i32 = 4001;
    pub const INVALID_IDENTIFIER: i32 = 4004;
    pub const INVALID_ARGUMENT: i32 = 4005;
    pub const INTERNAL_ERROR: i32 = 5000;
    pub const PERSISTENCE_ERROR: i32 = 5001;
}

/// Convert AppError to JSON-RPC ErrorObject
pub fn to_rpc_error(err: AppError) -> ErrorObjectOwned {
    match err {
        AppError::Validation(details) => validation_error(details),
        AppError::InvalidIdentifier(value) => ErrorObjectOwned::owned(
            code::INVALID_IDENTIFIER,
            "Invalid ID format",
            Some(json!({ "details": value })),
        ),
        AppError::InvalidArgument(msg) => {
            ErrorObjectOwned::owned(code::INVALID_ARGUMENT, msg, None::<()>)
        }
        AppError::Persistence(msg) => {
            ErrorObjectOwned::owned(code::PERSISTENCE_ERROR, msg, None::<()>)
        }
        AppError::Internal(msg) => {
            error!(error = %msg, "Internal error while serving RPC");
            ErrorObjectOwned::owned(code::INTERNAL_ERROR, "Internal server error", None::<()>)
        }
    }
}

/// NOT_FOUND for a well-formed identifier that resolves to nothing
pub fn not_found(entity: &str) -> ErrorObjectOwned {
    ErrorObjectOwned::owned(code::NOT_FOUND, format!("{} not found", entity), None::<()>)
}

fn validation_error(details: String) -> ErrorObjectOwned {
    ErrorObjectOwned::owned(
        code::VALIDATION_ERROR,
        "Validation error",
        Some(json!({ "details": details })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_carries_details() {
        let err = to_rpc_error(AppError::Validation("\"name\" is required".into()));
        assert_eq!(err.code(), code::VALIDATION_ERROR);
        assert_eq!(err.message(), "Validation error");

        let data: serde_json::Value =
            serde_json::from_str(err.data().unwrap().get()).unwrap();
        assert_eq!(data["details"], "\"name\" is required");
    }

    #[test]
    fn test_codes_per_kind() {
        let err = to_rpc_error(AppError::InvalidIdentifier("xyz".into()));
        assert_eq!(err.code(), code::INVALID_IDENTIFIER);
        assert_eq!(err.message(), "Invalid ID format");

        let err = to_rpc_error(AppError::InvalidArgument("limit must be numeric".into()));
        assert_eq!(err.code(), code::INVALID_ARGUMENT);

        let err = to_rpc_error(AppError::Persistence("Failed to fetch notions".into()));
        assert_eq!(err.code(), code::PERSISTENCE_ERROR);
        assert_eq!(err.message(), "Failed to fetch notions");

        let err = to_rpc_error(AppError::Internal("lost a workshop".into()));
        assert_eq!(err.code(), code::INTERNAL_ERROR);
        assert_eq!(err.message(), "Internal server error");
    }

    #[test]
    fn test_not_found() {
        let err = not_found("Workshop");
        assert_eq!(err.code(), code::NOT_FOUND);
        assert_eq!(err.message(), "Workshop not found");
    }
}
