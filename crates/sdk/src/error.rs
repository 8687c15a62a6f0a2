//! SDK Error Types

use thiserror::Error;

/// SDK Result type
pub type Result<T> = std::result::Result<T, SdkError>;

/// Error codes returned by the daemon
pub mod code {
    pub const VALIDATION_ERROR: i32 = 4000;
    pub const NOT_FOUND: i32 = 4001;
    pub const INVALID_IDENTIFIER: i32 = 4004;
    pub const INVALID_ARGUMENT: i32 = 4005;
    pub const INTERNAL_ERROR: i32 = 5000;
    pub const PERSISTENCE_ERROR: i32 = 5001;
}

/// SDK Error
#[derive(Debug, Error)]
pub enum SdkError {
    #[error("Connection error: {0}")]
    Connection(String),

    /// Error object returned by the daemon. `details` carries the rule that
    /// failed for validation errors.
    #[error("RPC error ({code}): {message}")]
    Rpc {
        code: i32,
        message: String,
        details: Option<String>,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl SdkError {
    pub fn code(&self) -> Option<i32> {
        match self {
            SdkError::Rpc { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.code() == Some(code::NOT_FOUND)
    }
}

impl From<jsonrpsee::core::ClientError> for SdkError {
    fn from(e: jsonrpsee::core::ClientError) -> Self {
        match e {
            jsonrpsee::core::ClientError::Call(call_err) => {
                let details = call_err
                    .data()
                    .and_then(|raw| serde_json::from_str::<serde_json::Value>(raw.get()).ok())
                    .and_then(|data| data.get("details").and_then(|d| d.as_str()).map(String::from));
                SdkError::Rpc {
                    code: call_err.code(),
                    message: call_err.message().to_string(),
                    details,
                }
            }
            jsonrpsee::core::ClientError::Transport(e) => SdkError::Transport(e.to_string()),
            jsonrpsee::core::ClientError::RestartNeeded(_) => {
                SdkError::Connection("Connection restart needed".to_string())
            }
            jsonrpsee::core::ClientError::ParseError(e) => {
                SdkError::Other(format!("Parse error: {}", e))
            }
            _ => SdkError::Other(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonrpsee::core::ClientError;
    use jsonrpsee::types::ErrorObjectOwned;
    use serde_json::json;

    #[test]
    fn test_call_error_keeps_code_and_details() {
        let call = ErrorObjectOwned::owned(
            code::VALIDATION_ERROR,
            "Validation error",
            Some(json!({ "details": "\"name\" is required" })),
        );
        let err = SdkError::from(ClientError::Call(call));

        match err {
            SdkError::Rpc {
                code: c,
                message,
                details,
            } => {
                assert_eq!(c, code::VALIDATION_ERROR);
                assert_eq!(message, "Validation error");
                assert_eq!(details.as_deref(), Some("\"name\" is required"));
            }
            other => panic!("expected rpc error, got {other:?}"),
        }
    }

    #[test]
    fn test_not_found_detection() {
        let call = ErrorObjectOwned::owned(code::NOT_FOUND, "Workshop not found", None::<()>);
        let err = SdkError::from(ClientError::Call(call));
        assert!(err.is_not_found());
        assert!(!SdkError::Other("x".into()).is_not_found());
    }
}
