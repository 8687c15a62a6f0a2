// Application Layer - Use Cases and Business Logic

pub mod expansion;
pub mod limit;
pub mod notions;
pub mod validation;
pub mod workshops;

// Re-exports
pub use limit::{coerce_limit, DEFAULT_LIST_LIMIT};
pub use notions::NotionService;
pub use validation::{CreateNotionRequest, CreateWorkshopRequest};
pub use workshops::{ListWorkshopsRequest, WorkshopService};

use crate::error::AppError;
use tracing::error;

/// Replace store diagnostics with a stable per-operation message.
///
/// The store detail is logged, never returned. Other error kinds pass
/// through untouched.
pub(crate) fn store_failure(operation: &'static str) -> impl Fn(AppError) -> AppError {
    move |err| match err {
        AppError::Persistence(detail) => {
            error!(operation, error = %detail, "Store operation failed");
            AppError::Persistence(operation.to_string())
        }
        other => other,
    }
}
