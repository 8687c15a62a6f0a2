// sqlx::Error -> AppError mapping

use atelier_core::error::AppError;

/// Convert sqlx::Error to AppError::Persistence with structured information.
///
/// The detail is meant for logs; the service layer swaps it for a stable
/// message before it reaches a caller.
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) => {
            // SQLite error codes: https://www.sqlite.org/rescode.html
            match db_err.code().as_deref() {
                Some(code @ ("2067" | "1555")) => AppError::Persistence(format!(
                    "Unique constraint violation: {} ({})",
                    db_err.message(),
                    code
                )),
                Some(code @ ("787" | "3850")) => AppError::Persistence(format!(
                    "Foreign key constraint violation: {} ({})",
                    db_err.message(),
                    code
                )),
                Some(code @ "275") => AppError::Persistence(format!(
                    "Check constraint violation: {} ({})",
                    db_err.message(),
                    code
                )),
                Some("5") => AppError::Persistence(format!(
                    "Database locked (SQLITE_BUSY): {}",
                    db_err.message()
                )),
                Some("13") => {
                    AppError::Persistence(format!("Database full: {}", db_err.message()))
                }
                Some(code) => AppError::Persistence(format!(
                    "Database error [{}]: {}",
                    code,
                    db_err.message()
                )),
                None => AppError::Persistence(format!("Database error: {}", db_err.message())),
            }
        }
        sqlx::Error::ColumnNotFound(col) => {
            AppError::Persistence(format!("Column not found: {}", col))
        }
        sqlx::Error::PoolTimedOut => {
            AppError::Persistence("Timed out waiting for a database connection".to_string())
        }
        // Connection, pool, protocol errors
        _ => AppError::Persistence(err.to_string()),
    }
}
