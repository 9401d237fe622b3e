use crate::error::AppError;
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// Utility for converting diesel errors into `AppError`.
///
/// Every storage failure ends up as `AppError::Database`; only the log text
/// differs by error kind so constraint violations are easy to spot.
pub struct DatabaseErrorConverter;

impl DatabaseErrorConverter {
    /// Converts a Diesel error to an `AppError::Database`.
    ///
    /// # Arguments
    /// * `error` - The Diesel error to convert
    /// * `operation` - Description of the database operation that failed
    pub fn convert_diesel_error(error: DieselError, operation: &str) -> AppError {
        let source = match error {
            DieselError::DatabaseError(kind, info) => {
                anyhow::Error::msg(format!("{}: {}", Self::kind_label(&kind), info.message()))
            }
            other => anyhow::Error::from(other),
        };

        AppError::Database {
            operation: operation.to_string(),
            source,
        }
    }

    fn kind_label(kind: &DatabaseErrorKind) -> &'static str {
        match kind {
            DatabaseErrorKind::UniqueViolation => "Unique constraint violation",
            DatabaseErrorKind::ForeignKeyViolation => "Foreign key constraint violation",
            DatabaseErrorKind::NotNullViolation => "Not null constraint violation",
            DatabaseErrorKind::CheckViolation => "Check constraint violation",
            DatabaseErrorKind::SerializationFailure => "Serialization failure",
            DatabaseErrorKind::ClosedConnection => "Connection closed",
            _ => "Database error",
        }
    }
}
