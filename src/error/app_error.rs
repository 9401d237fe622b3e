use crate::config::error::ConfigError;
use crate::error::DatabaseErrorConverter;
use diesel_async::pooled_connection::PoolError;
use thiserror::Error;

/// Application-wide error type.
///
/// Callers only ever observe three classes of failure: malformed input (400),
/// a missing entity on a by-id lookup (404), and everything else (500). The
/// richer variants exist so that logs keep the real cause.
#[derive(Error, Debug)]
pub enum AppError {
    /// Malformed request: bad JSON, bad path parameter, failed shape validation
    #[error("Bad request: {message}")]
    BadRequest { message: String },

    /// Lookup by identifier found nothing
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    /// Validation error with field-specific details (configuration, CLI)
    #[error("Validation failed for {field}: {reason}")]
    Validation { field: String, reason: String },

    /// A usecase call failed; `message` is the only text the caller sees
    #[error("{message}")]
    Operation {
        message: String,
        #[source]
        source: Box<AppError>,
    },

    /// Database operation error with operation context
    #[error("Database operation failed: {operation}")]
    Database {
        operation: String,
        #[source]
        source: anyhow::Error,
    },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Connection pool error
    #[error("Connection pool error")]
    ConnectionPool {
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::BadRequest {
            message: message.into(),
        }
    }

    pub fn not_found(entity: &'static str) -> Self {
        AppError::NotFound { entity }
    }

    /// Wraps `self` so the response carries `Failed to {action}` and nothing more.
    ///
    /// `NotFound` and `BadRequest` are returned untouched since they already
    /// describe themselves to the caller.
    pub fn failed_to(self, action: &str) -> Self {
        match self {
            AppError::NotFound { .. } | AppError::BadRequest { .. } => self,
            other => AppError::Operation {
                message: format!("Failed to {}", action),
                source: Box::new(other),
            },
        }
    }
}

/// Convenience for attaching a public failure message to a usecase result.
pub trait ResultExt<T> {
    fn failed_to(self, action: &str) -> AppResult<T>;
}

impl<T> ResultExt<T> for AppResult<T> {
    fn failed_to(self, action: &str) -> AppResult<T> {
        self.map_err(|e| e.failed_to(action))
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

impl From<diesel::result::Error> for AppError {
    fn from(error: diesel::result::Error) -> Self {
        DatabaseErrorConverter::convert_diesel_error(error, "database operation")
    }
}

impl From<bb8::RunError<PoolError>> for AppError {
    fn from(error: bb8::RunError<PoolError>) -> Self {
        AppError::ConnectionPool {
            source: anyhow::Error::msg(error.to_string()),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        match error {
            ConfigError::ValidationError { field, message } => AppError::Validation {
                field,
                reason: message,
            },
            other => AppError::Configuration {
                key: "settings".to_string(),
                source: anyhow::Error::from(other),
            },
        }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
