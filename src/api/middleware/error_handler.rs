//! Error handler for converting AppError to HTTP responses.
//!
//! Every failure collapses to one of three observable outcomes:
//! 400 for malformed input, 404 for a missing entity, and 500 for the rest.
//! Server-side causes are logged here and never echoed to the client.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::ErrorResponse;
use crate::error::AppError;

/// Message used when no operation-specific message is available.
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = error_to_status_code(&self);

        if status.is_server_error() {
            tracing::error!(error = %error_chain(&self), "Request failed");
        }

        (status, Json(ErrorResponse::new(public_message(&self)))).into_response()
    }
}

/// Maps an AppError variant to its HTTP status code.
pub fn error_to_status_code(error: &AppError) -> StatusCode {
    match error {
        AppError::BadRequest { .. } | AppError::Validation { .. } => StatusCode::BAD_REQUEST,
        AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        AppError::Operation { .. }
        | AppError::Database { .. }
        | AppError::Configuration { .. }
        | AppError::ConnectionPool { .. }
        | AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// The text placed in `{"error": ...}`.
fn public_message(error: &AppError) -> String {
    match error {
        AppError::BadRequest { message } => message.clone(),
        AppError::Validation { .. } => crate::utils::validate::INVALID_INPUT.to_string(),
        AppError::NotFound { .. } | AppError::Operation { .. } => error.to_string(),
        _ => INTERNAL_ERROR_MESSAGE.to_string(),
    }
}

/// Joins an error with all of its sources, outermost first.
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut chain = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        chain.push_str(": ");
        chain.push_str(&cause.to_string());
        source = cause.source();
    }
    chain
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(response: Response) -> ErrorResponse {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let response = AppError::not_found("Recipe").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_of(response).await, ErrorResponse::new("Recipe not found"));
    }

    #[tokio::test]
    async fn test_bad_request_response() {
        let response = AppError::bad_request("Invalid recipe ID").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_of(response).await, ErrorResponse::new("Invalid recipe ID"));
    }

    #[tokio::test]
    async fn test_operation_error_hides_source() {
        let error = AppError::Database {
            operation: "insert recipe".to_string(),
            source: anyhow::anyhow!("password authentication failed for user \"app\""),
        }
        .failed_to("create recipe");

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(response).await, ErrorResponse::new("Failed to create recipe"));
    }

    #[tokio::test]
    async fn test_bare_storage_error_is_generic() {
        let error = AppError::ConnectionPool {
            source: anyhow::anyhow!("timed out waiting for connection"),
        };

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_of(response).await, ErrorResponse::new(INTERNAL_ERROR_MESSAGE));
    }

    #[test]
    fn test_error_chain_includes_sources() {
        let error = AppError::Database {
            operation: "delete recipe".to_string(),
            source: anyhow::anyhow!("deadlock detected"),
        }
        .failed_to("delete recipe");

        assert_eq!(
            error_chain(&error),
            "Failed to delete recipe: Database operation failed: delete recipe: deadlock detected"
        );
    }

    #[test]
    fn test_status_code_classes() {
        let internal = AppError::Internal {
            source: anyhow::anyhow!("boom"),
        };
        let validation = AppError::Validation {
            field: "server.port".to_string(),
            reason: "zero".to_string(),
        };
        assert_eq!(error_to_status_code(&internal), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error_to_status_code(&validation), StatusCode::BAD_REQUEST);
    }
}
