//! HTTP request handlers, one module per resource.

pub mod comments;
pub mod health;
pub mod recipes;
pub mod user_likes;

use axum::extract::{Path, rejection::PathRejection};

use crate::error::{AppError, AppResult};

/// Unwraps a path extraction, reporting a rejection as 400 with `message`.
fn path_param<T>(path: Result<Path<T>, PathRejection>, message: &'static str) -> AppResult<T> {
    match path {
        Ok(Path(value)) => Ok(value),
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "Rejected path parameter");
            Err(AppError::bad_request(message))
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::{
        Router,
        body::Body,
        http::{Method, Request, StatusCode, header},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::api::routes::create_router;
    use crate::repositories::fakes::FakeRepositories;
    use crate::state::AppState;

    pub fn app(fakes: &FakeRepositories) -> Router {
        create_router(AppState::with_repositories(fakes.repositories()), false)
    }

    /// Sends one request and returns the status with the decoded JSON body
    /// (`Value::Null` for an empty body).
    pub async fn send(
        app: &Router,
        method: Method,
        uri: &str,
        body: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = app
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    pub fn error(message: &str) -> Value {
        serde_json::json!({ "error": message })
    }
}
