use crate::error::{AppError, AppResult};
use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

/// Message returned for every malformed or invalid JSON body.
pub const INVALID_INPUT: &str = "Invalid input";

/// JSON body extractor that also runs `validator` rules.
///
/// Any decoding or validation failure is reported as a bare
/// `400 {"error":"Invalid input"}`; field-level detail is only logged.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> AppResult<Self> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(error = %rejection.body_text(), "Rejected JSON body");
            AppError::bad_request(INVALID_INPUT)
        })?;
        value.validate().map_err(|errors| {
            tracing::debug!(error = %errors, "JSON body failed validation");
            AppError::bad_request(INVALID_INPUT)
        })?;
        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, header};
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Debug, Deserialize, Validate)]
    struct TestBody {
        #[validate(length(min = 1, max = 20, message = "Title must be between 1 and 20 characters"))]
        title: String,
        #[validate(range(min = 1, message = "Recipe ID must be positive"))]
        recipe_id: i32,
    }

    fn json_request(body: &str, content_type: &str) -> Request {
        Request::builder()
            .method(Method::POST)
            .uri("/test")
            .header(header::CONTENT_TYPE, content_type)
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn assert_invalid_input(result: AppResult<ValidatedJson<TestBody>>) {
        match result {
            Err(AppError::BadRequest { message }) => assert_eq!(message, INVALID_INPUT),
            Err(other) => panic!("Expected BadRequest error, got {:?}", other),
            Ok(_) => panic!("Expected BadRequest error, got Ok"),
        }
    }

    #[tokio::test]
    async fn test_valid_json() {
        let request = json_request(r#"{"title":"Soup","recipe_id":5}"#, "application/json");

        let ValidatedJson(body) = ValidatedJson::<TestBody>::from_request(request, &())
            .await
            .unwrap();
        assert_eq!(body.title, "Soup");
        assert_eq!(body.recipe_id, 5);
    }

    #[tokio::test]
    async fn test_syntax_error() {
        let request = json_request(r#"{"title":"Soup","#, "application/json");
        assert_invalid_input(ValidatedJson::<TestBody>::from_request(request, &()).await);
    }

    #[tokio::test]
    async fn test_wrong_field_type() {
        let request = json_request(r#"{"title":"Soup","recipe_id":"five"}"#, "application/json");
        assert_invalid_input(ValidatedJson::<TestBody>::from_request(request, &()).await);
    }

    #[tokio::test]
    async fn test_missing_content_type() {
        let request = json_request(r#"{"title":"Soup","recipe_id":5}"#, "text/plain");
        assert_invalid_input(ValidatedJson::<TestBody>::from_request(request, &()).await);
    }

    #[tokio::test]
    async fn test_validation_failure() {
        let request = json_request(r#"{"title":"","recipe_id":0}"#, "application/json");
        assert_invalid_input(ValidatedJson::<TestBody>::from_request(request, &()).await);
    }
}
