//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::errors::{AppError, FieldErrors};

/// Validated JSON extractor that automatically validates requests.
///
/// Bodies that fail to deserialize (malformed JSON, wrong types, unknown
/// choice values) are reported under `non_field_errors`; validator failures
/// become one entry per offending field.
///
/// # Example
///
/// ```rust,ignore
/// use estate_api::api::extractors::ValidatedJson;
/// use estate_api::domain::AmenityInput;
///
/// async fn create_amenity(ValidatedJson(payload): ValidatedJson<AmenityInput>) {
///     // payload is already validated
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::non_field(e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::Validation(FieldErrors::from(&e)))?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::header::CONTENT_TYPE;
    use crate::domain::AmenityInput;

    fn request(body: &str) -> Request {
        Request::builder()
            .method("POST")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_malformed_body_is_non_field_error() {
        let result = ValidatedJson::<AmenityInput>::from_request(request("{oops"), &()).await;
        match result {
            Err(AppError::Validation(errors)) => {
                assert!(errors.get("non_field_errors").is_some())
            }
            _ => panic!("expected a validation error"),
        }
    }

    #[tokio::test]
    async fn test_validator_failure_is_keyed_by_field() {
        let long_name = "x".repeat(101);
        let body = format!(r#"{{"name": "{}"}}"#, long_name);
        let result = ValidatedJson::<AmenityInput>::from_request(request(&body), &()).await;
        match result {
            Err(AppError::Validation(errors)) => assert!(errors.get("name").is_some()),
            _ => panic!("expected a validation error"),
        }
    }
}
