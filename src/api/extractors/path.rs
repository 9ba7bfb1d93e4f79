//! Path extractor whose rejections render like every other API error.

use axum::{
    async_trait,
    extract::{rejection::PathRejection, FromRequestParts},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// Drop-in for [`axum::extract::Path`].
///
/// A segment that does not parse (`/api/property/abc/`) cannot name any
/// record, so it answers 404 with a JSON body instead of axum's plain-text 400.
pub struct Path<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for Path<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum::extract::Path(value) = axum::extract::Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e: PathRejection| {
                tracing::debug!(error = %e.body_text(), "Unparseable path parameter");
                AppError::not_found("Resource")
            })?;
        Ok(Path(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        routing::get,
        Router,
    };
    use tower::ServiceExt;

    async fn echo(Path(id): Path<i32>) -> String {
        id.to_string()
    }

    async fn call(uri: &str) -> (StatusCode, String) {
        let app = Router::new().route("/item/:id/", get(echo));
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_integer_id_extracted() {
        assert_eq!(call("/item/42/").await, (StatusCode::OK, "42".to_string()));
    }

    #[tokio::test]
    async fn test_non_integer_id_is_json_not_found() {
        let (status, body) = call("/item/abc/").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json, serde_json::json!({"error": "Resource not found."}));
    }
}
