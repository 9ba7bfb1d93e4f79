//! JWT authentication middleware.

use axum::{
    async_trait,
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::config::BEARER_TOKEN_PREFIX;
use crate::errors::AppError;

/// Authenticated caller extracted from an access token
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub user_id: i32,
    pub profile_id: i32,
    pub username: String,
}

/// Identity middleware.
///
/// Requests without an `Authorization` header pass through anonymously.
/// A header that is present but not a valid bearer access token is
/// rejected with 401; a valid one injects the [`CurrentUser`] into the
/// request extensions.
pub async fn identity_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .map(|h| h.to_str().map_err(|_| AppError::Unauthorized))
        .transpose()?;

    if let Some(header) = header {
        let token = header
            .strip_prefix(BEARER_TOKEN_PREFIX)
            .ok_or(AppError::Unauthorized)?;
        let claims = state.auth_service.verify_token(token)?;

        request.extensions_mut().insert(CurrentUser {
            user_id: claims.sub,
            profile_id: claims.profile_id,
            username: claims.username,
        });
    }

    Ok(next.run(request).await)
}

/// Handlers taking `CurrentUser` require authentication; `Option<CurrentUser>`
/// accepts anonymous callers.
#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or(AppError::Unauthorized)
    }
}
