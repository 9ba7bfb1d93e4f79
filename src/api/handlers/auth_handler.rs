//! Authentication handlers.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::config::{MAX_USERNAME_LENGTH, MIN_PASSWORD_LENGTH};
use crate::domain::validation::{PHONE_PATTERN, USERNAME_PATTERN};
use crate::errors::AppResult;
use crate::services::{Account, Registration, Session};
use crate::types::Created;

/// Sign-up request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(
        length(
            min = 1,
            max = MAX_USERNAME_LENGTH,
            message = "Ensure this field has no more than 150 characters."
        ),
        regex(
            path = *USERNAME_PATTERN,
            message = "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters."
        )
    )]
    #[schema(example = "jane")]
    pub username: String,
    #[validate(email(message = "Enter a valid email address."))]
    #[schema(example = "jane@example.com")]
    pub email: String,
    #[validate(length(
        min = MIN_PASSWORD_LENGTH,
        message = "This password is too short. It must contain at least 8 characters."
    ))]
    #[schema(example = "SecurePass123!", min_length = 8)]
    pub password: String,
    #[validate(regex(path = *PHONE_PATTERN, message = "Enter a valid phone number."))]
    #[schema(example = "+254712345678")]
    pub phone: Option<String>,
    pub bio: Option<String>,
    /// Path of an already stored picture
    #[validate(length(max = 255, message = "Ensure this field has no more than 255 characters."))]
    pub profile_picture: Option<String>,
}

impl From<RegisterRequest> for Registration {
    fn from(request: RegisterRequest) -> Self {
        Self {
            username: request.username,
            email: request.email,
            password: request.password,
            phone: request.phone,
            bio: request.bio,
            profile_picture: request.profile_picture,
        }
    }
}

/// Credentials for login
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "jane")]
    pub username: String,
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RefreshRequest {
    pub refresh: String,
}

/// A freshly issued access token
#[derive(Debug, Serialize, ToSchema)]
pub struct AccessToken {
    pub access: String,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register/", post(register))
        .route("/login/", post(login))
        .route("/refresh/", post(refresh))
        .route("/me/", get(me))
}

/// Register a new user and profile
#[utoipa::path(
    post,
    path = "/api/auth/register/",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = Session),
        (status = 400, description = "Validation error")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<Created<Session>> {
    let session = state.auth_service.register(payload.into()).await?;
    Ok(Created(session))
}

/// Login and get a token pair
#[utoipa::path(
    post,
    path = "/api/auth/login/",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = Session),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<Session>> {
    let session = state
        .auth_service
        .login(payload.username, payload.password)
        .await?;

    Ok(Json(session))
}

/// Exchange a refresh token for a new access token
#[utoipa::path(
    post,
    path = "/api/auth/refresh/",
    tag = "Authentication",
    request_body = RefreshRequest,
    responses(
        (status = 200, description = "New access token", body = AccessToken),
        (status = 401, description = "Invalid or expired refresh token")
    )
)]
pub async fn refresh(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RefreshRequest>,
) -> AppResult<Json<AccessToken>> {
    let access = state.auth_service.refresh(payload.refresh).await?;
    Ok(Json(AccessToken { access }))
}

/// The authenticated user and their profile
#[utoipa::path(
    get,
    path = "/api/auth/me/",
    tag = "Authentication",
    responses(
        (status = 200, description = "Current account", body = Account),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = []))
)]
pub async fn me(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<Account>> {
    let account = state.auth_service.me(current_user.user_id).await?;
    Ok(Json(account))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_rejects_bad_username_and_short_password() {
        let request = RegisterRequest {
            username: "jane doe!".to_string(),
            email: "jane@example.com".to_string(),
            password: "short".to_string(),
            phone: None,
            bio: None,
            profile_picture: None,
        };
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("username"));
        assert!(fields.contains_key("password"));
        assert!(!fields.contains_key("email"));
    }
}
