//! Profile handlers.

use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::{Path, ValidatedJson};
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{Profile, ProfileInput};
use crate::errors::AppResult;
use crate::types::NoContent;

pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profiles/", get(list_profiles))
        .route(
            "/profile/:id/",
            get(get_profile).put(update_profile).delete(delete_profile),
        )
}

/// List all profiles
#[utoipa::path(
    get,
    path = "/api/profiles/",
    tag = "Profiles",
    responses((status = 200, description = "All profiles", body = Vec<Profile>))
)]
pub async fn list_profiles(State(state): State<AppState>) -> AppResult<Json<Vec<Profile>>> {
    Ok(Json(state.profile_service.list().await?))
}

/// Get a profile by id
#[utoipa::path(
    get,
    path = "/api/profile/{id}/",
    tag = "Profiles",
    params(("id" = i32, Path, description = "Profile id")),
    responses(
        (status = 200, description = "Profile found", body = Profile),
        (status = 404, description = "Profile not found")
    )
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Profile>> {
    Ok(Json(state.profile_service.get(id).await?))
}

/// Replace the caller's own profile
#[utoipa::path(
    put,
    path = "/api/profile/{id}/",
    tag = "Profiles",
    params(("id" = i32, Path, description = "Profile id")),
    request_body = ProfileInput,
    responses(
        (status = 200, description = "Profile updated", body = Profile),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Not the caller's profile"),
        (status = 404, description = "Profile not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_profile(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<ProfileInput>,
) -> AppResult<Json<Profile>> {
    let profile = state
        .profile_service
        .update(id, payload, current_user.profile_id)
        .await?;
    Ok(Json(profile))
}

/// Close the caller's account
#[utoipa::path(
    delete,
    path = "/api/profile/{id}/",
    tag = "Profiles",
    params(("id" = i32, Path, description = "Profile id")),
    responses(
        (status = 204, description = "Account deleted"),
        (status = 403, description = "Not the caller's profile"),
        (status = 404, description = "Profile not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_profile(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state
        .profile_service
        .delete(id, current_user.profile_id)
        .await?;
    Ok(NoContent)
}
