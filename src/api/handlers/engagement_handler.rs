//! Favorite, inquiry and review handlers.
//!
//! Favorites and inquiries are private to the caller. Reviews can be read
//! by anyone but only written by their author.

use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};

use crate::api::extractors::{Path, ValidatedJson};
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{Favorite, FavoriteInput, Inquiry, InquiryInput, Review, ReviewInput};
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

pub fn engagement_routes() -> Router<AppState> {
    Router::new()
        .route("/favorites/", get(list_favorites).post(create_favorite))
        .route(
            "/favorite/:id/",
            get(get_favorite).put(update_favorite).delete(delete_favorite),
        )
        .route("/inquiries/", get(list_inquiries).post(create_inquiry))
        .route(
            "/inquiry/:id/",
            get(get_inquiry).put(update_inquiry).delete(delete_inquiry),
        )
        .route("/reviews/", get(list_reviews).post(create_review))
        .route(
            "/review/:id/",
            get(get_review).put(update_review).delete(delete_review),
        )
}

// =============================================================================
// Favorites
// =============================================================================

/// The caller's favorites
#[utoipa::path(
    get,
    path = "/api/favorites/",
    tag = "Favorites",
    responses(
        (status = 200, description = "Caller's favorites", body = Vec<Favorite>),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_favorites(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<Vec<Favorite>>> {
    Ok(Json(state.favorite_service.list(current_user.profile_id).await?))
}

#[utoipa::path(
    post,
    path = "/api/favorites/",
    tag = "Favorites",
    request_body = FavoriteInput,
    responses(
        (status = 201, description = "Favorite added", body = Favorite),
        (status = 400, description = "Validation error or already a favorite"),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_favorite(
    State(state): State<AppState>,
    current_user: CurrentUser,
    ValidatedJson(payload): ValidatedJson<FavoriteInput>,
) -> AppResult<Created<Favorite>> {
    let favorite = state
        .favorite_service
        .create(payload, current_user.profile_id)
        .await?;
    Ok(Created(favorite))
}

#[utoipa::path(
    get,
    path = "/api/favorite/{id}/",
    tag = "Favorites",
    params(("id" = i32, Path, description = "Favorite id")),
    responses(
        (status = 200, description = "Favorite found", body = Favorite),
        (status = 403, description = "Someone else's favorite"),
        (status = 404, description = "Favorite not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_favorite(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Favorite>> {
    Ok(Json(
        state.favorite_service.get(id, current_user.profile_id).await?,
    ))
}

#[utoipa::path(
    put,
    path = "/api/favorite/{id}/",
    tag = "Favorites",
    params(("id" = i32, Path, description = "Favorite id")),
    request_body = FavoriteInput,
    responses(
        (status = 200, description = "Favorite updated", body = Favorite),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Someone else's favorite"),
        (status = 404, description = "Favorite not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_favorite(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<FavoriteInput>,
) -> AppResult<Json<Favorite>> {
    let favorite = state
        .favorite_service
        .update(id, payload, current_user.profile_id)
        .await?;
    Ok(Json(favorite))
}

#[utoipa::path(
    delete,
    path = "/api/favorite/{id}/",
    tag = "Favorites",
    params(("id" = i32, Path, description = "Favorite id")),
    responses(
        (status = 204, description = "Favorite removed"),
        (status = 403, description = "Someone else's favorite"),
        (status = 404, description = "Favorite not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_favorite(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state
        .favorite_service
        .delete(id, current_user.profile_id)
        .await?;
    Ok(NoContent)
}

// =============================================================================
// Inquiries
// =============================================================================

/// Inquiries the caller sent or received about their listings
#[utoipa::path(
    get,
    path = "/api/inquiries/",
    tag = "Inquiries",
    responses(
        (status = 200, description = "Caller's inquiries", body = Vec<Inquiry>),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_inquiries(
    State(state): State<AppState>,
    current_user: CurrentUser,
) -> AppResult<Json<Vec<Inquiry>>> {
    Ok(Json(state.inquiry_service.list(current_user.profile_id).await?))
}

#[utoipa::path(
    post,
    path = "/api/inquiries/",
    tag = "Inquiries",
    request_body = InquiryInput,
    responses(
        (status = 201, description = "Inquiry sent", body = Inquiry),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_inquiry(
    State(state): State<AppState>,
    current_user: CurrentUser,
    ValidatedJson(payload): ValidatedJson<InquiryInput>,
) -> AppResult<Created<Inquiry>> {
    let inquiry = state
        .inquiry_service
        .create(payload, current_user.profile_id)
        .await?;
    Ok(Created(inquiry))
}

#[utoipa::path(
    get,
    path = "/api/inquiry/{id}/",
    tag = "Inquiries",
    params(("id" = i32, Path, description = "Inquiry id")),
    responses(
        (status = 200, description = "Inquiry found", body = Inquiry),
        (status = 403, description = "Neither sender nor property owner"),
        (status = 404, description = "Inquiry not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_inquiry(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Inquiry>> {
    Ok(Json(
        state.inquiry_service.get(id, current_user.profile_id).await?,
    ))
}

/// Replace an inquiry; moving it to RESPONDED stamps `responded_at`
#[utoipa::path(
    put,
    path = "/api/inquiry/{id}/",
    tag = "Inquiries",
    params(("id" = i32, Path, description = "Inquiry id")),
    request_body = InquiryInput,
    responses(
        (status = 200, description = "Inquiry updated", body = Inquiry),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Neither sender nor property owner"),
        (status = 404, description = "Inquiry not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_inquiry(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<InquiryInput>,
) -> AppResult<Json<Inquiry>> {
    let inquiry = state
        .inquiry_service
        .update(id, payload, current_user.profile_id)
        .await?;
    Ok(Json(inquiry))
}

#[utoipa::path(
    delete,
    path = "/api/inquiry/{id}/",
    tag = "Inquiries",
    params(("id" = i32, Path, description = "Inquiry id")),
    responses(
        (status = 204, description = "Inquiry deleted"),
        (status = 403, description = "Not the sender"),
        (status = 404, description = "Inquiry not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_inquiry(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state
        .inquiry_service
        .delete(id, current_user.profile_id)
        .await?;
    Ok(NoContent)
}

// =============================================================================
// Reviews
// =============================================================================

#[utoipa::path(
    get,
    path = "/api/reviews/",
    tag = "Reviews",
    responses((status = 200, description = "All reviews", body = Vec<Review>))
)]
pub async fn list_reviews(State(state): State<AppState>) -> AppResult<Json<Vec<Review>>> {
    Ok(Json(state.review_service.list().await?))
}

#[utoipa::path(
    post,
    path = "/api/reviews/",
    tag = "Reviews",
    request_body = ReviewInput,
    responses(
        (status = 201, description = "Review posted", body = Review),
        (status = 400, description = "Validation error or already reviewed"),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_review(
    State(state): State<AppState>,
    current_user: CurrentUser,
    ValidatedJson(payload): ValidatedJson<ReviewInput>,
) -> AppResult<Created<Review>> {
    let review = state
        .review_service
        .create(payload, current_user.profile_id)
        .await?;
    Ok(Created(review))
}

#[utoipa::path(
    get,
    path = "/api/review/{id}/",
    tag = "Reviews",
    params(("id" = i32, Path, description = "Review id")),
    responses(
        (status = 200, description = "Review found", body = Review),
        (status = 404, description = "Review not found")
    )
)]
pub async fn get_review(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Review>> {
    Ok(Json(state.review_service.get(id).await?))
}

#[utoipa::path(
    put,
    path = "/api/review/{id}/",
    tag = "Reviews",
    params(("id" = i32, Path, description = "Review id")),
    request_body = ReviewInput,
    responses(
        (status = 200, description = "Review updated", body = Review),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Not the reviewer"),
        (status = 404, description = "Review not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_review(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<ReviewInput>,
) -> AppResult<Json<Review>> {
    let review = state
        .review_service
        .update(id, payload, current_user.profile_id)
        .await?;
    Ok(Json(review))
}

#[utoipa::path(
    delete,
    path = "/api/review/{id}/",
    tag = "Reviews",
    params(("id" = i32, Path, description = "Review id")),
    responses(
        (status = 204, description = "Review deleted"),
        (status = 403, description = "Not the reviewer"),
        (status = 404, description = "Review not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_review(
    State(state): State<AppState>,
    current_user: CurrentUser,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state
        .review_service
        .delete(id, current_user.profile_id)
        .await?;
    Ok(NoContent)
}
