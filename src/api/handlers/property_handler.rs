//! Property handlers, including images and amenity links.

use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};

use super::missing_id;
use crate::api::extractors::{Path, ValidatedJson};
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{
    PropertyAmenity, PropertyAmenityInput, PropertyImage, PropertyImageInput, PropertyInput,
    PropertyResponse,
};
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

pub fn property_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/properties/",
            get(list_properties)
                .post(create_property)
                .put(replace_properties)
                .delete(delete_properties),
        )
        .route(
            "/property/:id/",
            get(get_property).put(update_property).delete(delete_property),
        )
        .route("/images/", get(list_images).post(create_image))
        .route(
            "/image/:id/",
            get(get_image).put(update_image).delete(delete_image),
        )
        .route(
            "/property-amenities/",
            get(list_property_amenities).post(create_property_amenity),
        )
        .route(
            "/property-amenity/:id/",
            get(get_property_amenity)
                .put(update_property_amenity)
                .delete(delete_property_amenity),
        )
}

// =============================================================================
// Properties
// =============================================================================

/// List all properties with their details, newest first
#[utoipa::path(
    get,
    path = "/api/properties/",
    tag = "Properties",
    responses((status = 200, description = "All properties", body = Vec<PropertyResponse>))
)]
pub async fn list_properties(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<PropertyResponse>>> {
    Ok(Json(state.property_service.list().await?))
}

/// Create a property; an authenticated caller becomes its owner by default
#[utoipa::path(
    post,
    path = "/api/properties/",
    tag = "Properties",
    request_body = PropertyInput,
    responses(
        (status = 201, description = "Property created", body = PropertyResponse),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_property(
    State(state): State<AppState>,
    current_user: Option<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<PropertyInput>,
) -> AppResult<Created<PropertyResponse>> {
    let caller = current_user.map(|user| user.profile_id);
    Ok(Created(state.property_service.create(payload, caller).await?))
}

#[utoipa::path(
    put,
    path = "/api/properties/",
    tag = "Properties",
    responses((status = 400, description = "No property id given"))
)]
pub async fn replace_properties() -> AppResult<NoContent> {
    Err(missing_id("Property"))
}

/// Delete every property
#[utoipa::path(
    delete,
    path = "/api/properties/",
    tag = "Properties",
    responses((status = 204, description = "All properties deleted"))
)]
pub async fn delete_properties(State(state): State<AppState>) -> AppResult<NoContent> {
    state.property_service.delete_all().await?;
    Ok(NoContent)
}

#[utoipa::path(
    get,
    path = "/api/property/{id}/",
    tag = "Properties",
    params(("id" = i32, Path, description = "Property id")),
    responses(
        (status = 200, description = "Property found", body = PropertyResponse),
        (status = 404, description = "Property not found")
    )
)]
pub async fn get_property(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<PropertyResponse>> {
    Ok(Json(state.property_service.get(id).await?))
}

/// Replace a property and its detail record
#[utoipa::path(
    put,
    path = "/api/property/{id}/",
    tag = "Properties",
    params(("id" = i32, Path, description = "Property id")),
    request_body = PropertyInput,
    responses(
        (status = 200, description = "Property updated", body = PropertyResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Property not found")
    )
)]
pub async fn update_property(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<PropertyInput>,
) -> AppResult<Json<PropertyResponse>> {
    Ok(Json(state.property_service.update(id, payload).await?))
}

/// Delete a property together with everything attached to it
#[utoipa::path(
    delete,
    path = "/api/property/{id}/",
    tag = "Properties",
    params(("id" = i32, Path, description = "Property id")),
    responses(
        (status = 204, description = "Property deleted"),
        (status = 404, description = "Property not found")
    )
)]
pub async fn delete_property(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state.property_service.delete(id).await?;
    Ok(NoContent)
}

// =============================================================================
// Images
// =============================================================================

#[utoipa::path(
    get,
    path = "/api/images/",
    tag = "Images",
    responses((status = 200, description = "All images", body = Vec<PropertyImage>))
)]
pub async fn list_images(State(state): State<AppState>) -> AppResult<Json<Vec<PropertyImage>>> {
    Ok(Json(state.image_service.list().await?))
}

#[utoipa::path(
    post,
    path = "/api/images/",
    tag = "Images",
    request_body = PropertyImageInput,
    responses(
        (status = 201, description = "Image attached", body = PropertyImage),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_image(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PropertyImageInput>,
) -> AppResult<Created<PropertyImage>> {
    Ok(Created(state.image_service.create(payload).await?))
}

#[utoipa::path(
    get,
    path = "/api/image/{id}/",
    tag = "Images",
    params(("id" = i32, Path, description = "Image id")),
    responses(
        (status = 200, description = "Image found", body = PropertyImage),
        (status = 404, description = "Image not found")
    )
)]
pub async fn get_image(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<PropertyImage>> {
    Ok(Json(state.image_service.get(id).await?))
}

#[utoipa::path(
    put,
    path = "/api/image/{id}/",
    tag = "Images",
    params(("id" = i32, Path, description = "Image id")),
    request_body = PropertyImageInput,
    responses(
        (status = 200, description = "Image updated", body = PropertyImage),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Image not found")
    )
)]
pub async fn update_image(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<PropertyImageInput>,
) -> AppResult<Json<PropertyImage>> {
    Ok(Json(state.image_service.update(id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/api/image/{id}/",
    tag = "Images",
    params(("id" = i32, Path, description = "Image id")),
    responses(
        (status = 204, description = "Image deleted"),
        (status = 404, description = "Image not found")
    )
)]
pub async fn delete_image(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state.image_service.delete(id).await?;
    Ok(NoContent)
}

// =============================================================================
// Amenity links
// =============================================================================

#[utoipa::path(
    get,
    path = "/api/property-amenities/",
    tag = "Property amenities",
    responses((status = 200, description = "All amenity links", body = Vec<PropertyAmenity>))
)]
pub async fn list_property_amenities(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<PropertyAmenity>>> {
    Ok(Json(state.property_amenity_service.list().await?))
}

#[utoipa::path(
    post,
    path = "/api/property-amenities/",
    tag = "Property amenities",
    request_body = PropertyAmenityInput,
    responses(
        (status = 201, description = "Amenity linked", body = PropertyAmenity),
        (status = 400, description = "Validation error or duplicate link")
    )
)]
pub async fn create_property_amenity(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PropertyAmenityInput>,
) -> AppResult<Created<PropertyAmenity>> {
    Ok(Created(state.property_amenity_service.create(payload).await?))
}

#[utoipa::path(
    get,
    path = "/api/property-amenity/{id}/",
    tag = "Property amenities",
    params(("id" = i32, Path, description = "Link id")),
    responses(
        (status = 200, description = "Link found", body = PropertyAmenity),
        (status = 404, description = "Link not found")
    )
)]
pub async fn get_property_amenity(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<PropertyAmenity>> {
    Ok(Json(state.property_amenity_service.get(id).await?))
}

#[utoipa::path(
    put,
    path = "/api/property-amenity/{id}/",
    tag = "Property amenities",
    params(("id" = i32, Path, description = "Link id")),
    request_body = PropertyAmenityInput,
    responses(
        (status = 200, description = "Link updated", body = PropertyAmenity),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Link not found")
    )
)]
pub async fn update_property_amenity(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<PropertyAmenityInput>,
) -> AppResult<Json<PropertyAmenity>> {
    Ok(Json(state.property_amenity_service.update(id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/api/property-amenity/{id}/",
    tag = "Property amenities",
    params(("id" = i32, Path, description = "Link id")),
    responses(
        (status = 204, description = "Link deleted"),
        (status = 404, description = "Link not found")
    )
)]
pub async fn delete_property_amenity(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state.property_amenity_service.delete(id).await?;
    Ok(NoContent)
}
