//! Location and amenity handlers.

use axum::{
    extract::State,
    response::Json,
    routing::get,
    Router,
};

use super::missing_id;
use crate::api::extractors::{Path, ValidatedJson};
use crate::api::AppState;
use crate::domain::{Amenity, AmenityInput, Location, LocationInput};
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/locations/",
            get(list_locations)
                .post(create_location)
                .put(replace_locations)
                .delete(delete_locations),
        )
        .route(
            "/location/:id/",
            get(get_location).put(update_location).delete(delete_location),
        )
        .route(
            "/amenities/",
            get(list_amenities)
                .post(create_amenity)
                .put(replace_amenities)
                .delete(delete_amenities),
        )
        .route(
            "/amenity/:id/",
            get(get_amenity).put(update_amenity).delete(delete_amenity),
        )
}

// =============================================================================
// Locations
// =============================================================================

#[utoipa::path(
    get,
    path = "/api/locations/",
    tag = "Locations",
    responses((status = 200, description = "All locations", body = Vec<Location>))
)]
pub async fn list_locations(State(state): State<AppState>) -> AppResult<Json<Vec<Location>>> {
    Ok(Json(state.location_service.list().await?))
}

#[utoipa::path(
    post,
    path = "/api/locations/",
    tag = "Locations",
    request_body = LocationInput,
    responses(
        (status = 201, description = "Location created", body = Location),
        (status = 400, description = "Validation error or duplicate location")
    )
)]
pub async fn create_location(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LocationInput>,
) -> AppResult<Created<Location>> {
    Ok(Created(state.location_service.create(payload).await?))
}

/// Rejected: a replacement needs an id
#[utoipa::path(
    put,
    path = "/api/locations/",
    tag = "Locations",
    responses((status = 400, description = "No location id given"))
)]
pub async fn replace_locations() -> AppResult<NoContent> {
    Err(missing_id("Location"))
}

/// Delete every location
#[utoipa::path(
    delete,
    path = "/api/locations/",
    tag = "Locations",
    responses((status = 204, description = "All locations deleted"))
)]
pub async fn delete_locations(State(state): State<AppState>) -> AppResult<NoContent> {
    state.location_service.delete_all().await?;
    Ok(NoContent)
}

#[utoipa::path(
    get,
    path = "/api/location/{id}/",
    tag = "Locations",
    params(("id" = i32, Path, description = "Location id")),
    responses(
        (status = 200, description = "Location found", body = Location),
        (status = 404, description = "Location not found")
    )
)]
pub async fn get_location(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Location>> {
    Ok(Json(state.location_service.get(id).await?))
}

#[utoipa::path(
    put,
    path = "/api/location/{id}/",
    tag = "Locations",
    params(("id" = i32, Path, description = "Location id")),
    request_body = LocationInput,
    responses(
        (status = 200, description = "Location updated", body = Location),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Location not found")
    )
)]
pub async fn update_location(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<LocationInput>,
) -> AppResult<Json<Location>> {
    Ok(Json(state.location_service.update(id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/api/location/{id}/",
    tag = "Locations",
    params(("id" = i32, Path, description = "Location id")),
    responses(
        (status = 204, description = "Location deleted"),
        (status = 404, description = "Location not found")
    )
)]
pub async fn delete_location(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state.location_service.delete(id).await?;
    Ok(NoContent)
}

// =============================================================================
// Amenities
// =============================================================================

#[utoipa::path(
    get,
    path = "/api/amenities/",
    tag = "Amenities",
    responses((status = 200, description = "All amenities", body = Vec<Amenity>))
)]
pub async fn list_amenities(State(state): State<AppState>) -> AppResult<Json<Vec<Amenity>>> {
    Ok(Json(state.amenity_service.list().await?))
}

#[utoipa::path(
    post,
    path = "/api/amenities/",
    tag = "Amenities",
    request_body = AmenityInput,
    responses(
        (status = 201, description = "Amenity created", body = Amenity),
        (status = 400, description = "Validation error or duplicate name")
    )
)]
pub async fn create_amenity(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AmenityInput>,
) -> AppResult<Created<Amenity>> {
    Ok(Created(state.amenity_service.create(payload).await?))
}

#[utoipa::path(
    put,
    path = "/api/amenities/",
    tag = "Amenities",
    responses((status = 400, description = "No amenity id given"))
)]
pub async fn replace_amenities() -> AppResult<NoContent> {
    Err(missing_id("Amenity"))
}

#[utoipa::path(
    delete,
    path = "/api/amenities/",
    tag = "Amenities",
    responses((status = 204, description = "All amenities deleted"))
)]
pub async fn delete_amenities(State(state): State<AppState>) -> AppResult<NoContent> {
    state.amenity_service.delete_all().await?;
    Ok(NoContent)
}

#[utoipa::path(
    get,
    path = "/api/amenity/{id}/",
    tag = "Amenities",
    params(("id" = i32, Path, description = "Amenity id")),
    responses(
        (status = 200, description = "Amenity found", body = Amenity),
        (status = 404, description = "Amenity not found")
    )
)]
pub async fn get_amenity(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Amenity>> {
    Ok(Json(state.amenity_service.get(id).await?))
}

#[utoipa::path(
    put,
    path = "/api/amenity/{id}/",
    tag = "Amenities",
    params(("id" = i32, Path, description = "Amenity id")),
    request_body = AmenityInput,
    responses(
        (status = 200, description = "Amenity updated", body = Amenity),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Amenity not found")
    )
)]
pub async fn update_amenity(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<AmenityInput>,
) -> AppResult<Json<Amenity>> {
    Ok(Json(state.amenity_service.update(id, payload).await?))
}

#[utoipa::path(
    delete,
    path = "/api/amenity/{id}/",
    tag = "Amenities",
    params(("id" = i32, Path, description = "Amenity id")),
    responses(
        (status = 204, description = "Amenity deleted"),
        (status = 404, description = "Amenity not found")
    )
)]
pub async fn delete_amenity(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<NoContent> {
    state.amenity_service.delete(id).await?;
    Ok(NoContent)
}
