//! Integration tests for API endpoints.
//!
//! Every test builds the full router over a fresh in-memory SQLite database
//! and drives it with `oneshot` requests.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::{ConnectionTrait, Statement};
use serde_json::{json, Value};
use tower::ServiceExt;

use estate_api::{create_router, AppState, Config, Database};

const SECRET: &str = "test-secret-key-for-testing-only-32chars";

// =============================================================================
// Helpers
// =============================================================================

async fn app() -> Router {
    app_with_db().await.0
}

async fn app_with_db() -> (Router, Arc<Database>) {
    let mut config = Config::new("sqlite::memory:", SECRET).unwrap();
    // Each in-memory SQLite connection is its own database
    config.database_max_connections = 1;
    let db = Arc::new(Database::connect(&config).await.unwrap());
    (create_router(AppState::from_config(db.clone(), config)), db)
}

/// Detail rows stored for a property in the given subtype table.
async fn detail_rows(db: &Database, table: &str, property: i64) -> i64 {
    let conn = db.connection();
    let row = conn
        .query_one(Statement::from_string(
            conn.get_database_backend(),
            format!(
                "SELECT COUNT(*) AS n FROM {} WHERE property_id = {}",
                table, property
            ),
        ))
        .await
        .unwrap()
        .unwrap();
    row.try_get::<i64>("", "n").unwrap()
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    token: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Register a user and return (access token, profile id).
async fn register(app: &Router, username: &str) -> (String, i64) {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/auth/register/",
        Some(json!({
            "username": username,
            "email": format!("{}@example.com", username),
            "password": "SecurePass123!"
        })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    (
        body["access"].as_str().unwrap().to_string(),
        body["profile"]["id"].as_i64().unwrap(),
    )
}

async fn create_location(app: &Router) -> i64 {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/locations/",
        Some(json!({"country": "Kenya", "region": "Nairobi County", "city": "Nairobi"})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    body["id"].as_i64().unwrap()
}

fn flat(location: i64) -> Value {
    json!({
        "title": "Flat A",
        "description": "...",
        "location": location,
        "property_type": "APARTMENT",
        "price": "500.00",
        "price_period": "MONTHLY"
    })
}

async fn create_property(app: &Router, body: Value, token: Option<&str>) -> i64 {
    let (status, body) = send(app, Method::POST, "/api/properties/", Some(body), token).await;
    assert_eq!(status, StatusCode::CREATED, "{}", body);
    body["id"].as_i64().unwrap()
}

// =============================================================================
// Properties
// =============================================================================

#[tokio::test]
async fn test_property_lifecycle() {
    let app = app().await;
    let location = create_location(&app).await;

    let (status, created) =
        send(&app, Method::POST, "/api/properties/", Some(flat(location)), None).await;
    assert_eq!(status, StatusCode::CREATED, "{}", created);
    assert!(created["id"].is_i64());
    assert_eq!(created["is_available"], true);
    assert_eq!(created["views"], 0);
    assert_eq!(created["price"], "500.00");
    assert_eq!(created["price_period"], "MONTHLY");

    let uri = format!("/api/property/{}/", created["id"]);
    let (status, fetched) = send(&app, Method::GET, &uri, None, None).await;
    assert_eq!(status, StatusCode::OK);
    for field in ["id", "title", "location", "property_type", "price", "is_available", "views"] {
        assert_eq!(fetched[field], created[field], "{}", field);
    }

    let (status, body) = send(&app, Method::DELETE, &uri, None, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, body) = send(&app, Method::GET, &uri, None, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Property not found."}));
}

#[tokio::test]
async fn test_negative_price_rejected() {
    let app = app().await;
    let location = create_location(&app).await;

    let mut payload = flat(location);
    payload["price"] = json!("-1.00");
    let (status, body) = send(&app, Method::POST, "/api/properties/", Some(payload), None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["price"].is_array(), "{}", body);
}

#[tokio::test]
async fn test_details_must_match_property_type() {
    let app = app().await;
    let location = create_location(&app).await;

    let mut payload = flat(location);
    payload["land"] = json!({"land_type": "RESIDENTIAL", "area": "100.00"});
    let (status, body) = send(&app, Method::POST, "/api/properties/", Some(payload), None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["land"].is_array(), "{}", body);
}

#[tokio::test]
async fn test_unknown_location_rejected_on_field() {
    let app = app().await;

    let (status, body) = send(&app, Method::POST, "/api/properties/", Some(flat(99)), None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["location"].is_array(), "{}", body);
}

#[tokio::test]
async fn test_authenticated_creator_becomes_owner() {
    let app = app().await;
    let (token, profile_id) = register(&app, "landlord").await;
    let location = create_location(&app).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/properties/",
        Some(flat(location)),
        Some(&token),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["owner"].as_i64(), Some(profile_id));
}

#[tokio::test]
async fn test_delete_property_cascades() {
    let (app, db) = app_with_db().await;
    let location = create_location(&app).await;

    let mut payload = flat(location);
    payload["apartment"] = json!({
        "apartment_type": "2BED",
        "bedrooms": 2,
        "bathrooms": 1,
        "floor_number": 3,
        "total_floors": 5
    });
    let (status, created) =
        send(&app, Method::POST, "/api/properties/", Some(payload), None).await;
    assert_eq!(status, StatusCode::CREATED, "{}", created);
    assert_eq!(created["apartment"]["bedrooms"], 2);
    let property = created["id"].as_i64().unwrap();
    assert_eq!(detail_rows(&db, "apartments", property).await, 1);

    let (status, image) = send(
        &app,
        Method::POST,
        "/api/images/",
        Some(json!({"property": property, "image": "property_images/flat-a.jpg"})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", image);

    let (_, amenity) = send(
        &app,
        Method::POST,
        "/api/amenities/",
        Some(json!({"name": "Gym"})),
        None,
    )
    .await;
    let (status, link) = send(
        &app,
        Method::POST,
        "/api/property-amenities/",
        Some(json!({"property": property, "amenity": amenity["id"]})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", link);

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/property/{}/", property),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(detail_rows(&db, "apartments", property).await, 0);

    let (status, _) = send(
        &app,
        Method::GET,
        &format!("/api/image/{}/", image["id"]),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(
        &app,
        Method::GET,
        &format!("/api/property-amenity/{}/", link["id"]),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // The amenity itself survives
    let (status, _) = send(
        &app,
        Method::GET,
        &format!("/api/amenity/{}/", amenity["id"]),
        None,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_changing_type_replaces_detail_row() {
    let (app, db) = app_with_db().await;
    let location = create_location(&app).await;

    let mut plot = flat(location);
    plot["property_type"] = json!("LAND");
    plot["land"] = json!({"land_type": "RESIDENTIAL", "area": 1200});
    let property = create_property(&app, plot, None).await;
    assert_eq!(detail_rows(&db, "lands", property).await, 1);

    let mut payload = flat(location);
    payload["apartment"] = json!({
        "apartment_type": "STUDIO",
        "bedrooms": 1,
        "bathrooms": 1,
        "floor_number": 1,
        "total_floors": 2
    });
    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/api/property/{}/", property),
        Some(payload),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", updated);
    assert_eq!(updated["property_type"], "APARTMENT");
    assert!(updated["land"].is_null(), "{}", updated);

    assert_eq!(detail_rows(&db, "lands", property).await, 0);
    assert_eq!(detail_rows(&db, "apartments", property).await, 1);
}

#[tokio::test]
async fn test_written_details_match_stored_record() {
    let app = app().await;
    let location = create_location(&app).await;

    let mut plot = flat(location);
    plot["property_type"] = json!("LAND");
    plot["land"] = json!({"land_type": "RESIDENTIAL", "area": 1200});
    let (status, created) = send(&app, Method::POST, "/api/properties/", Some(plot), None).await;
    assert_eq!(status, StatusCode::CREATED, "{}", created);
    assert_eq!(created["land"]["area"], "1200.00");

    let uri = format!("/api/property/{}/", created["id"]);
    let (_, fetched) = send(&app, Method::GET, &uri, None, None).await;
    assert_eq!(fetched["land"], created["land"]);

    let mut replacement = flat(location);
    replacement["property_type"] = json!("LAND");
    replacement["land"] = json!({"land_type": "COMMERCIAL", "area": "75.5"});
    let (status, updated) = send(&app, Method::PUT, &uri, Some(replacement), None).await;
    assert_eq!(status, StatusCode::OK, "{}", updated);
    assert_eq!(updated["land"]["area"], "75.50");
}

#[tokio::test]
async fn test_non_numeric_id_is_json_not_found() {
    let app = app().await;

    let (status, body) = send(&app, Method::GET, "/api/property/abc/", None, None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string(), "{}", body);
}

#[tokio::test]
async fn test_collection_put_requires_id() {
    let app = app().await;

    let (status, body) = send(&app, Method::PUT, "/api/properties/", None, None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Please provide a valid Property ID."}));
}

#[tokio::test]
async fn test_collection_delete_empties_locations() {
    let app = app().await;
    let location = create_location(&app).await;
    create_property(&app, flat(location), None).await;

    let (status, _) = send(&app, Method::DELETE, "/api/locations/", None, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, locations) = send(&app, Method::GET, "/api/locations/", None, None).await;
    let (_, properties) = send(&app, Method::GET, "/api/properties/", None, None).await;
    assert_eq!(locations, json!([]));
    assert_eq!(properties, json!([]));
}

// =============================================================================
// Catalogue
// =============================================================================

#[tokio::test]
async fn test_duplicate_amenity_name_rejected() {
    let app = app().await;
    let payload = json!({"name": "Swimming pool", "icon": "pool"});

    let (status, _) = send(&app, Method::POST, "/api/amenities/", Some(payload.clone()), None).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(&app, Method::POST, "/api/amenities/", Some(payload), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["name"].is_array(), "{}", body);
}

#[tokio::test]
async fn test_duplicate_location_rejected() {
    let app = app().await;
    create_location(&app).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/locations/",
        Some(json!({"country": "Kenya", "region": "Nairobi County", "city": "Nairobi"})),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["non_field_errors"].is_array(), "{}", body);
}

#[tokio::test]
async fn test_malformed_json_is_non_field_error() {
    let app = app().await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/amenities/")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn test_register_creates_profile_reachable_from_user() {
    let app = app().await;
    let (token, profile_id) = register(&app, "jane").await;

    let (status, me) = send(&app, Method::GET, "/api/auth/me/", None, Some(&token)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(me["user"]["username"], "jane");
    assert_eq!(me["profile"]["id"].as_i64(), Some(profile_id));
    assert_eq!(me["profile"]["user"], me["user"]["id"]);
    assert!(me["user"].get("password_hash").is_none());

    let (_, profiles) = send(&app, Method::GET, "/api/profiles/", None, None).await;
    assert_eq!(profiles.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_duplicate_username_rejected() {
    let app = app().await;
    register(&app, "jane").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/register/",
        Some(json!({"username": "jane", "email": "other@example.com", "password": "SecurePass123!"})),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["username"].is_array(), "{}", body);
}

#[tokio::test]
async fn test_login_and_refresh() {
    let app = app().await;
    register(&app, "jane").await;

    let (status, session) = send(
        &app,
        Method::POST,
        "/api/auth/login/",
        Some(json!({"username": "jane", "password": "SecurePass123!"})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(session["access"].is_string());
    assert_eq!(session["user"]["username"], "jane");

    let (status, refreshed) = send(
        &app,
        Method::POST,
        "/api/auth/refresh/",
        Some(json!({"refresh": session["refresh"]})),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let access = refreshed["access"].as_str().unwrap();

    let (status, _) = send(&app, Method::GET, "/api/auth/me/", None, Some(access)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_wrong_password_is_unauthorized_without_detail() {
    let app = app().await;
    register(&app, "jane").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/login/",
        Some(json!({"username": "jane", "password": "not-the-password"})),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({"error": "Invalid credentials"}));
}

#[tokio::test]
async fn test_invalid_bearer_token_rejected() {
    let app = app().await;

    let (status, _) = send(&app, Method::GET, "/api/properties/", None, Some("garbage")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_edit_limited_to_owner() {
    let app = app().await;
    let (_, jane) = register(&app, "jane").await;
    let (mallory_token, _) = register(&app, "mallory").await;

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/profile/{}/", jane),
        None,
        Some(&mallory_token),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

// =============================================================================
// Favorites, inquiries, reviews
// =============================================================================

#[tokio::test]
async fn test_favorites_require_authentication() {
    let app = app().await;

    let (status, _) = send(&app, Method::GET, "/api/favorites/", None, None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_duplicate_favorite_rejected() {
    let app = app().await;
    let (token, profile_id) = register(&app, "jane").await;
    let location = create_location(&app).await;
    let property = create_property(&app, flat(location), None).await;
    let payload = json!({"property": property, "notes": "Near work"});

    let (status, favorite) = send(
        &app,
        Method::POST,
        "/api/favorites/",
        Some(payload.clone()),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", favorite);
    assert_eq!(favorite["user"].as_i64(), Some(profile_id));

    let (status, body) = send(&app, Method::POST, "/api/favorites/", Some(payload), Some(&token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["non_field_errors"].is_array(), "{}", body);

    // Another user sees an empty list
    let (other, _) = register(&app, "john").await;
    let (_, listed) = send(&app, Method::GET, "/api/favorites/", None, Some(&other)).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
async fn test_owner_response_stamps_inquiry() {
    let app = app().await;
    let (owner, _) = register(&app, "landlord").await;
    let (tenant, tenant_profile) = register(&app, "tenant").await;
    let location = create_location(&app).await;
    let property = create_property(&app, flat(location), Some(&owner)).await;

    let (status, inquiry) = send(
        &app,
        Method::POST,
        "/api/inquiries/",
        Some(json!({"property": property, "message": "Is it still available?"})),
        Some(&tenant),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{}", inquiry);
    assert_eq!(inquiry["status"], "PENDING");
    assert_eq!(inquiry["user"].as_i64(), Some(tenant_profile));
    assert!(inquiry["responded_at"].is_null());

    // The owner sees inquiries about their listing
    let (_, received) = send(&app, Method::GET, "/api/inquiries/", None, Some(&owner)).await;
    assert_eq!(received.as_array().map(Vec::len), Some(1));

    let (status, answered) = send(
        &app,
        Method::PUT,
        &format!("/api/inquiry/{}/", inquiry["id"]),
        Some(json!({
            "property": property,
            "message": "Is it still available?",
            "status": "RESPONDED",
            "response": "Yes, viewing on Saturday."
        })),
        Some(&owner),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", answered);
    assert_eq!(answered["status"], "RESPONDED");
    assert!(answered["responded_at"].is_string());

    // The owner can answer but not reword the question
    let (status, reworded) = send(
        &app,
        Method::PUT,
        &format!("/api/inquiry/{}/", inquiry["id"]),
        Some(json!({
            "property": property,
            "message": "Withdrawn",
            "status": "CLOSED"
        })),
        Some(&owner),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", reworded);
    assert_eq!(reworded["status"], "CLOSED");
    assert_eq!(reworded["message"], "Is it still available?");
    assert_eq!(reworded["user"].as_i64(), Some(tenant_profile));
}

#[tokio::test]
async fn test_review_rules() {
    let app = app().await;
    let (token, _) = register(&app, "jane").await;
    let location = create_location(&app).await;
    let property = create_property(&app, flat(location), None).await;

    let review = |rating: i64| {
        json!({"property": property, "rating": rating, "title": "Quiet", "comment": "Lovely place"})
    };

    let (status, body) = send(&app, Method::POST, "/api/reviews/", Some(review(6)), Some(&token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["rating"].is_array(), "{}", body);

    let (status, created) = send(&app, Method::POST, "/api/reviews/", Some(review(4)), Some(&token)).await;
    assert_eq!(status, StatusCode::CREATED, "{}", created);
    assert_eq!(created["is_approved"], false);

    let (status, body) = send(&app, Method::POST, "/api/reviews/", Some(review(5)), Some(&token)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["non_field_errors"].is_array(), "{}", body);

    // Reading is public
    let (status, listed) = send(&app, Method::GET, "/api/reviews/", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().map(Vec::len), Some(1));

    // Moderation fields are not the reviewer's to set
    let mut edit = review(5);
    edit["is_approved"] = json!(true);
    edit["response"] = json!("Thanks for staying");
    let (status, edited) = send(
        &app,
        Method::PUT,
        &format!("/api/review/{}/", created["id"]),
        Some(edit),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{}", edited);
    assert_eq!(edited["rating"], 5);
    assert_eq!(edited["is_approved"], false);
    assert!(edited["response"].is_null());
}

#[tokio::test]
async fn test_health_reports_database() {
    let app = app().await;

    let (status, body) = send(&app, Method::GET, "/health", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["database"], "healthy");
}
