//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::Database;
use crate::services::{
    AmenityService, AuthService, FavoriteService, InquiryService, LocationService,
    ProfileService, PropertyAmenityService, PropertyImageService, PropertyService,
    ReviewService, ServiceContainer, Services,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub profile_service: Arc<dyn ProfileService>,
    pub location_service: Arc<dyn LocationService>,
    pub amenity_service: Arc<dyn AmenityService>,
    pub property_service: Arc<dyn PropertyService>,
    pub image_service: Arc<dyn PropertyImageService>,
    pub property_amenity_service: Arc<dyn PropertyAmenityService>,
    pub favorite_service: Arc<dyn FavoriteService>,
    pub inquiry_service: Arc<dyn InquiryService>,
    pub review_service: Arc<dyn ReviewService>,
    /// Database connection, kept for health checks
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from database connection and config.
    pub fn from_config(database: Arc<Database>, config: Config) -> Self {
        let container = Services::from_connection(database.get_connection(), config);
        Self::from_container(&container, database)
    }

    /// Create application state from any service container, e.g. a mock one.
    pub fn from_container(container: &dyn ServiceContainer, database: Arc<Database>) -> Self {
        Self {
            auth_service: container.auth(),
            profile_service: container.profiles(),
            location_service: container.locations(),
            amenity_service: container.amenities(),
            property_service: container.properties(),
            image_service: container.property_images(),
            property_amenity_service: container.property_amenities(),
            favorite_service: container.favorites(),
            inquiry_service: container.inquiries(),
            review_service: container.reviews(),
            database,
        }
    }
}
