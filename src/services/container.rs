//! Service Container - Centralized service access.
//!
//! Every service shares one [`Persistence`] unit of work over the pool.

use std::sync::Arc;

use super::{
    AmenityManager, AmenityService, AuthService, Authenticator, FavoriteManager,
    FavoriteService, InquiryManager, InquiryService, LocationManager, LocationService,
    ProfileManager, ProfileService, PropertyAmenityManager, PropertyAmenityService,
    PropertyImageManager, PropertyImageService, PropertyManager, PropertyService,
    ReviewManager, ReviewService,
};
use crate::config::Config;
use crate::infra::Persistence;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    fn auth(&self) -> Arc<dyn AuthService>;

    fn profiles(&self) -> Arc<dyn ProfileService>;

    fn locations(&self) -> Arc<dyn LocationService>;

    fn amenities(&self) -> Arc<dyn AmenityService>;

    fn properties(&self) -> Arc<dyn PropertyService>;

    fn property_images(&self) -> Arc<dyn PropertyImageService>;

    fn property_amenities(&self) -> Arc<dyn PropertyAmenityService>;

    fn favorites(&self) -> Arc<dyn FavoriteService>;

    fn inquiries(&self) -> Arc<dyn InquiryService>;

    fn reviews(&self) -> Arc<dyn ReviewService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    auth: Arc<dyn AuthService>,
    profiles: Arc<dyn ProfileService>,
    locations: Arc<dyn LocationService>,
    amenities: Arc<dyn AmenityService>,
    properties: Arc<dyn PropertyService>,
    property_images: Arc<dyn PropertyImageService>,
    property_amenities: Arc<dyn PropertyAmenityService>,
    favorites: Arc<dyn FavoriteService>,
    inquiries: Arc<dyn InquiryService>,
    reviews: Arc<dyn ReviewService>,
}

impl Services {
    /// Create service container from database connection and config
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        let uow = Arc::new(Persistence::new(db));

        Self {
            auth: Arc::new(Authenticator::new(uow.clone(), config)),
            profiles: Arc::new(ProfileManager::new(uow.clone())),
            locations: Arc::new(LocationManager::new(uow.clone())),
            amenities: Arc::new(AmenityManager::new(uow.clone())),
            properties: Arc::new(PropertyManager::new(uow.clone())),
            property_images: Arc::new(PropertyImageManager::new(uow.clone())),
            property_amenities: Arc::new(PropertyAmenityManager::new(uow.clone())),
            favorites: Arc::new(FavoriteManager::new(uow.clone())),
            inquiries: Arc::new(InquiryManager::new(uow.clone())),
            reviews: Arc::new(ReviewManager::new(uow)),
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth.clone()
    }

    fn profiles(&self) -> Arc<dyn ProfileService> {
        self.profiles.clone()
    }

    fn locations(&self) -> Arc<dyn LocationService> {
        self.locations.clone()
    }

    fn amenities(&self) -> Arc<dyn AmenityService> {
        self.amenities.clone()
    }

    fn properties(&self) -> Arc<dyn PropertyService> {
        self.properties.clone()
    }

    fn property_images(&self) -> Arc<dyn PropertyImageService> {
        self.property_images.clone()
    }

    fn property_amenities(&self) -> Arc<dyn PropertyAmenityService> {
        self.property_amenities.clone()
    }

    fn favorites(&self) -> Arc<dyn FavoriteService> {
        self.favorites.clone()
    }

    fn inquiries(&self) -> Arc<dyn InquiryService> {
        self.inquiries.clone()
    }

    fn reviews(&self) -> Arc<dyn ReviewService> {
        self.reviews.clone()
    }
}
