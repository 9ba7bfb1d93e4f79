//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.
//!
//! All services use Unit of Work pattern for centralized repository
//! access and transaction management.

mod auth_service;
mod catalog_service;
pub mod container;
mod engagement_service;
mod profile_service;
mod property_service;

use crate::errors::AppError;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use auth_service::{Account, AuthService, Authenticator, Claims, Registration, Session};
pub use catalog_service::{AmenityManager, AmenityService, LocationManager, LocationService};
pub use engagement_service::{
    FavoriteManager, FavoriteService, InquiryManager, InquiryService, ReviewManager,
    ReviewService,
};
pub use profile_service::{ProfileManager, ProfileService};
pub use property_service::{
    PropertyAmenityManager, PropertyAmenityService, PropertyImageManager, PropertyImageService,
    PropertyManager, PropertyService,
};

#[cfg(any(test, feature = "test-utils"))]
pub use auth_service::MockAuthService;
#[cfg(any(test, feature = "test-utils"))]
pub use catalog_service::{MockAmenityService, MockLocationService};
#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
#[cfg(any(test, feature = "test-utils"))]
pub use engagement_service::{MockFavoriteService, MockInquiryService, MockReviewService};
#[cfg(any(test, feature = "test-utils"))]
pub use profile_service::MockProfileService;
#[cfg(any(test, feature = "test-utils"))]
pub use property_service::{
    MockPropertyAmenityService, MockPropertyImageService, MockPropertyService,
};

/// A related id in the payload points at nothing.
pub(crate) fn invalid_reference(field: &str, id: i32) -> AppError {
    AppError::field(
        field,
        format!("Invalid pk \"{}\" - object does not exist.", id),
    )
}

/// Unit of work over mock repositories for service unit tests.
///
/// Transactions are unavailable; tests cover the paths that run outside one.
#[cfg(test)]
pub(crate) mod testing {
    use async_trait::async_trait;
    use std::sync::Arc;

    use crate::errors::{AppError, AppResult};
    use crate::infra::repositories::*;
    use crate::infra::{TransactionContext, TxFuture, UnitOfWork};

    pub struct TestUnitOfWork {
        pub users: Arc<dyn UserRepository>,
        pub profiles: Arc<dyn ProfileRepository>,
        pub locations: Arc<dyn LocationRepository>,
        pub amenities: Arc<dyn AmenityRepository>,
        pub properties: Arc<dyn PropertyRepository>,
        pub property_images: Arc<dyn PropertyImageRepository>,
        pub property_amenities: Arc<dyn PropertyAmenityRepository>,
        pub favorites: Arc<dyn FavoriteRepository>,
        pub inquiries: Arc<dyn InquiryRepository>,
        pub reviews: Arc<dyn ReviewRepository>,
    }

    impl Default for TestUnitOfWork {
        fn default() -> Self {
            Self {
                users: Arc::new(MockUserRepository::new()),
                profiles: Arc::new(MockProfileRepository::new()),
                locations: Arc::new(MockLocationRepository::new()),
                amenities: Arc::new(MockAmenityRepository::new()),
                properties: Arc::new(MockPropertyRepository::new()),
                property_images: Arc::new(MockPropertyImageRepository::new()),
                property_amenities: Arc::new(MockPropertyAmenityRepository::new()),
                favorites: Arc::new(MockFavoriteRepository::new()),
                inquiries: Arc::new(MockInquiryRepository::new()),
                reviews: Arc::new(MockReviewRepository::new()),
            }
        }
    }

    #[async_trait]
    impl UnitOfWork for TestUnitOfWork {
        fn users(&self) -> Arc<dyn UserRepository> {
            self.users.clone()
        }

        fn profiles(&self) -> Arc<dyn ProfileRepository> {
            self.profiles.clone()
        }

        fn locations(&self) -> Arc<dyn LocationRepository> {
            self.locations.clone()
        }

        fn amenities(&self) -> Arc<dyn AmenityRepository> {
            self.amenities.clone()
        }

        fn properties(&self) -> Arc<dyn PropertyRepository> {
            self.properties.clone()
        }

        fn property_images(&self) -> Arc<dyn PropertyImageRepository> {
            self.property_images.clone()
        }

        fn property_amenities(&self) -> Arc<dyn PropertyAmenityRepository> {
            self.property_amenities.clone()
        }

        fn favorites(&self) -> Arc<dyn FavoriteRepository> {
            self.favorites.clone()
        }

        fn inquiries(&self) -> Arc<dyn InquiryRepository> {
            self.inquiries.clone()
        }

        fn reviews(&self) -> Arc<dyn ReviewRepository> {
            self.reviews.clone()
        }

        async fn transaction<F, T>(&self, _f: F) -> AppResult<T>
        where
            F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
            T: Send,
        {
            Err(AppError::internal("transactions are not available in unit tests"))
        }
    }

    #[test]
    fn test_invalid_reference_message() {
        let err = super::invalid_reference("location", 42);
        match err {
            AppError::Validation(errors) => assert_eq!(
                errors.get("location"),
                Some(&["Invalid pk \"42\" - object does not exist.".to_string()][..])
            ),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
