//! Repository layer - Data access abstraction
//!
//! One trait per aggregate, each with a SeaORM store that runs on either
//! the connection pool or an open transaction (see [`Executor`]).

mod amenity_repository;
mod base;
mod engagement_repository;
pub(crate) mod entities;
mod location_repository;
mod profile_repository;
mod property_repository;
mod user_repository;

pub use amenity_repository::{
    AmenityRepository, AmenityStore, PropertyAmenityRepository, PropertyAmenityStore,
};
pub use base::Executor;
pub use engagement_repository::{
    FavoriteRepository, FavoriteStore, InquiryRepository, InquiryStore, ReviewRepository,
    ReviewStore,
};
pub use location_repository::{LocationRepository, LocationStore};
pub use profile_repository::{ProfileRepository, ProfileStore};
pub use property_repository::{
    PropertyImageRepository, PropertyImageStore, PropertyRepository, PropertyStore,
};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests
#[cfg(any(test, feature = "test-utils"))]
pub use amenity_repository::{MockAmenityRepository, MockPropertyAmenityRepository};
#[cfg(any(test, feature = "test-utils"))]
pub use engagement_repository::{
    MockFavoriteRepository, MockInquiryRepository, MockReviewRepository,
};
#[cfg(any(test, feature = "test-utils"))]
pub use location_repository::MockLocationRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use profile_repository::MockProfileRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use property_repository::{MockPropertyImageRepository, MockPropertyRepository};
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
