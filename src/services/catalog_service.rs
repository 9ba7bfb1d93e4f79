//! Location and amenity catalogue services.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Amenity, AmenityInput, Location, LocationInput};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{AmenityRepository, LocationRepository, UnitOfWork};
use crate::with_transaction;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

const DUPLICATE_LOCATION: &str =
    "The fields country, region, city, district, street must make a unique set.";
const DUPLICATE_AMENITY: &str = "amenity with this name already exists.";

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait LocationService: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Location>>;

    async fn get(&self, id: i32) -> AppResult<Location>;

    async fn create(&self, input: LocationInput) -> AppResult<Location>;

    async fn update(&self, id: i32, input: LocationInput) -> AppResult<Location>;

    async fn delete(&self, id: i32) -> AppResult<()>;

    /// Remove every location (and, by cascade, their properties).
    async fn delete_all(&self) -> AppResult<u64>;
}

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AmenityService: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Amenity>>;

    async fn get(&self, id: i32) -> AppResult<Amenity>;

    async fn create(&self, input: AmenityInput) -> AppResult<Amenity>;

    async fn update(&self, id: i32, input: AmenityInput) -> AppResult<Amenity>;

    async fn delete(&self, id: i32) -> AppResult<()>;

    async fn delete_all(&self) -> AppResult<u64>;
}

// =============================================================================
// Locations
// =============================================================================

pub struct LocationManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> LocationManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> LocationService for LocationManager<U> {
    async fn list(&self) -> AppResult<Vec<Location>> {
        self.uow.locations().list().await
    }

    async fn get(&self, id: i32) -> AppResult<Location> {
        self.uow
            .locations()
            .find_by_id(id)
            .await?
            .ok_or_not_found("Location")
    }

    async fn create(&self, input: LocationInput) -> AppResult<Location> {
        let location = with_transaction!(self.uow, |ctx| {
            if ctx.locations().find_duplicate(&input, None).await?.is_some() {
                return Err(AppError::non_field(DUPLICATE_LOCATION));
            }
            Ok::<_, AppError>(ctx.locations().create(input).await?)
        })?;

        tracing::info!(location_id = location.id, "Location created");
        Ok(location)
    }

    async fn update(&self, id: i32, input: LocationInput) -> AppResult<Location> {
        let location = with_transaction!(self.uow, |ctx| {
            if ctx
                .locations()
                .find_duplicate(&input, Some(id))
                .await?
                .is_some()
            {
                return Err(AppError::non_field(DUPLICATE_LOCATION));
            }
            ctx.locations()
                .update(id, input)
                .await?
                .ok_or_not_found("Location")
        })?;

        tracing::info!(location_id = id, "Location updated");
        Ok(location)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.uow.locations().delete(id).await? {
            return Err(AppError::not_found("Location"));
        }
        tracing::info!(location_id = id, "Location deleted");
        Ok(())
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let removed = self.uow.locations().delete_all().await?;
        tracing::info!(removed, "All locations deleted");
        Ok(removed)
    }
}

// =============================================================================
// Amenities
// =============================================================================

pub struct AmenityManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> AmenityManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> AmenityService for AmenityManager<U> {
    async fn list(&self) -> AppResult<Vec<Amenity>> {
        self.uow.amenities().list().await
    }

    async fn get(&self, id: i32) -> AppResult<Amenity> {
        self.uow
            .amenities()
            .find_by_id(id)
            .await?
            .ok_or_not_found("Amenity")
    }

    async fn create(&self, input: AmenityInput) -> AppResult<Amenity> {
        let amenity = with_transaction!(self.uow, |ctx| {
            if ctx
                .amenities()
                .find_by_name(&input.name, None)
                .await?
                .is_some()
            {
                return Err(AppError::field("name", DUPLICATE_AMENITY));
            }
            Ok::<_, AppError>(ctx.amenities().create(input).await?)
        })?;

        tracing::info!(amenity_id = amenity.id, "Amenity created");
        Ok(amenity)
    }

    async fn update(&self, id: i32, input: AmenityInput) -> AppResult<Amenity> {
        let amenity = with_transaction!(self.uow, |ctx| {
            if ctx
                .amenities()
                .find_by_name(&input.name, Some(id))
                .await?
                .is_some()
            {
                return Err(AppError::field("name", DUPLICATE_AMENITY));
            }
            ctx.amenities()
                .update(id, input)
                .await?
                .ok_or_not_found("Amenity")
        })?;

        tracing::info!(amenity_id = id, "Amenity updated");
        Ok(amenity)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.uow.amenities().delete(id).await? {
            return Err(AppError::not_found("Amenity"));
        }
        tracing::info!(amenity_id = id, "Amenity deleted");
        Ok(())
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let removed = self.uow.amenities().delete_all().await?;
        tracing::info!(removed, "All amenities deleted");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::repositories::{MockAmenityRepository, MockLocationRepository};
    use crate::services::testing::TestUnitOfWork;

    #[tokio::test]
    async fn test_delete_missing_location_is_not_found() {
        let mut locations = MockLocationRepository::new();
        locations.expect_delete().returning(|_| Ok(false));
        let uow = TestUnitOfWork {
            locations: Arc::new(locations),
            ..Default::default()
        };

        let err = LocationManager::new(Arc::new(uow)).delete(3).await.unwrap_err();
        assert_eq!(err.to_string(), "Location not found.");
    }

    #[tokio::test]
    async fn test_amenity_list_passes_through() {
        let mut amenities = MockAmenityRepository::new();
        amenities.expect_list().returning(|| {
            Ok(vec![Amenity {
                id: 1,
                name: "Gym".to_string(),
                icon: None,
            }])
        });
        let uow = TestUnitOfWork {
            amenities: Arc::new(amenities),
            ..Default::default()
        };

        let listed = AmenityManager::new(Arc::new(uow)).list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Gym");
    }
}
