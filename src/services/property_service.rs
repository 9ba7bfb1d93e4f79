//! Property services: listings with their type details, images, and
//! amenity links.

use async_trait::async_trait;
use std::sync::Arc;

use super::invalid_reference;
use crate::domain::{
    PropertyAmenity, PropertyAmenityInput, PropertyImage, PropertyImageInput, PropertyInput,
    PropertyResponse,
};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{PropertyAmenityRepository, PropertyRepository, UnitOfWork};
use crate::with_transaction;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

const DUPLICATE_PROPERTY_AMENITY: &str = "The fields property, amenity must make a unique set.";

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PropertyService: Send + Sync {
    /// Every listing with its details, newest first
    async fn list(&self) -> AppResult<Vec<PropertyResponse>>;

    async fn get(&self, id: i32) -> AppResult<PropertyResponse>;

    /// Create a listing. `caller` becomes the owner unless one is given.
    async fn create(
        &self,
        input: PropertyInput,
        caller: Option<i32>,
    ) -> AppResult<PropertyResponse>;

    /// Replace a listing and its detail record.
    async fn update(&self, id: i32, input: PropertyInput) -> AppResult<PropertyResponse>;

    async fn delete(&self, id: i32) -> AppResult<()>;

    async fn delete_all(&self) -> AppResult<u64>;
}

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PropertyImageService: Send + Sync {
    async fn list(&self) -> AppResult<Vec<PropertyImage>>;

    async fn get(&self, id: i32) -> AppResult<PropertyImage>;

    async fn create(&self, input: PropertyImageInput) -> AppResult<PropertyImage>;

    async fn update(&self, id: i32, input: PropertyImageInput) -> AppResult<PropertyImage>;

    async fn delete(&self, id: i32) -> AppResult<()>;
}

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PropertyAmenityService: Send + Sync {
    async fn list(&self) -> AppResult<Vec<PropertyAmenity>>;

    async fn get(&self, id: i32) -> AppResult<PropertyAmenity>;

    async fn create(&self, input: PropertyAmenityInput) -> AppResult<PropertyAmenity>;

    async fn update(&self, id: i32, input: PropertyAmenityInput) -> AppResult<PropertyAmenity>;

    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Fail with a field error when `property_id` names no listing.
async fn require_property<U: UnitOfWork>(uow: &U, property_id: i32) -> AppResult<()> {
    if uow.properties().exists(property_id).await? {
        Ok(())
    } else {
        Err(invalid_reference("property", property_id))
    }
}

// =============================================================================
// Properties
// =============================================================================

pub struct PropertyManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> PropertyManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    /// Location and profile references must point at existing rows.
    async fn check_references(&self, input: &PropertyInput) -> AppResult<()> {
        if !self.uow.locations().exists(input.location_id).await? {
            return Err(invalid_reference("location", input.location_id));
        }
        for (field, id) in input.profile_refs() {
            if !self.uow.profiles().exists(id).await? {
                return Err(invalid_reference(field, id));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl<U: UnitOfWork> PropertyService for PropertyManager<U> {
    async fn list(&self) -> AppResult<Vec<PropertyResponse>> {
        let properties = self.uow.properties().list().await?;
        let ids = properties.iter().map(|p| p.id).collect();
        let mut details = self.uow.properties().details_for(ids).await?;

        Ok(properties
            .into_iter()
            .map(|p| {
                let d = details.remove(&p.id);
                PropertyResponse::new(p, d)
            })
            .collect())
    }

    async fn get(&self, id: i32) -> AppResult<PropertyResponse> {
        let property = self
            .uow
            .properties()
            .find_by_id(id)
            .await?
            .ok_or_not_found("Property")?;
        let details = self
            .uow
            .properties()
            .find_details(property.id, property.property_type)
            .await?;
        Ok(PropertyResponse::new(property, details))
    }

    async fn create(
        &self,
        mut input: PropertyInput,
        caller: Option<i32>,
    ) -> AppResult<PropertyResponse> {
        let details = input.take_details()?;
        if input.owner_id.is_none() {
            input.owner_id = caller;
        }
        self.check_references(&input).await?;

        let response = with_transaction!(self.uow, |ctx| {
            let property = ctx.properties().create(input).await?;
            let stored = ctx.properties().replace_details(property.id, details).await?;
            Ok::<_, AppError>(PropertyResponse::new(property, stored))
        })?;

        tracing::info!(
            property_id = response.property.id,
            property_type = %response.property.property_type,
            "Property created"
        );
        Ok(response)
    }

    async fn update(&self, id: i32, mut input: PropertyInput) -> AppResult<PropertyResponse> {
        let details = input.take_details()?;
        self.check_references(&input).await?;

        let response = with_transaction!(self.uow, |ctx| {
            let property = ctx
                .properties()
                .update(id, input)
                .await?
                .ok_or_not_found("Property")?;
            let stored = ctx.properties().replace_details(property.id, details).await?;
            Ok::<_, AppError>(PropertyResponse::new(property, stored))
        })?;

        tracing::info!(property_id = id, "Property updated");
        Ok(response)
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.uow.properties().delete(id).await? {
            return Err(AppError::not_found("Property"));
        }
        tracing::info!(property_id = id, "Property deleted");
        Ok(())
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let removed = self.uow.properties().delete_all().await?;
        tracing::info!(removed, "All properties deleted");
        Ok(removed)
    }
}

// =============================================================================
// Images
// =============================================================================

pub struct PropertyImageManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> PropertyImageManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> PropertyImageService for PropertyImageManager<U> {
    async fn list(&self) -> AppResult<Vec<PropertyImage>> {
        self.uow.property_images().list().await
    }

    async fn get(&self, id: i32) -> AppResult<PropertyImage> {
        self.uow
            .property_images()
            .find_by_id(id)
            .await?
            .ok_or_not_found("PropertyImage")
    }

    async fn create(&self, input: PropertyImageInput) -> AppResult<PropertyImage> {
        require_property(self.uow.as_ref(), input.property_id).await?;
        let image = self.uow.property_images().create(input).await?;
        tracing::info!(image_id = image.id, property_id = image.property_id, "Image added");
        Ok(image)
    }

    async fn update(&self, id: i32, input: PropertyImageInput) -> AppResult<PropertyImage> {
        require_property(self.uow.as_ref(), input.property_id).await?;
        self.uow
            .property_images()
            .update(id, input)
            .await?
            .ok_or_not_found("PropertyImage")
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.uow.property_images().delete(id).await? {
            return Err(AppError::not_found("PropertyImage"));
        }
        Ok(())
    }
}

// =============================================================================
// Amenity links
// =============================================================================

pub struct PropertyAmenityManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> PropertyAmenityManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    async fn check_references(&self, input: &PropertyAmenityInput) -> AppResult<()> {
        require_property(self.uow.as_ref(), input.property_id).await?;
        if !self.uow.amenities().exists(input.amenity_id).await? {
            return Err(invalid_reference("amenity", input.amenity_id));
        }
        Ok(())
    }
}

#[async_trait]
impl<U: UnitOfWork> PropertyAmenityService for PropertyAmenityManager<U> {
    async fn list(&self) -> AppResult<Vec<PropertyAmenity>> {
        self.uow.property_amenities().list().await
    }

    async fn get(&self, id: i32) -> AppResult<PropertyAmenity> {
        self.uow
            .property_amenities()
            .find_by_id(id)
            .await?
            .ok_or_not_found("PropertyAmenity")
    }

    async fn create(&self, input: PropertyAmenityInput) -> AppResult<PropertyAmenity> {
        self.check_references(&input).await?;

        let link = with_transaction!(self.uow, |ctx| {
            if ctx
                .property_amenities()
                .find_pair(input.property_id, input.amenity_id, None)
                .await?
                .is_some()
            {
                return Err(AppError::non_field(DUPLICATE_PROPERTY_AMENITY));
            }
            Ok::<_, AppError>(ctx.property_amenities().create(input).await?)
        })?;

        tracing::info!(
            property_id = link.property_id,
            amenity_id = link.amenity_id,
            "Amenity linked"
        );
        Ok(link)
    }

    async fn update(&self, id: i32, input: PropertyAmenityInput) -> AppResult<PropertyAmenity> {
        self.check_references(&input).await?;

        with_transaction!(self.uow, |ctx| {
            if ctx
                .property_amenities()
                .find_pair(input.property_id, input.amenity_id, Some(id))
                .await?
                .is_some()
            {
                return Err(AppError::non_field(DUPLICATE_PROPERTY_AMENITY));
            }
            ctx.property_amenities()
                .update(id, input)
                .await?
                .ok_or_not_found("PropertyAmenity")
        })
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.uow.property_amenities().delete(id).await? {
            return Err(AppError::not_found("PropertyAmenity"));
        }
        Ok(())
    }
}
