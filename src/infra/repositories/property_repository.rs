//! Property persistence, including the per-type detail tables and images.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use super::base::{deleted, Executor};
use super::entities::{apartment, campus_hostel, land, property, property_image, rental};
use crate::domain::{
    ApartmentDetails, HostelDetails, LandDetails, Property, PropertyDetails, PropertyImage,
    PropertyImageInput, PropertyInput, PropertyType, RentalDetails,
};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Newest first
    async fn list(&self) -> AppResult<Vec<Property>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Property>>;

    async fn exists(&self, id: i32) -> AppResult<bool>;

    /// Insert the listing row. Detail objects on `input` are ignored.
    async fn create(&self, input: PropertyInput) -> AppResult<Property>;

    /// Replace the listing row; `None` when the property is gone.
    async fn update(&self, id: i32, input: PropertyInput) -> AppResult<Option<Property>>;

    async fn delete(&self, id: i32) -> AppResult<bool>;

    async fn delete_all(&self) -> AppResult<u64>;

    /// Detail record stored for a property of the given type.
    async fn find_details(
        &self,
        property_id: i32,
        property_type: PropertyType,
    ) -> AppResult<Option<PropertyDetails>>;

    /// Detail records of many properties at once, keyed by property id.
    async fn details_for(&self, property_ids: Vec<i32>)
        -> AppResult<HashMap<i32, PropertyDetails>>;

    /// Drop whatever detail row the property has and store `details`.
    /// Returns the detail record as stored.
    async fn replace_details(
        &self,
        property_id: i32,
        details: Option<PropertyDetails>,
    ) -> AppResult<Option<PropertyDetails>>;
}

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PropertyImageRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<PropertyImage>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<PropertyImage>>;

    async fn create(&self, input: PropertyImageInput) -> AppResult<PropertyImage>;

    async fn update(&self, id: i32, input: PropertyImageInput)
        -> AppResult<Option<PropertyImage>>;

    async fn delete(&self, id: i32) -> AppResult<bool>;
}

/// SeaORM-backed property repository
pub struct PropertyStore<C: Executor = DatabaseConnection> {
    db: C,
}

impl<C: Executor> PropertyStore<C> {
    pub fn new(db: C) -> Self {
        Self { db }
    }
}

fn apply_input(active: &mut property::ActiveModel, input: &PropertyInput) {
    active.owner_id = Set(input.owner_id);
    active.managed_by = Set(input.managed_by);
    active.title = Set(input.title.clone());
    active.description = Set(input.description.clone());
    active.location_id = Set(input.location_id);
    active.property_type = Set(input.property_type.to_string());
    active.price = Set(input.price);
    active.price_period = Set(input.price_period.to_string());
    active.is_available = Set(input.is_available);
    active.featured = Set(input.featured);
    active.created_by = Set(input.created_by);
    active.modified_by = Set(input.modified_by);
}

#[async_trait]
impl<C: Executor> PropertyRepository for PropertyStore<C> {
    async fn list(&self) -> AppResult<Vec<Property>> {
        let models = property::Entity::find()
            .order_by_desc(property::Column::DateCreated)
            .order_by_desc(property::Column::Id)
            .all(self.db.conn())
            .await?;
        Ok(models.into_iter().map(Property::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Property>> {
        let model = property::Entity::find_by_id(id).one(self.db.conn()).await?;
        Ok(model.map(Property::from))
    }

    async fn exists(&self, id: i32) -> AppResult<bool> {
        let count = property::Entity::find_by_id(id).count(self.db.conn()).await?;
        Ok(count > 0)
    }

    async fn create(&self, input: PropertyInput) -> AppResult<Property> {
        let now = Utc::now();
        let mut active = property::ActiveModel {
            views: Set(input.views.unwrap_or(0)),
            date_created: Set(now),
            date_updated: Set(now),
            ..Default::default()
        };
        apply_input(&mut active, &input);

        let model = active.insert(self.db.conn()).await?;
        Ok(Property::from(model))
    }

    async fn update(&self, id: i32, input: PropertyInput) -> AppResult<Option<Property>> {
        let Some(existing) = property::Entity::find_by_id(id).one(self.db.conn()).await? else {
            return Ok(None);
        };

        let mut active: property::ActiveModel = existing.into();
        apply_input(&mut active, &input);
        if let Some(views) = input.views {
            active.views = Set(views);
        }
        active.date_updated = Set(Utc::now());

        let model = active.update(self.db.conn()).await?;
        Ok(Some(Property::from(model)))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = property::Entity::delete_by_id(id).exec(self.db.conn()).await?;
        Ok(deleted(result))
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let result = property::Entity::delete_many().exec(self.db.conn()).await?;
        Ok(result.rows_affected)
    }

    async fn find_details(
        &self,
        property_id: i32,
        property_type: PropertyType,
    ) -> AppResult<Option<PropertyDetails>> {
        let conn = self.db.conn();
        let details = match property_type {
            PropertyType::Land => land::Entity::find_by_id(property_id)
                .one(conn)
                .await?
                .map(|m| PropertyDetails::Land(LandDetails::from(m))),
            PropertyType::Rental => rental::Entity::find_by_id(property_id)
                .one(conn)
                .await?
                .map(|m| PropertyDetails::Rental(RentalDetails::from(m))),
            PropertyType::Apartment => apartment::Entity::find_by_id(property_id)
                .one(conn)
                .await?
                .map(|m| PropertyDetails::Apartment(ApartmentDetails::from(m))),
            PropertyType::Hostel => campus_hostel::Entity::find_by_id(property_id)
                .one(conn)
                .await?
                .map(|m| PropertyDetails::Hostel(HostelDetails::from(m))),
        };
        Ok(details)
    }

    async fn details_for(
        &self,
        property_ids: Vec<i32>,
    ) -> AppResult<HashMap<i32, PropertyDetails>> {
        let conn = self.db.conn();
        let mut out = HashMap::new();
        if property_ids.is_empty() {
            return Ok(out);
        }

        for m in land::Entity::find()
            .filter(land::Column::PropertyId.is_in(property_ids.clone()))
            .all(conn)
            .await?
        {
            out.insert(m.property_id, PropertyDetails::Land(LandDetails::from(m)));
        }
        for m in rental::Entity::find()
            .filter(rental::Column::PropertyId.is_in(property_ids.clone()))
            .all(conn)
            .await?
        {
            out.insert(m.property_id, PropertyDetails::Rental(RentalDetails::from(m)));
        }
        for m in apartment::Entity::find()
            .filter(apartment::Column::PropertyId.is_in(property_ids.clone()))
            .all(conn)
            .await?
        {
            out.insert(
                m.property_id,
                PropertyDetails::Apartment(ApartmentDetails::from(m)),
            );
        }
        for m in campus_hostel::Entity::find()
            .filter(campus_hostel::Column::PropertyId.is_in(property_ids))
            .all(conn)
            .await?
        {
            out.insert(m.property_id, PropertyDetails::Hostel(HostelDetails::from(m)));
        }

        Ok(out)
    }

    async fn replace_details(
        &self,
        property_id: i32,
        details: Option<PropertyDetails>,
    ) -> AppResult<Option<PropertyDetails>> {
        let conn = self.db.conn();

        // A property changing type leaves a row in another table.
        land::Entity::delete_by_id(property_id).exec(conn).await?;
        rental::Entity::delete_by_id(property_id).exec(conn).await?;
        apartment::Entity::delete_by_id(property_id).exec(conn).await?;
        campus_hostel::Entity::delete_by_id(property_id)
            .exec(conn)
            .await?;

        let stored = match details {
            Some(PropertyDetails::Land(d)) => {
                let m = land::ActiveModel::from_details(property_id, &d)
                    .insert(conn)
                    .await?;
                Some(PropertyDetails::Land(LandDetails::from(m)))
            }
            Some(PropertyDetails::Rental(d)) => {
                let m = rental::ActiveModel::from_details(property_id, &d)
                    .insert(conn)
                    .await?;
                Some(PropertyDetails::Rental(RentalDetails::from(m)))
            }
            Some(PropertyDetails::Apartment(d)) => {
                let m = apartment::ActiveModel::from_details(property_id, &d)
                    .insert(conn)
                    .await?;
                Some(PropertyDetails::Apartment(ApartmentDetails::from(m)))
            }
            Some(PropertyDetails::Hostel(d)) => {
                let m = campus_hostel::ActiveModel::from_details(property_id, &d)
                    .insert(conn)
                    .await?;
                Some(PropertyDetails::Hostel(HostelDetails::from(m)))
            }
            None => None,
        };
        Ok(stored)
    }
}

/// SeaORM-backed property image repository
pub struct PropertyImageStore<C: Executor = DatabaseConnection> {
    db: C,
}

impl<C: Executor> PropertyImageStore<C> {
    pub fn new(db: C) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<C: Executor> PropertyImageRepository for PropertyImageStore<C> {
    async fn list(&self) -> AppResult<Vec<PropertyImage>> {
        let models = property_image::Entity::find()
            .order_by_asc(property_image::Column::Id)
            .all(self.db.conn())
            .await?;
        Ok(models.into_iter().map(PropertyImage::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<PropertyImage>> {
        let model = property_image::Entity::find_by_id(id)
            .one(self.db.conn())
            .await?;
        Ok(model.map(PropertyImage::from))
    }

    async fn create(&self, input: PropertyImageInput) -> AppResult<PropertyImage> {
        let model = property_image::ActiveModel {
            property_id: Set(input.property_id),
            image: Set(input.image),
            is_featured: Set(input.is_featured),
            caption: Set(input.caption),
            uploaded_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db.conn())
        .await?;

        Ok(PropertyImage::from(model))
    }

    async fn update(
        &self,
        id: i32,
        input: PropertyImageInput,
    ) -> AppResult<Option<PropertyImage>> {
        let Some(existing) = property_image::Entity::find_by_id(id)
            .one(self.db.conn())
            .await?
        else {
            return Ok(None);
        };

        let mut active: property_image::ActiveModel = existing.into();
        active.property_id = Set(input.property_id);
        active.image = Set(input.image);
        active.is_featured = Set(input.is_featured);
        active.caption = Set(input.caption);

        let model = active.update(self.db.conn()).await?;
        Ok(Some(PropertyImage::from(model)))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = property_image::Entity::delete_by_id(id)
            .exec(self.db.conn())
            .await?;
        Ok(deleted(result))
    }
}
