//! Amenity catalogue and property ↔ amenity link persistence.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use super::base::{deleted, Executor};
use super::entities::{amenity, property_amenity};
use crate::domain::{Amenity, AmenityInput, PropertyAmenity, PropertyAmenityInput};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AmenityRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Amenity>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Amenity>>;

    async fn exists(&self, id: i32) -> AppResult<bool>;

    /// Amenity already using `name`, other than `exclude_id`.
    async fn find_by_name(&self, name: &str, exclude_id: Option<i32>)
        -> AppResult<Option<Amenity>>;

    async fn create(&self, input: AmenityInput) -> AppResult<Amenity>;

    async fn update(&self, id: i32, input: AmenityInput) -> AppResult<Option<Amenity>>;

    async fn delete(&self, id: i32) -> AppResult<bool>;

    async fn delete_all(&self) -> AppResult<u64>;
}

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PropertyAmenityRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<PropertyAmenity>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<PropertyAmenity>>;

    /// Existing link between the pair, other than `exclude_id`.
    async fn find_pair(
        &self,
        property_id: i32,
        amenity_id: i32,
        exclude_id: Option<i32>,
    ) -> AppResult<Option<PropertyAmenity>>;

    async fn create(&self, input: PropertyAmenityInput) -> AppResult<PropertyAmenity>;

    async fn update(
        &self,
        id: i32,
        input: PropertyAmenityInput,
    ) -> AppResult<Option<PropertyAmenity>>;

    async fn delete(&self, id: i32) -> AppResult<bool>;
}

/// SeaORM-backed amenity repository
pub struct AmenityStore<C: Executor = DatabaseConnection> {
    db: C,
}

impl<C: Executor> AmenityStore<C> {
    pub fn new(db: C) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<C: Executor> AmenityRepository for AmenityStore<C> {
    async fn list(&self) -> AppResult<Vec<Amenity>> {
        let models = amenity::Entity::find()
            .order_by_asc(amenity::Column::Name)
            .all(self.db.conn())
            .await?;
        Ok(models.into_iter().map(Amenity::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Amenity>> {
        let model = amenity::Entity::find_by_id(id).one(self.db.conn()).await?;
        Ok(model.map(Amenity::from))
    }

    async fn exists(&self, id: i32) -> AppResult<bool> {
        let count = amenity::Entity::find_by_id(id).count(self.db.conn()).await?;
        Ok(count > 0)
    }

    async fn find_by_name(
        &self,
        name: &str,
        exclude_id: Option<i32>,
    ) -> AppResult<Option<Amenity>> {
        let mut query = amenity::Entity::find().filter(amenity::Column::Name.eq(name));
        if let Some(id) = exclude_id {
            query = query.filter(amenity::Column::Id.ne(id));
        }
        let model = query.one(self.db.conn()).await?;
        Ok(model.map(Amenity::from))
    }

    async fn create(&self, input: AmenityInput) -> AppResult<Amenity> {
        let model = amenity::ActiveModel {
            name: Set(input.name),
            icon: Set(input.icon),
            ..Default::default()
        }
        .insert(self.db.conn())
        .await?;

        Ok(Amenity::from(model))
    }

    async fn update(&self, id: i32, input: AmenityInput) -> AppResult<Option<Amenity>> {
        let Some(existing) = amenity::Entity::find_by_id(id).one(self.db.conn()).await? else {
            return Ok(None);
        };

        let mut active: amenity::ActiveModel = existing.into();
        active.name = Set(input.name);
        active.icon = Set(input.icon);

        let model = active.update(self.db.conn()).await?;
        Ok(Some(Amenity::from(model)))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = amenity::Entity::delete_by_id(id).exec(self.db.conn()).await?;
        Ok(deleted(result))
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let result = amenity::Entity::delete_many().exec(self.db.conn()).await?;
        Ok(result.rows_affected)
    }
}

/// SeaORM-backed property-amenity link repository
pub struct PropertyAmenityStore<C: Executor = DatabaseConnection> {
    db: C,
}

impl<C: Executor> PropertyAmenityStore<C> {
    pub fn new(db: C) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<C: Executor> PropertyAmenityRepository for PropertyAmenityStore<C> {
    async fn list(&self) -> AppResult<Vec<PropertyAmenity>> {
        let models = property_amenity::Entity::find()
            .order_by_asc(property_amenity::Column::Id)
            .all(self.db.conn())
            .await?;
        Ok(models.into_iter().map(PropertyAmenity::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<PropertyAmenity>> {
        let model = property_amenity::Entity::find_by_id(id)
            .one(self.db.conn())
            .await?;
        Ok(model.map(PropertyAmenity::from))
    }

    async fn find_pair(
        &self,
        property_id: i32,
        amenity_id: i32,
        exclude_id: Option<i32>,
    ) -> AppResult<Option<PropertyAmenity>> {
        let mut query = property_amenity::Entity::find()
            .filter(property_amenity::Column::PropertyId.eq(property_id))
            .filter(property_amenity::Column::AmenityId.eq(amenity_id));
        if let Some(id) = exclude_id {
            query = query.filter(property_amenity::Column::Id.ne(id));
        }
        let model = query.one(self.db.conn()).await?;
        Ok(model.map(PropertyAmenity::from))
    }

    async fn create(&self, input: PropertyAmenityInput) -> AppResult<PropertyAmenity> {
        let model = property_amenity::ActiveModel {
            property_id: Set(input.property_id),
            amenity_id: Set(input.amenity_id),
            notes: Set(input.notes),
            added_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db.conn())
        .await?;

        Ok(PropertyAmenity::from(model))
    }

    async fn update(
        &self,
        id: i32,
        input: PropertyAmenityInput,
    ) -> AppResult<Option<PropertyAmenity>> {
        let Some(existing) = property_amenity::Entity::find_by_id(id)
            .one(self.db.conn())
            .await?
        else {
            return Ok(None);
        };

        let mut active: property_amenity::ActiveModel = existing.into();
        active.property_id = Set(input.property_id);
        active.amenity_id = Set(input.amenity_id);
        active.notes = Set(input.notes);

        let model = active.update(self.db.conn()).await?;
        Ok(Some(PropertyAmenity::from(model)))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = property_amenity::Entity::delete_by_id(id)
            .exec(self.db.conn())
            .await?;
        Ok(deleted(result))
    }
}
