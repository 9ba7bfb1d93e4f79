//! Location persistence.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use super::base::{deleted, Executor};
use super::entities::location;
use crate::domain::{Location, LocationInput};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait LocationRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Location>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Location>>;

    async fn exists(&self, id: i32) -> AppResult<bool>;

    /// Another location with exactly the same address parts, treating two
    /// missing districts (or streets) as equal.
    async fn find_duplicate(
        &self,
        input: &LocationInput,
        exclude_id: Option<i32>,
    ) -> AppResult<Option<Location>>;

    async fn create(&self, input: LocationInput) -> AppResult<Location>;

    async fn update(&self, id: i32, input: LocationInput) -> AppResult<Option<Location>>;

    async fn delete(&self, id: i32) -> AppResult<bool>;

    async fn delete_all(&self) -> AppResult<u64>;
}

/// SeaORM-backed location repository
pub struct LocationStore<C: Executor = DatabaseConnection> {
    db: C,
}

impl<C: Executor> LocationStore<C> {
    pub fn new(db: C) -> Self {
        Self { db }
    }
}

fn optional_eq(column: location::Column, value: &Option<String>) -> Condition {
    match value {
        Some(v) => Condition::all().add(column.eq(v.clone())),
        None => Condition::all().add(column.is_null()),
    }
}

#[async_trait]
impl<C: Executor> LocationRepository for LocationStore<C> {
    async fn list(&self) -> AppResult<Vec<Location>> {
        let models = location::Entity::find()
            .order_by_asc(location::Column::Country)
            .order_by_asc(location::Column::Region)
            .order_by_asc(location::Column::City)
            .all(self.db.conn())
            .await?;
        Ok(models.into_iter().map(Location::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Location>> {
        let model = location::Entity::find_by_id(id).one(self.db.conn()).await?;
        Ok(model.map(Location::from))
    }

    async fn exists(&self, id: i32) -> AppResult<bool> {
        let count = location::Entity::find_by_id(id).count(self.db.conn()).await?;
        Ok(count > 0)
    }

    async fn find_duplicate(
        &self,
        input: &LocationInput,
        exclude_id: Option<i32>,
    ) -> AppResult<Option<Location>> {
        let mut query = location::Entity::find()
            .filter(location::Column::Country.eq(input.country.as_str()))
            .filter(location::Column::Region.eq(input.region.as_str()))
            .filter(location::Column::City.eq(input.city.as_str()))
            .filter(optional_eq(location::Column::District, &input.district))
            .filter(optional_eq(location::Column::Street, &input.street));
        if let Some(id) = exclude_id {
            query = query.filter(location::Column::Id.ne(id));
        }

        let model = query.one(self.db.conn()).await?;
        Ok(model.map(Location::from))
    }

    async fn create(&self, input: LocationInput) -> AppResult<Location> {
        let model = location::ActiveModel {
            country: Set(input.country),
            region: Set(input.region),
            city: Set(input.city),
            district: Set(input.district),
            street: Set(input.street),
            ..Default::default()
        }
        .insert(self.db.conn())
        .await?;

        Ok(Location::from(model))
    }

    async fn update(&self, id: i32, input: LocationInput) -> AppResult<Option<Location>> {
        let Some(existing) = location::Entity::find_by_id(id).one(self.db.conn()).await? else {
            return Ok(None);
        };

        let mut active: location::ActiveModel = existing.into();
        active.country = Set(input.country);
        active.region = Set(input.region);
        active.city = Set(input.city);
        active.district = Set(input.district);
        active.street = Set(input.street);

        let model = active.update(self.db.conn()).await?;
        Ok(Some(Location::from(model)))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = location::Entity::delete_by_id(id).exec(self.db.conn()).await?;
        Ok(deleted(result))
    }

    async fn delete_all(&self) -> AppResult<u64> {
        let result = location::Entity::delete_many().exec(self.db.conn()).await?;
        Ok(result.rows_affected)
    }
}
