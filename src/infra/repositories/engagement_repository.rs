//! Persistence for what profiles do with listings: favorites, inquiries and
//! reviews.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use super::base::{deleted, Executor};
use super::entities::{favorite, inquiry, property, review};
use crate::domain::{Favorite, FavoriteInput, Inquiry, InquiryInput, Review, ReviewInput};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Favorites saved by one profile, newest first
    async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<Favorite>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Favorite>>;

    async fn find_pair(
        &self,
        user_id: i32,
        property_id: i32,
        exclude_id: Option<i32>,
    ) -> AppResult<Option<Favorite>>;

    async fn create(&self, user_id: i32, input: FavoriteInput) -> AppResult<Favorite>;

    async fn update(&self, id: i32, input: FavoriteInput) -> AppResult<Option<Favorite>>;

    async fn delete(&self, id: i32) -> AppResult<bool>;
}

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait InquiryRepository: Send + Sync {
    /// Inquiries a profile sent or received on its own listings, newest first
    async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<Inquiry>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Inquiry>>;

    async fn create(
        &self,
        user_id: i32,
        input: InquiryInput,
        responded_at: Option<DateTime<Utc>>,
    ) -> AppResult<Inquiry>;

    async fn update(
        &self,
        id: i32,
        input: InquiryInput,
        responded_at: Option<DateTime<Utc>>,
    ) -> AppResult<Option<Inquiry>>;

    async fn delete(&self, id: i32) -> AppResult<bool>;
}

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Newest first
    async fn list(&self) -> AppResult<Vec<Review>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Review>>;

    async fn find_pair(
        &self,
        property_id: i32,
        reviewer_id: i32,
        exclude_id: Option<i32>,
    ) -> AppResult<Option<Review>>;

    async fn create(&self, reviewer_id: i32, input: ReviewInput) -> AppResult<Review>;

    async fn update(&self, id: i32, input: ReviewInput) -> AppResult<Option<Review>>;

    async fn delete(&self, id: i32) -> AppResult<bool>;
}

// =============================================================================
// Favorites
// =============================================================================

/// SeaORM-backed favorite repository
pub struct FavoriteStore<C: Executor = DatabaseConnection> {
    db: C,
}

impl<C: Executor> FavoriteStore<C> {
    pub fn new(db: C) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<C: Executor> FavoriteRepository for FavoriteStore<C> {
    async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<Favorite>> {
        let models = favorite::Entity::find()
            .filter(favorite::Column::UserId.eq(user_id))
            .order_by_desc(favorite::Column::DateAdded)
            .order_by_desc(favorite::Column::Id)
            .all(self.db.conn())
            .await?;
        Ok(models.into_iter().map(Favorite::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Favorite>> {
        let model = favorite::Entity::find_by_id(id).one(self.db.conn()).await?;
        Ok(model.map(Favorite::from))
    }

    async fn find_pair(
        &self,
        user_id: i32,
        property_id: i32,
        exclude_id: Option<i32>,
    ) -> AppResult<Option<Favorite>> {
        let mut query = favorite::Entity::find()
            .filter(favorite::Column::UserId.eq(user_id))
            .filter(favorite::Column::PropertyId.eq(property_id));
        if let Some(id) = exclude_id {
            query = query.filter(favorite::Column::Id.ne(id));
        }
        let model = query.one(self.db.conn()).await?;
        Ok(model.map(Favorite::from))
    }

    async fn create(&self, user_id: i32, input: FavoriteInput) -> AppResult<Favorite> {
        let model = favorite::ActiveModel {
            user_id: Set(user_id),
            property_id: Set(input.property_id),
            notes: Set(input.notes),
            date_added: Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db.conn())
        .await?;

        Ok(Favorite::from(model))
    }

    async fn update(&self, id: i32, input: FavoriteInput) -> AppResult<Option<Favorite>> {
        let Some(existing) = favorite::Entity::find_by_id(id).one(self.db.conn()).await? else {
            return Ok(None);
        };

        let mut active: favorite::ActiveModel = existing.into();
        active.property_id = Set(input.property_id);
        active.notes = Set(input.notes);

        let model = active.update(self.db.conn()).await?;
        Ok(Some(Favorite::from(model)))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = favorite::Entity::delete_by_id(id).exec(self.db.conn()).await?;
        Ok(deleted(result))
    }
}

// =============================================================================
// Inquiries
// =============================================================================

/// SeaORM-backed inquiry repository
pub struct InquiryStore<C: Executor = DatabaseConnection> {
    db: C,
}

impl<C: Executor> InquiryStore<C> {
    pub fn new(db: C) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<C: Executor> InquiryRepository for InquiryStore<C> {
    async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<Inquiry>> {
        let owned: Vec<i32> = property::Entity::find()
            .select_only()
            .column(property::Column::Id)
            .filter(property::Column::OwnerId.eq(user_id))
            .into_tuple()
            .all(self.db.conn())
            .await?;

        let models = inquiry::Entity::find()
            .filter(
                Condition::any()
                    .add(inquiry::Column::UserId.eq(user_id))
                    .add(inquiry::Column::PropertyId.is_in(owned)),
            )
            .order_by_desc(inquiry::Column::DateSent)
            .order_by_desc(inquiry::Column::Id)
            .all(self.db.conn())
            .await?;
        Ok(models.into_iter().map(Inquiry::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Inquiry>> {
        let model = inquiry::Entity::find_by_id(id).one(self.db.conn()).await?;
        Ok(model.map(Inquiry::from))
    }

    async fn create(
        &self,
        user_id: i32,
        input: InquiryInput,
        responded_at: Option<DateTime<Utc>>,
    ) -> AppResult<Inquiry> {
        let model = inquiry::ActiveModel {
            property_id: Set(input.property_id),
            user_id: Set(user_id),
            message: Set(input.message),
            contact_phone: Set(input.contact_phone),
            contact_email: Set(input.contact_email),
            status: Set(input.status.to_string()),
            response: Set(input.response),
            responded_at: Set(responded_at),
            date_sent: Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db.conn())
        .await?;

        Ok(Inquiry::from(model))
    }

    async fn update(
        &self,
        id: i32,
        input: InquiryInput,
        responded_at: Option<DateTime<Utc>>,
    ) -> AppResult<Option<Inquiry>> {
        let Some(existing) = inquiry::Entity::find_by_id(id).one(self.db.conn()).await? else {
            return Ok(None);
        };

        let mut active: inquiry::ActiveModel = existing.into();
        active.property_id = Set(input.property_id);
        active.message = Set(input.message);
        active.contact_phone = Set(input.contact_phone);
        active.contact_email = Set(input.contact_email);
        active.status = Set(input.status.to_string());
        active.response = Set(input.response);
        active.responded_at = Set(responded_at);

        let model = active.update(self.db.conn()).await?;
        Ok(Some(Inquiry::from(model)))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = inquiry::Entity::delete_by_id(id).exec(self.db.conn()).await?;
        Ok(deleted(result))
    }
}

// =============================================================================
// Reviews
// =============================================================================

/// SeaORM-backed review repository
pub struct ReviewStore<C: Executor = DatabaseConnection> {
    db: C,
}

impl<C: Executor> ReviewStore<C> {
    pub fn new(db: C) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<C: Executor> ReviewRepository for ReviewStore<C> {
    async fn list(&self) -> AppResult<Vec<Review>> {
        let models = review::Entity::find()
            .order_by_desc(review::Column::CreatedAt)
            .order_by_desc(review::Column::Id)
            .all(self.db.conn())
            .await?;
        Ok(models.into_iter().map(Review::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Review>> {
        let model = review::Entity::find_by_id(id).one(self.db.conn()).await?;
        Ok(model.map(Review::from))
    }

    async fn find_pair(
        &self,
        property_id: i32,
        reviewer_id: i32,
        exclude_id: Option<i32>,
    ) -> AppResult<Option<Review>> {
        let mut query = review::Entity::find()
            .filter(review::Column::PropertyId.eq(property_id))
            .filter(review::Column::ReviewerId.eq(reviewer_id));
        if let Some(id) = exclude_id {
            query = query.filter(review::Column::Id.ne(id));
        }
        let model = query.one(self.db.conn()).await?;
        Ok(model.map(Review::from))
    }

    async fn create(&self, reviewer_id: i32, input: ReviewInput) -> AppResult<Review> {
        let now = Utc::now();
        let model = review::ActiveModel {
            property_id: Set(input.property_id),
            reviewer_id: Set(reviewer_id),
            rating: Set(input.rating),
            title: Set(input.title),
            comment: Set(input.comment),
            is_approved: Set(input.is_approved),
            response: Set(input.response),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(self.db.conn())
        .await?;

        Ok(Review::from(model))
    }

    async fn update(&self, id: i32, input: ReviewInput) -> AppResult<Option<Review>> {
        let Some(existing) = review::Entity::find_by_id(id).one(self.db.conn()).await? else {
            return Ok(None);
        };

        let mut active: review::ActiveModel = existing.into();
        active.property_id = Set(input.property_id);
        active.rating = Set(input.rating);
        active.title = Set(input.title);
        active.comment = Set(input.comment);
        active.is_approved = Set(input.is_approved);
        active.response = Set(input.response);
        active.updated_at = Set(Utc::now());

        let model = active.update(self.db.conn()).await?;
        Ok(Some(Review::from(model)))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = review::Entity::delete_by_id(id).exec(self.db.conn()).await?;
        Ok(deleted(result))
    }
}
