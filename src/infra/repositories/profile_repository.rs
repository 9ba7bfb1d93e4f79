//! Profile persistence.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

use super::base::Executor;
use super::entities::profile;
use crate::domain::{NewProfile, Profile, ProfileInput};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Profile>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Profile>>;

    async fn find_by_user(&self, user_id: i32) -> AppResult<Option<Profile>>;

    async fn exists(&self, id: i32) -> AppResult<bool>;

    async fn create(&self, profile: NewProfile) -> AppResult<Profile>;

    /// Replace every editable field; `None` when the profile is gone.
    async fn update(&self, id: i32, input: ProfileInput) -> AppResult<Option<Profile>>;
}

/// SeaORM-backed profile repository
pub struct ProfileStore<C: Executor = DatabaseConnection> {
    db: C,
}

impl<C: Executor> ProfileStore<C> {
    pub fn new(db: C) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<C: Executor> ProfileRepository for ProfileStore<C> {
    async fn list(&self) -> AppResult<Vec<Profile>> {
        let models = profile::Entity::find()
            .order_by_asc(profile::Column::Id)
            .all(self.db.conn())
            .await?;
        Ok(models.into_iter().map(Profile::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Profile>> {
        let model = profile::Entity::find_by_id(id).one(self.db.conn()).await?;
        Ok(model.map(Profile::from))
    }

    async fn find_by_user(&self, user_id: i32) -> AppResult<Option<Profile>> {
        let model = profile::Entity::find()
            .filter(profile::Column::UserId.eq(user_id))
            .one(self.db.conn())
            .await?;
        Ok(model.map(Profile::from))
    }

    async fn exists(&self, id: i32) -> AppResult<bool> {
        let count = profile::Entity::find_by_id(id).count(self.db.conn()).await?;
        Ok(count > 0)
    }

    async fn create(&self, new_profile: NewProfile) -> AppResult<Profile> {
        let now = Utc::now();
        let model = profile::ActiveModel {
            user_id: Set(new_profile.user_id),
            user_type: Set(new_profile.user_type.to_string()),
            bio: Set(new_profile.bio),
            profile_picture: Set(new_profile.profile_picture),
            phone_number: Set(new_profile.phone_number),
            date_of_birth: Set(None),
            email_verified: Set(false),
            phone_verified: Set(false),
            identity_verified: Set(false),
            website: Set(None),
            facebook_url: Set(None),
            twitter_url: Set(None),
            linkedin_url: Set(None),
            country: Set(None),
            city: Set(None),
            address: Set(None),
            created_by: Set(None),
            modified_by: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(self.db.conn())
        .await?;

        Ok(Profile::from(model))
    }

    async fn update(&self, id: i32, input: ProfileInput) -> AppResult<Option<Profile>> {
        let Some(existing) = profile::Entity::find_by_id(id).one(self.db.conn()).await? else {
            return Ok(None);
        };

        let mut active: profile::ActiveModel = existing.into();
        active.user_type = Set(input.user_type.to_string());
        active.bio = Set(input.bio);
        active.profile_picture = Set(input.profile_picture);
        active.phone_number = Set(input.phone_number);
        active.date_of_birth = Set(input.date_of_birth);
        active.email_verified = Set(input.email_verified);
        active.phone_verified = Set(input.phone_verified);
        active.identity_verified = Set(input.identity_verified);
        active.website = Set(input.website);
        active.facebook_url = Set(input.facebook_url);
        active.twitter_url = Set(input.twitter_url);
        active.linkedin_url = Set(input.linkedin_url);
        active.country = Set(input.country);
        active.city = Set(input.city);
        active.address = Set(input.address);
        active.created_by = Set(input.created_by);
        active.modified_by = Set(input.modified_by);
        active.updated_at = Set(Utc::now());

        let model = active.update(self.db.conn()).await?;
        Ok(Some(Profile::from(model)))
    }
}
