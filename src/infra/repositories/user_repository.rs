//! User account persistence.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::base::{deleted, Executor};
use super::entities::user;
use crate::domain::{NewUser, User};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    async fn create(&self, user: NewUser) -> AppResult<User>;

    /// Remove the account; its profile and everything hanging off it go too.
    async fn delete(&self, id: i32) -> AppResult<bool>;
}

/// SeaORM-backed user repository
pub struct UserStore<C: Executor = DatabaseConnection> {
    db: C,
}

impl<C: Executor> UserStore<C> {
    pub fn new(db: C) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<C: Executor> UserRepository for UserStore<C> {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let model = user::Entity::find_by_id(id).one(self.db.conn()).await?;
        Ok(model.map(User::from))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(self.db.conn())
            .await?;
        Ok(model.map(User::from))
    }

    async fn create(&self, new_user: NewUser) -> AppResult<User> {
        let model = user::ActiveModel {
            username: Set(new_user.username),
            email: Set(new_user.email),
            password_hash: Set(new_user.password_hash),
            phone: Set(new_user.phone),
            is_active: Set(true),
            date_joined: Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db.conn())
        .await?;

        Ok(User::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = user::Entity::delete_by_id(id).exec(self.db.conn()).await?;
        Ok(deleted(result))
    }
}
