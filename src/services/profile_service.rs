//! Profile service - reading, editing and closing accounts by profile.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Profile, ProfileInput};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProfileService: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Profile>>;

    async fn get(&self, id: i32) -> AppResult<Profile>;

    /// Replace the editable fields of the caller's own profile.
    async fn update(&self, id: i32, input: ProfileInput, caller: i32) -> AppResult<Profile>;

    /// Delete the caller's own account together with the profile.
    async fn delete(&self, id: i32, caller: i32) -> AppResult<()>;
}

/// Concrete implementation of ProfileService using Unit of Work.
pub struct ProfileManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ProfileManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    async fn owned(&self, id: i32, caller: i32) -> AppResult<Profile> {
        let profile = self.get(id).await?;
        if profile.id != caller {
            return Err(AppError::Forbidden);
        }
        Ok(profile)
    }
}

#[async_trait]
impl<U: UnitOfWork> ProfileService for ProfileManager<U> {
    async fn list(&self) -> AppResult<Vec<Profile>> {
        self.uow.profiles().list().await
    }

    async fn get(&self, id: i32) -> AppResult<Profile> {
        self.uow
            .profiles()
            .find_by_id(id)
            .await?
            .ok_or_not_found("Profile")
    }

    async fn update(&self, id: i32, input: ProfileInput, caller: i32) -> AppResult<Profile> {
        self.owned(id, caller).await?;

        for (field, reference) in [("created_by", input.created_by), ("modified_by", input.modified_by)] {
            if let Some(ref_id) = reference {
                if !self.uow.profiles().exists(ref_id).await? {
                    return Err(super::invalid_reference(field, ref_id));
                }
            }
        }

        let profile = self
            .uow
            .profiles()
            .update(id, input)
            .await?
            .ok_or_not_found("Profile")?;

        tracing::info!(profile_id = id, "Profile updated");
        Ok(profile)
    }

    async fn delete(&self, id: i32, caller: i32) -> AppResult<()> {
        let profile = self.owned(id, caller).await?;

        if !self.uow.users().delete(profile.user_id).await? {
            return Err(AppError::not_found("Profile"));
        }

        tracing::info!(profile_id = id, user_id = profile.user_id, "Account deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserType;
    use crate::infra::repositories::{MockProfileRepository, MockUserRepository};
    use crate::services::testing::TestUnitOfWork;
    use chrono::Utc;
    use mockall::predicate::eq;

    fn profile(id: i32, user_id: i32) -> Profile {
        Profile {
            id,
            user_id,
            user_type: UserType::Landlord,
            bio: None,
            profile_picture: None,
            phone_number: None,
            date_of_birth: None,
            email_verified: true,
            phone_verified: false,
            identity_verified: false,
            website: None,
            facebook_url: None,
            twitter_url: None,
            linkedin_url: None,
            country: None,
            city: None,
            address: None,
            created_by: None,
            modified_by: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_get_missing_profile_is_not_found() {
        let mut profiles = MockProfileRepository::new();
        profiles.expect_find_by_id().returning(|_| Ok(None));
        let uow = TestUnitOfWork {
            profiles: Arc::new(profiles),
            ..Default::default()
        };

        let err = ProfileManager::new(Arc::new(uow)).get(9).await.unwrap_err();
        assert_eq!(err.to_string(), "Profile not found.");
    }

    #[tokio::test]
    async fn test_delete_other_profile_is_forbidden() {
        let mut profiles = MockProfileRepository::new();
        profiles
            .expect_find_by_id()
            .with(eq(4))
            .returning(|_| Ok(Some(profile(4, 40))));
        let uow = TestUnitOfWork {
            profiles: Arc::new(profiles),
            ..Default::default()
        };

        let result = ProfileManager::new(Arc::new(uow)).delete(4, 5).await;
        assert!(matches!(result, Err(AppError::Forbidden)));
    }

    #[tokio::test]
    async fn test_delete_own_profile_removes_user() {
        let mut profiles = MockProfileRepository::new();
        profiles
            .expect_find_by_id()
            .returning(|_| Ok(Some(profile(4, 40))));
        let mut users = MockUserRepository::new();
        users
            .expect_delete()
            .with(eq(40))
            .times(1)
            .returning(|_| Ok(true));
        let uow = TestUnitOfWork {
            profiles: Arc::new(profiles),
            users: Arc::new(users),
            ..Default::default()
        };

        ProfileManager::new(Arc::new(uow)).delete(4, 4).await.unwrap();
    }
}
