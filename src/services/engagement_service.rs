//! Favorites, inquiries and reviews: records a profile keeps about
//! listings. The acting profile always comes from the authenticated caller.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use super::invalid_reference;
use crate::domain::inquiry::stamp_response;
use crate::domain::{Favorite, FavoriteInput, Inquiry, InquiryInput, Review, ReviewInput};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{FavoriteRepository, ReviewRepository, UnitOfWork};
use crate::with_transaction;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

const DUPLICATE_FAVORITE: &str = "The fields user, property must make a unique set.";
const DUPLICATE_REVIEW: &str = "The fields property, reviewer must make a unique set.";

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait FavoriteService: Send + Sync {
    /// The caller's favorites, newest first
    async fn list(&self, caller: i32) -> AppResult<Vec<Favorite>>;

    async fn get(&self, id: i32, caller: i32) -> AppResult<Favorite>;

    async fn create(&self, input: FavoriteInput, caller: i32) -> AppResult<Favorite>;

    async fn update(&self, id: i32, input: FavoriteInput, caller: i32) -> AppResult<Favorite>;

    async fn delete(&self, id: i32, caller: i32) -> AppResult<()>;
}

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait InquiryService: Send + Sync {
    /// Inquiries the caller sent or received, newest first
    async fn list(&self, caller: i32) -> AppResult<Vec<Inquiry>>;

    async fn get(&self, id: i32, caller: i32) -> AppResult<Inquiry>;

    async fn create(&self, input: InquiryInput, caller: i32) -> AppResult<Inquiry>;

    /// Open to the sender and to the owner of the property asked about.
    async fn update(&self, id: i32, input: InquiryInput, caller: i32) -> AppResult<Inquiry>;

    async fn delete(&self, id: i32, caller: i32) -> AppResult<()>;
}

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ReviewService: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Review>>;

    async fn get(&self, id: i32) -> AppResult<Review>;

    async fn create(&self, input: ReviewInput, caller: i32) -> AppResult<Review>;

    async fn update(&self, id: i32, input: ReviewInput, caller: i32) -> AppResult<Review>;

    async fn delete(&self, id: i32, caller: i32) -> AppResult<()>;
}

async fn require_property<U: UnitOfWork>(uow: &U, property_id: i32) -> AppResult<()> {
    if uow.properties().exists(property_id).await? {
        Ok(())
    } else {
        Err(invalid_reference("property", property_id))
    }
}

// =============================================================================
// Favorites
// =============================================================================

pub struct FavoriteManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> FavoriteManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> FavoriteService for FavoriteManager<U> {
    async fn list(&self, caller: i32) -> AppResult<Vec<Favorite>> {
        self.uow.favorites().list_for_user(caller).await
    }

    async fn get(&self, id: i32, caller: i32) -> AppResult<Favorite> {
        let favorite = self
            .uow
            .favorites()
            .find_by_id(id)
            .await?
            .ok_or_not_found("Favorite")?;
        if favorite.user_id != caller {
            return Err(AppError::Forbidden);
        }
        Ok(favorite)
    }

    async fn create(&self, input: FavoriteInput, caller: i32) -> AppResult<Favorite> {
        require_property(self.uow.as_ref(), input.property_id).await?;

        let favorite = with_transaction!(self.uow, |ctx| {
            if ctx
                .favorites()
                .find_pair(caller, input.property_id, None)
                .await?
                .is_some()
            {
                return Err(AppError::non_field(DUPLICATE_FAVORITE));
            }
            Ok::<_, AppError>(ctx.favorites().create(caller, input).await?)
        })?;

        tracing::info!(
            favorite_id = favorite.id,
            profile_id = caller,
            property_id = favorite.property_id,
            "Favorite added"
        );
        Ok(favorite)
    }

    async fn update(&self, id: i32, input: FavoriteInput, caller: i32) -> AppResult<Favorite> {
        self.get(id, caller).await?;
        require_property(self.uow.as_ref(), input.property_id).await?;

        with_transaction!(self.uow, |ctx| {
            if ctx
                .favorites()
                .find_pair(caller, input.property_id, Some(id))
                .await?
                .is_some()
            {
                return Err(AppError::non_field(DUPLICATE_FAVORITE));
            }
            ctx.favorites()
                .update(id, input)
                .await?
                .ok_or_not_found("Favorite")
        })
    }

    async fn delete(&self, id: i32, caller: i32) -> AppResult<()> {
        self.get(id, caller).await?;
        if !self.uow.favorites().delete(id).await? {
            return Err(AppError::not_found("Favorite"));
        }
        Ok(())
    }
}

// =============================================================================
// Inquiries
// =============================================================================

pub struct InquiryManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> InquiryManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    async fn find(&self, id: i32) -> AppResult<Inquiry> {
        self.uow
            .inquiries()
            .find_by_id(id)
            .await?
            .ok_or_not_found("Inquiry")
    }

    /// Sender, or owner of the property the inquiry is about.
    async fn is_party(&self, inquiry: &Inquiry, caller: i32) -> AppResult<bool> {
        if inquiry.user_id == caller {
            return Ok(true);
        }
        let property = self.uow.properties().find_by_id(inquiry.property_id).await?;
        Ok(property.is_some_and(|p| p.owner_id == Some(caller)))
    }
}

#[async_trait]
impl<U: UnitOfWork> InquiryService for InquiryManager<U> {
    async fn list(&self, caller: i32) -> AppResult<Vec<Inquiry>> {
        self.uow.inquiries().list_for_user(caller).await
    }

    async fn get(&self, id: i32, caller: i32) -> AppResult<Inquiry> {
        let inquiry = self.find(id).await?;
        if !self.is_party(&inquiry, caller).await? {
            return Err(AppError::Forbidden);
        }
        Ok(inquiry)
    }

    async fn create(&self, input: InquiryInput, caller: i32) -> AppResult<Inquiry> {
        require_property(self.uow.as_ref(), input.property_id).await?;

        let responded_at = stamp_response(None, None, input.status, Utc::now());
        let inquiry = self
            .uow
            .inquiries()
            .create(caller, input, responded_at)
            .await?;

        tracing::info!(
            inquiry_id = inquiry.id,
            property_id = inquiry.property_id,
            "Inquiry sent"
        );
        Ok(inquiry)
    }

    async fn update(&self, id: i32, input: InquiryInput, caller: i32) -> AppResult<Inquiry> {
        let existing = self.get(id, caller).await?;
        let input = if existing.user_id == caller {
            input
        } else {
            input.into_reply_to(&existing)
        };
        if input.property_id != existing.property_id {
            require_property(self.uow.as_ref(), input.property_id).await?;
        }

        let responded_at = existing.responded_at_after(input.status, Utc::now());
        let inquiry = self
            .uow
            .inquiries()
            .update(id, input, responded_at)
            .await?
            .ok_or_not_found("Inquiry")?;

        tracing::info!(inquiry_id = id, status = %inquiry.status, "Inquiry updated");
        Ok(inquiry)
    }

    async fn delete(&self, id: i32, caller: i32) -> AppResult<()> {
        let inquiry = self.find(id).await?;
        if inquiry.user_id != caller {
            return Err(AppError::Forbidden);
        }
        if !self.uow.inquiries().delete(id).await? {
            return Err(AppError::not_found("Inquiry"));
        }
        Ok(())
    }
}

// =============================================================================
// Reviews
// =============================================================================

pub struct ReviewManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ReviewManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    async fn owned(&self, id: i32, caller: i32) -> AppResult<Review> {
        let review = self.get(id).await?;
        if review.reviewer_id != caller {
            return Err(AppError::Forbidden);
        }
        Ok(review)
    }
}

#[async_trait]
impl<U: UnitOfWork> ReviewService for ReviewManager<U> {
    async fn list(&self) -> AppResult<Vec<Review>> {
        self.uow.reviews().list().await
    }

    async fn get(&self, id: i32) -> AppResult<Review> {
        self.uow
            .reviews()
            .find_by_id(id)
            .await?
            .ok_or_not_found("Review")
    }

    async fn create(&self, input: ReviewInput, caller: i32) -> AppResult<Review> {
        let input = input.into_reviewer_edit(None);
        require_property(self.uow.as_ref(), input.property_id).await?;

        let review = with_transaction!(self.uow, |ctx| {
            if ctx
                .reviews()
                .find_pair(input.property_id, caller, None)
                .await?
                .is_some()
            {
                return Err(AppError::non_field(DUPLICATE_REVIEW));
            }
            Ok::<_, AppError>(ctx.reviews().create(caller, input).await?)
        })?;

        tracing::info!(
            review_id = review.id,
            property_id = review.property_id,
            rating = review.rating,
            "Review posted"
        );
        Ok(review)
    }

    async fn update(&self, id: i32, input: ReviewInput, caller: i32) -> AppResult<Review> {
        let existing = self.owned(id, caller).await?;
        let input = input.into_reviewer_edit(Some(&existing));
        require_property(self.uow.as_ref(), input.property_id).await?;

        with_transaction!(self.uow, |ctx| {
            if ctx
                .reviews()
                .find_pair(input.property_id, caller, Some(id))
                .await?
                .is_some()
            {
                return Err(AppError::non_field(DUPLICATE_REVIEW));
            }
            ctx.reviews()
                .update(id, input)
                .await?
                .ok_or_not_found("Review")
        })
    }

    async fn delete(&self, id: i32, caller: i32) -> AppResult<()> {
        self.owned(id, caller).await?;
        if !self.uow.reviews().delete(id).await? {
            return Err(AppError::not_found("Review"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{InquiryStatus, PricePeriod, Property, PropertyType};
    use crate::infra::repositories::{
        MockFavoriteRepository, MockInquiryRepository, MockPropertyRepository,
    };
    use crate::services::testing::TestUnitOfWork;
    use chrono::DateTime;
    use mockall::predicate::{always, eq};
    use rust_decimal::Decimal;

    fn favorite(user_id: i32) -> Favorite {
        Favorite {
            id: 1,
            user_id,
            property_id: 2,
            notes: None,
            date_added: Utc::now(),
        }
    }

    fn inquiry(user_id: i32, status: InquiryStatus) -> Inquiry {
        Inquiry {
            id: 3,
            property_id: 2,
            user_id,
            message: "Is it available?".to_string(),
            contact_phone: None,
            contact_email: None,
            status,
            response: None,
            responded_at: None,
            date_sent: Utc::now(),
        }
    }

    fn property(owner_id: Option<i32>) -> Property {
        Property {
            id: 2,
            owner_id,
            managed_by: None,
            title: "Flat A".to_string(),
            description: "...".to_string(),
            location_id: 1,
            property_type: PropertyType::Apartment,
            price: Decimal::new(50000, 2),
            price_period: PricePeriod::Monthly,
            is_available: true,
            featured: false,
            views: 0,
            created_by: None,
            modified_by: None,
            date_created: Utc::now(),
            date_updated: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_favorite_of_someone_else_is_forbidden() {
        let mut favorites = MockFavoriteRepository::new();
        favorites
            .expect_find_by_id()
            .returning(|_| Ok(Some(favorite(7))));
        let uow = TestUnitOfWork {
            favorites: Arc::new(favorites),
            ..Default::default()
        };

        let result = FavoriteManager::new(Arc::new(uow)).get(1, 8).await;
        assert!(matches!(result, Err(AppError::Forbidden)));
    }

    #[tokio::test]
    async fn test_favorites_listed_for_caller_only() {
        let mut favorites = MockFavoriteRepository::new();
        favorites
            .expect_list_for_user()
            .with(eq(7))
            .times(1)
            .returning(|_| Ok(vec![favorite(7)]));
        let uow = TestUnitOfWork {
            favorites: Arc::new(favorites),
            ..Default::default()
        };

        let listed = FavoriteManager::new(Arc::new(uow)).list(7).await.unwrap();
        assert_eq!(listed.len(), 1);
    }

    #[tokio::test]
    async fn test_owner_responding_stamps_responded_at() {
        let mut inquiries = MockInquiryRepository::new();
        inquiries
            .expect_find_by_id()
            .returning(|_| Ok(Some(inquiry(7, InquiryStatus::Pending))));
        inquiries
            .expect_update()
            .with(eq(3), always(), always())
            .returning(|_, input: InquiryInput, responded_at: Option<DateTime<Utc>>| {
                assert!(responded_at.is_some());
                let mut updated = inquiry(7, input.status);
                updated.response = input.response;
                updated.responded_at = responded_at;
                Ok(Some(updated))
            });
        let mut properties = MockPropertyRepository::new();
        properties
            .expect_find_by_id()
            .returning(|_| Ok(Some(property(Some(9)))));
        let uow = TestUnitOfWork {
            inquiries: Arc::new(inquiries),
            properties: Arc::new(properties),
            ..Default::default()
        };

        let input: InquiryInput = serde_json::from_value(serde_json::json!({
            "property": 2,
            "message": "Is it available?",
            "status": "RESPONDED",
            "response": "Yes"
        }))
        .unwrap();
        let updated = InquiryManager::new(Arc::new(uow))
            .update(3, input, 9)
            .await
            .unwrap();
        assert_eq!(updated.status, InquiryStatus::Responded);
        assert!(updated.responded_at.is_some());
    }

    #[tokio::test]
    async fn test_stranger_cannot_read_inquiry() {
        let mut inquiries = MockInquiryRepository::new();
        inquiries
            .expect_find_by_id()
            .returning(|_| Ok(Some(inquiry(7, InquiryStatus::Pending))));
        let mut properties = MockPropertyRepository::new();
        properties
            .expect_find_by_id()
            .returning(|_| Ok(Some(property(Some(9)))));
        let uow = TestUnitOfWork {
            inquiries: Arc::new(inquiries),
            properties: Arc::new(properties),
            ..Default::default()
        };

        let result = InquiryManager::new(Arc::new(uow)).get(3, 11).await;
        assert!(matches!(result, Err(AppError::Forbidden)));
    }

    #[tokio::test]
    async fn test_owner_reply_keeps_sender_message() {
        let mut inquiries = MockInquiryRepository::new();
        inquiries
            .expect_find_by_id()
            .returning(|_| Ok(Some(inquiry(7, InquiryStatus::Pending))));
        inquiries
            .expect_update()
            .times(1)
            .returning(|_, input: InquiryInput, responded_at: Option<DateTime<Utc>>| {
                assert_eq!(input.property_id, 2);
                assert_eq!(input.message, "Is it available?");
                let mut updated = inquiry(7, input.status);
                updated.response = input.response;
                updated.responded_at = responded_at;
                Ok(Some(updated))
            });
        let mut properties = MockPropertyRepository::new();
        properties
            .expect_find_by_id()
            .with(eq(2))
            .returning(|_| Ok(Some(property(Some(9)))));
        let uow = TestUnitOfWork {
            inquiries: Arc::new(inquiries),
            properties: Arc::new(properties),
            ..Default::default()
        };

        let input: InquiryInput = serde_json::from_value(serde_json::json!({
            "property": 5,
            "message": "Never mind",
            "status": "CLOSED",
            "response": "Let out already"
        }))
        .unwrap();
        let updated = InquiryManager::new(Arc::new(uow))
            .update(3, input, 9)
            .await
            .unwrap();
        assert_eq!(updated.message, "Is it available?");
        assert_eq!(updated.status, InquiryStatus::Closed);
    }
}
