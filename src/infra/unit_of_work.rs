//! Unit of Work pattern implementation.
//!
//! Centralizes access to all repositories and runs multi-step writes
//! atomically: every repository handed out by a [`TransactionContext`]
//! executes on the same database transaction.

use async_trait::async_trait;
use sea_orm::{
    AccessMode, DatabaseConnection, DatabaseTransaction, IsolationLevel, TransactionTrait,
};
use std::sync::Arc;

use super::repositories::{
    AmenityRepository, AmenityStore, FavoriteRepository, FavoriteStore, InquiryRepository,
    InquiryStore, LocationRepository, LocationStore, ProfileRepository, ProfileStore,
    PropertyAmenityRepository, PropertyAmenityStore, PropertyImageRepository, PropertyImageStore,
    PropertyRepository, PropertyStore, ReviewRepository, ReviewStore, UserRepository, UserStore,
};
use crate::errors::{AppError, AppResult};

/// Boxed future returned by transactional closures.
pub type TxFuture<'a, T> =
    std::pin::Pin<Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>>;

/// Unit of Work trait for dependency injection.
///
/// Not mockable directly because of the generic transaction methods; unit
/// tests implement it over mock repositories instead.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    fn users(&self) -> Arc<dyn UserRepository>;

    fn profiles(&self) -> Arc<dyn ProfileRepository>;

    fn locations(&self) -> Arc<dyn LocationRepository>;

    fn amenities(&self) -> Arc<dyn AmenityRepository>;

    fn properties(&self) -> Arc<dyn PropertyRepository>;

    fn property_images(&self) -> Arc<dyn PropertyImageRepository>;

    fn property_amenities(&self) -> Arc<dyn PropertyAmenityRepository>;

    fn favorites(&self) -> Arc<dyn FavoriteRepository>;

    fn inquiries(&self) -> Arc<dyn InquiryRepository>;

    fn reviews(&self) -> Arc<dyn ReviewRepository>;

    /// Execute a closure within a transaction.
    ///
    /// Committed when the closure returns `Ok`, rolled back otherwise.
    /// Runs at ReadCommitted.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send;
}

/// Repository access within one transaction.
///
/// The context borrows the transaction, so nothing obtained from it can
/// outlive the commit or rollback.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    pub fn users(&self) -> UserStore<&'a DatabaseTransaction> {
        UserStore::new(self.txn)
    }

    pub fn profiles(&self) -> ProfileStore<&'a DatabaseTransaction> {
        ProfileStore::new(self.txn)
    }

    pub fn locations(&self) -> LocationStore<&'a DatabaseTransaction> {
        LocationStore::new(self.txn)
    }

    pub fn amenities(&self) -> AmenityStore<&'a DatabaseTransaction> {
        AmenityStore::new(self.txn)
    }

    pub fn properties(&self) -> PropertyStore<&'a DatabaseTransaction> {
        PropertyStore::new(self.txn)
    }

    pub fn property_images(&self) -> PropertyImageStore<&'a DatabaseTransaction> {
        PropertyImageStore::new(self.txn)
    }

    pub fn property_amenities(&self) -> PropertyAmenityStore<&'a DatabaseTransaction> {
        PropertyAmenityStore::new(self.txn)
    }

    pub fn favorites(&self) -> FavoriteStore<&'a DatabaseTransaction> {
        FavoriteStore::new(self.txn)
    }

    pub fn inquiries(&self) -> InquiryStore<&'a DatabaseTransaction> {
        InquiryStore::new(self.txn)
    }

    pub fn reviews(&self) -> ReviewStore<&'a DatabaseTransaction> {
        ReviewStore::new(self.txn)
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    users: Arc<UserStore>,
    profiles: Arc<ProfileStore>,
    locations: Arc<LocationStore>,
    amenities: Arc<AmenityStore>,
    properties: Arc<PropertyStore>,
    property_images: Arc<PropertyImageStore>,
    property_amenities: Arc<PropertyAmenityStore>,
    favorites: Arc<FavoriteStore>,
    inquiries: Arc<InquiryStore>,
    reviews: Arc<ReviewStore>,
}

impl Persistence {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: Arc::new(UserStore::new(db.clone())),
            profiles: Arc::new(ProfileStore::new(db.clone())),
            locations: Arc::new(LocationStore::new(db.clone())),
            amenities: Arc::new(AmenityStore::new(db.clone())),
            properties: Arc::new(PropertyStore::new(db.clone())),
            property_images: Arc::new(PropertyImageStore::new(db.clone())),
            property_amenities: Arc::new(PropertyAmenityStore::new(db.clone())),
            favorites: Arc::new(FavoriteStore::new(db.clone())),
            inquiries: Arc::new(InquiryStore::new(db.clone())),
            reviews: Arc::new(ReviewStore::new(db.clone())),
            db,
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn profiles(&self) -> Arc<dyn ProfileRepository> {
        self.profiles.clone()
    }

    fn locations(&self) -> Arc<dyn LocationRepository> {
        self.locations.clone()
    }

    fn amenities(&self) -> Arc<dyn AmenityRepository> {
        self.amenities.clone()
    }

    fn properties(&self) -> Arc<dyn PropertyRepository> {
        self.properties.clone()
    }

    fn property_images(&self) -> Arc<dyn PropertyImageRepository> {
        self.property_images.clone()
    }

    fn property_amenities(&self) -> Arc<dyn PropertyAmenityRepository> {
        self.property_amenities.clone()
    }

    fn favorites(&self) -> Arc<dyn FavoriteRepository> {
        self.favorites.clone()
    }

    fn inquiries(&self) -> Arc<dyn InquiryRepository> {
        self.inquiries.clone()
    }

    fn reviews(&self) -> Arc<dyn ReviewRepository> {
        self.reviews.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> TxFuture<'a, T> + Send,
        T: Send,
    {
        let txn = self
            .db
            .begin_with_config(Some(IsolationLevel::ReadCommitted), Some(AccessMode::ReadWrite))
            .await
            .map_err(AppError::from)?;

        let ctx = TransactionContext::new(&txn);

        match f(ctx).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Run `$body` inside `$uow.transaction`, with `$ctx` bound to the context.
///
/// Everything `$body` captures must be owned; clone it before the call.
#[macro_export]
macro_rules! with_transaction {
    ($uow:expr, |$ctx:ident| $body:expr) => {
        $uow.transaction(|$ctx| Box::pin(async move { $body })).await
    };
}
