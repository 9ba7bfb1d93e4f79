//! Infrastructure layer - database access
//!
//! - Connection management and migrations
//! - SeaORM entities and repositories
//! - Unit of Work for transaction management

pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use db::{Database, Migrator};
pub use repositories::{
    AmenityRepository, Executor, FavoriteRepository, InquiryRepository, LocationRepository,
    ProfileRepository, PropertyAmenityRepository, PropertyImageRepository, PropertyRepository,
    ReviewRepository, UserRepository,
};
pub use unit_of_work::{Persistence, TransactionContext, TxFuture, UnitOfWork};
