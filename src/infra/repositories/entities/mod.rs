//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.
//! Choice columns are stored as their wire literals (`"APARTMENT"`).

pub mod amenity;
pub mod apartment;
pub mod campus_hostel;
pub mod favorite;
pub mod inquiry;
pub mod land;
pub mod location;
pub mod profile;
pub mod property;
pub mod property_amenity;
pub mod property_image;
pub mod rental;
pub mod review;
pub mod user;
