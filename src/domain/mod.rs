//! Domain layer - listing entities, payloads and their rules
//!
//! Types here are free of persistence concerns: repositories map database
//! rows into them, handlers validate request payloads against them.

pub mod amenity;
pub mod choices;
pub mod favorite;
pub mod inquiry;
pub mod location;
pub mod password;
pub mod profile;
pub mod property;
pub mod review;
pub mod user;
pub mod validation;

pub use amenity::{Amenity, AmenityInput, PropertyAmenity, PropertyAmenityInput};
pub use choices::{
    ApartmentType, HostelType, InquiryStatus, LandType, PricePeriod, PropertyType, RentalType,
    RoomType, UserType,
};
pub use favorite::{Favorite, FavoriteInput};
pub use inquiry::{Inquiry, InquiryInput};
pub use location::{Location, LocationInput};
pub use password::Password;
pub use profile::{NewProfile, Profile, ProfileInput};
pub use property::{
    ApartmentDetails, HostelDetails, LandDetails, Property, PropertyDetails, PropertyImage,
    PropertyImageInput, PropertyInput, PropertyResponse, RentalDetails,
};
pub use review::{Review, ReviewInput};
pub use user::{NewUser, User, UserResponse};
