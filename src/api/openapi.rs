//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    auth_handler, catalog_handler, engagement_handler, profile_handler, property_handler,
};
use crate::domain::{
    Amenity, AmenityInput, ApartmentDetails, ApartmentType, Favorite, FavoriteInput, HostelDetails,
    HostelType, Inquiry, InquiryInput, InquiryStatus, LandDetails, LandType, Location,
    LocationInput, PricePeriod, Profile, ProfileInput, Property, PropertyAmenity,
    PropertyAmenityInput, PropertyImage, PropertyImageInput, PropertyInput, PropertyResponse,
    PropertyType, RentalDetails, RentalType, Review, ReviewInput, RoomType, UserResponse,
    UserType,
};
use crate::services::{Account, Session};

/// OpenAPI documentation for the listing API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Estate API",
        version = "0.1.0",
        description = "Real-estate listings: properties, amenities, images, favorites, inquiries and reviews",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(
        auth_handler::register,
        auth_handler::login,
        auth_handler::refresh,
        auth_handler::me,
        profile_handler::list_profiles,
        profile_handler::get_profile,
        profile_handler::update_profile,
        profile_handler::delete_profile,
        catalog_handler::list_locations,
        catalog_handler::create_location,
        catalog_handler::replace_locations,
        catalog_handler::delete_locations,
        catalog_handler::get_location,
        catalog_handler::update_location,
        catalog_handler::delete_location,
        catalog_handler::list_amenities,
        catalog_handler::create_amenity,
        catalog_handler::replace_amenities,
        catalog_handler::delete_amenities,
        catalog_handler::get_amenity,
        catalog_handler::update_amenity,
        catalog_handler::delete_amenity,
        property_handler::list_properties,
        property_handler::create_property,
        property_handler::replace_properties,
        property_handler::delete_properties,
        property_handler::get_property,
        property_handler::update_property,
        property_handler::delete_property,
        property_handler::list_images,
        property_handler::create_image,
        property_handler::get_image,
        property_handler::update_image,
        property_handler::delete_image,
        property_handler::list_property_amenities,
        property_handler::create_property_amenity,
        property_handler::get_property_amenity,
        property_handler::update_property_amenity,
        property_handler::delete_property_amenity,
        engagement_handler::list_favorites,
        engagement_handler::create_favorite,
        engagement_handler::get_favorite,
        engagement_handler::update_favorite,
        engagement_handler::delete_favorite,
        engagement_handler::list_inquiries,
        engagement_handler::create_inquiry,
        engagement_handler::get_inquiry,
        engagement_handler::update_inquiry,
        engagement_handler::delete_inquiry,
        engagement_handler::list_reviews,
        engagement_handler::create_review,
        engagement_handler::get_review,
        engagement_handler::update_review,
        engagement_handler::delete_review,
    ),
    components(
        schemas(
            // Choices
            UserType,
            PropertyType,
            PricePeriod,
            LandType,
            RentalType,
            ApartmentType,
            HostelType,
            RoomType,
            InquiryStatus,
            // Accounts
            UserResponse,
            Profile,
            ProfileInput,
            Session,
            Account,
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            auth_handler::RefreshRequest,
            auth_handler::AccessToken,
            // Catalogue
            Location,
            LocationInput,
            Amenity,
            AmenityInput,
            // Listings
            Property,
            PropertyInput,
            PropertyResponse,
            LandDetails,
            RentalDetails,
            ApartmentDetails,
            HostelDetails,
            PropertyImage,
            PropertyImageInput,
            PropertyAmenity,
            PropertyAmenityInput,
            // Engagement
            Favorite,
            FavoriteInput,
            Inquiry,
            InquiryInput,
            Review,
            ReviewInput,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login and tokens"),
        (name = "Profiles", description = "User profiles"),
        (name = "Locations", description = "Where listings are"),
        (name = "Amenities", description = "Amenity catalogue"),
        (name = "Properties", description = "Listings and their type-specific details"),
        (name = "Images", description = "Listing images"),
        (name = "Property amenities", description = "Amenities offered by a listing"),
        (name = "Favorites", description = "The caller's saved listings"),
        (name = "Inquiries", description = "Questions about listings"),
        (name = "Reviews", description = "Listing reviews")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token obtained from /api/auth/login/"))
                        .build(),
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_resource_paths() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/properties/",
            "/api/property/{id}/",
            "/api/favorites/",
            "/api/auth/register/",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
        assert!(doc
            .components
            .as_ref()
            .is_some_and(|c| c.security_schemes.contains_key("bearer_auth")));
    }
}
