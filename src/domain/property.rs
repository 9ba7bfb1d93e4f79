//! Property listings and their type-specific details.
//!
//! Every property carries a `PropertyType` tag. The matching detail record
//! (land, rental, apartment or campus hostel) is modelled as the
//! [`PropertyDetails`] tagged union; a payload whose detail object does not
//! match the tag is rejected before anything is written.

use chrono::{DateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::choices::{
    ApartmentType, HostelType, LandType, PricePeriod, PropertyType, RentalType, RoomType,
};
use super::validation::{validate_area, validate_distance, validate_not_blank, validate_price};
use crate::errors::{AppResult, FieldErrors};

// =============================================================================
// Property
// =============================================================================

/// Property listing row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Property {
    pub id: i32,
    /// Profile that owns the listing
    #[serde(rename = "owner")]
    pub owner_id: Option<i32>,
    /// Profile managing the listing on the owner's behalf
    pub managed_by: Option<i32>,
    #[schema(example = "Flat A")]
    pub title: String,
    pub description: String,
    #[serde(rename = "location")]
    pub location_id: i32,
    pub property_type: PropertyType,
    #[schema(value_type = String, example = "500.00")]
    pub price: Decimal,
    pub price_period: PricePeriod,
    pub is_available: bool,
    pub featured: bool,
    pub views: i32,
    pub created_by: Option<i32>,
    pub modified_by: Option<i32>,
    pub date_created: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}

/// Create/replace payload for a property.
///
/// At most one of `land`, `rental`, `apartment`, `hostel` may be given, and
/// it must be the one named by `property_type`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct PropertyInput {
    #[validate(
        length(max = 200, message = "Ensure this field has no more than 200 characters."),
        custom(function = "validate_not_blank")
    )]
    #[schema(example = "Flat A")]
    pub title: String,
    #[validate(custom(function = "validate_not_blank"))]
    #[schema(example = "Two bedroom flat close to town")]
    pub description: String,
    #[serde(rename = "location")]
    #[schema(example = 1)]
    pub location_id: i32,
    pub property_type: PropertyType,
    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = String, example = "500.00")]
    pub price: Decimal,
    #[serde(default)]
    pub price_period: PricePeriod,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default)]
    pub featured: bool,
    /// Keeps the current count when omitted
    #[validate(range(min = 0, message = "Ensure this value is greater than or equal to 0."))]
    pub views: Option<i32>,
    /// Defaults to the caller's profile when authenticated
    #[serde(rename = "owner")]
    pub owner_id: Option<i32>,
    pub managed_by: Option<i32>,
    pub created_by: Option<i32>,
    pub modified_by: Option<i32>,
    #[validate(nested)]
    pub land: Option<LandDetails>,
    #[validate(nested)]
    pub rental: Option<RentalDetails>,
    #[validate(nested)]
    pub apartment: Option<ApartmentDetails>,
    #[validate(nested)]
    pub hostel: Option<HostelDetails>,
}

impl PropertyInput {
    /// Split off the detail record, checking it against `property_type`.
    pub fn take_details(&mut self) -> AppResult<Option<PropertyDetails>> {
        let supplied: Vec<PropertyDetails> = [
            self.land.take().map(PropertyDetails::Land),
            self.rental.take().map(PropertyDetails::Rental),
            self.apartment.take().map(PropertyDetails::Apartment),
            self.hostel.take().map(PropertyDetails::Hostel),
        ]
        .into_iter()
        .flatten()
        .collect();

        let mut errors = FieldErrors::new();
        for details in &supplied {
            if details.property_type() != self.property_type {
                errors.add(
                    details.field_name(),
                    format!(
                        "Details of a {} property cannot be attached to a {} listing.",
                        details.property_type(),
                        self.property_type
                    ),
                );
            }
        }
        if let Some(details) = supplied.first() {
            errors.merge(details.check());
        }
        errors.into_result()?;

        Ok(supplied.into_iter().next())
    }

    /// Field names holding references to other records, with their ids.
    pub fn profile_refs(&self) -> Vec<(&'static str, i32)> {
        [
            ("owner", self.owner_id),
            ("managed_by", self.managed_by),
            ("created_by", self.created_by),
            ("modified_by", self.modified_by),
        ]
        .into_iter()
        .filter_map(|(field, id)| id.map(|id| (field, id)))
        .collect()
    }
}

/// Property response: the listing plus its detail record under the key
/// matching its type.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PropertyResponse {
    #[serde(flatten)]
    pub property: Property,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub land: Option<LandDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rental: Option<RentalDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apartment: Option<ApartmentDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostel: Option<HostelDetails>,
}

impl PropertyResponse {
    pub fn new(property: Property, details: Option<PropertyDetails>) -> Self {
        let mut response = Self {
            property,
            land: None,
            rental: None,
            apartment: None,
            hostel: None,
        };
        match details {
            Some(PropertyDetails::Land(d)) => response.land = Some(d),
            Some(PropertyDetails::Rental(d)) => response.rental = Some(d),
            Some(PropertyDetails::Apartment(d)) => response.apartment = Some(d),
            Some(PropertyDetails::Hostel(d)) => response.hostel = Some(d),
            None => {}
        }
        response
    }
}

// =============================================================================
// Type-specific details
// =============================================================================

/// Detail record of a property, one variant per `PropertyType`
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyDetails {
    Land(LandDetails),
    Rental(RentalDetails),
    Apartment(ApartmentDetails),
    Hostel(HostelDetails),
}

impl PropertyDetails {
    /// The tag this detail record belongs under
    pub fn property_type(&self) -> PropertyType {
        match self {
            PropertyDetails::Land(_) => PropertyType::Land,
            PropertyDetails::Rental(_) => PropertyType::Rental,
            PropertyDetails::Apartment(_) => PropertyType::Apartment,
            PropertyDetails::Hostel(_) => PropertyType::Hostel,
        }
    }

    /// Payload key carrying this variant
    pub fn field_name(&self) -> &'static str {
        match self {
            PropertyDetails::Land(_) => "land",
            PropertyDetails::Rental(_) => "rental",
            PropertyDetails::Apartment(_) => "apartment",
            PropertyDetails::Hostel(_) => "hostel",
        }
    }

    /// Cross-field rules the per-field validators cannot express.
    fn check(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if let PropertyDetails::Apartment(apartment) = self {
            if apartment.floor_number > apartment.total_floors {
                errors.add(
                    "apartment.floor_number",
                    "Floor number cannot exceed the building's total floors.",
                );
            }
        }
        errors
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct LandDetails {
    pub land_type: LandType,
    #[validate(custom(function = "validate_area"))]
    #[schema(value_type = String, example = "1200.00")]
    pub area: Decimal,
    #[validate(length(max = 100, message = "Ensure this field has no more than 100 characters."))]
    pub zoning: Option<String>,
    #[serde(default)]
    pub has_utilities: bool,
    pub topographical_features: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct RentalDetails {
    pub rental_type: RentalType,
    #[validate(range(min = 0, message = "Ensure this value is greater than or equal to 0."))]
    pub bedrooms: i32,
    #[validate(range(min = 0, message = "Ensure this value is greater than or equal to 0."))]
    pub bathrooms: i32,
    #[serde(default = "default_floors")]
    #[validate(range(min = 1, message = "Ensure this value is greater than or equal to 1."))]
    pub floors: i32,
    #[serde(default)]
    pub furnished: bool,
    #[serde(default)]
    #[validate(range(min = 0, message = "Ensure this value is greater than or equal to 0."))]
    pub parking_spaces: i32,
    #[validate(range(min = 1800, max = 2100, message = "Enter a plausible year."))]
    pub year_built: Option<i32>,
}

fn default_floors() -> i32 {
    1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct ApartmentDetails {
    pub apartment_type: ApartmentType,
    #[validate(range(min = 0, message = "Ensure this value is greater than or equal to 0."))]
    pub bedrooms: i32,
    #[validate(range(min = 0, message = "Ensure this value is greater than or equal to 0."))]
    pub bathrooms: i32,
    #[validate(range(min = 0, message = "Ensure this value is greater than or equal to 0."))]
    pub floor_number: i32,
    #[validate(range(min = 1, message = "Ensure this value is greater than or equal to 1."))]
    pub total_floors: i32,
    #[serde(default)]
    pub furnished: bool,
    #[serde(default)]
    pub parking_available: bool,
    #[validate(range(min = 1800, max = 2100, message = "Enter a plausible year."))]
    pub year_built: Option<i32>,
    #[validate(length(max = 100, message = "Ensure this field has no more than 100 characters."))]
    pub building_name: Option<String>,
}

/// Campus hostel details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct HostelDetails {
    pub hostel_type: HostelType,
    pub room_type: RoomType,
    #[validate(range(min = 1, message = "Ensure this value is greater than or equal to 1."))]
    pub capacity: i32,
    #[serde(default)]
    pub meals_included: bool,
    #[validate(custom(function = "validate_distance"))]
    #[schema(value_type = String, example = "1.50")]
    pub distance_to_campus: Decimal,
    #[schema(value_type = Option<String>, example = "22:00:00")]
    pub curfew_time: Option<NaiveTime>,
    #[serde(default)]
    pub has_laundry: bool,
    #[serde(default)]
    pub has_study_room: bool,
}

// =============================================================================
// Images
// =============================================================================

/// Image attached to a property; `image` is a path in file storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PropertyImage {
    pub id: i32,
    #[serde(rename = "property")]
    pub property_id: i32,
    #[schema(example = "property_images/flat-a.jpg")]
    pub image: String,
    pub is_featured: bool,
    pub caption: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

/// Create/replace payload for a property image
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct PropertyImageInput {
    #[serde(rename = "property")]
    #[schema(example = 1)]
    pub property_id: i32,
    #[validate(
        length(max = 255, message = "Ensure this field has no more than 255 characters."),
        custom(function = "validate_not_blank")
    )]
    #[schema(example = "property_images/flat-a.jpg")]
    pub image: String,
    #[serde(default)]
    pub is_featured: bool,
    #[validate(length(max = 100, message = "Ensure this field has no more than 100 characters."))]
    pub caption: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn input(body: serde_json::Value) -> PropertyInput {
        serde_json::from_value(body).unwrap()
    }

    fn flat_a() -> serde_json::Value {
        json!({
            "title": "Flat A",
            "description": "...",
            "location": 1,
            "property_type": "APARTMENT",
            "price": "500.00",
            "price_period": "MONTHLY"
        })
    }

    #[test]
    fn test_defaults_applied() {
        let parsed = input(flat_a());
        assert!(parsed.is_available);
        assert!(!parsed.featured);
        assert_eq!(parsed.views, None);
        assert_eq!(parsed.price_period, PricePeriod::Monthly);
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn test_negative_price_flags_price_field() {
        let mut body = flat_a();
        body["price"] = json!("-10.00");
        let errors = input(body).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));
    }

    #[test]
    fn test_matching_details_accepted() {
        let mut body = flat_a();
        body["apartment"] = json!({
            "apartment_type": "2BED",
            "bedrooms": 2,
            "bathrooms": 1,
            "floor_number": 3,
            "total_floors": 8
        });
        let mut parsed = input(body);
        let details = parsed.take_details().unwrap();
        assert!(matches!(details, Some(PropertyDetails::Apartment(_))));
    }

    #[test]
    fn test_mismatched_details_rejected() {
        let mut body = flat_a();
        body["land"] = json!({"land_type": "RESIDENTIAL", "area": "100.00"});
        let mut parsed = input(body);
        match parsed.take_details() {
            Err(crate::errors::AppError::Validation(errors)) => {
                assert!(errors.get("land").is_some())
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_floor_above_total_rejected() {
        let mut body = flat_a();
        body["apartment"] = json!({
            "apartment_type": "STUDIO",
            "bedrooms": 0,
            "bathrooms": 1,
            "floor_number": 9,
            "total_floors": 4
        });
        let mut parsed = input(body);
        assert!(parsed.take_details().is_err());
    }

    #[test]
    fn test_nested_validation_prefixes_field() {
        let mut body = flat_a();
        body["property_type"] = json!("HOSTEL");
        body["hostel"] = json!({
            "hostel_type": "MIXED",
            "room_type": "DORM",
            "capacity": 0,
            "distance_to_campus": "0.50"
        });
        let errors = input(body).validate().unwrap_err();
        let fields = FieldErrors::from(&errors);
        assert!(fields.get("hostel.capacity").is_some());
    }

    #[test]
    fn test_response_places_details_under_kind() {
        let property = Property {
            id: 1,
            owner_id: None,
            managed_by: None,
            title: "Plot".to_string(),
            description: "Corner plot".to_string(),
            location_id: 1,
            property_type: PropertyType::Land,
            price: Decimal::new(100000, 2),
            price_period: PricePeriod::OneTime,
            is_available: true,
            featured: false,
            views: 0,
            created_by: None,
            modified_by: None,
            date_created: Utc::now(),
            date_updated: Utc::now(),
        };
        let details = PropertyDetails::Land(LandDetails {
            land_type: LandType::Residential,
            area: Decimal::new(50000, 2),
            zoning: None,
            has_utilities: true,
            topographical_features: None,
        });
        let json = serde_json::to_value(PropertyResponse::new(property, Some(details))).unwrap();
        assert_eq!(json["price"], "1000.00");
        assert_eq!(json["land"]["land_type"], "RESIDENTIAL");
        assert!(json.get("apartment").is_none());
    }

    #[test]
    fn test_profile_refs_skip_missing() {
        let mut parsed = input(flat_a());
        parsed.owner_id = Some(3);
        parsed.modified_by = Some(4);
        assert_eq!(parsed.profile_refs(), vec![("owner", 3), ("modified_by", 4)]);
    }
}
