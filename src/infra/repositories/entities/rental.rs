//! `rentals` table: details of RENTAL properties, keyed by property id

use sea_orm::entity::prelude::*;

use crate::domain::{RentalDetails, RentalType};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rentals")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub property_id: i32,
    pub rental_type: String,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub floors: i32,
    pub furnished: bool,
    pub parking_spaces: i32,
    pub year_built: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for RentalDetails {
    fn from(model: Model) -> Self {
        Self {
            rental_type: RentalType::from(model.rental_type.as_str()),
            bedrooms: model.bedrooms,
            bathrooms: model.bathrooms,
            floors: model.floors,
            furnished: model.furnished,
            parking_spaces: model.parking_spaces,
            year_built: model.year_built,
        }
    }
}

impl ActiveModel {
    pub fn from_details(property_id: i32, details: &RentalDetails) -> Self {
        use sea_orm::Set;

        Self {
            property_id: Set(property_id),
            rental_type: Set(details.rental_type.to_string()),
            bedrooms: Set(details.bedrooms),
            bathrooms: Set(details.bathrooms),
            floors: Set(details.floors),
            furnished: Set(details.furnished),
            parking_spaces: Set(details.parking_spaces),
            year_built: Set(details.year_built),
        }
    }
}
