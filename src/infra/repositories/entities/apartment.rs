//! `apartments` table: details of APARTMENT properties, keyed by property id

use sea_orm::entity::prelude::*;

use crate::domain::{ApartmentDetails, ApartmentType};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "apartments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub property_id: i32,
    pub apartment_type: String,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub floor_number: i32,
    pub total_floors: i32,
    pub furnished: bool,
    pub parking_available: bool,
    pub year_built: Option<i32>,
    pub building_name: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for ApartmentDetails {
    fn from(model: Model) -> Self {
        Self {
            apartment_type: ApartmentType::from(model.apartment_type.as_str()),
            bedrooms: model.bedrooms,
            bathrooms: model.bathrooms,
            floor_number: model.floor_number,
            total_floors: model.total_floors,
            furnished: model.furnished,
            parking_available: model.parking_available,
            year_built: model.year_built,
            building_name: model.building_name,
        }
    }
}

impl ActiveModel {
    pub fn from_details(property_id: i32, details: &ApartmentDetails) -> Self {
        use sea_orm::Set;

        Self {
            property_id: Set(property_id),
            apartment_type: Set(details.apartment_type.to_string()),
            bedrooms: Set(details.bedrooms),
            bathrooms: Set(details.bathrooms),
            floor_number: Set(details.floor_number),
            total_floors: Set(details.total_floors),
            furnished: Set(details.furnished),
            parking_available: Set(details.parking_available),
            year_built: Set(details.year_built),
            building_name: Set(details.building_name.clone()),
        }
    }
}
