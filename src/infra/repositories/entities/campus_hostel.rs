//! `campus_hostels` table: details of HOSTEL properties, keyed by property id

use sea_orm::entity::prelude::*;

use crate::domain::validation::to_column_scale;
use crate::domain::{HostelDetails, HostelType, RoomType};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "campus_hostels")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub property_id: i32,
    pub hostel_type: String,
    pub room_type: String,
    pub capacity: i32,
    pub meals_included: bool,
    #[sea_orm(column_type = "Decimal(Some((5, 2)))")]
    pub distance_to_campus: Decimal,
    pub curfew_time: Option<Time>,
    pub has_laundry: bool,
    pub has_study_room: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for HostelDetails {
    fn from(model: Model) -> Self {
        Self {
            hostel_type: HostelType::from(model.hostel_type.as_str()),
            room_type: RoomType::from(model.room_type.as_str()),
            capacity: model.capacity,
            meals_included: model.meals_included,
            distance_to_campus: to_column_scale(model.distance_to_campus),
            curfew_time: model.curfew_time,
            has_laundry: model.has_laundry,
            has_study_room: model.has_study_room,
        }
    }
}

impl ActiveModel {
    pub fn from_details(property_id: i32, details: &HostelDetails) -> Self {
        use sea_orm::Set;

        Self {
            property_id: Set(property_id),
            hostel_type: Set(details.hostel_type.to_string()),
            room_type: Set(details.room_type.to_string()),
            capacity: Set(details.capacity),
            meals_included: Set(details.meals_included),
            distance_to_campus: Set(details.distance_to_campus),
            curfew_time: Set(details.curfew_time),
            has_laundry: Set(details.has_laundry),
            has_study_room: Set(details.has_study_room),
        }
    }
}
