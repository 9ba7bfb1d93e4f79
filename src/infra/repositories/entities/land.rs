//! `lands` table: details of LAND properties, keyed by property id

use sea_orm::entity::prelude::*;

use crate::domain::validation::to_column_scale;
use crate::domain::{LandDetails, LandType};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "lands")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub property_id: i32,
    pub land_type: String,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub area: Decimal,
    pub zoning: Option<String>,
    pub has_utilities: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub topographical_features: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for LandDetails {
    fn from(model: Model) -> Self {
        Self {
            land_type: LandType::from(model.land_type.as_str()),
            area: to_column_scale(model.area),
            zoning: model.zoning,
            has_utilities: model.has_utilities,
            topographical_features: model.topographical_features,
        }
    }
}

impl ActiveModel {
    pub fn from_details(property_id: i32, details: &LandDetails) -> Self {
        use sea_orm::Set;

        Self {
            property_id: Set(property_id),
            land_type: Set(details.land_type.to_string()),
            area: Set(details.area),
            zoning: Set(details.zoning.clone()),
            has_utilities: Set(details.has_utilities),
            topographical_features: Set(details.topographical_features.clone()),
        }
    }
}
