//! `properties` table

use sea_orm::entity::prelude::*;

use crate::domain::validation::to_column_scale;
use crate::domain::{PricePeriod, PropertyType};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "properties")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub owner_id: Option<i32>,
    pub managed_by: Option<i32>,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub location_id: i32,
    pub property_type: String,
    #[sea_orm(column_type = "Decimal(Some((12, 2)))")]
    pub price: Decimal,
    pub price_period: String,
    pub is_available: bool,
    pub featured: bool,
    pub views: i32,
    pub created_by: Option<i32>,
    pub modified_by: Option<i32>,
    pub date_created: DateTimeUtc,
    pub date_updated: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::location::Entity",
        from = "Column::LocationId",
        to = "super::location::Column::Id",
        on_delete = "Cascade"
    )]
    Location,
}

impl Related<super::location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::domain::Property {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            owner_id: model.owner_id,
            managed_by: model.managed_by,
            title: model.title,
            description: model.description,
            location_id: model.location_id,
            property_type: PropertyType::from(model.property_type.as_str()),
            price: to_column_scale(model.price),
            price_period: PricePeriod::from(model.price_period.as_str()),
            is_available: model.is_available,
            featured: model.featured,
            views: model.views,
            created_by: model.created_by,
            modified_by: model.modified_by,
            date_created: model.date_created,
            date_updated: model.date_updated,
        }
    }
}
