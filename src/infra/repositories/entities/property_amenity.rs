//! `property_amenities` table: property ↔ amenity links

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "property_amenities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub property_id: i32,
    pub amenity_id: i32,
    pub notes: Option<String>,
    pub added_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::domain::PropertyAmenity {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            property_id: model.property_id,
            amenity_id: model.amenity_id,
            notes: model.notes,
            added_at: model.added_at,
        }
    }
}
