//! `locations` table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "locations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub country: String,
    pub region: String,
    pub city: String,
    pub district: Option<String>,
    pub street: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::domain::Location {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            country: model.country,
            region: model.region,
            city: model.city,
            district: model.district,
            street: model.street,
        }
    }
}
