//! `favorites` table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "favorites")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub property_id: i32,
    pub notes: Option<String>,
    pub date_added: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::domain::Favorite {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            property_id: model.property_id,
            notes: model.notes,
            date_added: model.date_added,
        }
    }
}
