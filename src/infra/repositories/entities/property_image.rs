//! `property_images` table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "property_images")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub property_id: i32,
    pub image: String,
    pub is_featured: bool,
    pub caption: Option<String>,
    pub uploaded_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::domain::PropertyImage {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            property_id: model.property_id,
            image: model.image,
            is_featured: model.is_featured,
            caption: model.caption,
            uploaded_at: model.uploaded_at,
        }
    }
}
