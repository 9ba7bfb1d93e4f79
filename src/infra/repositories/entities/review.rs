//! `reviews` table

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub property_id: i32,
    pub reviewer_id: i32,
    pub rating: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub comment: String,
    pub is_approved: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub response: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::domain::Review {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            property_id: model.property_id,
            reviewer_id: model.reviewer_id,
            rating: model.rating,
            title: model.title,
            comment: model.comment,
            is_approved: model.is_approved,
            response: model.response,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
