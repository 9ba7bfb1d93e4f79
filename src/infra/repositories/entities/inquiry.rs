//! `inquiries` table

use sea_orm::entity::prelude::*;

use crate::domain::InquiryStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "inquiries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub property_id: i32,
    pub user_id: i32,
    #[sea_orm(column_type = "Text")]
    pub message: String,
    pub contact_phone: Option<String>,
    pub contact_email: Option<String>,
    pub status: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub response: Option<String>,
    pub responded_at: Option<DateTimeUtc>,
    pub date_sent: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::domain::Inquiry {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            property_id: model.property_id,
            user_id: model.user_id,
            message: model.message,
            contact_phone: model.contact_phone,
            contact_email: model.contact_email,
            status: InquiryStatus::from(model.status.as_str()),
            response: model.response,
            responded_at: model.responded_at,
            date_sent: model.date_sent,
        }
    }
}
