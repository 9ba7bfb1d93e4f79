//! `profiles` table

use sea_orm::entity::prelude::*;

use crate::domain::UserType;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub user_id: i32,
    pub user_type: String,
    pub bio: Option<String>,
    pub profile_picture: Option<String>,
    pub phone_number: Option<String>,
    pub date_of_birth: Option<Date>,
    pub email_verified: bool,
    pub phone_verified: bool,
    pub identity_verified: bool,
    pub website: Option<String>,
    pub facebook_url: Option<String>,
    pub twitter_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub created_by: Option<i32>,
    pub modified_by: Option<i32>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::domain::Profile {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            user_type: UserType::from(model.user_type.as_str()),
            bio: model.bio,
            profile_picture: model.profile_picture,
            phone_number: model.phone_number,
            date_of_birth: model.date_of_birth,
            email_verified: model.email_verified,
            phone_verified: model.phone_verified,
            identity_verified: model.identity_verified,
            website: model.website,
            facebook_url: model.facebook_url,
            twitter_url: model.twitter_url,
            linkedin_url: model.linkedin_url,
            country: model.country,
            city: model.city,
            address: model.address,
            created_by: model.created_by,
            modified_by: model.modified_by,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
