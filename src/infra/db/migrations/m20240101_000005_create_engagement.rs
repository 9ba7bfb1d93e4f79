//! Migration: favorites, inquiries and reviews.

use sea_orm_migration::prelude::*;

use super::{cascade, pk, Profiles, Properties};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Favorites::Table)
                    .if_not_exists()
                    .col(pk(Favorites::Id))
                    .col(ColumnDef::new(Favorites::UserId).integer().not_null())
                    .col(ColumnDef::new(Favorites::PropertyId).integer().not_null())
                    .col(ColumnDef::new(Favorites::Notes).text().null())
                    .col(
                        ColumnDef::new(Favorites::DateAdded)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(&mut cascade(
                        Favorites::Table,
                        Favorites::UserId,
                        Profiles::Table,
                        Profiles::Id,
                        "fk_favorites_user",
                    ))
                    .foreign_key(&mut cascade(
                        Favorites::Table,
                        Favorites::PropertyId,
                        Properties::Table,
                        Properties::Id,
                        "fk_favorites_property",
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_favorites_pair")
                    .table(Favorites::Table)
                    .col(Favorites::UserId)
                    .col(Favorites::PropertyId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Inquiries::Table)
                    .if_not_exists()
                    .col(pk(Inquiries::Id))
                    .col(ColumnDef::new(Inquiries::PropertyId).integer().not_null())
                    .col(ColumnDef::new(Inquiries::UserId).integer().not_null())
                    .col(ColumnDef::new(Inquiries::Message).text().not_null())
                    .col(ColumnDef::new(Inquiries::ContactPhone).string_len(20).null())
                    .col(ColumnDef::new(Inquiries::ContactEmail).string_len(254).null())
                    .col(ColumnDef::new(Inquiries::Status).string_len(20).not_null())
                    .col(ColumnDef::new(Inquiries::Response).text().null())
                    .col(
                        ColumnDef::new(Inquiries::RespondedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(Inquiries::DateSent)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(&mut cascade(
                        Inquiries::Table,
                        Inquiries::PropertyId,
                        Properties::Table,
                        Properties::Id,
                        "fk_inquiries_property",
                    ))
                    .foreign_key(&mut cascade(
                        Inquiries::Table,
                        Inquiries::UserId,
                        Profiles::Table,
                        Profiles::Id,
                        "fk_inquiries_user",
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Reviews::Table)
                    .if_not_exists()
                    .col(pk(Reviews::Id))
                    .col(ColumnDef::new(Reviews::PropertyId).integer().not_null())
                    .col(ColumnDef::new(Reviews::ReviewerId).integer().not_null())
                    .col(ColumnDef::new(Reviews::Rating).integer().not_null())
                    .col(ColumnDef::new(Reviews::Title).string_len(100).not_null())
                    .col(ColumnDef::new(Reviews::Comment).text().not_null())
                    .col(
                        ColumnDef::new(Reviews::IsApproved)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Reviews::Response).text().null())
                    .col(
                        ColumnDef::new(Reviews::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Reviews::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(&mut cascade(
                        Reviews::Table,
                        Reviews::PropertyId,
                        Properties::Table,
                        Properties::Id,
                        "fk_reviews_property",
                    ))
                    .foreign_key(&mut cascade(
                        Reviews::Table,
                        Reviews::ReviewerId,
                        Profiles::Table,
                        Profiles::Id,
                        "fk_reviews_reviewer",
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_reviews_pair")
                    .table(Reviews::Table)
                    .col(Reviews::PropertyId)
                    .col(Reviews::ReviewerId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reviews::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Inquiries::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Favorites::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Favorites {
    Table,
    Id,
    UserId,
    PropertyId,
    Notes,
    DateAdded,
}

#[derive(Iden)]
enum Inquiries {
    Table,
    Id,
    PropertyId,
    UserId,
    Message,
    ContactPhone,
    ContactEmail,
    Status,
    Response,
    RespondedAt,
    DateSent,
}

#[derive(Iden)]
enum Reviews {
    Table,
    Id,
    PropertyId,
    ReviewerId,
    Rating,
    Title,
    Comment,
    IsApproved,
    Response,
    CreatedAt,
    UpdatedAt,
}
