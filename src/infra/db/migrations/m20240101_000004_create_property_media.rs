//! Migration: property images and amenity links.

use sea_orm_migration::prelude::*;

use super::{cascade, pk, Amenities, Properties};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PropertyImages::Table)
                    .if_not_exists()
                    .col(pk(PropertyImages::Id))
                    .col(ColumnDef::new(PropertyImages::PropertyId).integer().not_null())
                    .col(ColumnDef::new(PropertyImages::Image).string_len(255).not_null())
                    .col(
                        ColumnDef::new(PropertyImages::IsFeatured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(PropertyImages::Caption).string_len(100).null())
                    .col(
                        ColumnDef::new(PropertyImages::UploadedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(&mut cascade(
                        PropertyImages::Table,
                        PropertyImages::PropertyId,
                        Properties::Table,
                        Properties::Id,
                        "fk_property_images_property",
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PropertyAmenities::Table)
                    .if_not_exists()
                    .col(pk(PropertyAmenities::Id))
                    .col(
                        ColumnDef::new(PropertyAmenities::PropertyId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PropertyAmenities::AmenityId).integer().not_null())
                    .col(ColumnDef::new(PropertyAmenities::Notes).string_len(100).null())
                    .col(
                        ColumnDef::new(PropertyAmenities::AddedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(&mut cascade(
                        PropertyAmenities::Table,
                        PropertyAmenities::PropertyId,
                        Properties::Table,
                        Properties::Id,
                        "fk_property_amenities_property",
                    ))
                    .foreign_key(&mut cascade(
                        PropertyAmenities::Table,
                        PropertyAmenities::AmenityId,
                        Amenities::Table,
                        Amenities::Id,
                        "fk_property_amenities_amenity",
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_property_amenities_pair")
                    .table(PropertyAmenities::Table)
                    .col(PropertyAmenities::PropertyId)
                    .col(PropertyAmenities::AmenityId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PropertyAmenities::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(PropertyImages::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum PropertyImages {
    Table,
    Id,
    PropertyId,
    Image,
    IsFeatured,
    Caption,
    UploadedAt,
}

#[derive(Iden)]
enum PropertyAmenities {
    Table,
    Id,
    PropertyId,
    AmenityId,
    Notes,
    AddedAt,
}
