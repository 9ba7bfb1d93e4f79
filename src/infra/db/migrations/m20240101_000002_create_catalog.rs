//! Migration: locations and the amenity catalogue.

use sea_orm_migration::prelude::*;

use super::{pk, Amenities, Locations};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Locations::Table)
                    .if_not_exists()
                    .col(pk(Locations::Id))
                    .col(ColumnDef::new(Locations::Country).string_len(100).not_null())
                    .col(ColumnDef::new(Locations::Region).string_len(100).not_null())
                    .col(ColumnDef::new(Locations::City).string_len(100).not_null())
                    .col(ColumnDef::new(Locations::District).string_len(100).null())
                    .col(ColumnDef::new(Locations::Street).string_len(100).null())
                    .to_owned(),
            )
            .await?;

        // NULL districts/streets never collide here; the service checks those.
        manager
            .create_index(
                Index::create()
                    .name("idx_locations_address")
                    .table(Locations::Table)
                    .col(Locations::Country)
                    .col(Locations::Region)
                    .col(Locations::City)
                    .col(Locations::District)
                    .col(Locations::Street)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Amenities::Table)
                    .if_not_exists()
                    .col(pk(Amenities::Id))
                    .col(
                        ColumnDef::new(Amenities::Name)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Amenities::Icon).string_len(50).null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Amenities::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Locations::Table).to_owned())
            .await
    }
}
