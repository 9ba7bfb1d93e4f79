//! Migration: property listings and their per-type detail tables.

use sea_orm_migration::prelude::*;

use super::{cascade, pk, profile_ref, Locations, Properties};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Properties::Table)
                    .if_not_exists()
                    .col(pk(Properties::Id))
                    .col(ColumnDef::new(Properties::OwnerId).integer().null())
                    .col(ColumnDef::new(Properties::ManagedBy).integer().null())
                    .col(ColumnDef::new(Properties::Title).string_len(200).not_null())
                    .col(ColumnDef::new(Properties::Description).text().not_null())
                    .col(ColumnDef::new(Properties::LocationId).integer().not_null())
                    .col(
                        ColumnDef::new(Properties::PropertyType)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Properties::Price)
                            .decimal_len(12, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Properties::PricePeriod)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Properties::IsAvailable)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Properties::Featured)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Properties::Views)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Properties::CreatedBy).integer().null())
                    .col(ColumnDef::new(Properties::ModifiedBy).integer().null())
                    .col(
                        ColumnDef::new(Properties::DateCreated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Properties::DateUpdated)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(&mut cascade(
                        Properties::Table,
                        Properties::LocationId,
                        Locations::Table,
                        Locations::Id,
                        "fk_properties_location",
                    ))
                    .foreign_key(&mut profile_ref(
                        Properties::Table,
                        Properties::OwnerId,
                        "fk_properties_owner",
                    ))
                    .foreign_key(&mut profile_ref(
                        Properties::Table,
                        Properties::ManagedBy,
                        "fk_properties_managed_by",
                    ))
                    .foreign_key(&mut profile_ref(
                        Properties::Table,
                        Properties::CreatedBy,
                        "fk_properties_created_by",
                    ))
                    .foreign_key(&mut profile_ref(
                        Properties::Table,
                        Properties::ModifiedBy,
                        "fk_properties_modified_by",
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_properties_date_created")
                    .table(Properties::Table)
                    .col(Properties::DateCreated)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Lands::Table)
                    .if_not_exists()
                    .col(detail_key(Lands::PropertyId))
                    .col(ColumnDef::new(Lands::LandType).string_len(20).not_null())
                    .col(ColumnDef::new(Lands::Area).decimal_len(10, 2).not_null())
                    .col(ColumnDef::new(Lands::Zoning).string_len(100).null())
                    .col(
                        ColumnDef::new(Lands::HasUtilities)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Lands::TopographicalFeatures).text().null())
                    .foreign_key(&mut cascade(
                        Lands::Table,
                        Lands::PropertyId,
                        Properties::Table,
                        Properties::Id,
                        "fk_lands_property",
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Rentals::Table)
                    .if_not_exists()
                    .col(detail_key(Rentals::PropertyId))
                    .col(ColumnDef::new(Rentals::RentalType).string_len(20).not_null())
                    .col(ColumnDef::new(Rentals::Bedrooms).integer().not_null())
                    .col(ColumnDef::new(Rentals::Bathrooms).integer().not_null())
                    .col(
                        ColumnDef::new(Rentals::Floors)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Rentals::Furnished)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Rentals::ParkingSpaces)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Rentals::YearBuilt).integer().null())
                    .foreign_key(&mut cascade(
                        Rentals::Table,
                        Rentals::PropertyId,
                        Properties::Table,
                        Properties::Id,
                        "fk_rentals_property",
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Apartments::Table)
                    .if_not_exists()
                    .col(detail_key(Apartments::PropertyId))
                    .col(
                        ColumnDef::new(Apartments::ApartmentType)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Apartments::Bedrooms).integer().not_null())
                    .col(ColumnDef::new(Apartments::Bathrooms).integer().not_null())
                    .col(ColumnDef::new(Apartments::FloorNumber).integer().not_null())
                    .col(ColumnDef::new(Apartments::TotalFloors).integer().not_null())
                    .col(
                        ColumnDef::new(Apartments::Furnished)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Apartments::ParkingAvailable)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Apartments::YearBuilt).integer().null())
                    .col(ColumnDef::new(Apartments::BuildingName).string_len(100).null())
                    .foreign_key(&mut cascade(
                        Apartments::Table,
                        Apartments::PropertyId,
                        Properties::Table,
                        Properties::Id,
                        "fk_apartments_property",
                    ))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(CampusHostels::Table)
                    .if_not_exists()
                    .col(detail_key(CampusHostels::PropertyId))
                    .col(
                        ColumnDef::new(CampusHostels::HostelType)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(ColumnDef::new(CampusHostels::RoomType).string_len(20).not_null())
                    .col(ColumnDef::new(CampusHostels::Capacity).integer().not_null())
                    .col(
                        ColumnDef::new(CampusHostels::MealsIncluded)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(CampusHostels::DistanceToCampus)
                            .decimal_len(5, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(CampusHostels::CurfewTime).time().null())
                    .col(
                        ColumnDef::new(CampusHostels::HasLaundry)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(CampusHostels::HasStudyRoom)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(&mut cascade(
                        CampusHostels::Table,
                        CampusHostels::PropertyId,
                        Properties::Table,
                        Properties::Id,
                        "fk_campus_hostels_property",
                    ))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CampusHostels::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Apartments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rentals::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Lands::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Properties::Table).to_owned())
            .await
    }
}

/// Detail rows share the property's id as their own primary key.
fn detail_key<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .integer()
        .not_null()
        .primary_key()
        .to_owned()
}

#[derive(Iden)]
enum Lands {
    Table,
    PropertyId,
    LandType,
    Area,
    Zoning,
    HasUtilities,
    TopographicalFeatures,
}

#[derive(Iden)]
enum Rentals {
    Table,
    PropertyId,
    RentalType,
    Bedrooms,
    Bathrooms,
    Floors,
    Furnished,
    ParkingSpaces,
    YearBuilt,
}

#[derive(Iden)]
enum Apartments {
    Table,
    PropertyId,
    ApartmentType,
    Bedrooms,
    Bathrooms,
    FloorNumber,
    TotalFloors,
    Furnished,
    ParkingAvailable,
    YearBuilt,
    BuildingName,
}

#[derive(Iden)]
enum CampusHostels {
    Table,
    PropertyId,
    HostelType,
    RoomType,
    Capacity,
    MealsIncluded,
    DistanceToCampus,
    CurfewTime,
    HasLaundry,
    HasStudyRoom,
}
