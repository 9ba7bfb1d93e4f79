//! Database migrations.
//!
//! Each migration is a separate module following SeaORM conventions.
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}

use sea_orm_migration::prelude::*;

mod m20240101_000001_create_accounts;
mod m20240101_000002_create_catalog;
mod m20240101_000003_create_properties;
mod m20240101_000004_create_property_media;
mod m20240101_000005_create_engagement;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_accounts::Migration),
            Box::new(m20240101_000002_create_catalog::Migration),
            Box::new(m20240101_000003_create_properties::Migration),
            Box::new(m20240101_000004_create_property_media::Migration),
            Box::new(m20240101_000005_create_engagement::Migration),
        ]
    }
}

/// Identifiers shared by several migrations.
#[derive(Iden)]
pub(crate) enum Users {
    Table,
    Id,
    Username,
    Email,
    PasswordHash,
    Phone,
    IsActive,
    DateJoined,
}

#[derive(Iden)]
pub(crate) enum Profiles {
    Table,
    Id,
    UserId,
    UserType,
    Bio,
    ProfilePicture,
    PhoneNumber,
    DateOfBirth,
    EmailVerified,
    PhoneVerified,
    IdentityVerified,
    Website,
    FacebookUrl,
    TwitterUrl,
    LinkedinUrl,
    Country,
    City,
    Address,
    CreatedBy,
    ModifiedBy,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
pub(crate) enum Locations {
    Table,
    Id,
    Country,
    Region,
    City,
    District,
    Street,
}

#[derive(Iden)]
pub(crate) enum Amenities {
    Table,
    Id,
    Name,
    Icon,
}

#[derive(Iden)]
pub(crate) enum Properties {
    Table,
    Id,
    OwnerId,
    ManagedBy,
    Title,
    Description,
    LocationId,
    PropertyType,
    Price,
    PricePeriod,
    IsAvailable,
    Featured,
    Views,
    CreatedBy,
    ModifiedBy,
    DateCreated,
    DateUpdated,
}

/// Auto-increment integer primary key.
pub(crate) fn pk<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

/// Foreign key to `profiles.id` that is cleared when the profile goes away.
pub(crate) fn profile_ref<T: IntoIden + 'static>(
    table: T,
    col: T,
    name: &str,
) -> ForeignKeyCreateStatement {
    ForeignKey::create()
        .name(name)
        .from(table, col)
        .to(Profiles::Table, Profiles::Id)
        .on_delete(ForeignKeyAction::SetNull)
        .to_owned()
}

/// Cascading foreign key.
pub(crate) fn cascade<T, R>(table: T, col: T, ref_table: R, ref_col: R, name: &str) -> ForeignKeyCreateStatement
where
    T: IntoIden + 'static,
    R: IntoIden + 'static,
{
    ForeignKey::create()
        .name(name)
        .from(table, col)
        .to(ref_table, ref_col)
        .on_delete(ForeignKeyAction::Cascade)
        .to_owned()
}
