use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DriverProfiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DriverProfiles::DriverId)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DriverProfiles::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(DriverProfiles::LicenseNumber)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(DriverProfiles::LicenseExpiry).date().null())
                    .col(
                        ColumnDef::new(DriverProfiles::ApprovalStatus)
                            .string_len(20)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(DriverProfiles::RatingAvg)
                            .decimal_len(3, 2)
                            .not_null()
                            .default(0.0),
                    )
                    .col(
                        ColumnDef::new(DriverProfiles::TotalTrips)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(DriverProfiles::ProfilePhotoUrl)
                            .string_len(512)
                            .null(),
                    )
                    .col(
                        ColumnDef::new(DriverProfiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(DriverProfiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(DriverProfiles::Table, DriverProfiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DriverProfiles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum DriverProfiles {
    Table,
    DriverId,
    UserId,
    LicenseNumber,
    LicenseExpiry,
    ApprovalStatus,
    RatingAvg,
    TotalTrips,
    ProfilePhotoUrl,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
