use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Vehicles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Vehicles::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Vehicles::DriverId).uuid().not_null())
                    .col(
                        ColumnDef::new(Vehicles::LicensePlate)
                            .string_len(20)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Vehicles::Model).string_len(100).null())
                    .col(ColumnDef::new(Vehicles::Color).string_len(50).null())
                    .col(ColumnDef::new(Vehicles::Year).small_integer().null())
                    .col(
                        ColumnDef::new(Vehicles::IsActive)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Vehicles::RegisteredAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Vehicles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Vehicles::Table, Vehicles::DriverId)
                            .to(DriverProfiles::Table, DriverProfiles::DriverId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Vehicles::Table)
                    .col(Vehicles::DriverId)
                    .name("idx_vehicles_driver_id")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Vehicles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Vehicles {
    Table,
    Id,
    DriverId,
    LicensePlate,
    Model,
    Color,
    Year,
    IsActive,
    RegisteredAt,
    UpdatedAt,
}

#[derive(Iden)]
enum DriverProfiles {
    Table,
    DriverId,
}
