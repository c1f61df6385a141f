use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `tools` table and its columns.
#[derive(DeriveIden)]
enum Tools {
    Table,
    Id,
    OwnerId,
    CategoryId,
    Name,
    Description,
    Specifications,
    DailyRate,
    HourlyRate,
    WeeklyRate,
    Location,
    ImageUrl,
    Images,
    Availability,
    Rating,
    TotalRentals,
    CreatedAt,
    UpdatedAt,
}

/// Re-declare parent table identifiers for foreign-key references.
#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum ToolCategories {
    Table,
    Id,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tools::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Tools::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Tools::OwnerId).uuid().not_null())
                    .col(ColumnDef::new(Tools::CategoryId).uuid())
                    .col(ColumnDef::new(Tools::Name).string().not_null())
                    .col(ColumnDef::new(Tools::Description).text())
                    .col(ColumnDef::new(Tools::Specifications).json_binary())
                    .col(
                        ColumnDef::new(Tools::DailyRate)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Tools::HourlyRate).decimal_len(10, 2))
                    .col(ColumnDef::new(Tools::WeeklyRate).decimal_len(10, 2))
                    .col(ColumnDef::new(Tools::Location).string())
                    .col(ColumnDef::new(Tools::ImageUrl).string())
                    .col(ColumnDef::new(Tools::Images).array(ColumnType::Text))
                    .col(ColumnDef::new(Tools::Availability).string().not_null())
                    .col(
                        ColumnDef::new(Tools::Rating)
                            .decimal_len(3, 2)
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Tools::TotalRentals)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Tools::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Tools::UpdatedAt).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tools_owner_id")
                            .from(Tools::Table, Tools::OwnerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tools_category_id")
                            .from(Tools::Table, Tools::CategoryId)
                            .to(ToolCategories::Table, ToolCategories::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tools::Table).to_owned())
            .await
    }
}
