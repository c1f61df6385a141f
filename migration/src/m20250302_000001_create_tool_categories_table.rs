use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `tool_categories` table and its columns.
#[derive(DeriveIden)]
enum ToolCategories {
    Table,
    Id,
    Name,
    Slug,
    Icon,
    Description,
    ImageUrl,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ToolCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ToolCategories::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ToolCategories::Name).string().not_null())
                    .col(
                        ColumnDef::new(ToolCategories::Slug)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(ToolCategories::Icon).string())
                    .col(ColumnDef::new(ToolCategories::Description).text())
                    .col(ColumnDef::new(ToolCategories::ImageUrl).string())
                    .col(
                        ColumnDef::new(ToolCategories::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ToolCategories::Table).to_owned())
            .await
    }
}
