use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Identifiers for the `job_categories` table and its columns.
#[derive(DeriveIden)]
enum JobCategories {
    Table,
    Id,
    Name,
    Icon,
    Description,
    CreatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JobCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JobCategories::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(JobCategories::Name).string().not_null())
                    .col(ColumnDef::new(JobCategories::Icon).string())
                    .col(ColumnDef::new(JobCategories::Description).text())
                    .col(
                        ColumnDef::new(JobCategories::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(JobCategories::Table).to_owned())
            .await
    }
}
