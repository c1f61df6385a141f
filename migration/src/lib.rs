pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_users_table;
mod m20250301_000002_create_job_categories_table;
mod m20250301_000003_create_jobs_table;
mod m20250301_000004_create_bids_table;
mod m20250302_000001_create_tool_categories_table;
mod m20250302_000002_create_tools_table;
mod m20250303_000001_create_conversations_table;
mod m20250303_000002_create_messages_table;
mod m20250304_000001_create_transactions_table;
mod m20250304_000002_create_notifications_table;
mod m20250306_000001_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_users_table::Migration),
            Box::new(m20250301_000002_create_job_categories_table::Migration),
            Box::new(m20250301_000003_create_jobs_table::Migration),
            Box::new(m20250301_000004_create_bids_table::Migration),
            Box::new(m20250302_000001_create_tool_categories_table::Migration),
            Box::new(m20250302_000002_create_tools_table::Migration),
            Box::new(m20250303_000001_create_conversations_table::Migration),
            Box::new(m20250303_000002_create_messages_table::Migration),
            Box::new(m20250304_000001_create_transactions_table::Migration),
            Box::new(m20250304_000002_create_notifications_table::Migration),
            Box::new(m20250306_000001_add_indexes::Migration),
        ]
    }
}
