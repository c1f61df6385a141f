use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Jobs {
    Table,
    EmployerId,
    Status,
}

#[derive(DeriveIden)]
enum Bids {
    Table,
    JobId,
    WorkerId,
}

#[derive(DeriveIden)]
enum Tools {
    Table,
    OwnerId,
}

#[derive(DeriveIden)]
enum Conversations {
    Table,
    Participant1Id,
    Participant2Id,
}

#[derive(DeriveIden)]
enum Transactions {
    Table,
    UserId,
}

#[derive(DeriveIden)]
enum Notifications {
    Table,
    UserId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Index on jobs.employer_id for the employer dashboard
        manager
            .create_index(
                Index::create()
                    .name("idx_jobs_employer_id")
                    .table(Jobs::Table)
                    .col(Jobs::EmployerId)
                    .to_owned(),
            )
            .await?;

        // Index on jobs.status for board filtering
        manager
            .create_index(
                Index::create()
                    .name("idx_jobs_status")
                    .table(Jobs::Table)
                    .col(Jobs::Status)
                    .to_owned(),
            )
            .await?;

        // Index on bids.job_id for listing bids on a job
        manager
            .create_index(
                Index::create()
                    .name("idx_bids_job_id")
                    .table(Bids::Table)
                    .col(Bids::JobId)
                    .to_owned(),
            )
            .await?;

        // Index on bids.worker_id for a worker's own bid list
        manager
            .create_index(
                Index::create()
                    .name("idx_bids_worker_id")
                    .table(Bids::Table)
                    .col(Bids::WorkerId)
                    .to_owned(),
            )
            .await?;

        // Index on tools.owner_id for owner listings
        manager
            .create_index(
                Index::create()
                    .name("idx_tools_owner_id")
                    .table(Tools::Table)
                    .col(Tools::OwnerId)
                    .to_owned(),
            )
            .await?;

        // Indexes on conversation participants for inbox queries
        manager
            .create_index(
                Index::create()
                    .name("idx_conversations_participant1")
                    .table(Conversations::Table)
                    .col(Conversations::Participant1Id)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_conversations_participant2")
                    .table(Conversations::Table)
                    .col(Conversations::Participant2Id)
                    .to_owned(),
            )
            .await?;

        // Index on transactions.user_id for wallet history
        manager
            .create_index(
                Index::create()
                    .name("idx_transactions_user_id")
                    .table(Transactions::Table)
                    .col(Transactions::UserId)
                    .to_owned(),
            )
            .await?;

        // Index on notifications.user_id for the notification list
        manager
            .create_index(
                Index::create()
                    .name("idx_notifications_user_id")
                    .table(Notifications::Table)
                    .col(Notifications::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_jobs_employer_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_jobs_status").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_bids_job_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_bids_worker_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_tools_owner_id").to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_conversations_participant1")
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_conversations_participant2")
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(Index::drop().name("idx_transactions_user_id").to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_notifications_user_id").to_owned())
            .await?;
        Ok(())
    }
}
