use sea_orm::prelude::Expr;
use sea_orm::*;
use uuid::Uuid;

use crate::models::bids::{self, BidStatus, CreateBid};
use crate::models::jobs;

/// Insert a new bid (defaults to Pending status) and bump the parent job's
/// bid counter.
///
/// The counter update is a store-level `bids_count + 1` expression so that
/// concurrent submissions on the same job never lose increments, and both
/// writes commit as one unit.
pub async fn insert_bid(db: &DatabaseConnection, input: CreateBid) -> Result<bids::Model, DbErr> {
    let txn = db.begin().await?;

    let new_bid = bids::ActiveModel {
        id: Set(Uuid::new_v4()),
        job_id: Set(input.job_id),
        worker_id: Set(input.worker_id),
        proposed_rate: Set(input.proposed_rate),
        rate_type: Set(input.rate_type),
        timeline: Set(input.timeline),
        cover_letter: Set(input.cover_letter),
        status: Set(BidStatus::Pending),
        created_at: Set(chrono::Utc::now()),
        updated_at: Set(None),
    };

    let bid = new_bid.insert(&txn).await?;

    jobs::Entity::update_many()
        .col_expr(
            jobs::Column::BidsCount,
            Expr::col(jobs::Column::BidsCount).add(1),
        )
        .filter(jobs::Column::Id.eq(input.job_id))
        .exec(&txn)
        .await?;

    txn.commit().await?;

    Ok(bid)
}

/// Fetch a single bid by ID.
pub async fn get_bid_by_id(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<bids::Model>, DbErr> {
    bids::Entity::find_by_id(id).one(db).await
}

/// All bids on a job, newest first.
pub async fn get_bids_by_job(
    db: &DatabaseConnection,
    job_id: Uuid,
) -> Result<Vec<bids::Model>, DbErr> {
    bids::Entity::find()
        .filter(bids::Column::JobId.eq(job_id))
        .order_by_desc(bids::Column::CreatedAt)
        .all(db)
        .await
}

/// All bids placed by a worker, newest first.
pub async fn get_bids_by_worker(
    db: &DatabaseConnection,
    worker_id: Uuid,
) -> Result<Vec<bids::Model>, DbErr> {
    bids::Entity::find()
        .filter(bids::Column::WorkerId.eq(worker_id))
        .order_by_desc(bids::Column::CreatedAt)
        .all(db)
        .await
}

/// Persist a status change validated via `BidStatus::transition_to`.
///
/// The write is conditional on `from`, the status the caller validated
/// against. Returns `Ok(None)` when no row matched — the bid is gone or its
/// status moved under us — so a concurrent accept/withdraw race loses here
/// instead of silently overwriting a terminal state.
pub async fn update_bid_status(
    db: &DatabaseConnection,
    id: Uuid,
    from: BidStatus,
    to: BidStatus,
) -> Result<Option<bids::Model>, DbErr> {
    let result = bids::Entity::update_many()
        .set(bids::ActiveModel {
            status: Set(to),
            updated_at: Set(Some(chrono::Utc::now())),
            ..Default::default()
        })
        .filter(bids::Column::Id.eq(id))
        .filter(bids::Column::Status.eq(from))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Ok(None);
    }

    bids::Entity::find_by_id(id).one(db).await
}

/// True if this worker already has a bid on the job.
pub async fn bid_exists_for_job_and_worker(
    db: &DatabaseConnection,
    job_id: Uuid,
    worker_id: Uuid,
) -> Result<bool, DbErr> {
    let count = bids::Entity::find()
        .filter(bids::Column::JobId.eq(job_id))
        .filter(bids::Column::WorkerId.eq(worker_id))
        .count(db)
        .await?;
    Ok(count > 0)
}
