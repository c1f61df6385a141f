///! Tests for guarded update statements, run against a mock connection: the
///! bid-status persist only matches a row still in the status the caller
///! validated against, and marking a notification read only matches rows the
///! caller owns.
///!
///! Run with: `cargo test --test guarded_updates_test`
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use uuid::Uuid;

use labourmandi_backend::db::{bids as bid_db, notifications as notification_db};
use labourmandi_backend::models::bids::{self, BidStatus};
use labourmandi_backend::models::jobs::BudgetType;
use rust_decimal::Decimal;

fn sample_bid(status: BidStatus) -> bids::Model {
    bids::Model {
        id: Uuid::new_v4(),
        job_id: Uuid::new_v4(),
        worker_id: Uuid::new_v4(),
        proposed_rate: Decimal::new(50000, 2),
        rate_type: BudgetType::Fixed,
        timeline: None,
        cover_letter: None,
        status,
        created_at: chrono::Utc::now(),
        updated_at: None,
    }
}

#[tokio::test]
async fn test_bid_status_persist_reports_a_lost_race_as_none() {
    // The row moved (or vanished) between the validating read and the write,
    // so the conditional update matches nothing.
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            rows_affected: 0,
            ..Default::default()
        }])
        .into_connection();

    let out = bid_db::update_bid_status(
        &db,
        Uuid::new_v4(),
        BidStatus::Pending,
        BidStatus::Withdrawn,
    )
    .await
    .unwrap();

    assert!(out.is_none(), "a write that matched no row must return None");
}

#[tokio::test]
async fn test_bid_status_persist_returns_the_updated_row() {
    let updated = sample_bid(BidStatus::Accepted);
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            rows_affected: 1,
            ..Default::default()
        }])
        .append_query_results([vec![updated.clone()]])
        .into_connection();

    let out = bid_db::update_bid_status(&db, updated.id, BidStatus::Pending, BidStatus::Accepted)
        .await
        .unwrap()
        .expect("the row matched, so the refetch must find it");

    assert_eq!(out.id, updated.id);
    assert_eq!(out.status, BidStatus::Accepted);
}

#[tokio::test]
async fn test_bid_status_update_is_conditional_on_the_prior_status() {
    let updated = sample_bid(BidStatus::Accepted);
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            rows_affected: 1,
            ..Default::default()
        }])
        .append_query_results([vec![updated.clone()]])
        .into_connection();

    bid_db::update_bid_status(&db, updated.id, BidStatus::Pending, BidStatus::Accepted)
        .await
        .unwrap();

    let log = db.into_transaction_log();
    let update = format!("{:?}", log[0]);
    assert!(
        update.contains("pending"),
        "the update must filter on the expected current status: {update}"
    );
}

#[tokio::test]
async fn test_foreign_notification_mark_read_touches_no_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            rows_affected: 0,
            ..Default::default()
        }])
        .into_connection();

    let touched = notification_db::mark_notification_read(&db, Uuid::new_v4(), Uuid::new_v4())
        .await
        .unwrap();

    assert_eq!(touched, 0);
}

#[tokio::test]
async fn test_mark_read_is_scoped_to_the_owner() {
    let owner = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            rows_affected: 1,
            ..Default::default()
        }])
        .into_connection();

    let touched = notification_db::mark_notification_read(&db, Uuid::new_v4(), owner)
        .await
        .unwrap();
    assert_eq!(touched, 1);

    let log = db.into_transaction_log();
    let update = format!("{:?}", log[0]);
    assert!(
        update.contains(&owner.to_string()),
        "the update must filter on the owner id: {update}"
    );
}
