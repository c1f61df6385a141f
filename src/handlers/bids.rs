use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use sea_orm::prelude::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::cache::{CacheData, keys};
use crate::db::bids as bid_db;
use crate::db::jobs as job_db;
use crate::db::notifications as notification_db;
use crate::models::bids::{BidStatus, CreateBid, CreateBidRequest, UpdateBidStatus};
use crate::models::jobs::BudgetType;
use crate::models::notifications::{CreateNotification, NotificationType};
use crate::ws::protocol::ServerMessage;
use crate::ws::server::ConnectionRegistry;

/// POST /api/jobs/{id}/bids — a worker submits a bid on a job.
///
/// Inserts the bid and bumps the job's bid counter atomically, persists a
/// notification for the employer, and pushes a best-effort `new_bid` message
/// to the employer's live connection if they have one.
pub async fn create_bid(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    registry: web::Data<Arc<ConnectionRegistry>>,
    path: web::Path<Uuid>,
    body: web::Json<CreateBidRequest>,
) -> impl Responder {
    let job_id = path.into_inner();
    let worker_id = user.0.id;
    let input = body.into_inner();

    if input.proposed_rate <= Decimal::ZERO {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "message": "Invalid data",
            "errors": ["proposed_rate must be positive"],
        }));
    }

    // 1. Verify the job exists and take its employer for the notification.
    let job = match job_db::get_job_by_id(db.get_ref(), job_id).await {
        Ok(Some(job)) => job,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Job {job_id} not found"),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    // 2. Employers cannot bid on their own jobs.
    if job.employer_id == worker_id {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "error": "You cannot bid on your own job",
        }));
    }

    // 3. One bid per worker per job.
    match bid_db::bid_exists_for_job_and_worker(db.get_ref(), job_id, worker_id).await {
        Ok(true) => {
            return HttpResponse::Conflict().json(serde_json::json!({
                "error": "You have already bid on this job",
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
        _ => {}
    }

    // 4. Create the bid (and increment the job's bid counter).
    let create = CreateBid {
        job_id,
        worker_id,
        proposed_rate: input.proposed_rate,
        rate_type: input.rate_type.unwrap_or(BudgetType::Fixed),
        timeline: input.timeline,
        cover_letter: input.cover_letter,
    };

    let bid = match bid_db::insert_bid(db.get_ref(), create).await {
        Ok(bid) => bid,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Failed to create bid: {e}"),
            }));
        }
    };

    // 5. The counter bump changed the cached job detail and listings.
    if let Err(e) = cache.delete(&keys::job(&job_id.to_string())).await {
        tracing::warn!("failed to invalidate job cache: {e}");
    }
    if let Err(e) = cache.delete_pattern("jobs:list:*").await {
        tracing::warn!("failed to invalidate job list cache: {e}");
    }

    // 6. Durable notification for the employer. A failure here is logged but
    // does not fail the bid — the bid is already committed.
    let note = CreateNotification {
        user_id: job.employer_id,
        r#type: NotificationType::Bid,
        title: "New bid received".to_string(),
        message: format!("New bid of ₹{} received on \"{}\"", bid.proposed_rate, job.title),
        link: Some(format!("/jobs/{job_id}")),
    };
    if let Err(e) = notification_db::insert_notification(db.get_ref(), note).await {
        tracing::warn!(job_id = %job_id, "failed to persist bid notification: {e}");
    }

    // 7. Best-effort real-time push to the employer.
    registry
        .push(
            job.employer_id,
            ServerMessage::NewBid {
                job_id,
                bid_id: bid.id,
                message: format!("New bid of ₹{} received on your job", bid.proposed_rate),
            },
        )
        .await;

    HttpResponse::Created().json(bid)
}

/// GET /api/bids — the authenticated worker's own bids.
pub async fn get_my_bids(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> impl Responder {
    match bid_db::get_bids_by_worker(db.get_ref(), user.0.id).await {
        Ok(bids) => HttpResponse::Ok().json(bids),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch bids: {e}"),
        })),
    }
}

/// PATCH /api/bids/{id} — change a bid's status.
///
/// The transition table allows pending → accepted | rejected | withdrawn;
/// accepted, rejected, and withdrawn are terminal. The job owner may accept
/// or reject; only the bidding worker may withdraw. The worker is notified
/// of the outcome both durably and over the relay.
pub async fn update_bid_status(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    registry: web::Data<Arc<ConnectionRegistry>>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateBidStatus>,
) -> impl Responder {
    let bid_id = path.into_inner();
    let next = body.into_inner().status;

    // 1. Fetch the bid.
    let bid = match bid_db::get_bid_by_id(db.get_ref(), bid_id).await {
        Ok(Some(bid)) => bid,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Bid {bid_id} not found"),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    // 2. Authorize: accept/reject is the job owner's call, withdraw the
    // worker's.
    let authorized = match next {
        BidStatus::Accepted | BidStatus::Rejected => {
            match job_db::get_job_by_id(db.get_ref(), bid.job_id).await {
                Ok(Some(job)) => job.employer_id == user.0.id,
                Ok(None) => {
                    return HttpResponse::NotFound().json(serde_json::json!({
                        "error": "The job for this bid no longer exists",
                    }));
                }
                Err(e) => {
                    return HttpResponse::InternalServerError().json(serde_json::json!({
                        "error": format!("Database error: {e}"),
                    }));
                }
            }
        }
        BidStatus::Withdrawn => bid.worker_id == user.0.id,
        BidStatus::Pending => false,
    };

    if !authorized {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "You are not allowed to make this status change",
        }));
    }

    // 3. Validate the transition.
    if let Err(e) = bid.status.transition_to(next) {
        return HttpResponse::Conflict().json(serde_json::json!({
            "error": e.to_string(),
        }));
    }

    // 4. Persist, conditional on the status we validated against. If another
    // request moved the bid in between, the write matches no row and we
    // report a conflict instead of clobbering a terminal state.
    let updated = match bid_db::update_bid_status(db.get_ref(), bid_id, bid.status, next).await {
        Ok(Some(updated)) => updated,
        Ok(None) => {
            return HttpResponse::Conflict().json(serde_json::json!({
                "error": "Bid status changed concurrently, please refetch and retry",
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Failed to update bid status: {e}"),
            }));
        }
    };

    // 5. Tell the worker what happened (skip self-notification on withdraw).
    if next != BidStatus::Withdrawn {
        let note = CreateNotification {
            user_id: updated.worker_id,
            r#type: NotificationType::Bid,
            title: "Bid status changed".to_string(),
            message: format!("Your bid has been {}", next.as_str()),
            link: Some(format!("/jobs/{}", updated.job_id)),
        };
        if let Err(e) = notification_db::insert_notification(db.get_ref(), note).await {
            tracing::warn!(bid_id = %bid_id, "failed to persist bid-status notification: {e}");
        }

        registry
            .push(
                updated.worker_id,
                ServerMessage::BidUpdate {
                    bid_id: updated.id,
                    status: next,
                    message: format!("Your bid has been {}", next.as_str()),
                },
            )
            .await;
    }

    HttpResponse::Ok().json(updated)
}
