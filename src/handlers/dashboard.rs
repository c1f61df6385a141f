use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use sea_orm::prelude::Decimal;
use std::collections::HashSet;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::bids as bid_db;
use crate::db::jobs as job_db;
use crate::db::transactions as transaction_db;
use crate::models::bids::BidStatus;
use crate::models::jobs::JobStatus;
use crate::models::users::Roles;

/// GET /api/dashboard/stats — role-specific summary for the home screen.
///
/// Workers see their bid pipeline and earnings; employers see their job
/// pipeline and the bid volume across their postings. Both see the wallet
/// balance.
pub async fn get_stats(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> impl Responder {
    match user.0.role {
        Roles::Worker => worker_stats(&user, db.get_ref()).await,
        Roles::Employer | Roles::Admin => employer_stats(&user, db.get_ref()).await,
    }
}

async fn worker_stats(user: &AuthenticatedUser, db: &DatabaseConnection) -> HttpResponse {
    let bids = match bid_db::get_bids_by_worker(db, user.0.id).await {
        Ok(bids) => bids,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Failed to fetch bids: {e}"),
            }));
        }
    };

    let accepted: Vec<_> = bids
        .iter()
        .filter(|b| b.status == BidStatus::Accepted)
        .collect();

    // Accepted bids whose job has since been completed count as finished work.
    let mut completed_jobs = 0u64;
    let mut seen_jobs = HashSet::new();
    for bid in &accepted {
        if !seen_jobs.insert(bid.job_id) {
            continue;
        }
        match job_db::get_job_by_id(db, bid.job_id).await {
            Ok(Some(job)) if job.status == JobStatus::Completed => completed_jobs += 1,
            Ok(_) => {}
            Err(e) => {
                return HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": format!("Failed to fetch job: {e}"),
                }));
            }
        }
    }

    let earnings = match transaction_db::get_earnings_by_user(db, user.0.id).await {
        Ok(rows) => rows.iter().map(|t| t.amount).sum::<Decimal>(),
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Failed to fetch earnings: {e}"),
            }));
        }
    };

    HttpResponse::Ok().json(serde_json::json!({
        "role": user.0.role.clone(),
        "total_bids": bids.len(),
        "pending_bids": bids.iter().filter(|b| b.status == BidStatus::Pending).count(),
        "active_jobs": accepted.len(),
        "completed_jobs": completed_jobs,
        "total_earnings": earnings,
        "wallet_balance": user.0.wallet_balance,
    }))
}

async fn employer_stats(user: &AuthenticatedUser, db: &DatabaseConnection) -> HttpResponse {
    let jobs = match job_db::get_jobs_by_employer(db, user.0.id).await {
        Ok(jobs) => jobs,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Failed to fetch jobs: {e}"),
            }));
        }
    };

    let mut total_bids = 0usize;
    let mut pending_bids = 0usize;
    for job in &jobs {
        match bid_db::get_bids_by_job(db, job.id).await {
            Ok(bids) => {
                total_bids += bids.len();
                pending_bids += bids
                    .iter()
                    .filter(|b| b.status == BidStatus::Pending)
                    .count();
            }
            Err(e) => {
                return HttpResponse::InternalServerError().json(serde_json::json!({
                    "error": format!("Failed to fetch bids: {e}"),
                }));
            }
        }
    }

    HttpResponse::Ok().json(serde_json::json!({
        "role": user.0.role.clone(),
        "total_jobs": jobs.len(),
        "open_jobs": jobs.iter().filter(|j| j.status == JobStatus::Open).count(),
        "completed_jobs": jobs.iter().filter(|j| j.status == JobStatus::Completed).count(),
        "total_bids": total_bids,
        "pending_bids": pending_bids,
        "wallet_balance": user.0.wallet_balance,
    }))
}
