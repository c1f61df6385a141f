use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use sea_orm::prelude::Decimal;
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::cache::{CacheConfig, CacheData, keys};
use crate::db::bids as bid_db;
use crate::db::jobs as job_db;
use crate::models::jobs::{self, CreateJob, JobListQuery, UpdateJob};

fn list_cache_key(query: &JobListQuery) -> String {
    keys::job_list(&format!(
        "{}:{}:{}",
        query
            .category
            .map(|c| c.to_string())
            .unwrap_or_else(|| "all".into()),
        query.location.as_deref().unwrap_or("all"),
        query
            .status
            .as_ref()
            .map(|s| format!("{s:?}").to_lowercase())
            .unwrap_or_else(|| "all".into()),
    ))
}

/// Validate a job create request; returns a list of field errors.
fn validate_create(input: &CreateJob) -> Vec<String> {
    let mut errors = Vec::new();
    if input.title.trim().is_empty() {
        errors.push("title must not be empty".to_string());
    }
    if input.description.trim().is_empty() {
        errors.push("description must not be empty".to_string());
    }
    if let Some(min) = input.budget_min {
        if min < Decimal::ZERO {
            errors.push("budget_min must not be negative".to_string());
        }
    }
    if let (Some(min), Some(max)) = (input.budget_min, input.budget_max) {
        if min > max {
            errors.push("budget_min must not exceed budget_max".to_string());
        }
    }
    errors
}

/// GET /api/jobs?category=&location=&status= — list jobs, newest first.
pub async fn get_jobs(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    cache_config: web::Data<CacheConfig>,
    query: web::Query<JobListQuery>,
) -> impl Responder {
    let key = list_cache_key(&query);

    if let Ok(Some(cached)) = cache.get::<Vec<jobs::Model>>(&key).await {
        return HttpResponse::Ok().json(cached);
    }

    match job_db::get_jobs(db.get_ref(), &query).await {
        Ok(jobs) => {
            let ttl = cache_config.job_list_ttl.as_secs();
            if let Err(e) = cache.set(&key, &jobs, Some(ttl)).await {
                tracing::warn!("failed to cache job list: {e}");
            }
            HttpResponse::Ok().json(jobs)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch jobs: {e}"),
        })),
    }
}

/// GET /api/jobs/{id} — get a single job.
pub async fn get_job(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    cache_config: web::Data<CacheConfig>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    let key = keys::job(&id.to_string());

    if let Ok(Some(cached)) = cache.get::<jobs::Model>(&key).await {
        return HttpResponse::Ok().json(cached);
    }

    match job_db::get_job_by_id(db.get_ref(), id).await {
        Ok(Some(job)) => {
            let ttl = cache_config.job_ttl.as_secs();
            if let Err(e) = cache.set(&key, &job, Some(ttl)).await {
                tracing::warn!("failed to cache job {id}: {e}");
            }
            HttpResponse::Ok().json(job)
        }
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Job {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// POST /api/jobs — post a new job. The employer is the authenticated user.
pub async fn create_job(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    body: web::Json<CreateJob>,
) -> impl Responder {
    let input = body.into_inner();

    let errors = validate_create(&input);
    if !errors.is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "message": "Invalid data",
            "errors": errors,
        }));
    }

    match job_db::insert_job(db.get_ref(), input, user.0.id).await {
        Ok(job) => {
            if let Err(e) = cache.delete_pattern("jobs:list:*").await {
                tracing::warn!("failed to invalidate job list cache: {e}");
            }
            HttpResponse::Created().json(job)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to create job: {e}"),
        })),
    }
}

/// PATCH /api/jobs/{id} — update a job. Only the posting employer may do this.
pub async fn update_job(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateJob>,
) -> impl Responder {
    let id = path.into_inner();

    let job = match job_db::get_job_by_id(db.get_ref(), id).await {
        Ok(Some(job)) => job,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Job {id} not found"),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    if job.employer_id != user.0.id {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "Only the posting employer can update this job",
        }));
    }

    match job_db::update_job(db.get_ref(), id, body.into_inner()).await {
        Ok(updated) => {
            if let Err(e) = cache.delete(&keys::job(&id.to_string())).await {
                tracing::warn!("failed to invalidate job cache: {e}");
            }
            if let Err(e) = cache.delete_pattern("jobs:list:*").await {
                tracing::warn!("failed to invalidate job list cache: {e}");
            }
            HttpResponse::Ok().json(updated)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to update job: {e}"),
        })),
    }
}

/// GET /api/jobs/{id}/bids — all bids on a job.
pub async fn get_job_bids(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let job_id = path.into_inner();
    match bid_db::get_bids_by_job(db.get_ref(), job_id).await {
        Ok(bids) => HttpResponse::Ok().json(bids),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch bids: {e}"),
        })),
    }
}
