use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::cache::{CacheConfig, CacheData, keys};
use crate::db::users as user_db;
use crate::models::users::{self, UpdateProfile, WorkerQuery};

/// GET /api/users/{id} — public profile lookup (requires authentication).
pub async fn get_user(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match user_db::get_user_by_id(db.get_ref(), id).await {
        Ok(Some(user)) => HttpResponse::Ok().json(user),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("User {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// PATCH /api/users/profile — update the authenticated user's own profile.
pub async fn update_profile(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    body: web::Json<UpdateProfile>,
) -> impl Responder {
    match user_db::update_profile(db.get_ref(), user.0.id, body.into_inner()).await {
        Ok(updated) => {
            // Role, skills, or location changes affect the worker directory.
            if let Err(e) = cache.delete_pattern("workers:*").await {
                tracing::warn!("failed to invalidate worker directory cache: {e}");
            }
            HttpResponse::Ok().json(updated)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to update profile: {e}"),
        })),
    }
}

/// GET /api/workers?location=&skills= — worker directory, best-rated first.
pub async fn get_workers(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    cache_config: web::Data<CacheConfig>,
    query: web::Query<WorkerQuery>,
) -> impl Responder {
    let key = keys::workers(&format!(
        "{}:{}",
        query.location.as_deref().unwrap_or("all"),
        query.skills.as_deref().unwrap_or("all"),
    ));

    if let Ok(Some(cached)) = cache.get::<Vec<users::Model>>(&key).await {
        return HttpResponse::Ok().json(cached);
    }

    match user_db::get_workers(db.get_ref(), &query).await {
        Ok(workers) => {
            let ttl = cache_config.worker_ttl.as_secs();
            if let Err(e) = cache.set(&key, &workers, Some(ttl)).await {
                tracing::warn!("failed to cache worker directory: {e}");
            }
            HttpResponse::Ok().json(workers)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch workers: {e}"),
        })),
    }
}
