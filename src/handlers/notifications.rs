use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::notifications as notification_db;

/// GET /api/notifications — the user's notifications, newest first.
pub async fn get_notifications(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
) -> impl Responder {
    match notification_db::get_notifications_by_user(db.get_ref(), user.0.id).await {
        Ok(notifications) => HttpResponse::Ok().json(notifications),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch notifications: {e}"),
        })),
    }
}

/// PATCH /api/notifications/{id}/read — mark one of the user's own
/// notifications as read. Someone else's id looks the same as an unknown one.
pub async fn mark_read(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match notification_db::mark_notification_read(db.get_ref(), id, user.0.id).await {
        Ok(0) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Notification {id} not found"),
        })),
        Ok(_) => HttpResponse::Ok().json(serde_json::json!({ "success": true })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to mark notification read: {e}"),
        })),
    }
}
