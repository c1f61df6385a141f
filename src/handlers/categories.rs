use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;

use crate::db::categories as category_db;

/// GET /api/job-categories — all job categories, alphabetical. Public.
pub async fn get_job_categories(db: web::Data<DatabaseConnection>) -> impl Responder {
    match category_db::get_job_categories(db.get_ref()).await {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch job categories: {e}"),
        })),
    }
}

/// GET /api/tool-categories — all tool categories, alphabetical. Public.
pub async fn get_tool_categories(db: web::Data<DatabaseConnection>) -> impl Responder {
    match category_db::get_tool_categories(db.get_ref()).await {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch tool categories: {e}"),
        })),
    }
}
