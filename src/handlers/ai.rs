use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use std::sync::Arc;

use crate::auth::middleware::AuthenticatedUser;
use crate::db::users as user_db;
use crate::models::users::WorkerQuery;
use crate::providers::MatchingProvider;

#[derive(Debug, Deserialize)]
pub struct MatchWorkersRequest {
    pub job_description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    pub location: Option<String>,
}

/// POST /api/ai/match-workers — rank the worker directory against a job
/// description. Candidates are pre-filtered by location before they reach the
/// matching provider.
pub async fn match_workers(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    matching: web::Data<Arc<dyn MatchingProvider>>,
    body: web::Json<MatchWorkersRequest>,
) -> impl Responder {
    let input = body.into_inner();

    if input.job_description.trim().is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "message": "Invalid data",
            "errors": ["job_description must not be empty"],
        }));
    }

    let query = WorkerQuery {
        location: input.location.clone(),
        skills: None,
    };
    let candidates = match user_db::get_workers(db.get_ref(), &query).await {
        Ok(candidates) => candidates,
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Failed to fetch workers: {e}"),
            }));
        }
    };

    if candidates.is_empty() {
        return HttpResponse::Ok().json(serde_json::json!({ "matches": [] }));
    }

    match matching
        .match_workers(
            &input.job_description,
            &input.requirements,
            input.location.as_deref(),
            &candidates,
        )
        .await
    {
        Ok(ranking) => HttpResponse::Ok().json(serde_json::json!({ "matches": ranking })),
        Err(e) => HttpResponse::BadGateway().json(serde_json::json!({
            "error": format!("Matching provider error: {e}"),
        })),
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

/// POST /api/ai/chat — marketplace assistant chat.
pub async fn chat_assistant(
    _user: AuthenticatedUser,
    matching: web::Data<Arc<dyn MatchingProvider>>,
    body: web::Json<ChatRequest>,
) -> impl Responder {
    let input = body.into_inner();

    if input.message.trim().is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "message": "Invalid data",
            "errors": ["message must not be empty"],
        }));
    }

    match matching.chat(&input.message).await {
        Ok(reply) => HttpResponse::Ok().json(serde_json::json!({ "reply": reply })),
        Err(e) => HttpResponse::BadGateway().json(serde_json::json!({
            "error": format!("Assistant error: {e}"),
        })),
    }
}
