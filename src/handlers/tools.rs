use actix_web::{HttpResponse, Responder, web};
use sea_orm::DatabaseConnection;
use sea_orm::prelude::Decimal;
use uuid::Uuid;

use crate::auth::middleware::AuthenticatedUser;
use crate::cache::{CacheConfig, CacheData, keys};
use crate::db::tools as tool_db;
use crate::models::tools::{self, CreateTool, ToolListQuery, UpdateTool};

fn list_cache_key(query: &ToolListQuery) -> String {
    keys::tool_list(&format!(
        "{}:{}",
        query
            .category
            .map(|c| c.to_string())
            .unwrap_or_else(|| "all".into()),
        query.location.as_deref().unwrap_or("all"),
    ))
}

fn validate_create(input: &CreateTool) -> Vec<String> {
    let mut errors = Vec::new();
    if input.name.trim().is_empty() {
        errors.push("name must not be empty".to_string());
    }
    if input.daily_rate <= Decimal::ZERO {
        errors.push("daily_rate must be positive".to_string());
    }
    errors
}

/// GET /api/tools?category=&location= — equipment listings, best-rated first.
pub async fn get_tools(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    cache_config: web::Data<CacheConfig>,
    query: web::Query<ToolListQuery>,
) -> impl Responder {
    let key = list_cache_key(&query);

    if let Ok(Some(cached)) = cache.get::<Vec<tools::Model>>(&key).await {
        return HttpResponse::Ok().json(cached);
    }

    match tool_db::get_tools(db.get_ref(), &query).await {
        Ok(tools) => {
            let ttl = cache_config.tool_list_ttl.as_secs();
            if let Err(e) = cache.set(&key, &tools, Some(ttl)).await {
                tracing::warn!("failed to cache tool list: {e}");
            }
            HttpResponse::Ok().json(tools)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to fetch tools: {e}"),
        })),
    }
}

/// GET /api/tools/{id} — a single equipment listing.
pub async fn get_tool(
    _user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();
    match tool_db::get_tool_by_id(db.get_ref(), id).await {
        Ok(Some(tool)) => HttpResponse::Ok().json(tool),
        Ok(None) => HttpResponse::NotFound().json(serde_json::json!({
            "error": format!("Tool {id} not found"),
        })),
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Database error: {e}"),
        })),
    }
}

/// POST /api/tools — list a piece of equipment. The owner is the
/// authenticated user.
pub async fn create_tool(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    body: web::Json<CreateTool>,
) -> impl Responder {
    let input = body.into_inner();

    let errors = validate_create(&input);
    if !errors.is_empty() {
        return HttpResponse::BadRequest().json(serde_json::json!({
            "message": "Invalid data",
            "errors": errors,
        }));
    }

    match tool_db::insert_tool(db.get_ref(), input, user.0.id).await {
        Ok(tool) => {
            if let Err(e) = cache.delete_pattern("tools:list:*").await {
                tracing::warn!("failed to invalidate tool list cache: {e}");
            }
            HttpResponse::Created().json(tool)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to create tool: {e}"),
        })),
    }
}

/// PATCH /api/tools/{id} — update a listing. Only the owner may do this.
pub async fn update_tool(
    user: AuthenticatedUser,
    db: web::Data<DatabaseConnection>,
    cache: web::Data<CacheData>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateTool>,
) -> impl Responder {
    let id = path.into_inner();

    let tool = match tool_db::get_tool_by_id(db.get_ref(), id).await {
        Ok(Some(tool)) => tool,
        Ok(None) => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("Tool {id} not found"),
            }));
        }
        Err(e) => {
            return HttpResponse::InternalServerError().json(serde_json::json!({
                "error": format!("Database error: {e}"),
            }));
        }
    };

    if tool.owner_id != user.0.id {
        return HttpResponse::Forbidden().json(serde_json::json!({
            "error": "Only the owner can update this listing",
        }));
    }

    match tool_db::update_tool(db.get_ref(), id, body.into_inner()).await {
        Ok(updated) => {
            if let Err(e) = cache.delete_pattern("tools:list:*").await {
                tracing::warn!("failed to invalidate tool list cache: {e}");
            }
            HttpResponse::Ok().json(updated)
        }
        Err(e) => HttpResponse::InternalServerError().json(serde_json::json!({
            "error": format!("Failed to update tool: {e}"),
        })),
    }
}
