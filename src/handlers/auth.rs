use actix_web::{HttpResponse, Responder};

use crate::auth::middleware::AuthenticatedUser;

/// GET /api/auth/user — return the currently authenticated user's profile.
/// The extractor provisions a profile row on first login.
pub async fn current_user(user: AuthenticatedUser) -> impl Responder {
    HttpResponse::Ok().json(user.0)
}
