use actix_web::FromRequest;
use actix_web::{Error, HttpRequest, dev::Payload, error, web};
use sea_orm::DatabaseConnection;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::auth::jwks::JwksCache;
use crate::auth::jwt;
use crate::db::users::find_or_create_from_auth;
use crate::models::users::{self, CreateUserFromAuth, Roles};

/// Extractor that validates the bearer JWT and loads (or provisions) the
/// matching profile row. Handlers take this as an argument to require auth.
pub struct AuthenticatedUser(pub users::Model);

fn bearer_token(req: &HttpRequest) -> Result<&str, Error> {
    let header = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| error::ErrorUnauthorized("Missing Authorization header"))?;

    header
        .strip_prefix("Bearer ")
        .ok_or_else(|| error::ErrorUnauthorized("Authorization header must be: Bearer <token>"))
}

async fn resolve_user(req: HttpRequest) -> Result<users::Model, Error> {
    let token = bearer_token(&req)?;

    let jwks_cache = req
        .app_data::<web::Data<Arc<JwksCache>>>()
        .ok_or_else(|| error::ErrorInternalServerError("JWKS cache not configured"))?;

    let claims = jwt::validate_token(token, jwks_cache.get_ref())
        .await
        .map_err(|e| error::ErrorUnauthorized(format!("Invalid token: {e}")))?;

    let user_id = claims.user_id().map_err(error::ErrorUnauthorized)?;
    let email = claims
        .user_email()
        .ok_or_else(|| error::ErrorUnauthorized("No email in token claims"))?;

    let db = req
        .app_data::<web::Data<DatabaseConnection>>()
        .ok_or_else(|| error::ErrorInternalServerError("Database not configured"))?;

    // First login provisions a profile row seeded from the token's metadata.
    // New accounts default to the employer role; the profile page can switch
    // it later.
    find_or_create_from_auth(
        db.get_ref(),
        CreateUserFromAuth {
            id: user_id,
            email,
            first_name: claims.first_name(),
            last_name: claims.last_name(),
            profile_image_url: claims.profile_image_url(),
            role: Roles::Employer,
        },
    )
    .await
    .map_err(|e| error::ErrorInternalServerError(format!("Database error: {e}")))
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let req = req.clone();
        Box::pin(async move { resolve_user(req).await.map(AuthenticatedUser) })
    }
}
