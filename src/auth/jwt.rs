use crate::auth::jwks::JwksCache;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims issued by the auth provider.
///
/// The `sub` field is the user's UUID. `user_metadata` carries profile info
/// from the OIDC provider and is only used to seed a new profile row on
/// first login.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// The auth user UUID.
    pub sub: String,
    /// Token expiration (Unix timestamp).
    pub exp: usize,
    /// Token issued-at (Unix timestamp).
    pub iat: Option<usize>,
    /// Issuer.
    pub iss: Option<String>,
    /// User's email.
    pub email: Option<String>,
    /// Provider role (e.g. "authenticated").
    pub role: Option<String>,
    /// Metadata from the OIDC provider.
    pub user_metadata: Option<UserMetadata>,
}

/// Profile metadata populated by the OIDC provider.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserMetadata {
    pub full_name: Option<String>,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    pub avatar_url: Option<String>,
    pub picture: Option<String>,
    pub email: Option<String>,
    pub email_verified: Option<bool>,
}

impl Claims {
    /// Extract the user UUID from the `sub` claim.
    pub fn user_id(&self) -> Result<Uuid, String> {
        Uuid::parse_str(&self.sub).map_err(|e| format!("Invalid UUID in sub claim: {e}"))
    }

    /// First name: prefer the explicit given name, fall back to the first
    /// word of the full name.
    pub fn first_name(&self) -> Option<String> {
        let meta = self.user_metadata.as_ref()?;
        meta.given_name.clone().or_else(|| {
            meta.full_name
                .as_deref()
                .and_then(|f| f.split_whitespace().next())
                .map(str::to_string)
        })
    }

    /// Last name: prefer the explicit family name, fall back to the
    /// remainder of the full name.
    pub fn last_name(&self) -> Option<String> {
        let meta = self.user_metadata.as_ref()?;
        meta.family_name.clone().or_else(|| {
            meta.full_name
                .as_deref()
                .and_then(|f| f.split_once(char::is_whitespace))
                .map(|(_, rest)| rest.trim().to_string())
                .filter(|rest| !rest.is_empty())
        })
    }

    /// Best-effort profile image URL from metadata.
    pub fn profile_image_url(&self) -> Option<String> {
        self.user_metadata
            .as_ref()
            .and_then(|m| m.avatar_url.clone().or_else(|| m.picture.clone()))
    }

    /// Best-effort email: prefer top-level, fall back to metadata.
    pub fn user_email(&self) -> Option<String> {
        self.email
            .clone()
            .or_else(|| self.user_metadata.as_ref().and_then(|m| m.email.clone()))
    }
}

/// Validate a provider JWT and return the decoded claims.
pub async fn validate_token(token: &str, jwks_cache: &JwksCache) -> Result<Claims, String> {
    jwks_cache.validate_token(token).await.map(|td| td.claims)
}
