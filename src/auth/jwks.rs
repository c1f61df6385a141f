use jsonwebtoken::{Algorithm, DecodingKey, TokenData, Validation, decode, decode_header};
use moka::future::Cache;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// One key from the provider's JWKS document. Only the EC fields we verify
/// with are kept.
#[derive(Debug, Clone, Deserialize)]
struct Jwk {
    kid: Option<String>,
    alg: Option<String>,
    x: Option<String>,
    y: Option<String>,
}

#[derive(Debug, Deserialize)]
struct JwkSet {
    keys: Vec<Jwk>,
}

#[derive(Clone)]
struct VerificationKey {
    x: String,
    y: String,
    algorithm: Algorithm,
}

/// Fetches and caches the auth provider's JSON Web Key Set so signature
/// verification doesn't hit the network on every request. Keys are cached by
/// `kid` for an hour; an unknown `kid` triggers a refetch.
#[derive(Clone)]
pub struct JwksCache {
    keys: Arc<Cache<String, VerificationKey>>,
    jwks_url: String,
    client: reqwest::Client,
    anon_key: String,
}

impl JwksCache {
    pub fn new(project_ref: &str, anon_key: &str) -> Self {
        let keys = Arc::new(
            Cache::builder()
                .time_to_live(Duration::from_secs(3600))
                .max_capacity(10)
                .build(),
        );

        Self {
            keys,
            jwks_url: format!("https://{project_ref}.supabase.co/auth/v1/.well-known/jwks.json"),
            client: reqwest::Client::new(),
            anon_key: anon_key.to_string(),
        }
    }

    async fn fetch_jwks(&self) -> Result<JwkSet, String> {
        debug!("Fetching JWKS from {}", self.jwks_url);

        let response = self
            .client
            .get(&self.jwks_url)
            .header("apikey", &self.anon_key)
            .send()
            .await
            .map_err(|e| format!("Failed to fetch JWKS: {e}"))?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("Failed to fetch JWKS: HTTP {status}"));
        }

        response
            .json::<JwkSet>()
            .await
            .map_err(|e| format!("Failed to parse JWKS JSON: {e}"))
    }

    async fn verification_key(&self, kid: &str) -> Result<VerificationKey, String> {
        if let Some(cached) = self.keys.get(kid).await {
            return Ok(cached);
        }

        let jwks = self.fetch_jwks().await?;
        let jwk = jwks
            .keys
            .into_iter()
            .find(|k| k.kid.as_deref() == Some(kid))
            .ok_or(format!("Key with kid={kid} not found in JWKS"))?;

        let key = VerificationKey {
            x: jwk.x.ok_or("Missing 'x' in JWK")?,
            y: jwk.y.ok_or("Missing 'y' in JWK")?,
            algorithm: match jwk.alg.as_deref() {
                Some("ES384") => Algorithm::ES384,
                _ => Algorithm::ES256,
            },
        };

        self.keys.insert(kid.to_string(), key.clone()).await;
        Ok(key)
    }

    pub async fn validate_token(
        &self,
        token: &str,
    ) -> Result<TokenData<super::jwt::Claims>, String> {
        let header = decode_header(token).map_err(|e| format!("Failed to decode header: {e}"))?;
        let kid = header.kid.ok_or("No 'kid' in token header")?;

        let key = self.verification_key(&kid).await?;

        let decoding_key = DecodingKey::from_ec_components(&key.x, &key.y)
            .map_err(|e| format!("Failed to create decoding key: {e}"))?;

        let mut validation = Validation::new(key.algorithm);
        validation.validate_aud = false;

        decode::<super::jwt::Claims>(token, &decoding_key, &validation)
            .map_err(|e| format!("Token validation failed: {e}"))
    }
}
