//! Redis-backed JSON cache for read-heavy listing endpoints.

use redis::{Client, RedisError, aio::ConnectionManager};
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use std::time::Duration;

fn serde_err(context: &'static str, e: serde_json::Error) -> RedisError {
    RedisError::from((redis::ErrorKind::TypeError, context, e.to_string()))
}

#[derive(Clone)]
pub struct RedisCache {
    connection: ConnectionManager,
}

impl RedisCache {
    pub async fn new(redis_url: &str) -> Result<Self, RedisError> {
        let client = Client::open(redis_url)?;
        let connection = ConnectionManager::new(client).await?;
        Ok(Self { connection })
    }

    /// Fetch and deserialize a cached value; `None` on a miss.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> redis::RedisResult<Option<T>> {
        let raw: Option<String> = redis::cmd("GET")
            .arg(key)
            .query_async(&mut self.connection.clone())
            .await?;

        raw.map(|v| serde_json::from_str(&v).map_err(|e| serde_err("Deserialization error", e)))
            .transpose()
    }

    /// Serialize and store a value, with an optional TTL in seconds.
    pub async fn set<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        ttl_seconds: Option<u64>,
    ) -> redis::RedisResult<()> {
        let serialized =
            serde_json::to_string(value).map_err(|e| serde_err("Serialization error", e))?;

        let mut cmd = redis::cmd("SET");
        cmd.arg(key).arg(serialized);
        if let Some(ttl) = ttl_seconds {
            cmd.arg("EX").arg(ttl);
        }

        cmd.query_async(&mut self.connection.clone()).await
    }

    pub async fn delete(&self, key: &str) -> redis::RedisResult<()> {
        redis::cmd("DEL")
            .arg(key)
            .query_async(&mut self.connection.clone())
            .await
    }

    /// Delete every key matching a glob pattern. Used for list-cache
    /// invalidation after a write.
    pub async fn delete_pattern(&self, pattern: &str) -> redis::RedisResult<()> {
        let keys: Vec<String> = redis::cmd("KEYS")
            .arg(pattern)
            .query_async(&mut self.connection.clone())
            .await?;

        if !keys.is_empty() {
            let _: () = redis::cmd("DEL")
                .arg(&keys)
                .query_async(&mut self.connection.clone())
                .await?;
        }

        Ok(())
    }
}

/// Cache key builders, one namespace per listing surface.
pub mod keys {
    pub fn job_list(filters: &str) -> String {
        format!("jobs:list:{filters}")
    }

    pub fn job(id: &str) -> String {
        format!("job:{id}")
    }

    pub fn tool_list(filters: &str) -> String {
        format!("tools:list:{filters}")
    }

    pub fn workers(filters: &str) -> String {
        format!("workers:{filters}")
    }
}

/// Per-surface TTLs, overridable from the environment.
pub struct CacheConfig {
    pub job_list_ttl: Duration,
    pub job_ttl: Duration,
    pub tool_list_ttl: Duration,
    pub worker_ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            job_list_ttl: Duration::from_secs(60), // job boards go stale fast
            job_ttl: Duration::from_secs(300),
            tool_list_ttl: Duration::from_secs(300),
            worker_ttl: Duration::from_secs(600),
        }
    }
}

impl CacheConfig {
    pub fn from_env() -> Self {
        Self {
            job_list_ttl: parse_duration_secs("CACHE_TTL_JOBS", 60),
            job_ttl: parse_duration_secs("CACHE_TTL_JOB_DETAIL", 300),
            tool_list_ttl: parse_duration_secs("CACHE_TTL_TOOLS", 300),
            worker_ttl: parse_duration_secs("CACHE_TTL_WORKERS", 600),
        }
    }
}

fn parse_duration_secs(env_var: &str, default: u64) -> Duration {
    std::env::var(env_var)
        .ok()
        .and_then(|v| v.parse().ok())
        .map(Duration::from_secs)
        .unwrap_or_else(|| Duration::from_secs(default))
}

/// Shared cache handle registered as Actix app data.
pub type CacheData = Arc<RedisCache>;
