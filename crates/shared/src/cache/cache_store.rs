use chrono::Duration;
use deadpool_redis::Pool;
use redis::AsyncCommands;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};

/// JSON value cache over the shared Redis pool, used for memoized settings
/// and assembled product views. Lookups never fail the caller: any Redis or
/// decoding problem is logged and treated as a miss.
#[derive(Clone)]
pub struct CacheStore {
    pool: Pool,
}

impl CacheStore {
    pub fn new(pool: Pool) -> Self {
        Self { pool }
    }

    pub async fn get<T>(&self, key: &str) -> Option<T>
    where
        T: DeserializeOwned,
    {
        let mut conn = match self.pool.get().await {
            Ok(conn) => conn,
            Err(e) => {
                warn!("Redis unavailable, treating '{key}' as a miss: {e:?}");
                return None;
            }
        };

        let raw: Option<String> = match conn.get(key).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("Redis GET failed for '{key}': {e:?}");
                return None;
            }
        };

        match serde_json::from_str(&raw?) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Discarding undecodable cache entry '{key}': {e:?}");
                None
            }
        }
    }

    pub async fn put<T>(&self, key: &str, value: &T, ttl: Duration)
    where
        T: Serialize,
    {
        let json = match serde_json::to_string(value) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize cache entry '{key}': {e:?}");
                return;
            }
        };

        let mut conn = match self.pool.get().await {
            Ok(conn) => conn,
            Err(e) => {
                warn!("Redis unavailable, skipping cache write for '{key}': {e:?}");
                return;
            }
        };

        let ttl_secs = ttl.num_seconds().max(1) as u64;
        let result: redis::RedisResult<()> = conn.set_ex(key, json, ttl_secs).await;

        match result {
            Ok(()) => debug!("Cached '{key}' for {ttl_secs}s"),
            Err(e) => warn!("Redis SET failed for '{key}': {e:?}"),
        }
    }
}
