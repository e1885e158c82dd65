use crate::di::{DependenciesInject, DependenciesInjectDeps};
use anyhow::{Context, Result};
use shared::config::{ConnectionPool, RedisClient, RedisConfig};
use std::fmt;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .finish()
    }
}

impl AppState {
    pub async fn new(
        pool: ConnectionPool,
        redis_config: &RedisConfig,
        storage_base_url: String,
    ) -> Result<Self> {
        let redis = RedisClient::new(redis_config).context("Failed to create Redis client")?;

        redis.ping().await.context("Failed to ping Redis server")?;

        let deps = DependenciesInjectDeps {
            pool: pool.clone(),
            redis: redis.clone(),
            storage_base_url,
        };

        let di_container = DependenciesInject::new(deps)
            .context("Failed to initialize dependency injection container")?;

        Ok(Self { di_container })
    }
}
