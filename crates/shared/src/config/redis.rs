use anyhow::{Context, Result};
use deadpool_redis::{Config as PoolConfig, Pool, Runtime};
use tracing::info;

#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub host: String,
    pub port: u16,
    pub db: u8,
    pub password: Option<String>,
}

impl RedisConfig {
    pub fn new(host: String, port: u16, db: u8, password: Option<String>) -> Self {
        Self {
            host,
            port,
            db,
            password,
        }
    }

    fn url(&self) -> String {
        match &self.password {
            Some(pw) => format!("redis://:{}@{}:{}/{}", pw, self.host, self.port, self.db),
            None => format!("redis://{}:{}/{}", self.host, self.port, self.db),
        }
    }
}

#[derive(Clone)]
pub struct RedisClient {
    pub pool: Pool,
}

impl RedisClient {
    pub fn new(config: &RedisConfig) -> Result<Self> {
        info!("Creating redis connection pool");

        let pool = PoolConfig::from_url(config.url())
            .create_pool(Some(Runtime::Tokio1))
            .context("Failed to create redis pool")?;

        Ok(Self { pool })
    }

    pub async fn ping(&self) -> Result<()> {
        let mut conn = self.pool.get().await.context("Failed to get connection")?;

        info!("Pinging redis");

        let _: () = redis::cmd("PING").query_async(&mut conn).await?;

        info!("Pinged redis");

        Ok(())
    }
}
