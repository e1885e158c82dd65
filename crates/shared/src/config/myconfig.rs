use anyhow::{Context, Result, anyhow};

use crate::config::RedisConfig;

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub http_port: u16,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_min_conn: u32,
    pub db_max_conn: u32,
    pub run_migrations: bool,
    pub redis: RedisConfig,
    pub storage_base_url: String,
    pub catalog: ServiceConfig,
    pub member: ServiceConfig,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;

        let db_min_conn = std::env::var("DB_MIN_CONN")
            .unwrap_or_else(|_| "1".to_string())
            .parse::<u32>()
            .context("DB_MIN_CONN must be a valid u32 integer")?;

        let db_max_conn = std::env::var("DB_MAX_CONN")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()
            .context("DB_MAX_CONN must be a valid u32 integer")?;

        let run_migrations_str = std::env::var("RUN_MIGRATIONS")
            .context("Missing environment variable: RUN_MIGRATIONS")?;

        let run_migrations = match run_migrations_str.as_str() {
            "true" => true,
            "false" => false,
            other => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let redis_host =
            std::env::var("REDIS_HOST").context("Missing environment variable: REDIS_HOST")?;

        let redis_port = std::env::var("REDIS_PORT")
            .unwrap_or_else(|_| "6379".to_string())
            .parse::<u16>()
            .context("REDIS_PORT must be a valid u16 integer")?;

        let redis_db = std::env::var("REDIS_DB")
            .unwrap_or_else(|_| "0".to_string())
            .parse::<u8>()
            .context("REDIS_DB must be a valid u8 integer")?;

        let redis_password = std::env::var("REDIS_PASSWORD").ok();

        // image links stored as relative paths are resolved against this
        let storage_base_url = std::env::var("STORAGE_BASE_URL")
            .context("Missing environment variable: STORAGE_BASE_URL")?;

        // catalog
        let catalog_http_port = std::env::var("CATALOG_HTTP_PORT")
            .context("Missing environment variable: CATALOG_HTTP_PORT")?
            .parse::<u16>()
            .context("CATALOG_HTTP_PORT must be a valid u16 integer")?;

        // member
        let member_http_port = std::env::var("MEMBER_HTTP_PORT")
            .context("Missing environment variable: MEMBER_HTTP_PORT")?
            .parse::<u16>()
            .context("MEMBER_HTTP_PORT must be a valid u16 integer")?;

        Ok(Self {
            database_url,
            db_min_conn,
            db_max_conn,
            run_migrations,
            redis: RedisConfig::new(redis_host, redis_port, redis_db, redis_password),
            storage_base_url,
            catalog: ServiceConfig {
                http_port: catalog_http_port,
            },
            member: ServiceConfig {
                http_port: member_http_port,
            },
        })
    }
}
