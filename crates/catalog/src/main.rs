use anyhow::{Context, Result};
use catalog::{config::ServerConfig, handler::AppRouter, state::AppState};
use shared::{
    config::{Config, ConnectionManager},
    utils::init_logger,
};
use sqlx::{Pool, Postgres};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    init_logger("catalog-service");

    let config = Config::init().context("Failed to load configuration")?;
    let server_config = ServerConfig::from_config(&config)?;

    info!("🚀 Starting Catalog Service initialization...");

    let db_pool = ConnectionManager::new_pool(
        &server_config.database_url,
        config.db_min_conn,
        config.db_max_conn,
    )
    .await
    .context("Failed to initialize database pool")?;

    if config.run_migrations {
        run_migrations(&db_pool)
            .await
            .context("Failed to run database migrations")?;
    }

    let state = AppState::new(db_pool, &config.redis, config.storage_base_url.clone())
        .await
        .context("Failed to create AppState")?;

    info!("✅ Application setup completed successfully.");

    AppRouter::serve(server_config.http_port, state)
        .await
        .context("Failed to start server")?;

    info!("✅ Catalog Service shutdown complete.");

    Ok(())
}

pub async fn run_migrations(pool: &Pool<Postgres>) -> anyhow::Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
