use crate::di::DependenciesInject;
use anyhow::{Context, Result};
use shared::config::ConnectionPool;
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
    pub async fn new(pool: ConnectionPool, storage_base_url: String) -> Result<Self> {
        let di_container = DependenciesInject::new(pool, storage_base_url)
            .context("Failed to initialize dependency injection container")?;

        Ok(Self { di_container })
    }
}
