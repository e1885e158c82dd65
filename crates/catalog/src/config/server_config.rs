use anyhow::Result;
use shared::config::Config;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub http_port: u16,
}

impl ServerConfig {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            database_url: config.database_url.clone(),
            http_port: config.catalog.http_port,
        })
    }
}
