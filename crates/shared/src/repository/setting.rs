use crate::{
    abstract_trait::SettingQueryRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
};
use async_trait::async_trait;
use tracing::info;

#[derive(Clone)]
pub struct SettingQueryRepository {
    db: ConnectionPool,
}

impl SettingQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SettingQueryRepositoryTrait for SettingQueryRepository {
    async fn find_value(&self, index_name: &str) -> Result<Option<String>, RepositoryError> {
        info!("🔍 Fetching setting value for: {index_name}");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let value: Option<Option<String>> = sqlx::query_scalar(
            r#"
            SELECT value
            FROM settings
            WHERE index_name = $1
            "#,
        )
        .bind(index_name)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(value.flatten())
    }
}
