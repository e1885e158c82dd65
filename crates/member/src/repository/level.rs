use crate::{abstract_trait::level::LevelQueryRepositoryTrait, model::level::Level as LevelModel};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::info;

#[derive(Clone)]
pub struct LevelQueryRepository {
    db: ConnectionPool,
}

impl LevelQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LevelQueryRepositoryTrait for LevelQueryRepository {
    async fn find_all(&self) -> Result<Vec<LevelModel>, RepositoryError> {
        info!("🔍 Fetching levels");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, LevelModel>(
            r#"
            SELECT
                level_id,
                name,
                min_score,
                created_at,
                updated_at
            FROM levels
            ORDER BY min_score DESC
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }
}
