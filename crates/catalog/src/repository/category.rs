use crate::{
    abstract_trait::category::CategoryQueryRepositoryTrait, model::category::Category as CategoryModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::info;

#[derive(Clone)]
pub struct CategoryQueryRepository {
    db: ConnectionPool,
}

impl CategoryQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoryQueryRepositoryTrait for CategoryQueryRepository {
    async fn find_all(&self) -> Result<Vec<CategoryModel>, RepositoryError> {
        info!("🔍 Fetching all categories");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, CategoryModel>(
            r#"
            SELECT
                category_id,
                name,
                created_at,
                updated_at
            FROM categories
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }
}
