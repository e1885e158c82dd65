use crate::model::level::Level as LevelModel;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynLevelQueryRepository = Arc<dyn LevelQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait LevelQueryRepositoryTrait {
    /// Levels ordered by `min_score` descending, the order level resolution
    /// expects.
    async fn find_all(&self) -> Result<Vec<LevelModel>, RepositoryError>;
}
