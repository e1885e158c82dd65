use crate::{
    domain::response::{api::ApiResponse, category::CategoryResponse},
    model::category::Category as CategoryModel,
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;

pub type DynCategoryQueryRepository = Arc<dyn CategoryQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CategoryQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<CategoryModel>, RepositoryError>;
}

pub type DynCategoryQueryService = Arc<dyn CategoryQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait CategoryQueryServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<CategoryResponse>>, ServiceError>;
}
