use crate::{
    abstract_trait::category::{CategoryQueryServiceTrait, DynCategoryQueryRepository},
    domain::response::{api::ApiResponse, category::CategoryResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use tracing::info;

#[derive(Clone)]
pub struct CategoryQueryService {
    pub query: DynCategoryQueryRepository,
}

impl CategoryQueryService {
    pub fn new(query: DynCategoryQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl CategoryQueryServiceTrait for CategoryQueryService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<CategoryResponse>>, ServiceError> {
        info!("🔍 Finding all categories");

        let categories = self.query.find_all().await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Categories fetched successfully".to_string(),
            data: categories.into_iter().map(CategoryResponse::from).collect(),
        })
    }
}
