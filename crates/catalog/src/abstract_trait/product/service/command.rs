use crate::domain::{
    requests::product::SubmitProductRequest,
    response::{api::ApiResponse, product::ProductResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn submit_product(
        &self,
        req: &SubmitProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
}
