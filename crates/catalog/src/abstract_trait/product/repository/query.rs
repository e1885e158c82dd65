use crate::{
    domain::requests::product::FindAllProducts,
    model::product::{
        Product as ProductModel, ProductAttribute as ProductAttributeModel,
        ProductDetail as ProductDetailModel, ProductImage as ProductImageModel,
    },
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<(Vec<ProductModel>, i64), RepositoryError>;
    async fn find_by_uuid(&self, uuid: &str) -> Result<Option<ProductModel>, RepositoryError>;
    async fn find_detail(
        &self,
        product_id: i32,
    ) -> Result<Option<ProductDetailModel>, RepositoryError>;
    async fn find_images(&self, product_id: i32)
    -> Result<Vec<ProductImageModel>, RepositoryError>;
    async fn find_attributes(
        &self,
        product_id: i32,
    ) -> Result<Vec<ProductAttributeModel>, RepositoryError>;
}
