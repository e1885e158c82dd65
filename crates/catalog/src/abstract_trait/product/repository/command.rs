use crate::{domain::requests::product::CreateProductBundle, model::product::Product as ProductModel};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    /// Persists the product and its detail, images and attributes as one
    /// transaction. Any failure leaves no rows behind.
    async fn create_product_bundle(
        &self,
        bundle: &CreateProductBundle,
    ) -> Result<ProductModel, RepositoryError>;
}
