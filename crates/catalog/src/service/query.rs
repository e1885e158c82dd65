use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::{
        requests::product::FindAllProducts,
        response::{
            api::{ApiResponse, ApiResponsePagination},
            pagination::Pagination,
            product::{ProductFullResponse, ProductImageResponse, ProductResponse},
        },
    },
};
use async_trait::async_trait;
use chrono::Duration;
use shared::{
    abstract_trait::DynSettingService,
    cache::CacheStore,
    errors::ServiceError,
    utils::image_url,
};
use std::sync::Arc;
use tracing::info;

const DEFAULT_PAGE_SIZE: &str = "10";

#[derive(Clone)]
pub struct ProductQueryService {
    pub query: DynProductQueryRepository,
    pub settings: DynSettingService,
    pub cache_store: Arc<CacheStore>,
    pub storage_base_url: String,
}

impl ProductQueryService {
    pub fn new(
        query: DynProductQueryRepository,
        settings: DynSettingService,
        cache_store: Arc<CacheStore>,
        storage_base_url: String,
    ) -> Self {
        Self {
            query,
            settings,
            cache_store,
            storage_base_url,
        }
    }

    async fn resolve_page_size(&self, requested: i32) -> Result<i32, ServiceError> {
        if requested > 0 {
            return Ok(requested);
        }

        let configured = self
            .settings
            .get("products_per_page", Some(DEFAULT_PAGE_SIZE))
            .await?;

        Ok(configured
            .and_then(|v| v.parse::<i32>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(10))
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(
        &self,
        req: &FindAllProducts,
    ) -> Result<ApiResponsePagination<Vec<ProductResponse>>, ServiceError> {
        info!(
            "🔍 Finding all products | Page: {}, Size: {}, Search: '{}'",
            req.page, req.page_size, req.search
        );

        let page = if req.page > 0 { req.page } else { 1 };
        let page_size = self.resolve_page_size(req.page_size).await?;

        let normalized = FindAllProducts {
            page,
            page_size,
            search: req.search.clone(),
        };

        let (products, total_items) = self.query.find_all(&normalized).await?;

        let total_pages = ((total_items as f64) / (page_size as f64)).ceil() as i32;

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Products fetched successfully".to_string(),
            data: products
                .into_iter()
                .map(|p| {
                    let mut response = ProductResponse::from(p);
                    response.thumb = image_url(&response.thumb, &self.storage_base_url);
                    response
                })
                .collect(),
            pagination: Pagination {
                page,
                page_size,
                total_items: total_items as i32,
                total_pages,
            },
        })
    }

    async fn find_by_uuid(
        &self,
        uuid: &str,
    ) -> Result<ApiResponse<ProductFullResponse>, ServiceError> {
        info!("🆔 Finding product by uuid: {uuid}");

        let cache_key = format!("product:full:{uuid}");

        if let Some(cached) = self
            .cache_store
            .get::<ProductFullResponse>(&cache_key)
            .await
        {
            info!("Found product {uuid} in cache");
            return Ok(ApiResponse {
                status: "success".to_string(),
                message: "Product fetched from cache".to_string(),
                data: cached,
            });
        }

        let product = self
            .query
            .find_by_uuid(uuid)
            .await?
            .ok_or(ServiceError::Repo(
                shared::errors::RepositoryError::NotFound,
            ))?;

        let detail = self.query.find_detail(product.product_id).await?;
        let images = self.query.find_images(product.product_id).await?;
        let attributes = self.query.find_attributes(product.product_id).await?;

        let mut product_response = ProductResponse::from(product);
        product_response.thumb = image_url(&product_response.thumb, &self.storage_base_url);

        let images = images
            .into_iter()
            .map(|img| {
                let mut response = ProductImageResponse::from(img);
                response.link = image_url(&response.link, &self.storage_base_url);
                response
            })
            .collect();

        let full = ProductFullResponse {
            product: product_response,
            detail: detail.map(Into::into),
            images,
            attributes: attributes.into_iter().map(Into::into).collect(),
        };

        self.cache_store
            .put(&cache_key, &full, Duration::minutes(5))
            .await;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product fetched successfully".to_string(),
            data: full,
        })
    }
}
