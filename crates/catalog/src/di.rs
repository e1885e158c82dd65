use crate::{
    abstract_trait::{
        category::DynCategoryQueryService,
        product::service::{DynProductCommandService, DynProductQueryService},
    },
    repository::{CategoryQueryRepository, ProductCommandRepository, ProductQueryRepository},
    service::{CategoryQueryService, ProductCommandService, ProductQueryService},
};
use anyhow::Result;
use shared::{
    cache::CacheStore,
    config::{ConnectionPool, RedisClient},
    repository::SettingQueryRepository,
    service::SettingService,
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query: ProductQueryService,
    pub product_command: ProductCommandService,
    pub category_query: CategoryQueryService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query", &"ProductQueryService")
            .field("product_command", &"ProductCommandService")
            .field("category_query", &"CategoryQueryService")
            .finish()
    }
}

#[derive(Clone)]
pub struct DependenciesInjectDeps {
    pub pool: ConnectionPool,
    pub redis: RedisClient,
    pub storage_base_url: String,
}

impl DependenciesInject {
    pub fn new(deps: DependenciesInjectDeps) -> Result<Self> {
        let DependenciesInjectDeps {
            pool,
            redis,
            storage_base_url,
        } = deps;

        let product_query_repo = Arc::new(ProductQueryRepository::new(pool.clone()));
        let product_command_repo = Arc::new(ProductCommandRepository::new(pool.clone()));
        let category_query_repo = Arc::new(CategoryQueryRepository::new(pool.clone()));
        let setting_query_repo = Arc::new(SettingQueryRepository::new(pool.clone()));

        let cache = Arc::new(CacheStore::new(redis.pool.clone()));

        let settings = Arc::new(SettingService::new(setting_query_repo, cache.clone()));

        let product_query = ProductQueryService::new(
            product_query_repo,
            settings.clone(),
            cache.clone(),
            storage_base_url,
        );

        let product_command = ProductCommandService::new(product_command_repo);

        let category_query = CategoryQueryService::new(category_query_repo);

        Ok(Self {
            product_query,
            product_command,
            category_query,
        })
    }

    pub fn product_query_dyn(&self) -> DynProductQueryService {
        Arc::new(self.product_query.clone())
    }

    pub fn product_command_dyn(&self) -> DynProductCommandService {
        Arc::new(self.product_command.clone())
    }

    pub fn category_query_dyn(&self) -> DynCategoryQueryService {
        Arc::new(self.category_query.clone())
    }
}
