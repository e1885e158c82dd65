use crate::{
    abstract_trait::{DynSettingQueryRepository, SettingServiceTrait},
    cache::CacheStore,
    errors::ServiceError,
};
use async_trait::async_trait;
use chrono::Duration;
use std::sync::Arc;
use tracing::info;

/// Read-mostly configuration lookup backed by the settings table and
/// memoized in Redis. Built once at startup and shared by reference.
#[derive(Clone)]
pub struct SettingService {
    pub query: DynSettingQueryRepository,
    pub cache_store: Arc<CacheStore>,
}

impl SettingService {
    pub fn new(query: DynSettingQueryRepository, cache_store: Arc<CacheStore>) -> Self {
        Self { query, cache_store }
    }

    fn cache_key(index_name: &str) -> String {
        format!("setting:{index_name}")
    }
}

#[async_trait]
impl SettingServiceTrait for SettingService {
    async fn get(
        &self,
        index_name: &str,
        default: Option<&str>,
    ) -> Result<Option<String>, ServiceError> {
        let cache_key = Self::cache_key(index_name);

        if let Some(cached) = self.cache_store.get::<String>(&cache_key).await {
            info!("Found setting '{index_name}' in cache");
            return Ok(Some(cached));
        }

        let value = self.query.find_value(index_name).await?;

        match value {
            Some(value) => {
                // settings rarely change, keep them hot for a long time
                self.cache_store
                    .put(&cache_key, &value, Duration::days(365))
                    .await;

                Ok(Some(value))
            }
            None => Ok(default.map(|d| d.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::SettingQueryRepositoryTrait;
    use crate::errors::RepositoryError;
    use deadpool_redis::{Config as PoolConfig, Runtime};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockSettingQueryRepository {
        values: HashMap<String, String>,
        calls: AtomicUsize,
    }

    impl MockSettingQueryRepository {
        fn new(values: &[(&str, &str)]) -> Self {
            Self {
                values: values
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl SettingQueryRepositoryTrait for MockSettingQueryRepository {
        async fn find_value(&self, index_name: &str) -> Result<Option<String>, RepositoryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.values.get(index_name).cloned())
        }
    }

    // a pool that never connects; every cache call degrades to a miss
    fn unreachable_cache() -> Arc<CacheStore> {
        let pool = PoolConfig::from_url("redis://127.0.0.1:1/0")
            .create_pool(Some(Runtime::Tokio1))
            .expect("pool config");
        Arc::new(CacheStore::new(pool))
    }

    #[tokio::test]
    async fn returns_stored_value_when_present() {
        let repo = Arc::new(MockSettingQueryRepository::new(&[("site_name", "书店")]));
        let service = SettingService::new(repo.clone(), unreachable_cache());

        let value = service.get("site_name", None).await.unwrap();

        assert_eq!(value.as_deref(), Some("书店"));
        assert_eq!(repo.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn falls_back_to_default_when_absent() {
        let repo = Arc::new(MockSettingQueryRepository::new(&[]));
        let service = SettingService::new(repo, unreachable_cache());

        let value = service.get("per_page", Some("15")).await.unwrap();

        assert_eq!(value.as_deref(), Some("15"));
    }

    #[tokio::test]
    async fn missing_setting_without_default_is_none() {
        let repo = Arc::new(MockSettingQueryRepository::new(&[]));
        let service = SettingService::new(repo, unreachable_cache());

        let value = service.get("per_page", None).await.unwrap();

        assert_eq!(value, None);
    }
}
