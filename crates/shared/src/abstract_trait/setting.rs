use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::{RepositoryError, ServiceError};

pub type DynSettingQueryRepository = Arc<dyn SettingQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait SettingQueryRepositoryTrait {
    async fn find_value(&self, index_name: &str) -> Result<Option<String>, RepositoryError>;
}

pub type DynSettingService = Arc<dyn SettingServiceTrait + Send + Sync>;

#[async_trait]
pub trait SettingServiceTrait {
    async fn get(&self, index_name: &str, default: Option<&str>)
    -> Result<Option<String>, ServiceError>;
}
