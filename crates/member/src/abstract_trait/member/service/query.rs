use crate::domain::{
    requests::member::FindAllMembers,
    response::{
        api::{ApiResponse, ApiResponsePagination},
        member::{MemberDetailResponse, MemberResponse},
    },
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynMemberQueryService = Arc<dyn MemberQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait MemberQueryServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllMembers,
    ) -> Result<ApiResponsePagination<Vec<MemberResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i32)
    -> Result<ApiResponse<MemberDetailResponse>, ServiceError>;
}
