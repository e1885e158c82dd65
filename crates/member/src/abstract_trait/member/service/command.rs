use crate::domain::{
    requests::member::{CreateMemberRequest, UpdateMemberRequest},
    response::{api::ApiResponse, member::MemberResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;

pub type DynMemberCommandService = Arc<dyn MemberCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait MemberCommandServiceTrait {
    async fn create_member(
        &self,
        req: &CreateMemberRequest,
    ) -> Result<ApiResponse<MemberResponse>, ServiceError>;
    async fn update_member(
        &self,
        req: &UpdateMemberRequest,
    ) -> Result<ApiResponse<MemberResponse>, ServiceError>;
}
