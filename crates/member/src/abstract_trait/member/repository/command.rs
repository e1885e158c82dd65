use crate::model::member::Member as MemberModel;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

/// Column values as they go into the members table; password is already
/// hashed and the activation token already generated by the service.
#[derive(Debug, Clone)]
pub struct NewMember {
    pub name: String,
    pub sex: i16,
    pub email: String,
    pub password: String,
    pub avatar: Option<String>,
    pub is_active: bool,
    pub active_token: String,
}

#[derive(Debug, Clone)]
pub struct MemberChanges {
    pub member_id: i32,
    pub name: String,
    pub sex: i16,
    pub email: String,
    pub password: String,
    pub avatar: Option<String>,
    pub is_active: bool,
}

pub type DynMemberCommandRepository = Arc<dyn MemberCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait MemberCommandRepositoryTrait {
    async fn create_member(&self, new: &NewMember) -> Result<MemberModel, RepositoryError>;
    async fn update_member(&self, changes: &MemberChanges) -> Result<MemberModel, RepositoryError>;
}
