use crate::{
    domain::requests::member::FindAllMembers,
    model::{member::Member as MemberModel, score_log::ScoreLog as ScoreLogModel},
};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynMemberQueryRepository = Arc<dyn MemberQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait MemberQueryRepositoryTrait {
    async fn find_all(
        &self,
        req: &FindAllMembers,
    ) -> Result<(Vec<MemberModel>, i64), RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<MemberModel>, RepositoryError>;
    async fn find_score_logs(&self, member_id: i32)
    -> Result<Vec<ScoreLogModel>, RepositoryError>;
}
