use crate::{
    abstract_trait::{
        level::DynLevelQueryRepository,
        member::{repository::DynMemberQueryRepository, service::MemberQueryServiceTrait},
    },
    domain::{
        requests::member::FindAllMembers,
        response::{
            api::{ApiResponse, ApiResponsePagination},
            member::{MemberDetailResponse, MemberResponse},
            pagination::Pagination,
        },
    },
};
use async_trait::async_trait;
use shared::{
    errors::{RepositoryError, ServiceError},
    utils::image_url,
};
use tracing::info;

#[derive(Clone)]
pub struct MemberQueryService {
    pub query: DynMemberQueryRepository,
    pub levels: DynLevelQueryRepository,
    pub storage_base_url: String,
}

impl MemberQueryService {
    pub fn new(
        query: DynMemberQueryRepository,
        levels: DynLevelQueryRepository,
        storage_base_url: String,
    ) -> Self {
        Self {
            query,
            levels,
            storage_base_url,
        }
    }

    fn resolve_avatar(&self, mut response: MemberResponse) -> MemberResponse {
        response.avatar = response
            .avatar
            .map(|a| image_url(&a, &self.storage_base_url));
        response
    }
}

#[async_trait]
impl MemberQueryServiceTrait for MemberQueryService {
    async fn find_all(
        &self,
        req: &FindAllMembers,
    ) -> Result<ApiResponsePagination<Vec<MemberResponse>>, ServiceError> {
        info!(
            "🔍 Finding all members | Page: {}, Size: {}, Name: '{}', Email: '{}'",
            req.page, req.page_size, req.name, req.email
        );

        let page = if req.page > 0 { req.page } else { 1 };
        let page_size = if req.page_size > 0 { req.page_size } else { 10 };

        let normalized = FindAllMembers {
            page,
            page_size,
            name: req.name.clone(),
            email: req.email.clone(),
        };

        let (members, total_items) = self.query.find_all(&normalized).await?;

        // one levels fetch covers the whole page
        let levels = self.levels.find_all().await?;

        let total_pages = ((total_items as f64) / (page_size as f64)).ceil() as i32;

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Members fetched successfully".to_string(),
            data: members
                .into_iter()
                .map(|m| self.resolve_avatar(MemberResponse::from_model(m, &levels)))
                .collect(),
            pagination: Pagination {
                page,
                page_size,
                total_items: total_items as i32,
                total_pages,
            },
        })
    }

    async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<ApiResponse<MemberDetailResponse>, ServiceError> {
        info!("🆔 Finding member by ID: {id}");

        let member = self
            .query
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        let levels = self.levels.find_all().await?;
        let score_logs = self.query.find_score_logs(id).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Member fetched successfully".to_string(),
            data: MemberDetailResponse {
                member: self.resolve_avatar(MemberResponse::from_model(member, &levels)),
                score_logs: score_logs.into_iter().map(Into::into).collect(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::{
        level::LevelQueryRepositoryTrait, member::repository::MemberQueryRepositoryTrait,
    };
    use crate::model::{
        level::Level as LevelModel, member::Member as MemberModel,
        score_log::ScoreLog as ScoreLogModel,
    };
    use std::sync::Arc;

    struct MockMemberQueryRepository {
        members: Vec<MemberModel>,
        score_logs: Vec<ScoreLogModel>,
    }

    #[async_trait]
    impl MemberQueryRepositoryTrait for MockMemberQueryRepository {
        async fn find_all(
            &self,
            _req: &FindAllMembers,
        ) -> Result<(Vec<MemberModel>, i64), RepositoryError> {
            Ok((self.members.clone(), self.members.len() as i64))
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<MemberModel>, RepositoryError> {
            Ok(self.members.iter().find(|m| m.member_id == id).cloned())
        }

        async fn find_score_logs(
            &self,
            member_id: i32,
        ) -> Result<Vec<ScoreLogModel>, RepositoryError> {
            Ok(self
                .score_logs
                .iter()
                .filter(|l| l.member_id == member_id)
                .cloned()
                .collect())
        }
    }

    struct MockLevelQueryRepository {
        levels: Vec<LevelModel>,
    }

    #[async_trait]
    impl LevelQueryRepositoryTrait for MockLevelQueryRepository {
        async fn find_all(&self) -> Result<Vec<LevelModel>, RepositoryError> {
            Ok(self.levels.clone())
        }
    }

    fn member(id: i32, score_all: i32) -> MemberModel {
        MemberModel {
            member_id: id,
            name: format!("member-{id}"),
            sex: 1,
            email: format!("member{id}@example.com"),
            password: "hash".to_string(),
            avatar: None,
            github_name: None,
            qq_name: None,
            weibo_name: None,
            score_all,
            score_now: 0,
            login_count: 0,
            is_active: true,
            active_token: "token".to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    fn levels() -> Vec<LevelModel> {
        vec![
            LevelModel {
                level_id: 2,
                name: "白银".to_string(),
                min_score: 100,
                created_at: None,
                updated_at: None,
            },
            LevelModel {
                level_id: 1,
                name: "青铜".to_string(),
                min_score: 0,
                created_at: None,
                updated_at: None,
            },
        ]
    }

    fn service(members: Vec<MemberModel>, score_logs: Vec<ScoreLogModel>) -> MemberQueryService {
        MemberQueryService::new(
            Arc::new(MockMemberQueryRepository {
                members,
                score_logs,
            }),
            Arc::new(MockLevelQueryRepository { levels: levels() }),
            "http://localhost/storage".to_string(),
        )
    }

    #[tokio::test]
    async fn grid_rows_carry_resolved_levels() {
        let service = service(vec![member(1, 250), member(2, 10)], Vec::new());

        let req = FindAllMembers {
            page: 1,
            page_size: 10,
            name: String::new(),
            email: String::new(),
        };
        let result = service.find_all(&req).await.unwrap();

        assert_eq!(result.data[0].level.as_deref(), Some("白银"));
        assert_eq!(result.data[1].level.as_deref(), Some("青铜"));
        assert_eq!(result.pagination.total_items, 2);
    }

    #[tokio::test]
    async fn detail_includes_score_history() {
        let logs = vec![
            ScoreLogModel {
                log_id: 1,
                member_id: 1,
                description: "每日签到".to_string(),
                score: 5,
                created_at: None,
            },
            ScoreLogModel {
                log_id: 2,
                member_id: 2,
                description: "发表评论".to_string(),
                score: 10,
                created_at: None,
            },
        ];
        let service = service(vec![member(1, 0)], logs);

        let result = service.find_by_id(1).await.unwrap();

        assert_eq!(result.data.score_logs.len(), 1);
        assert_eq!(result.data.score_logs[0].description, "每日签到");
    }

    #[tokio::test]
    async fn relative_avatars_resolve_against_the_storage_base() {
        let mut with_avatar = member(1, 0);
        with_avatar.avatar = Some("avatars/1.png".to_string());
        let service = service(vec![with_avatar], Vec::new());

        let result = service.find_by_id(1).await.unwrap();

        assert_eq!(
            result.data.member.avatar.as_deref(),
            Some("http://localhost/storage/avatars/1.png")
        );
    }

    #[tokio::test]
    async fn missing_member_is_not_found() {
        let service = service(Vec::new(), Vec::new());

        let result = service.find_by_id(7).await;

        assert!(matches!(
            result,
            Err(ServiceError::Repo(RepositoryError::NotFound))
        ));
    }
}
