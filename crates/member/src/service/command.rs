use crate::{
    abstract_trait::member::{
        repository::{
            DynMemberCommandRepository, DynMemberQueryRepository, MemberChanges, NewMember,
        },
        service::MemberCommandServiceTrait,
    },
    domain::{
        requests::member::{CreateMemberRequest, UpdateMemberRequest},
        response::{api::ApiResponse, member::MemberResponse},
    },
};
use async_trait::async_trait;
use shared::{
    abstract_trait::DynHashing,
    errors::{RepositoryError, ServiceError},
    utils::{image_url, random_token},
};
use tracing::{error, info};

// the front site expects this token on freshly registered accounts
const ACTIVE_TOKEN_LENGTH: usize = 60;

#[derive(Clone)]
pub struct MemberCommandService {
    pub command: DynMemberCommandRepository,
    pub query: DynMemberQueryRepository,
    pub hash: DynHashing,
    pub storage_base_url: String,
}

pub struct MemberCommandServiceDeps {
    pub command: DynMemberCommandRepository,
    pub query: DynMemberQueryRepository,
    pub hash: DynHashing,
    pub storage_base_url: String,
}

impl MemberCommandService {
    pub fn new(deps: MemberCommandServiceDeps) -> Self {
        let MemberCommandServiceDeps {
            command,
            query,
            hash,
            storage_base_url,
        } = deps;

        Self {
            command,
            query,
            hash,
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
impl MemberCommandServiceTrait for MemberCommandService {
    async fn create_member(
        &self,
        req: &CreateMemberRequest,
    ) -> Result<ApiResponse<MemberResponse>, ServiceError> {
        info!("🏗️ Creating new member: {}", req.email);

        let hashed_password = self.hash.hash_password(&req.password).await.map_err(|e| {
            error!("❌ Failed to hash password: {:?}", e);
            e
        })?;

        let active_token = random_token(ACTIVE_TOKEN_LENGTH)
            .map_err(|e| ServiceError::Internal(e.to_string()))?;

        let new = NewMember {
            name: req.name.clone(),
            sex: req.sex,
            email: req.email.clone(),
            password: hashed_password,
            avatar: req.avatar.clone(),
            is_active: req.is_active,
            active_token,
        };

        let member = self.command.create_member(&new).await?;

        info!("✅ Member created: {}", member.member_id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Member created successfully".to_string(),
            data: self.resolve_avatar(MemberResponse::from_model(member, &[])),
        })
    }

    async fn update_member(
        &self,
        req: &UpdateMemberRequest,
    ) -> Result<ApiResponse<MemberResponse>, ServiceError> {
        let member_id = req
            .member_id
            .ok_or_else(|| ServiceError::Validation(vec!["member_id is required".into()]))?;

        info!("🔄 Updating member: {member_id}");

        let existing = self
            .query
            .find_by_id(member_id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        // a blank password on the edit form keeps the stored hash
        let password = if req.password.is_empty() {
            existing.password.clone()
        } else {
            self.hash.hash_password(&req.password).await?
        };

        let changes = MemberChanges {
            member_id,
            name: req.name.clone(),
            sex: req.sex,
            email: req.email.clone(),
            password,
            avatar: req.avatar.clone().or(existing.avatar),
            is_active: req.is_active,
        };

        let member = self.command.update_member(&changes).await?;

        info!("✅ Member updated: {}", member.member_id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Member updated successfully".to_string(),
            data: self.resolve_avatar(MemberResponse::from_model(member, &[])),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::member::repository::{
        MemberCommandRepositoryTrait, MemberQueryRepositoryTrait,
    };
    use crate::domain::requests::member::FindAllMembers;
    use crate::model::{member::Member as MemberModel, score_log::ScoreLog as ScoreLogModel};
    use shared::abstract_trait::HashingTrait;
    use std::sync::{Arc, Mutex};

    struct FakeHashing;

    #[async_trait]
    impl HashingTrait for FakeHashing {
        async fn hash_password(&self, password: &str) -> Result<String, ServiceError> {
            Ok(format!("hashed:{password}"))
        }
    }

    #[derive(Default)]
    struct MockMemberStore {
        members: Mutex<Vec<MemberModel>>,
    }

    impl MockMemberStore {
        fn with_member(member: MemberModel) -> Arc<Self> {
            Arc::new(Self {
                members: Mutex::new(vec![member]),
            })
        }
    }

    #[async_trait]
    impl MemberCommandRepositoryTrait for MockMemberStore {
        async fn create_member(&self, new: &NewMember) -> Result<MemberModel, RepositoryError> {
            let mut members = self.members.lock().unwrap();

            let member = MemberModel {
                member_id: members.len() as i32 + 1,
                name: new.name.clone(),
                sex: new.sex,
                email: new.email.clone(),
                password: new.password.clone(),
                avatar: new.avatar.clone(),
                github_name: None,
                qq_name: None,
                weibo_name: None,
                score_all: 0,
                score_now: 0,
                login_count: 0,
                is_active: new.is_active,
                active_token: new.active_token.clone(),
                created_at: None,
                updated_at: None,
            };

            members.push(member.clone());
            Ok(member)
        }

        async fn update_member(
            &self,
            changes: &MemberChanges,
        ) -> Result<MemberModel, RepositoryError> {
            let mut members = self.members.lock().unwrap();

            let member = members
                .iter_mut()
                .find(|m| m.member_id == changes.member_id)
                .ok_or(RepositoryError::NotFound)?;

            member.name = changes.name.clone();
            member.sex = changes.sex;
            member.email = changes.email.clone();
            member.password = changes.password.clone();
            member.avatar = changes.avatar.clone();
            member.is_active = changes.is_active;

            Ok(member.clone())
        }
    }

    #[async_trait]
    impl MemberQueryRepositoryTrait for MockMemberStore {
        async fn find_all(
            &self,
            _req: &FindAllMembers,
        ) -> Result<(Vec<MemberModel>, i64), RepositoryError> {
            let members = self.members.lock().unwrap().clone();
            let total = members.len() as i64;
            Ok((members, total))
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<MemberModel>, RepositoryError> {
            Ok(self
                .members
                .lock()
                .unwrap()
                .iter()
                .find(|m| m.member_id == id)
                .cloned())
        }

        async fn find_score_logs(
            &self,
            _member_id: i32,
        ) -> Result<Vec<ScoreLogModel>, RepositoryError> {
            Ok(Vec::new())
        }
    }

    fn service_with(store: Arc<MockMemberStore>) -> MemberCommandService {
        MemberCommandService::new(MemberCommandServiceDeps {
            command: store.clone(),
            query: store,
            hash: Arc::new(FakeHashing),
            storage_base_url: "http://localhost/storage".to_string(),
        })
    }

    fn existing_member() -> MemberModel {
        MemberModel {
            member_id: 1,
            name: "张三".to_string(),
            sex: 1,
            email: "zhangsan@example.com".to_string(),
            password: "hashed:old-secret".to_string(),
            avatar: Some("avatars/1.png".to_string()),
            github_name: None,
            qq_name: None,
            weibo_name: None,
            score_all: 0,
            score_now: 0,
            login_count: 0,
            is_active: true,
            active_token: "token".to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn create_hashes_password_and_generates_token() {
        let store = Arc::new(MockMemberStore::default());
        let service = service_with(store.clone());

        let req = CreateMemberRequest {
            name: "李四".to_string(),
            sex: 0,
            email: "lisi@example.com".to_string(),
            password: "secret-1".to_string(),
            avatar: Some("avatars/2.png".to_string()),
            is_active: false,
        };

        let response = service.create_member(&req).await.unwrap();

        let members = store.members.lock().unwrap();
        assert_eq!(members[0].password, "hashed:secret-1");
        assert_eq!(members[0].active_token.len(), 60);
        // the stored path stays relative, the response carries the full URL
        assert_eq!(members[0].avatar.as_deref(), Some("avatars/2.png"));
        assert_eq!(
            response.data.avatar.as_deref(),
            Some("http://localhost/storage/avatars/2.png")
        );
    }

    #[tokio::test]
    async fn blank_password_keeps_stored_hash() {
        let store = MockMemberStore::with_member(existing_member());
        let service = service_with(store.clone());

        let req = UpdateMemberRequest {
            member_id: Some(1),
            name: "张三".to_string(),
            sex: 1,
            email: "zhangsan@example.com".to_string(),
            password: String::new(),
            avatar: None,
            is_active: true,
        };

        service.update_member(&req).await.unwrap();

        let members = store.members.lock().unwrap();
        assert_eq!(members[0].password, "hashed:old-secret");
    }

    #[tokio::test]
    async fn new_password_is_rehashed() {
        let store = MockMemberStore::with_member(existing_member());
        let service = service_with(store.clone());

        let req = UpdateMemberRequest {
            member_id: Some(1),
            name: "张三".to_string(),
            sex: 1,
            email: "zhangsan@example.com".to_string(),
            password: "new-secret".to_string(),
            avatar: None,
            is_active: true,
        };

        service.update_member(&req).await.unwrap();

        let members = store.members.lock().unwrap();
        assert_eq!(members[0].password, "hashed:new-secret");
    }

    #[tokio::test]
    async fn updating_a_missing_member_is_not_found() {
        let store = Arc::new(MockMemberStore::default());
        let service = service_with(store);

        let req = UpdateMemberRequest {
            member_id: Some(42),
            name: "nobody".to_string(),
            sex: 1,
            email: "nobody@example.com".to_string(),
            password: String::new(),
            avatar: None,
            is_active: false,
        };

        let result = service.update_member(&req).await;

        assert!(matches!(
            result,
            Err(ServiceError::Repo(RepositoryError::NotFound))
        ));
    }
}
