use crate::{
    abstract_trait::member::service::{DynMemberCommandService, DynMemberQueryService},
    repository::{LevelQueryRepository, MemberCommandRepository, MemberQueryRepository},
    service::{MemberCommandService, MemberQueryService, command::MemberCommandServiceDeps},
};
use anyhow::Result;
use shared::config::{ConnectionPool, Hashing};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub member_query: MemberQueryService,
    pub member_command: MemberCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("member_query", &"MemberQueryService")
            .field("member_command", &"MemberCommandService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, storage_base_url: String) -> Result<Self> {
        let member_query_repo = Arc::new(MemberQueryRepository::new(pool.clone()));
        let member_command_repo = Arc::new(MemberCommandRepository::new(pool.clone()));
        let level_query_repo = Arc::new(LevelQueryRepository::new(pool));

        let hashing = Arc::new(Hashing::new());

        let member_query = MemberQueryService::new(
            member_query_repo.clone(),
            level_query_repo,
            storage_base_url.clone(),
        );

        let member_command = MemberCommandService::new(MemberCommandServiceDeps {
            command: member_command_repo,
            query: member_query_repo,
            hash: hashing,
            storage_base_url,
        });

        Ok(Self {
            member_query,
            member_command,
        })
    }

    pub fn member_query_dyn(&self) -> DynMemberQueryService {
        Arc::new(self.member_query.clone())
    }

    pub fn member_command_dyn(&self) -> DynMemberCommandService {
        Arc::new(self.member_command.clone())
    }
}
