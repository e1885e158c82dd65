use crate::{
    abstract_trait::member::repository::{MemberChanges, MemberCommandRepositoryTrait, NewMember},
    model::member::Member as MemberModel,
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

const MEMBER_COLUMNS: &str = r#"
    member_id,
    name,
    sex,
    email,
    password,
    avatar,
    github_name,
    qq_name,
    weibo_name,
    score_all,
    score_now,
    login_count,
    is_active,
    active_token,
    created_at,
    updated_at
"#;

#[derive(Clone)]
pub struct MemberCommandRepository {
    db: ConnectionPool,
}

impl MemberCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    fn map_db_error(e: sqlx::Error) -> RepositoryError {
        if let sqlx::Error::Database(db_err) = &e {
            if db_err.code().as_deref() == Some("23505") {
                return RepositoryError::AlreadyExists(db_err.message().to_string());
            }
        }

        RepositoryError::from(e)
    }
}

#[async_trait]
impl MemberCommandRepositoryTrait for MemberCommandRepository {
    async fn create_member(&self, new: &NewMember) -> Result<MemberModel, RepositoryError> {
        info!("🏗️ Creating member: {}", new.email);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            r#"
            INSERT INTO members (
                name,
                sex,
                email,
                password,
                avatar,
                is_active,
                active_token,
                created_at,
                updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
            RETURNING {MEMBER_COLUMNS}
            "#
        );

        let member = sqlx::query_as::<_, MemberModel>(&sql)
            .bind(&new.name)
            .bind(new.sex)
            .bind(&new.email)
            .bind(&new.password)
            .bind(&new.avatar)
            .bind(new.is_active)
            .bind(&new.active_token)
            .fetch_one(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to insert member: {:?}", e);
                Self::map_db_error(e)
            })?;

        Ok(member)
    }

    async fn update_member(&self, changes: &MemberChanges) -> Result<MemberModel, RepositoryError> {
        info!("🔄 Updating member: {}", changes.member_id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let sql = format!(
            r#"
            UPDATE members
            SET name = $2,
                sex = $3,
                email = $4,
                password = $5,
                avatar = $6,
                is_active = $7,
                updated_at = CURRENT_TIMESTAMP
            WHERE member_id = $1
            RETURNING {MEMBER_COLUMNS}
            "#
        );

        let member = sqlx::query_as::<_, MemberModel>(&sql)
            .bind(changes.member_id)
            .bind(&changes.name)
            .bind(changes.sex)
            .bind(&changes.email)
            .bind(&changes.password)
            .bind(&changes.avatar)
            .bind(changes.is_active)
            .fetch_optional(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to update member: {:?}", e);
                Self::map_db_error(e)
            })?;

        member.ok_or(RepositoryError::NotFound)
    }
}
