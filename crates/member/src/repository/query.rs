use crate::{
    abstract_trait::member::repository::MemberQueryRepositoryTrait,
    domain::requests::member::FindAllMembers,
    model::{member::Member as MemberModel, score_log::ScoreLog as ScoreLogModel},
};
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use sqlx::Row;
use tracing::{error, info};

#[derive(Clone)]
pub struct MemberQueryRepository {
    db: ConnectionPool,
}

impl MemberQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MemberQueryRepositoryTrait for MemberQueryRepository {
    async fn find_all(
        &self,
        req: &FindAllMembers,
    ) -> Result<(Vec<MemberModel>, i64), RepositoryError> {
        info!(
            "🔍 Fetching members | name: {:?}, email: {:?}",
            req.name, req.email
        );

        let mut conn = self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {:?}", e);
            RepositoryError::from(e)
        })?;

        let limit = req.page_size as i64;
        let offset = ((req.page - 1).max(0) as i64) * limit;

        let name_pattern = if req.name.trim().is_empty() {
            None
        } else {
            Some(req.name.as_str())
        };

        let email_pattern = if req.email.trim().is_empty() {
            None
        } else {
            Some(req.email.as_str())
        };

        // newest members first, the admin grid ordering
        let rows = sqlx::query(
            r#"
            SELECT
                m.member_id,
                m.name,
                m.sex,
                m.email,
                m.password,
                m.avatar,
                m.github_name,
                m.qq_name,
                m.weibo_name,
                m.score_all,
                m.score_now,
                m.login_count,
                m.is_active,
                m.active_token,
                m.created_at,
                m.updated_at,
                COUNT(*) OVER() AS total_count
            FROM members m
            WHERE ($1::TEXT IS NULL OR m.name ILIKE '%' || $1 || '%')
              AND ($2::TEXT IS NULL OR m.email ILIKE '%' || $2 || '%')
            ORDER BY m.created_at DESC, m.member_id DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(name_pattern)
        .bind(email_pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch members: {:?}", e);
            RepositoryError::from(e)
        })?;

        let total = rows
            .first()
            .map(|r| r.try_get::<i64, _>("total_count").unwrap_or(0))
            .unwrap_or(0);

        let members = rows
            .into_iter()
            .map(|r| {
                Ok(MemberModel {
                    member_id: r.try_get("member_id")?,
                    name: r.try_get("name")?,
                    sex: r.try_get("sex")?,
                    email: r.try_get("email")?,
                    password: r.try_get("password")?,
                    avatar: r.try_get("avatar")?,
                    github_name: r.try_get("github_name")?,
                    qq_name: r.try_get("qq_name")?,
                    weibo_name: r.try_get("weibo_name")?,
                    score_all: r.try_get("score_all")?,
                    score_now: r.try_get("score_now")?,
                    login_count: r.try_get("login_count")?,
                    is_active: r.try_get("is_active")?,
                    active_token: r.try_get("active_token")?,
                    created_at: r.try_get("created_at")?,
                    updated_at: r.try_get("updated_at")?,
                })
            })
            .collect::<Result<Vec<_>, sqlx::Error>>()
            .map_err(RepositoryError::from)?;

        Ok((members, total))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<MemberModel>, RepositoryError> {
        info!("🆔 Fetching member by ID: {id}");

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, MemberModel>(
            r#"
            SELECT
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
            FROM members
            WHERE member_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn find_score_logs(
        &self,
        member_id: i32,
    ) -> Result<Vec<ScoreLogModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ScoreLogModel>(
            r#"
            SELECT
                log_id,
                member_id,
                description,
                score,
                created_at
            FROM score_logs
            WHERE member_id = $1
            ORDER BY created_at DESC, log_id DESC
            "#,
        )
        .bind(member_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }
}
