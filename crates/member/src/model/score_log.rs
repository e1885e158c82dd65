use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ScoreLog {
    pub log_id: i32,
    pub member_id: i32,
    pub description: String,
    pub score: i32,
    pub created_at: Option<NaiveDateTime>,
}
