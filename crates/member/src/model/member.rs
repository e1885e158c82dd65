use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const SEX_FEMALE: i16 = 0;
pub const SEX_MALE: i16 = 1;

/// Display label for a stored sex flag, unknown values render as 未知.
pub fn sex_label(sex: i16) -> &'static str {
    match sex {
        SEX_FEMALE => "女",
        SEX_MALE => "男",
        _ => "未知",
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Member {
    pub member_id: i32,
    pub name: String,
    pub sex: i16,
    pub email: String,
    pub password: String,
    pub avatar: Option<String>,
    pub github_name: Option<String>,
    pub qq_name: Option<String>,
    pub weibo_name: Option<String>,
    pub score_all: i32,
    pub score_now: i32,
    pub login_count: i32,
    pub is_active: bool,
    pub active_token: String,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}
