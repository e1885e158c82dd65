use crate::model::{
    level::Level as LevelModel, member::Member as MemberModel, member::sex_label,
    score_log::ScoreLog as ScoreLogModel,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Truncates a display string to `limit` characters, Laravel `str_limit` style.
fn limit_str(s: &str, limit: usize) -> String {
    let chars: Vec<char> = s.chars().collect();

    if chars.len() <= limit {
        return s.to_string();
    }

    let mut out: String = chars[..limit].iter().collect();
    out.push_str("...");
    out
}

/// One row of the member grid, with the display transforms the admin screen
/// applies: sex label, shortened email and the level resolved from the
/// all-time score.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct MemberResponse {
    pub id: i32,
    pub name: String,
    pub sex: i16,
    pub sex_label: String,
    pub email: String,
    pub avatar: Option<String>,
    pub github_name: Option<String>,
    pub qq_name: Option<String>,
    pub weibo_name: Option<String>,
    pub level: Option<String>,
    pub score_all: i32,
    pub score_now: i32,
    pub login_count: i32,
    pub is_active: bool,
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
    #[serde(rename = "updated_at")]
    pub updated_at: Option<String>,
}

impl MemberResponse {
    /// Levels must be sorted by `min_score` descending; the first level whose
    /// threshold is reached wins.
    pub fn from_model(value: MemberModel, levels: &[LevelModel]) -> Self {
        let level = levels
            .iter()
            .find(|l| l.min_score <= value.score_all)
            .map(|l| l.name.clone());

        MemberResponse {
            id: value.member_id,
            name: value.name,
            sex: value.sex,
            sex_label: sex_label(value.sex).to_string(),
            email: limit_str(&value.email, 20),
            avatar: value.avatar,
            github_name: value.github_name,
            qq_name: value.qq_name,
            weibo_name: value.weibo_name,
            level,
            score_all: value.score_all,
            score_now: value.score_now,
            login_count: value.login_count,
            is_active: value.is_active,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ScoreLogResponse {
    pub description: String,
    pub score: i32,
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
}

impl From<ScoreLogModel> for ScoreLogResponse {
    fn from(value: ScoreLogModel) -> Self {
        ScoreLogResponse {
            description: value.description,
            score: value.score,
            created_at: value.created_at.map(|dt| dt.to_string()),
        }
    }
}

/// The member show view: the member plus their score history.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct MemberDetailResponse {
    #[serde(flatten)]
    pub member: MemberResponse,
    pub score_logs: Vec<ScoreLogResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member_with(score_all: i32, sex: i16, email: &str) -> MemberModel {
        MemberModel {
            member_id: 1,
            name: "张三".to_string(),
            sex,
            email: email.to_string(),
            password: "hash".to_string(),
            avatar: None,
            github_name: None,
            qq_name: None,
            weibo_name: None,
            score_all,
            score_now: 0,
            login_count: 3,
            is_active: true,
            active_token: "token".to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    fn levels() -> Vec<LevelModel> {
        // already sorted by min_score descending, as the repository returns them
        vec![
            LevelModel {
                level_id: 3,
                name: "黄金".to_string(),
                min_score: 1000,
                created_at: None,
                updated_at: None,
            },
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

    #[test]
    fn level_resolves_to_highest_reached_threshold() {
        let response = MemberResponse::from_model(member_with(150, 1, "a@b.com"), &levels());
        assert_eq!(response.level.as_deref(), Some("白银"));

        let response = MemberResponse::from_model(member_with(1000, 1, "a@b.com"), &levels());
        assert_eq!(response.level.as_deref(), Some("黄金"));
    }

    #[test]
    fn no_level_when_no_threshold_matches() {
        let only_gold = vec![levels().remove(0)];
        let response = MemberResponse::from_model(member_with(10, 1, "a@b.com"), &only_gold);
        assert_eq!(response.level, None);
    }

    #[test]
    fn sex_labels_cover_unknown_values() {
        assert_eq!(
            MemberResponse::from_model(member_with(0, 0, "a@b.com"), &[]).sex_label,
            "女"
        );
        assert_eq!(
            MemberResponse::from_model(member_with(0, 1, "a@b.com"), &[]).sex_label,
            "男"
        );
        assert_eq!(
            MemberResponse::from_model(member_with(0, 9, "a@b.com"), &[]).sex_label,
            "未知"
        );
    }

    #[test]
    fn long_emails_are_shortened_for_the_grid() {
        let response = MemberResponse::from_model(
            member_with(0, 1, "a.very.long.address@example.com"),
            &[],
        );
        assert_eq!(response.email, "a.very.long.address@...");
    }
}
