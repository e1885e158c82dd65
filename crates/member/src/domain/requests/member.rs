use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, IntoParams, Clone)]
pub struct FindAllMembers {
    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_page_size")]
    pub page_size: i32,

    /// LIKE filter on the member name
    #[serde(default)]
    pub name: String,

    /// LIKE filter on the email address
    #[serde(default)]
    pub email: String,
}

fn default_page() -> i32 {
    1
}

fn default_page_size() -> i32 {
    10
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct CreateMemberRequest {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(range(min = 0, max = 1))]
    pub sex: i16,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 6))]
    pub password: String,

    #[serde(default)]
    pub avatar: Option<String>,

    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema, Clone)]
pub struct UpdateMemberRequest {
    pub member_id: Option<i32>,

    #[validate(length(min = 1))]
    pub name: String,

    #[validate(range(min = 0, max = 1))]
    pub sex: i16,

    #[validate(email)]
    pub email: String,

    /// empty keeps the stored password hash
    #[serde(default)]
    pub password: String,

    #[serde(default)]
    pub avatar: Option<String>,

    #[serde(default)]
    pub is_active: bool,
}
