use crate::model::category::Category as CategoryModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CategoryResponse {
    pub id: i32,
    pub name: String,
}

impl From<CategoryModel> for CategoryResponse {
    fn from(value: CategoryModel) -> Self {
        CategoryResponse {
            id: value.category_id,
            name: value.name,
        }
    }
}
