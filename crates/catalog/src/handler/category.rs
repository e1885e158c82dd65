use crate::{
    abstract_trait::category::DynCategoryQueryService,
    domain::response::{api::ApiResponse, category::CategoryResponse},
    state::AppState,
};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "Category",
    responses(
        (status = 200, description = "List of categories", body = ApiResponse<Vec<CategoryResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_categories(
    Extension(service): Extension<DynCategoryQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn category_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/categories", get(get_categories))
        .layer(Extension(app_state.di_container.category_query_dyn()))
}
