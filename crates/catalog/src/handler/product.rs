use crate::{
    abstract_trait::product::service::{DynProductCommandService, DynProductQueryService},
    domain::{
        requests::product::{FindAllProducts, SubmitProductRequest},
        response::{
            api::{ApiResponse, ApiResponsePagination},
            product::{ProductFullResponse, ProductResponse},
        },
    },
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use shared::{errors::HttpError, middleware::SimpleValidatedJson};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "Product",
    params(FindAllProducts),
    responses(
        (status = 200, description = "List of products", body = ApiResponsePagination<Vec<ProductResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_products(
    Extension(service): Extension<DynProductQueryService>,
    Query(params): Query<FindAllProducts>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/products/{uuid}",
    tag = "Product",
    params(("uuid" = String, Path, description = "Product uuid")),
    responses(
        (status = 200, description = "Product with detail, images and attributes", body = ApiResponse<ProductFullResponse>),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_product(
    Extension(service): Extension<DynProductQueryService>,
    Path(uuid): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_uuid(&uuid).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/products",
    tag = "Product",
    request_body = SubmitProductRequest,
    responses(
        (status = 201, description = "Product created", body = ApiResponse<ProductResponse>),
        (status = 400, description = "Validation failed"),
        (status = 422, description = "Malformed attribute set"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn submit_product(
    Extension(service): Extension<DynProductCommandService>,
    SimpleValidatedJson(req): SimpleValidatedJson<SubmitProductRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.submit_product(&req).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/products", get(get_products))
        .route("/api/products/{uuid}", get(get_product))
        .route("/api/products", post(submit_product))
        .layer(Extension(app_state.di_container.product_query_dyn()))
        .layer(Extension(app_state.di_container.product_command_dyn()))
}
