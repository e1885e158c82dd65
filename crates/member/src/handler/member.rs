use crate::{
    abstract_trait::member::service::{DynMemberCommandService, DynMemberQueryService},
    domain::{
        requests::member::{CreateMemberRequest, FindAllMembers, UpdateMemberRequest},
        response::{
            api::{ApiResponse, ApiResponsePagination},
            member::{MemberDetailResponse, MemberResponse},
        },
    },
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use shared::{errors::HttpError, middleware::SimpleValidatedJson};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/members",
    tag = "Member",
    params(FindAllMembers),
    responses(
        (status = 200, description = "Member grid page", body = ApiResponsePagination<Vec<MemberResponse>>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_members(
    Extension(service): Extension<DynMemberQueryService>,
    Query(params): Query<FindAllMembers>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all(&params).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/members/{id}",
    tag = "Member",
    params(("id" = i32, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Member with score history", body = ApiResponse<MemberDetailResponse>),
        (status = 404, description = "Member not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_member(
    Extension(service): Extension<DynMemberQueryService>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/members",
    tag = "Member",
    request_body = CreateMemberRequest,
    responses(
        (status = 201, description = "Member created", body = ApiResponse<MemberResponse>),
        (status = 400, description = "Validation failed"),
        (status = 409, description = "Name or email already taken"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_member(
    Extension(service): Extension<DynMemberCommandService>,
    SimpleValidatedJson(req): SimpleValidatedJson<CreateMemberRequest>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.create_member(&req).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    put,
    path = "/api/members/{id}",
    tag = "Member",
    params(("id" = i32, Path, description = "Member ID")),
    request_body = UpdateMemberRequest,
    responses(
        (status = 200, description = "Member updated", body = ApiResponse<MemberResponse>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Member not found"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_member(
    Extension(service): Extension<DynMemberCommandService>,
    Path(id): Path<i32>,
    SimpleValidatedJson(mut req): SimpleValidatedJson<UpdateMemberRequest>,
) -> Result<impl IntoResponse, HttpError> {
    req.member_id = Some(id);

    let response = service.update_member(&req).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn member_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/members", get(get_members))
        .route("/api/members/{id}", get(get_member))
        .route("/api/members", post(create_member))
        .route("/api/members/{id}", put(update_member))
        .layer(Extension(app_state.di_container.member_query_dyn()))
        .layer(Extension(app_state.di_container.member_command_dyn()))
}
