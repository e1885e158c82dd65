use crate::errors::{
    error::ErrorResponse, repository::RepositoryError, service::ServiceError,
};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    UnprocessableEntity(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(errors) => {
                HttpError::BadRequest(format!("Validation failed: {errors:?}"))
            }

            ServiceError::MalformedAttributeSet(msg) => HttpError::UnprocessableEntity(msg),

            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                RepositoryError::AlreadyExists(msg) => HttpError::Conflict(msg),
                RepositoryError::ForeignKey(msg) => {
                    HttpError::BadRequest(format!("Foreign key violation: {msg}"))
                }
                _ => HttpError::Internal("Repository error".into()),
            },

            ServiceError::Bcrypt(_) => HttpError::Internal("Internal hashing error".into()),

            ServiceError::Internal(msg) => HttpError::Internal(msg),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            HttpError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            status: "error".into(),
            message: msg,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_the_statuses_the_handlers_surface() {
        assert!(matches!(
            HttpError::from(ServiceError::Validation(vec!["name".into()])),
            HttpError::BadRequest(_)
        ));
        assert!(matches!(
            HttpError::from(ServiceError::MalformedAttributeSet("mismatch".into())),
            HttpError::UnprocessableEntity(_)
        ));
        assert!(matches!(
            HttpError::from(ServiceError::Repo(RepositoryError::NotFound)),
            HttpError::NotFound(_)
        ));
        assert!(matches!(
            HttpError::from(ServiceError::Repo(RepositoryError::AlreadyExists(
                "email taken".into()
            ))),
            HttpError::Conflict(_)
        ));
        assert!(matches!(
            HttpError::from(ServiceError::Repo(RepositoryError::ForeignKey(
                "category".into()
            ))),
            HttpError::BadRequest(_)
        ));
    }
}
