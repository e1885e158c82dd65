use crate::errors::repository::RepositoryError;
use bcrypt::BcryptError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("Malformed attribute set: {0}")]
    MalformedAttributeSet(String),

    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] BcryptError),

    #[error("Internal error: {0}")]
    Internal(String),
}
