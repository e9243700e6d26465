//! Business logic behind the HTTP routes.
//!
//! Services are plain functions generic over the repository traits they need,
//! so they can run against [`crate::repository::DieselRepository`] or a mock.

use thiserror::Error;

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

pub mod auth;
pub mod criminals;
pub mod dashboard;
pub mod detected;
pub mod events;
pub mod training;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("unauthorized")]
    Unauthorized,

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Form(String),

    #[error("{0}")]
    TypeConstraint(String),

    #[error("repository error: {0}")]
    Repository(RepositoryError),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound(err.to_string()),
            RepositoryError::Conflict(message) => ServiceError::BadRequest(message),
            other => ServiceError::Repository(other),
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::MissingCredentials => ServiceError::BadRequest(err.to_string()),
            other => ServiceError::Form(other.to_string()),
        }
    }
}
