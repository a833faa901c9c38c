//! Page services: parse the request, call the content repository and build
//! the view models handed to the templates.

use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::forms::FormError;

pub mod catalog;
pub mod detail;
pub mod main;

#[derive(Debug, Error, PartialEq)]
pub enum ServiceError {
    #[error("resource not found")]
    NotFound,

    #[error("invalid request: {0}")]
    Form(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<TypeConstraintError> for ServiceError {
    fn from(err: TypeConstraintError) -> Self {
        log::debug!("Rejected resource key: {err}");
        ServiceError::NotFound
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Form(err.to_string())
    }
}
