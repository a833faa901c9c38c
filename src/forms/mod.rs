//! Validation of list-page query parameters.

use thiserror::Error;
use validator::ValidationErrors;

pub mod catalog;

#[derive(Debug, Error)]
/// Errors that can occur when processing request parameters.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),
}
