//! Form definitions backing the directory routes.

use thiserror::Error;
use validator::ValidationErrors;

pub mod auth;
pub mod main;
pub mod name;
pub mod tools;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("invalid name")]
    InvalidName,

    #[error("invalid gender")]
    InvalidGender,

    #[error("invalid popularity value")]
    InvalidPopularity,

    #[error("csv error: {0}")]
    Csv(String),
}
