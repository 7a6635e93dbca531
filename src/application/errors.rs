//! Application layer error types

use thiserror::Error;

/// Application layer errors
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("Generation error: {0}")]
    Generation(#[from] crate::generation::GenerationError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Association load error: {0}")]
    AssociationLoad(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Validation errors for requests
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Account cannot be empty")]
    EmptyAccount,

    #[error("Invalid account name: {0}")]
    InvalidAccount(String),

    #[error("Missing required field: {0}")]
    MissingField(String),
}
