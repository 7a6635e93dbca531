//! Error types for the generation domain

use thiserror::Error;

/// Errors that can occur while generating or synchronizing artifacts
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Template fetch error: {0}")]
    TemplateFetch(String),

    #[error("Substitution error: {source}")]
    Substitution {
        #[from]
        source: regex::Error,
    },

    #[error("Sync error: {0}")]
    Sync(String),

    #[error("Invalid scope: {0}")]
    InvalidScope(String),

    #[error("Invalid output target: {0}")]
    InvalidOutputTarget(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
