//! Application error types

use thiserror::Error;

/// Application-level error
#[derive(Debug, Error)]
pub enum AppError {
    /// Required fields are missing or invalid; the list is user-facing
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Service not found: {0}")]
    ServiceNotFound(String),

    #[error("Image error: {0}")]
    Image(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Validation error naming the offending fields
    pub fn missing_fields(fields: &[&str]) -> Self {
        AppError::Validation(format!("missing required fields: {}", fields.join(", ")))
    }
}

pub type AppResult<T> = Result<T, AppError>;
