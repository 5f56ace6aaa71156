//! Core error types used across the system

use thiserror::Error;

/// Core error type for the kernel
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        CoreError::Validation(message.into())
    }

    /// Field names carried by the error, empty for free-form validation failures
    pub fn fields(&self) -> &[String] {
        match self {
            CoreError::MissingFields(fields) => fields,
            CoreError::Validation(_) => &[],
        }
    }
}
