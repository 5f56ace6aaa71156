//! API error handling
//!
//! Every failure reaching a handler boundary becomes a JSON body
//! `{error, message, details?}`. Database details are logged, never returned.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, warn};

use core_kernel::CoreError;
use infra_db::DatabaseError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {message}")]
    Validation { message: String, fields: Vec<String> },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),
}

impl ApiError {
    /// Validation failure that is not tied to specific fields
    pub fn invalid(message: impl Into<String>) -> Self {
        ApiError::Validation {
            message: message.into(),
            fields: Vec::new(),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message, details) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None),
            ApiError::Validation { message, fields } => {
                let details = (!fields.is_empty()).then_some(fields);
                (StatusCode::BAD_REQUEST, "validation_error", message, details)
            }
            ApiError::Configuration(msg) => {
                error!(error = %msg, "Database configuration missing");
                (StatusCode::INTERNAL_SERVER_ERROR, "configuration_error", msg, None)
            }
            ApiError::Database(msg) => {
                error!(error = %msg, "Database query failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "database_error",
                    "Internal server error".to_string(),
                    None,
                )
            }
            ApiError::Unavailable(msg) => {
                warn!(error = %msg, "Service not ready");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "unavailable",
                    "Service unavailable".to_string(),
                    None,
                )
            }
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        ApiError::Validation {
            message: err.to_string(),
            fields: err.fields().to_vec(),
        }
    }
}

impl From<DatabaseError> for ApiError {
    fn from(err: DatabaseError) -> Self {
        match err {
            DatabaseError::NotFound(msg) => ApiError::NotFound(msg),
            DatabaseError::Configuration(msg) => ApiError::Configuration(msg),
            other => ApiError::Database(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        debug!(error = %rejection.body_text(), "Request body rejected");
        match rejection {
            JsonRejection::JsonDataError(_) => {
                ApiError::invalid("Request body has a field of the wrong type")
            }
            JsonRejection::JsonSyntaxError(_) => ApiError::invalid("Request body is not valid JSON"),
            JsonRejection::MissingJsonContentType(_) => {
                ApiError::invalid("Expected a request with Content-Type: application/json")
            }
            _ => ApiError::invalid("Failed to read request body"),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        debug!(error = %rejection.body_text(), "Path parameters rejected");
        ApiError::invalid("Id must be an integer")
    }
}
