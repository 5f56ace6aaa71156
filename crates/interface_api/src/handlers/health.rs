//! Health check handlers

use axum::{extract::State, Json};

use crate::dto::HealthResponse;
use crate::{error::ApiError, AppState};

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness check (every configured database must answer)
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, ApiError> {
    for name in state.registry.names() {
        let pool = state
            .registry
            .get(name)
            .map_err(|e| ApiError::Unavailable(format!("{}: {}", name, e)))?;
        infra_db::ping(&pool)
            .await
            .map_err(|e| ApiError::Unavailable(format!("{}: {}", name, e)))?;
    }

    Ok(Json(HealthResponse {
        status: "ready".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}
