//! Root status handler

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use tracing::info;

use crate::dto::StatusResponse;
use crate::AppState;

const STATUS_OK: &str = "ok";

/// Reports the API identity and the status of every configured database
///
/// Always answers 200; a database that cannot be reached reports its error
/// message instead of "ok".
pub async fn root(State(state): State<AppState>) -> Json<StatusResponse> {
    info!("Status requested");

    let mut database_status = BTreeMap::new();
    for name in state.registry.names() {
        let status = match state.registry.get(name) {
            Ok(pool) => match infra_db::ping(&pool).await {
                Ok(()) => STATUS_OK.to_string(),
                Err(e) => e.to_string(),
            },
            Err(e) => e.to_string(),
        };
        database_status.insert(name.to_string(), status);
    }

    Json(StatusResponse {
        message: state.config.message.clone(),
        author: state.config.author.clone(),
        database_status,
    })
}
