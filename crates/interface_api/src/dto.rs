//! Response bodies that are not entities

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Body returned after a successful delete
#[derive(Debug, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub message: String,
    pub id: i32,
}

/// Body of the root status endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub message: String,
    pub author: String,
    /// "ok" or the error reported by each configured database
    pub database_status: BTreeMap<String, String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
