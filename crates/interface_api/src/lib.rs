//! HTTP API Layer
//!
//! This crate provides the REST API for quiz questions and movies using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: one generic handler per CRUD operation, instantiated per resource
//! - **Registry**: handlers resolve each resource's logical database through the
//!   shared [`PoolRegistry`] held in [`AppState`]
//! - **Middleware**: request ids, tracing, request logging
//! - **Error Handling**: consistent JSON error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, config::ApiConfig};
//!
//! let config = ApiConfig::from_env()?;
//! let registry = Arc::new(PoolRegistry::new(config.database_configs()));
//! let app = create_router(registry, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{middleware as axum_middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_catalog::{Movie, Question};
use infra_db::{PoolRegistry, TableResource};

use crate::config::ApiConfig;
use crate::handlers::{health, resource, status};
use crate::middleware::request_logging;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<PoolRegistry>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `registry` - Connection pools by logical database name
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(registry: Arc<PoolRegistry>, config: ApiConfig) -> Router {
    let state = AppState { registry, config };

    Router::new()
        .route("/", get(status::root))
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .merge(resource_routes::<Question>("/questoes"))
        .merge(resource_routes::<Movie>("/filmes"))
        .layer(axum_middleware::from_fn(request_logging))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Collection and item routes for one resource
fn resource_routes<R: TableResource>(path: &str) -> Router<AppState> {
    Router::new()
        .route(path, get(resource::list::<R>).post(resource::create::<R>))
        .route(
            &format!("{}/:id", path),
            get(resource::get::<R>)
                .put(resource::update::<R>)
                .delete(resource::delete::<R>),
        )
}
