//! Infrastructure Database Layer
//!
//! This crate provides the database infrastructure for the questoes/filmes
//! service on PostgreSQL using SQLx.
//!
//! # Architecture
//!
//! - **Pool**: connection pool configuration and lazy pool construction
//! - **Registry**: one pool per logical database name, created on first use
//! - **Repositories**: a single repository generic over `core_kernel::Resource`
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{DatabaseConfig, PoolRegistry, ResourceRepository};
//!
//! let registry = PoolRegistry::new([
//!     ("principal".to_string(), DatabaseConfig::new("postgres://localhost/questoes")),
//! ]);
//! let pool = registry.get("principal")?;
//! let repo = ResourceRepository::<Question>::new(pool);
//! let questions = repo.list().await?;
//! ```

pub mod error;
pub mod pool;
pub mod registry;
pub mod repositories;

pub use error::DatabaseError;
pub use pool::{create_lazy_pool, ping, DatabaseConfig, DatabasePool};
pub use registry::{LazyPoolFactory, PoolFactory, PoolRegistry};
pub use repositories::{ResourceRepository, TableResource};
