//! Test Utilities Crate
//!
//! Provides shared test infrastructure and fixtures for the questoes/filmes
//! test suite.
//!
//! # Modules
//!
//! - `fixtures`: Request payloads for questions and movies
//! - `database`: Postgres test container with the catalog schema applied

pub mod database;
pub mod fixtures;

pub use database::*;
pub use fixtures::*;
