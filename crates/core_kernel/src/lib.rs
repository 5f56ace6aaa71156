//! Core Kernel - Foundational types shared by every layer of the service
//!
//! This crate provides the building blocks the HTTP and database layers agree on:
//! - Resource descriptors tying an entity to its table and logical database
//! - Typed field values that can be bound into parameterized queries
//! - Presence validation for create requests

pub mod error;
pub mod resource;
pub mod validation;
pub mod value;

pub use error::CoreError;
pub use resource::Resource;
pub use validation::require_fields;
pub use value::FieldValue;
