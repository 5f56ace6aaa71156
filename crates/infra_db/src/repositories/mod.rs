//! Repository implementations
//!
//! A single repository serves every resource: the table name and the column
//! list come from the `core_kernel::Resource` descriptor, values are always
//! bound as query parameters.

pub mod resource;

pub use resource::{ResourceRepository, TableResource};
