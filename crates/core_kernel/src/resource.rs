//! Resource descriptors
//!
//! A resource ties an entity to the table it lives in and the logical database
//! that table belongs to. The HTTP handlers and the repository are generic over
//! this trait, so adding a resource means describing it once instead of
//! copying a handler per route.
//!
//! # Example
//!
//! ```rust,ignore
//! impl Resource for Question {
//!     type Fields = QuestionFields;
//!
//!     const TABLE: &'static str = "questoes";
//!     const DATABASE: &'static str = "principal";
//!     const LABEL: &'static str = "question";
//!
//!     fn into_values(fields: QuestionFields) -> Vec<(&'static str, FieldValue)> {
//!         vec![("enunciado", FieldValue::Text(fields.enunciado))]
//!     }
//! }
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::Validate;

use crate::value::FieldValue;

pub trait Resource: Serialize + Send + Sync + Unpin + 'static {
    /// Writable fields as received from a client, every one optional.
    ///
    /// `Validate` must reject a value with any required field missing.
    type Fields: DeserializeOwned + Validate + Send + 'static;

    /// Table holding the rows
    const TABLE: &'static str;

    /// Logical database name resolved through the pool registry
    const DATABASE: &'static str;

    /// Human readable singular name used in messages and logs
    const LABEL: &'static str;

    /// Column/value pairs in column order; absent fields map to null values
    fn into_values(fields: Self::Fields) -> Vec<(&'static str, FieldValue)>;
}
