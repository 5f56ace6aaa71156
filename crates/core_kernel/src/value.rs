//! Column values that can be bound into parameterized queries
//!
//! Every variant carries an `Option` so that an absent field keeps its SQL
//! type when bound as `NULL`.

use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(Option<String>),
    Integer(Option<i32>),
    Timestamp(Option<DateTime<Utc>>),
}

impl FieldValue {
    /// Returns true when the request did not provide this field
    pub fn is_null(&self) -> bool {
        match self {
            FieldValue::Text(v) => v.is_none(),
            FieldValue::Integer(v) => v.is_none(),
            FieldValue::Timestamp(v) => v.is_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_null() {
        assert!(FieldValue::Text(None).is_null());
        assert!(FieldValue::Integer(None).is_null());
        assert!(FieldValue::Timestamp(None).is_null());
        assert!(!FieldValue::Text(Some("Algebra".to_string())).is_null());
        assert!(!FieldValue::Integer(Some(0)).is_null());
        assert!(!FieldValue::Timestamp(Some(Utc::now())).is_null());
    }
}
