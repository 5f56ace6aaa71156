//! Presence validation for request payloads

use validator::Validate;

use crate::error::CoreError;

/// Checks that every required field of a create payload is present.
///
/// # Errors
///
/// Returns `CoreError::MissingFields` listing the absent fields in
/// alphabetical order.
pub fn require_fields<T: Validate>(fields: &T) -> Result<(), CoreError> {
    fields.validate().map_err(|errors| {
        let mut missing: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();
        missing.sort();
        CoreError::MissingFields(missing)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Payload {
        #[validate(required)]
        name: Option<String>,
        #[validate(required)]
        age: Option<i32>,
    }

    #[test]
    fn test_complete_payload_passes() {
        let payload = Payload {
            name: Some("Ana".to_string()),
            age: Some(30),
        };
        assert!(require_fields(&payload).is_ok());
    }

    #[test]
    fn test_missing_fields_are_sorted() {
        let payload = Payload { name: None, age: None };
        let err = require_fields(&payload).unwrap_err();
        assert_eq!(err.fields(), ["age".to_string(), "name".to_string()]);
    }

    #[test]
    fn test_empty_string_counts_as_present() {
        let payload = Payload {
            name: Some(String::new()),
            age: Some(1),
        };
        assert!(require_fields(&payload).is_ok());
    }
}
