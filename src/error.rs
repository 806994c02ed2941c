//! Decode failures surfaced to callers of the codec.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The payload text is not JSON, or is JSON but not an object.
    #[error("malformed festival payload: {reason}")]
    MalformedPayload { reason: String },

    /// Required keys absent from the payload, in canonical field order.
    #[error("festival payload is missing field(s): {}", .fields.join(", "))]
    MissingFields { fields: Vec<&'static str> },

    #[error("festival field `{field}` expected {expected}, found {found}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },
}

impl DecodeError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedPayload {
            reason: reason.into(),
        }
    }

    /// Fields this error blames, empty for malformed payloads.
    pub fn fields(&self) -> Vec<&'static str> {
        match self {
            Self::MalformedPayload { .. } => Vec::new(),
            Self::MissingFields { fields } => fields.clone(),
            Self::TypeMismatch { field, .. } => vec![*field],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_message_lists_every_field() {
        let err = DecodeError::MissingFields {
            fields: vec!["days", "type"],
        };
        assert_eq!(
            err.to_string(),
            "festival payload is missing field(s): days, type"
        );
        assert_eq!(err.fields(), vec!["days", "type"]);
    }

    #[test]
    fn type_mismatch_names_field_and_types() {
        let err = DecodeError::TypeMismatch {
            field: "days",
            expected: "integer",
            found: "string",
        };
        assert_eq!(
            err.to_string(),
            "festival field `days` expected integer, found string"
        );
    }

    #[test]
    fn malformed_blames_no_field() {
        assert!(DecodeError::malformed("eof").fields().is_empty());
    }
}
