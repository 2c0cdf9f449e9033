//! Error types for schema item parsing and classification.

use thiserror::Error;

/// Error type for schema item operations.
///
/// Every variant is fatal to a generation run.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Identifier is not of the form `base#fragment` (or `base#Class/field`).
    #[error("malformed identifier '{identifier}': expected {expected}")]
    MalformedIdentifier {
        /// The offending identifier.
        identifier: String,
        /// Description of the expected form.
        expected: &'static str,
    },

    /// Top-level item matches none of the recognized shapes.
    #[error("unrecognized schema shape: {item}")]
    UnrecognizedShape {
        /// Compact JSON rendering of the item.
        item: String,
    },

    /// Missing required attribute.
    #[error("missing required attribute '{attribute}' on {element}")]
    MissingAttribute {
        /// Element description (item kind and name when known).
        element: String,
        /// Attribute name.
        attribute: String,
    },

    /// Invalid attribute value.
    #[error("invalid value '{value}' for attribute '{attribute}' on {element}")]
    InvalidAttribute {
        /// Element description.
        element: String,
        /// Attribute name.
        attribute: String,
        /// Invalid value.
        value: String,
    },

    /// Input text is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SchemaError {
    /// Creates a malformed identifier error.
    pub fn malformed(identifier: impl Into<String>, expected: &'static str) -> Self {
        Self::MalformedIdentifier {
            identifier: identifier.into(),
            expected,
        }
    }

    /// Creates an unrecognized shape error from the offending item.
    pub fn unrecognized(item: &serde_json::Value) -> Self {
        Self::UnrecognizedShape {
            item: item.to_string(),
        }
    }

    /// Creates a missing attribute error.
    pub fn missing_attr(element: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::MissingAttribute {
            element: element.into(),
            attribute: attribute.into(),
        }
    }

    /// Creates an invalid attribute error.
    pub fn invalid_attr(
        element: impl Into<String>,
        attribute: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidAttribute {
            element: element.into(),
            attribute: attribute.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_malformed_display() {
        let err = SchemaError::malformed("no-fragment", "'base#fragment'");
        assert_eq!(
            err.to_string(),
            "malformed identifier 'no-fragment': expected 'base#fragment'"
        );
    }

    #[test]
    fn test_unrecognized_renders_item() {
        let err = SchemaError::unrecognized(&json!({"type": 42}));
        assert!(err.to_string().contains(r#"{"type":42}"#));
    }

    #[test]
    fn test_json_error_from() {
        let parse_err = serde_json::from_str::<serde_json::Value>("[").unwrap_err();
        let err: SchemaError = parse_err.into();
        assert!(matches!(err, SchemaError::Json(_)));
    }
}
