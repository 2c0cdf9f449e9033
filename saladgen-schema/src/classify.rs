//! Shape predicates and per-item classification.

use crate::error::SchemaError;
use crate::items::SchemaItem;
use crate::parser::{parse_enum, parse_record};
use crate::types::{PrimitiveType, SALAD_NS};
use serde_json::Value;

/// Returns the `type` tag of an inline declaration, with the Salad
/// namespace prefix removed.
#[must_use]
pub fn kind_tag(value: &Value) -> Option<&str> {
    let tag = value.get("type")?.as_str()?;
    Some(tag.strip_prefix(SALAD_NS).unwrap_or(tag))
}

fn has_kind(value: &Value, kind: &str) -> bool {
    kind_tag(value) == Some(kind)
}

/// Checks if the value is a primitive tag.
#[must_use]
pub fn is_primitive(value: &Value) -> bool {
    value.as_str().and_then(PrimitiveType::from_tag).is_some()
}

/// Checks if the value is a record schema.
#[must_use]
pub fn is_record(value: &Value) -> bool {
    has_kind(value, "record")
}

/// Checks if the value is an enum schema with a symbol sequence.
#[must_use]
pub fn is_enum(value: &Value) -> bool {
    has_kind(value, "enum") && value.get("symbols").is_some_and(Value::is_array)
}

/// Checks if the value is a documentation item.
#[must_use]
pub fn is_documentation(value: &Value) -> bool {
    has_kind(value, "documentation")
}

/// Checks if the value is an array schema.
///
/// `items` may be a sequence whose elements are valid shapes or unions, or a
/// single valid shape.
#[must_use]
pub fn is_array_schema(value: &Value) -> bool {
    if !has_kind(value, "array") {
        return false;
    }
    match value.get("items") {
        Some(Value::Array(items)) => items.iter().all(|i| is_valid_shape(i) || is_union(i)),
        Some(items) => is_valid_shape(items),
        None => false,
    }
}

/// Checks if the value is any of the simple shapes: a primitive, a record,
/// an enum, an array schema or a bare identifier.
#[must_use]
pub fn is_valid_shape(value: &Value) -> bool {
    value.is_string() || is_record(value) || is_enum(value) || is_array_schema(value)
}

/// Checks if the value is a sequence of valid shapes.
#[must_use]
pub fn is_union(value: &Value) -> bool {
    value
        .as_array()
        .is_some_and(|members| members.iter().all(is_valid_shape))
}

/// Classifies one top-level item.
///
/// # Errors
/// Returns `SchemaError::UnrecognizedShape` if the item matches no
/// recognized shape, or a parse error from the record/enum parsers.
pub fn classify(value: &Value) -> Result<SchemaItem, SchemaError> {
    if is_documentation(value) {
        return Ok(SchemaItem::Documentation);
    }
    if is_record(value) {
        return parse_record(value).map(SchemaItem::Record);
    }
    if is_enum(value) {
        return parse_enum(value).map(SchemaItem::Enum);
    }
    if is_array_schema(value) {
        return Ok(SchemaItem::Array(value.clone()));
    }
    if let Some(tag) = value.as_str() {
        return Ok(match PrimitiveType::from_tag(tag) {
            Some(prim) => SchemaItem::Primitive(prim),
            None => SchemaItem::Reference(tag.to_string()),
        });
    }
    if let Some(members) = value.as_array() {
        if members.iter().all(is_valid_shape) {
            return Ok(SchemaItem::Union(members.clone()));
        }
    }
    Err(SchemaError::unrecognized(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_tag_strips_salad_namespace() {
        assert_eq!(kind_tag(&json!({"type": "record"})), Some("record"));
        assert_eq!(
            kind_tag(&json!({"type": "https://w3id.org/cwl/salad#enum"})),
            Some("enum")
        );
        assert_eq!(kind_tag(&json!({"type": ["a"]})), None);
        assert_eq!(kind_tag(&json!("record")), None);
    }

    #[test]
    fn test_is_primitive() {
        assert!(is_primitive(&json!("string")));
        assert!(is_primitive(&json!("http://www.w3.org/2001/XMLSchema#long")));
        assert!(!is_primitive(&json!("ns#Foo")));
        assert!(!is_primitive(&json!({"type": "string"})));
    }

    #[test]
    fn test_is_enum_requires_symbols() {
        assert!(is_enum(&json!({"type": "enum", "symbols": []})));
        assert!(!is_enum(&json!({"type": "enum"})));
        assert!(!is_enum(&json!({"type": "enum", "symbols": "a"})));
    }

    #[test]
    fn test_is_array_schema_with_sequence_items() {
        assert!(is_array_schema(&json!({"type": "array", "items": ["string", "ns#Foo"]})));
        assert!(is_array_schema(&json!({"type": "array", "items": [["null", "int"]]})));
        assert!(!is_array_schema(&json!({"type": "array", "items": [42]})));
        assert!(!is_array_schema(&json!({"type": "array"})));
    }

    // Scalar `items` is accepted here just as the type resolver accepts it.
    #[test]
    fn test_is_array_schema_with_scalar_items() {
        assert!(is_array_schema(&json!({"type": "array", "items": "string"})));
        assert!(is_array_schema(
            &json!({"type": "array", "items": {"type": "enum", "symbols": ["a"]}})
        ));
        assert!(!is_array_schema(&json!({"type": "array", "items": 1})));
    }

    #[test]
    fn test_is_union() {
        assert!(is_union(&json!(["null", "string", {"type": "record", "name": "ns#R"}])));
        assert!(!is_union(&json!(["null", 3])));
        assert!(!is_union(&json!("string")));
    }

    #[test]
    fn test_classify_shapes() {
        let record = json!({"type": "record", "name": "ns#Foo"});
        assert_eq!(classify(&record).unwrap().kind(), "record");

        let enum_item = json!({"type": "enum", "name": "ns#E", "symbols": ["ns#E/a"]});
        assert_eq!(classify(&enum_item).unwrap().kind(), "enum");

        let doc = json!({"type": "documentation", "name": "ns#Intro"});
        assert_eq!(classify(&doc).unwrap().kind(), "documentation");

        let array = json!({"type": "array", "items": ["string"]});
        assert_eq!(classify(&array).unwrap().kind(), "array");

        assert_eq!(classify(&json!(["null", "int"])).unwrap().kind(), "union");
        assert_eq!(classify(&json!("int")).unwrap().kind(), "primitive");
        assert_eq!(classify(&json!("ns#Foo")).unwrap().kind(), "reference");
    }

    #[test]
    fn test_classify_rejects_unknown_shapes() {
        for item in [json!({"type": "map"}), json!(42), json!([1, 2]), json!({"name": "x"})] {
            let err = classify(&item).unwrap_err();
            assert!(matches!(err, SchemaError::UnrecognizedShape { .. }), "{item}");
        }
    }
}
