//! Schema item parser.
//!
//! This module turns already-loaded, import-resolved Schema Salad items
//! (plain JSON values) into classified [`SchemaItem`]s.

use crate::classify::classify;
use crate::error::SchemaError;
use crate::items::{EnumDef, FieldDef, RecordDef, SchemaItem};
use crate::name::{FieldName, NamespacedName, shortname};
use serde_json::Value;

/// Parses a JSON document holding the item sequence.
///
/// # Arguments
/// * `json` - JSON text; an array of items or a single item
///
/// # Returns
/// Classified items in input order.
///
/// # Errors
/// Returns `SchemaError` if the text is not JSON or any item is malformed.
pub fn parse_items(json: &str) -> Result<Vec<SchemaItem>, SchemaError> {
    let value: Value = serde_json::from_str(json)?;
    parse_value(&value)
}

/// Classifies every item of an already parsed item sequence.
///
/// A non-array value is treated as a sequence of one item.
///
/// # Errors
/// Returns the first `SchemaError` encountered.
pub fn parse_value(value: &Value) -> Result<Vec<SchemaItem>, SchemaError> {
    match value {
        Value::Array(items) => items.iter().map(classify).collect(),
        single => Ok(vec![classify(single)?]),
    }
}

/// Parses a record schema.
///
/// # Errors
/// Returns `SchemaError` on a missing or malformed name, base, specialization
/// or field.
pub fn parse_record(value: &Value) -> Result<RecordDef, SchemaError> {
    let raw_name = require_str(value, "name", "record")?;
    let name = NamespacedName::parse(raw_name)?;
    let element = format!("record '{raw_name}'");

    let is_abstract = match value.get("abstract") {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(other) => {
            return Err(SchemaError::invalid_attr(element, "abstract", other.to_string()));
        }
    };

    let mut extends = Vec::new();
    for base in as_list(value.get("extends")) {
        let base = base
            .as_str()
            .ok_or_else(|| SchemaError::invalid_attr(&element, "extends", base.to_string()))?;
        extends.push(NamespacedName::parse(base)?);
    }

    let mut specialize_from = Vec::new();
    for entry in as_list(value.get("specialize")) {
        let from = entry
            .get("specializeFrom")
            .and_then(Value::as_str)
            .ok_or_else(|| SchemaError::missing_attr(&element, "specialize.specializeFrom"))?;
        specialize_from.push(from.to_string());
    }

    let fields = match value.get("fields") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(fields)) => fields
            .iter()
            .map(|f| parse_field(f, &element))
            .collect::<Result<_, _>>()?,
        Some(other) => {
            return Err(SchemaError::invalid_attr(element, "fields", other.to_string()));
        }
    };

    Ok(RecordDef {
        name,
        is_abstract,
        extends,
        specialize_from,
        fields,
    })
}

/// Parses one record field.
fn parse_field(value: &Value, element: &str) -> Result<FieldDef, SchemaError> {
    let name = FieldName::parse(require_str(value, "name", element)?)?;
    let type_expr = value
        .get("type")
        .cloned()
        .ok_or_else(|| SchemaError::missing_attr(format!("field '{}'", name.field), "type"))?;
    let map_subject = value
        .get("jsonldPredicate")
        .and_then(|p| p.get("mapSubject"))
        .and_then(Value::as_str)
        .map(str::to_string);

    Ok(FieldDef {
        name,
        type_expr,
        map_subject,
    })
}

/// Parses an enum schema.
///
/// Symbols are reduced to their short names.
///
/// # Errors
/// Returns `SchemaError` if the name is missing or a symbol is not a string.
pub fn parse_enum(value: &Value) -> Result<EnumDef, SchemaError> {
    let name = require_str(value, "name", "enum")?;
    let symbols = value
        .get("symbols")
        .and_then(Value::as_array)
        .ok_or_else(|| SchemaError::missing_attr(format!("enum '{name}'"), "symbols"))?;

    let symbols = symbols
        .iter()
        .map(|s| {
            s.as_str().map(|s| shortname(s).to_string()).ok_or_else(|| {
                SchemaError::invalid_attr(format!("enum '{name}'"), "symbols", s.to_string())
            })
        })
        .collect::<Result<_, _>>()?;

    Ok(EnumDef {
        name: name.to_string(),
        symbols,
    })
}

fn require_str<'a>(value: &'a Value, key: &str, element: &str) -> Result<&'a str, SchemaError> {
    value
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| SchemaError::missing_attr(element, key))
}

/// Treats an absent value as empty and a scalar as a one-element list.
fn as_list(value: Option<&Value>) -> Vec<&Value> {
    match value {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().collect(),
        Some(single) => vec![single],
    }
}
