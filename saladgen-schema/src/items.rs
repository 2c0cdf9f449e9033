//! Classified top-level schema items.
//!
//! The loader hands over untyped JSON values. Each one is classified exactly
//! once into a [`SchemaItem`]; records and enums are parsed into typed
//! definitions at the same time.

use crate::name::{FieldName, NamespacedName};
use crate::types::PrimitiveType;
use serde_json::Value;

/// One top-level schema declaration after classification.
#[derive(Debug, Clone)]
pub enum SchemaItem {
    /// Documentation-only item; produces no code.
    Documentation,
    /// Record schema.
    Record(RecordDef),
    /// Enum schema.
    Enum(EnumDef),
    /// Standalone array schema, kept as written.
    Array(Value),
    /// Standalone union of shapes.
    Union(Vec<Value>),
    /// A bare primitive tag.
    Primitive(PrimitiveType),
    /// A bare type reference.
    Reference(String),
}

impl SchemaItem {
    /// Short kind label for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Documentation => "documentation",
            Self::Record(_) => "record",
            Self::Enum(_) => "enum",
            Self::Array(_) => "array",
            Self::Union(_) => "union",
            Self::Primitive(_) => "primitive",
            Self::Reference(_) => "reference",
        }
    }
}

/// Record schema definition.
#[derive(Debug, Clone)]
pub struct RecordDef {
    /// Record name.
    pub name: NamespacedName,
    /// Whether the record is abstract.
    pub is_abstract: bool,
    /// Base records in declaration order.
    pub extends: Vec<NamespacedName>,
    /// `specializeFrom` markers of every `specialize` entry.
    pub specialize_from: Vec<String>,
    /// Declared fields, including copies inherited from bases.
    pub fields: Vec<FieldDef>,
}

/// Record field definition.
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Split field identifier.
    pub name: FieldName,
    /// Unresolved type expression.
    pub type_expr: Value,
    /// `jsonldPredicate.mapSubject`, if any.
    pub map_subject: Option<String>,
}

/// Enum schema definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDef {
    /// Enum name as written (usually `base#Name`).
    pub name: String,
    /// Symbol short names in declaration order.
    pub symbols: Vec<String>,
}
