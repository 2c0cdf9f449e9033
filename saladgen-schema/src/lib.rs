//! # saladgen Schema
//!
//! Schema Salad item model for code generation.
//!
//! This crate provides:
//! - Namespaced identifier splitting and C++ name sanitation
//! - Shape classification of already-resolved schema items
//! - Record and enum item parsing
//! - Type resolution from schema type expressions to C++ types
//! - The class/enum registry with inheritance flattening

pub mod classify;
pub mod error;
pub mod ir;
pub mod items;
pub mod name;
pub mod parser;
pub mod resolver;
pub mod types;

pub use classify::classify;
pub use error::SchemaError;
pub use ir::{ClassDefinition, EnumDefinition, FieldDefinition, GenerationContext};
pub use items::{EnumDef, FieldDef, RecordDef, SchemaItem};
pub use name::{FieldName, NamespacedName};
pub use parser::{parse_items, parse_value};
pub use resolver::TypeResolver;
pub use types::{CppType, PrimitiveType};
