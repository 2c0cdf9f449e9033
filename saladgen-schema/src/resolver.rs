//! Type resolution from Schema Salad type expressions to C++ types.

use crate::classify::kind_tag;
use crate::error::SchemaError;
use crate::ir::{EnumDefinition, register_enum};
use crate::name::NamespacedName;
use crate::parser::parse_enum;
use crate::types::{CppType, PrimitiveType};
use indexmap::IndexMap;
use serde_json::Value;

/// Resolves type expressions, registering inline enums as it goes.
pub struct TypeResolver<'a> {
    enums: &'a mut IndexMap<String, EnumDefinition>,
}

impl<'a> TypeResolver<'a> {
    /// Creates a resolver that registers enums into `enums`.
    #[must_use]
    pub fn new(enums: &'a mut IndexMap<String, EnumDefinition>) -> Self {
        Self { enums }
    }

    /// Converts a type expression to a C++ type.
    ///
    /// A singleton list resolves like its only member. Longer lists become a
    /// `std::variant` over their members, in order and without deduplication.
    ///
    /// # Errors
    /// Returns `SchemaError` for a malformed inline record name or a
    /// malformed inline enum. Unmodeled forms are not errors: they are logged
    /// and passed through verbatim.
    pub fn convert(&mut self, expr: &Value) -> Result<CppType, SchemaError> {
        match expr {
            Value::Array(members) if members.len() == 1 => self.convert_single(&members[0]),
            Value::Array(members) => members
                .iter()
                .map(|member| self.convert(member))
                .collect::<Result<_, _>>()
                .map(CppType::Variant),
            single => self.convert_single(single),
        }
    }

    fn convert_single(&mut self, expr: &Value) -> Result<CppType, SchemaError> {
        match expr {
            Value::String(tag) => Ok(convert_tag(tag)),
            Value::Object(_) => self.convert_inline(expr),
            other => Ok(pass_through(other.to_string())),
        }
    }

    /// Dispatches an inline `{type: ...}` declaration on its kind tag.
    fn convert_inline(&mut self, expr: &Value) -> Result<CppType, SchemaError> {
        match kind_tag(expr) {
            Some("enum") => {
                let def = parse_enum(expr)?;
                let registered = register_enum(self.enums, &def);
                Ok(registered.cpp_type())
            }
            Some("array") => match expr.get("items") {
                Some(Value::Array(items)) => {
                    let members = items
                        .iter()
                        .map(|item| self.convert(item))
                        .collect::<Result<_, _>>()?;
                    Ok(CppType::Vector(Box::new(CppType::Variant(members))))
                }
                Some(items) => Ok(CppType::Vector(Box::new(self.convert(items)?))),
                None => Ok(pass_through(expr.to_string())),
            },
            Some("record") => {
                let name = expr
                    .get("name")
                    .and_then(Value::as_str)
                    .ok_or_else(|| SchemaError::missing_attr("inline record", "name"))?;
                let name = NamespacedName::parse(name)?;
                Ok(CppType::named(name.cpp_namespace(), name.cpp_name()))
            }
            Some(other) => match NamespacedName::try_parse(other) {
                Some(name) => Ok(CppType::named(name.cpp_namespace(), name.cpp_name())),
                None => Ok(pass_through(expr.to_string())),
            },
            None => Ok(pass_through(expr.to_string())),
        }
    }
}

/// Resolves a bare tag: a catalog primitive, a `base#Name` reference, or a
/// verbatim pass-through.
fn convert_tag(tag: &str) -> CppType {
    if let Some(prim) = PrimitiveType::from_tag(tag) {
        return CppType::Primitive(prim);
    }
    match NamespacedName::try_parse(tag) {
        Some(name) => CppType::named(name.cpp_namespace(), name.cpp_name()),
        None => pass_through(tag.to_string()),
    }
}

fn pass_through(text: String) -> CppType {
    tracing::warn!(
        "unmodeled type form {}, passing it through unchanged; the generated code may not compile",
        text
    );
    CppType::Verbatim(text)
}
