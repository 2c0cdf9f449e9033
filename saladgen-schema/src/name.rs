//! Namespaced identifiers and C++ name sanitation.
//!
//! Schema Salad names every declaration with a fragment identifier such as
//! `https://w3id.org/cwl/cwl#CommandLineTool`. The part before `#` becomes the
//! C++ namespace and the fragment becomes the type name. Field names carry one
//! more level: `https://w3id.org/cwl/cwl#CommandLineTool/inputs`.

use crate::error::SchemaError;
use std::fmt;

/// Words that cannot be used verbatim as C++ identifiers.
const RESERVED: &[&str] = &[
    "class", "enum", "int", "long", "float", "double", "default", "stdin", "stdout", "stderr",
];

/// A `(namespace, local)` pair split from a `base#fragment` identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamespacedName {
    /// Everything before the `#`.
    pub namespace: String,
    /// The fragment after the `#`.
    pub local: String,
}

impl NamespacedName {
    /// Splits an identifier of the form `base#fragment`.
    ///
    /// # Errors
    /// Returns `SchemaError::MalformedIdentifier` unless the identifier
    /// contains exactly one `#`.
    pub fn parse(identifier: &str) -> Result<Self, SchemaError> {
        let mut parts = identifier.split('#');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(namespace), Some(local), None) => Ok(Self {
                namespace: namespace.to_string(),
                local: local.to_string(),
            }),
            _ => Err(SchemaError::malformed(identifier, "exactly one '#' as in 'base#Name'")),
        }
    }

    /// Like [`NamespacedName::parse`] but returns `None` for malformed input.
    #[must_use]
    pub fn try_parse(identifier: &str) -> Option<Self> {
        Self::parse(identifier).ok()
    }

    /// Sanitized C++ namespace.
    #[must_use]
    pub fn cpp_namespace(&self) -> String {
        safename(&self.namespace)
    }

    /// Sanitized C++ type name.
    #[must_use]
    pub fn cpp_name(&self) -> String {
        safename(&self.local)
    }

    /// Fully qualified C++ name, `namespace::Name`.
    #[must_use]
    pub fn qualified(&self) -> String {
        format!("{}::{}", self.cpp_namespace(), self.cpp_name())
    }
}

impl fmt::Display for NamespacedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.namespace, self.local)
    }
}

/// A field identifier split as `base#Class/field`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldName {
    /// Everything before the `#`.
    pub namespace: String,
    /// Owning class fragment.
    pub class: String,
    /// The field's own name.
    pub field: String,
}

impl FieldName {
    /// Splits a field identifier of the form `base#Class/field`.
    ///
    /// # Errors
    /// Returns `SchemaError::MalformedIdentifier` unless the identifier has
    /// exactly one `#` followed by a fragment with exactly one `/`.
    pub fn parse(identifier: &str) -> Result<Self, SchemaError> {
        let name = NamespacedName::parse(identifier)?;
        let mut parts = name.local.split('/');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(class), Some(field), None) => Ok(Self {
                class: class.to_string(),
                field: field.to_string(),
                namespace: name.namespace,
            }),
            _ => Err(SchemaError::malformed(
                identifier,
                "exactly one '/' after '#' as in 'base#Class/field'",
            )),
        }
    }
}

/// Appends `_` to identifiers that collide with C++ keywords or std streams.
#[must_use]
pub fn replace_keywords(s: &str) -> String {
    if RESERVED.contains(&s) {
        format!("{s}_")
    } else {
        s.to_string()
    }
}

/// Creates a C++ safe identifier.
///
/// Every character outside `[A-Za-z0-9]` becomes `_`.
#[must_use]
pub fn safename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    replace_keywords(&cleaned)
}

/// Last path segment of the fragment, or of the path when there is no fragment.
#[must_use]
pub fn shortname(uri: &str) -> &str {
    let (base, fragment) = uri.split_once('#').unwrap_or((uri, ""));
    let source = if fragment.is_empty() { base } else { fragment };
    source.rsplit('/').next().unwrap_or(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_namespaced_name() {
        let name = NamespacedName::parse("https://w3id.org/cwl/cwl#CommandLineTool").unwrap();
        assert_eq!(name.namespace, "https://w3id.org/cwl/cwl");
        assert_eq!(name.local, "CommandLineTool");
        assert_eq!(name.to_string(), "https://w3id.org/cwl/cwl#CommandLineTool");
    }

    #[test]
    fn test_parse_rejects_missing_fragment() {
        let err = NamespacedName::parse("CommandLineTool").unwrap_err();
        assert!(matches!(err, SchemaError::MalformedIdentifier { .. }));
    }

    #[test]
    fn test_parse_rejects_double_fragment() {
        assert!(NamespacedName::parse("a#b#c").is_err());
        assert!(NamespacedName::try_parse("a#b#c").is_none());
    }

    #[test]
    fn test_qualified_name_is_sanitized() {
        let name = NamespacedName::parse("https://w3id.org/cwl/cwl#Input-Record").unwrap();
        assert_eq!(name.cpp_namespace(), "https___w3id_org_cwl_cwl");
        assert_eq!(name.cpp_name(), "Input_Record");
        assert_eq!(name.qualified(), "https___w3id_org_cwl_cwl::Input_Record");
    }

    #[test]
    fn test_parse_field_name() {
        let field = FieldName::parse("ns#Foo/bar").unwrap();
        assert_eq!(field.namespace, "ns");
        assert_eq!(field.class, "Foo");
        assert_eq!(field.field, "bar");
    }

    #[test]
    fn test_field_name_requires_one_slash() {
        assert!(FieldName::parse("ns#Foo").is_err());
        assert!(FieldName::parse("ns#Foo/bar/baz").is_err());
        assert!(FieldName::parse("Foo/bar").is_err());
    }

    #[test]
    fn test_safename() {
        assert_eq!(safename("class"), "class_");
        assert_eq!(safename("stdout"), "stdout_");
        assert_eq!(safename("my-field.name"), "my_field_name");
        assert_eq!(safename("plain"), "plain");
    }

    #[test]
    fn test_shortname() {
        assert_eq!(shortname("https://w3id.org/cwl/cwl#Foo/bar/baz"), "baz");
        assert_eq!(shortname("https://w3id.org/cwl/cwl#File"), "File");
        assert_eq!(shortname("https://w3id.org/cwl/cwl/thing"), "thing");
        assert_eq!(shortname("plain"), "plain");
    }
}
