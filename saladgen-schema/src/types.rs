//! Primitive catalog and the resolved C++ type model.

use std::fmt;

/// Namespace of Schema Salad's own vocabulary.
pub const SALAD_NS: &str = "https://w3id.org/cwl/salad#";

/// Namespace of the XML Schema datatypes.
pub const XSD_NS: &str = "http://www.w3.org/2001/XMLSchema#";

/// Schema Salad primitive types and the two built-in open/closed unions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// No value.
    Null,
    /// UTF-8 string.
    String,
    /// 32-bit signed integer.
    Int,
    /// 64-bit signed integer.
    Long,
    /// 32-bit float.
    Float,
    /// 64-bit float.
    Double,
    /// Boolean.
    Boolean,
    /// Any value.
    Any,
    /// Closed union of the non-null scalar primitives.
    PrimitiveType,
}

impl PrimitiveType {
    /// All catalog entries in a fixed order.
    pub const ALL: [Self; 9] = [
        Self::Null,
        Self::String,
        Self::Int,
        Self::Long,
        Self::Float,
        Self::Double,
        Self::Boolean,
        Self::Any,
        Self::PrimitiveType,
    ];

    /// Looks up a primitive by its short tag or full URI.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        if let Some(local) = tag.strip_prefix(XSD_NS) {
            return match local {
                "string" => Some(Self::String),
                "int" => Some(Self::Int),
                "long" => Some(Self::Long),
                "float" => Some(Self::Float),
                "double" => Some(Self::Double),
                "boolean" => Some(Self::Boolean),
                _ => None,
            };
        }
        if let Some(local) = tag.strip_prefix(SALAD_NS) {
            return match local {
                "null" => Some(Self::Null),
                "Any" => Some(Self::Any),
                "PrimitiveType" => Some(Self::PrimitiveType),
                _ => None,
            };
        }
        Self::ALL.into_iter().find(|p| p.salad_name() == tag)
    }

    /// Short Schema Salad tag.
    #[must_use]
    pub const fn salad_name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::String => "string",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Boolean => "boolean",
            Self::Any => "Any",
            Self::PrimitiveType => "PrimitiveType",
        }
    }

    /// Fully qualified URI of the tag.
    #[must_use]
    pub fn uri(self) -> String {
        match self {
            Self::Null | Self::Any | Self::PrimitiveType => {
                format!("{SALAD_NS}{}", self.salad_name())
            }
            _ => format!("{XSD_NS}{}", self.salad_name()),
        }
    }

    /// C++ type used for this primitive.
    #[must_use]
    pub const fn cpp_type(self) -> &'static str {
        match self {
            Self::Null => "std::monostate",
            Self::String => "std::string",
            Self::Int => "int32_t",
            Self::Long => "int64_t",
            Self::Float => "float",
            Self::Double => "double",
            Self::Boolean => "bool",
            Self::Any => "std::any",
            Self::PrimitiveType => {
                "std::variant<bool, int32_t, int64_t, float, double, std::string>"
            }
        }
    }
}

/// A resolved C++ type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CppType {
    /// A catalog primitive.
    Primitive(PrimitiveType),
    /// A generated record or enum, already sanitized.
    Named {
        /// C++ namespace, `None` for enums declared without a fragment.
        namespace: Option<String>,
        /// C++ type name.
        name: String,
    },
    /// `std::vector<T>`.
    Vector(Box<CppType>),
    /// `std::variant<...>`, member order preserved.
    Variant(Vec<CppType>),
    /// An unmodeled form passed through unchanged.
    Verbatim(String),
}

impl CppType {
    /// Creates a namespaced type.
    #[must_use]
    pub fn named(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Named {
            namespace: Some(namespace.into()),
            name: name.into(),
        }
    }

    /// Renders the type as seen from inside `namespace`: types declared in
    /// that namespace lose their qualifier.
    #[must_use]
    pub fn render_in(&self, namespace: &str) -> String {
        let mut out = String::new();
        self.write_to(&mut out, Some(namespace));
        out
    }

    fn write_to(&self, out: &mut String, scope: Option<&str>) {
        match self {
            Self::Primitive(p) => out.push_str(p.cpp_type()),
            Self::Named { namespace, name } => {
                if let Some(ns) = namespace {
                    if scope != Some(ns.as_str()) {
                        out.push_str(ns);
                        out.push_str("::");
                    }
                }
                out.push_str(name);
            }
            Self::Vector(inner) => {
                out.push_str("std::vector<");
                inner.write_to(out, scope);
                out.push('>');
            }
            Self::Variant(members) => {
                out.push_str("std::variant<");
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    member.write_to(out, scope);
                }
                out.push('>');
            }
            Self::Verbatim(text) => out.push_str(text),
        }
    }
}

impl fmt::Display for CppType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_to(&mut out, None);
        f.write_str(&out)
    }
}
