//! Intermediate representation for code generation.
//!
//! [`GenerationContext`] is the class/enum registry of one generation run.
//! It is filled from classified items, finished by two passes (strip
//! specialized bases, then deduplicate inherited fields) and is read-only
//! afterwards. Both maps iterate in insertion order, which keeps the emitted
//! code stable for a given input.

use crate::error::SchemaError;
use crate::items::{EnumDef, RecordDef};
use crate::name::{NamespacedName, safename};
use crate::resolver::TypeResolver;
use crate::types::CppType;
use indexmap::IndexMap;
use std::collections::HashSet;

/// A class field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    /// Field name (the part after `/`).
    pub name: String,
    /// Resolved C++ type.
    pub cpp_type: CppType,
    /// Key of the sub-field used to fold a list into a map; empty for none.
    pub remap: String,
}

impl FieldDefinition {
    /// Returns true if the field is serialized as a map keyed by `remap`.
    #[must_use]
    pub fn is_remapped(&self) -> bool {
        !self.remap.is_empty()
    }

    /// Sanitized C++ member name.
    #[must_use]
    pub fn cpp_name(&self) -> String {
        safename(&self.name)
    }
}

/// An enum with symbols in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDefinition {
    /// Enum name as written.
    pub name: String,
    /// Symbol short names; the value of a symbol is its index.
    pub symbols: Vec<String>,
}

impl EnumDefinition {
    /// Creates an enum definition.
    #[must_use]
    pub fn new(name: impl Into<String>, symbols: Vec<String>) -> Self {
        Self {
            name: name.into(),
            symbols,
        }
    }

    /// C++ namespace, `None` when the name has no single fragment.
    #[must_use]
    pub fn cpp_namespace(&self) -> Option<String> {
        NamespacedName::try_parse(&self.name).map(|n| n.cpp_namespace())
    }

    /// Unqualified C++ type name.
    #[must_use]
    pub fn cpp_name(&self) -> String {
        match NamespacedName::try_parse(&self.name) {
            Some(name) => name.cpp_name(),
            None => safename(&self.name),
        }
    }

    /// The enum as a resolved type.
    #[must_use]
    pub fn cpp_type(&self) -> CppType {
        CppType::Named {
            namespace: self.cpp_namespace(),
            name: self.cpp_name(),
        }
    }

    /// Value of a symbol, i.e. its declaration index.
    #[must_use]
    pub fn value_of(&self, symbol: &str) -> Option<usize> {
        self.symbols.iter().position(|s| s == symbol)
    }
}

impl From<&EnumDef> for EnumDefinition {
    fn from(def: &EnumDef) -> Self {
        Self::new(def.name.clone(), def.symbols.clone())
    }
}

/// A class generated from a record schema.
#[derive(Debug, Clone)]
pub struct ClassDefinition {
    /// Class name.
    pub name: NamespacedName,
    /// Base classes in declaration order.
    pub extends: Vec<NamespacedName>,
    /// Types of specialized generic ancestors.
    pub specialization_types: Vec<String>,
    /// Every field, including copies inherited from bases.
    pub all_fields: Vec<FieldDefinition>,
    /// Fields this class declares itself; filled by
    /// [`GenerationContext::dedup_fields`].
    pub fields: Vec<FieldDefinition>,
    /// Whether the class is abstract.
    pub is_abstract: bool,
}

impl ClassDefinition {
    /// Creates an empty class definition.
    #[must_use]
    pub fn new(name: NamespacedName) -> Self {
        Self {
            name,
            extends: Vec::new(),
            specialization_types: Vec::new(),
            all_fields: Vec::new(),
            fields: Vec::new(),
            is_abstract: false,
        }
    }

    /// Returns true if the class specializes a generic ancestor.
    #[must_use]
    pub fn is_specialized(&self) -> bool {
        !self.specialization_types.is_empty()
    }

    /// Sanitized C++ namespace.
    #[must_use]
    pub fn cpp_namespace(&self) -> String {
        self.name.cpp_namespace()
    }

    /// Sanitized C++ struct name.
    #[must_use]
    pub fn cpp_name(&self) -> String {
        self.name.cpp_name()
    }
}

/// Class and enum registry for one generation run.
#[derive(Debug, Default)]
pub struct GenerationContext {
    classes: IndexMap<String, ClassDefinition>,
    enums: IndexMap<String, EnumDefinition>,
}

impl GenerationContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a type resolver that registers enums into this context.
    pub fn resolver(&mut self) -> TypeResolver<'_> {
        TypeResolver::new(&mut self.enums)
    }

    /// Adds a class for a record schema, resolving every field type.
    ///
    /// A record registered twice under the same name replaces the earlier
    /// definition but keeps its position.
    ///
    /// # Errors
    /// Returns `SchemaError` if a field type cannot be resolved.
    pub fn add_record(&mut self, record: &RecordDef) -> Result<(), SchemaError> {
        let mut class = ClassDefinition::new(record.name.clone());
        class.is_abstract = record.is_abstract;
        class.extends = record.extends.clone();
        class.specialization_types = record.specialize_from.clone();

        let mut resolver = self.resolver();
        for field in &record.fields {
            class.all_fields.push(FieldDefinition {
                name: field.name.field.clone(),
                cpp_type: resolver.convert(&field.type_expr)?,
                remap: field.map_subject.clone().unwrap_or_default(),
            });
        }

        self.classes.insert(record.name.to_string(), class);
        Ok(())
    }

    /// Adds an enum unless one with the same name already exists.
    pub fn add_enum(&mut self, def: &EnumDef) -> &EnumDefinition {
        register_enum(&mut self.enums, def)
    }

    /// Removes the bases of every class that specializes a generic ancestor.
    pub fn strip_specialized_bases(&mut self) {
        for class in self.classes.values_mut() {
            if class.is_specialized() {
                class.extends.clear();
            }
        }
    }

    /// Computes each class's own field list: every field whose name is not
    /// declared by any ancestor.
    pub fn dedup_fields(&mut self) {
        let mut own_fields = Vec::with_capacity(self.classes.len());
        for class in self.classes.values() {
            for base in &class.extends {
                if !self.classes.contains_key(&base.to_string()) {
                    tracing::warn!("class {} extends unknown class {}", class.name, base);
                }
            }
            let fields: Vec<_> = class
                .all_fields
                .iter()
                .filter(|field| !self.is_inherited(class, &field.name))
                .cloned()
                .collect();
            own_fields.push(fields);
        }

        for (class, fields) in self.classes.values_mut().zip(own_fields) {
            class.fields = fields;
        }
    }

    /// Runs both finishing passes in order.
    pub fn finish(&mut self) {
        self.strip_specialized_bases();
        self.dedup_fields();
    }

    /// Returns true if any ancestor of `class` declares a field `name`.
    ///
    /// Bases are searched in declaration order, depth first.
    #[must_use]
    pub fn is_inherited(&self, class: &ClassDefinition, name: &str) -> bool {
        let mut visited = HashSet::from([class.name.to_string()]);
        self.ancestor_declares(class, name, &mut visited)
    }

    fn ancestor_declares(
        &self,
        class: &ClassDefinition,
        name: &str,
        visited: &mut HashSet<String>,
    ) -> bool {
        for base in &class.extends {
            let key = base.to_string();
            let Some(parent) = self.classes.get(&key) else {
                continue;
            };
            if !visited.insert(key) {
                continue;
            }
            if parent.all_fields.iter().any(|f| f.name == name)
                || self.ancestor_declares(parent, name, visited)
            {
                return true;
            }
        }
        false
    }

    /// Classes in registration order.
    pub fn classes(&self) -> impl Iterator<Item = &ClassDefinition> {
        self.classes.values()
    }

    /// Enums in registration order.
    pub fn enums(&self) -> impl Iterator<Item = &EnumDefinition> {
        self.enums.values()
    }

    /// Looks up a class by its full `base#Name` identifier.
    #[must_use]
    pub fn get_class(&self, name: &str) -> Option<&ClassDefinition> {
        self.classes.get(name)
    }

    /// Looks up an enum by its name as written.
    #[must_use]
    pub fn get_enum(&self, name: &str) -> Option<&EnumDefinition> {
        self.enums.get(name)
    }

    /// Number of registered classes.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Number of registered enums.
    #[must_use]
    pub fn enum_count(&self) -> usize {
        self.enums.len()
    }
}

/// Registers an enum by name; the first registration wins.
pub(crate) fn register_enum<'m>(
    enums: &'m mut IndexMap<String, EnumDefinition>,
    def: &EnumDef,
) -> &'m EnumDefinition {
    enums
        .entry(def.name.clone())
        .or_insert_with(|| EnumDefinition::from(def))
}
