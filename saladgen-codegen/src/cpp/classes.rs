//! Class (record) code generation.

use crate::cpp::string_literal;
use saladgen_schema::ir::{ClassDefinition, FieldDefinition, GenerationContext};

/// Generator for record structs and their `toYaml` members.
pub struct ClassGenerator<'a> {
    ctx: &'a GenerationContext,
    indent: &'a str,
}

impl<'a> ClassGenerator<'a> {
    /// Creates a new class generator.
    #[must_use]
    pub fn new(ctx: &'a GenerationContext, indent: &'a str) -> Self {
        Self { ctx, indent }
    }

    /// Generates a forward declaration for every class.
    #[must_use]
    pub fn generate_forward_declarations(&self) -> String {
        let mut output = String::new();
        for class in self.ctx.classes() {
            output.push_str(&format!(
                "namespace {} {{ struct {}; }}\n",
                class.cpp_namespace(),
                class.cpp_name()
            ));
        }
        output
    }

    /// Generates every struct definition.
    #[must_use]
    pub fn generate_definitions(&self) -> String {
        let mut output = String::new();
        for class in self.ctx.classes() {
            output.push_str(&self.generate_definition(class));
        }
        output
    }

    /// Generates every out-of-line member definition.
    #[must_use]
    pub fn generate_implementations(&self) -> String {
        let mut output = String::new();
        for class in self.ctx.classes() {
            output.push_str(&self.generate_implementation(class));
        }
        output
    }

    /// Generates a struct definition.
    fn generate_definition(&self, class: &ClassDefinition) -> String {
        let mut output = String::new();
        let ind = self.indent;
        let namespace = class.cpp_namespace();
        let name = class.cpp_name();

        output.push_str(&format!("namespace {} {{\n", namespace));
        output.push_str(&format!("struct {}", name));

        let bases: Vec<String> = class.extends.iter().map(|b| b.qualified()).collect();
        if !bases.is_empty() {
            output.push_str(&format!("\n{}: ", ind));
            let separator = format!("\n{}, ", ind);
            output.push_str(&bases.join(separator.as_str()));
        }
        output.push_str(" {\n");

        for field in &class.fields {
            output.push_str(&self.generate_member(field, &namespace));
        }

        if class.is_abstract {
            output.push_str(&format!("{}virtual ~{}() = 0;\n", ind, name));
        }

        // Classes that kept a base override its toYaml; roots introduce it.
        if bases.is_empty() {
            output.push_str(&format!(
                "{}virtual auto toYaml() const -> YAML::Node;\n",
                ind
            ));
        } else {
            output.push_str(&format!(
                "{}auto toYaml() const -> YAML::Node override;\n",
                ind
            ));
        }

        output.push_str("};\n");
        output.push_str("}\n\n");

        output
    }

    /// Generates a `heap_object` member for a field.
    fn generate_member(&self, field: &FieldDefinition, namespace: &str) -> String {
        format!(
            "{}heap_object<{}> {};\n",
            self.indent,
            field.cpp_type.render_in(namespace),
            field.cpp_name()
        )
    }

    /// Generates the destructor (abstract classes) and `toYaml` body.
    fn generate_implementation(&self, class: &ClassDefinition) -> String {
        let mut output = String::new();
        let ind = self.indent;
        let qualified = class.name.qualified();
        let name = class.cpp_name();

        if class.is_abstract {
            output.push_str(&format!(
                "inline {}::~{}() = default;\n",
                qualified, name
            ));
        }

        output.push_str(&format!(
            "inline auto {}::toYaml() const -> YAML::Node {{\n",
            qualified
        ));
        output.push_str(&format!("{}using ::toYaml;\n", ind));
        output.push_str(&format!("{}auto n = YAML::Node{{}};\n", ind));

        for base in &class.extends {
            output.push_str(&format!(
                "{}n = mergeYaml(n, {}::toYaml());\n",
                ind,
                base.qualified()
            ));
        }

        for field in &class.fields {
            output.push_str(&self.generate_field_serialization(field));
        }

        output.push_str(&format!("{}return n;\n", ind));
        output.push_str("}\n");

        output
    }

    /// Generates the `addYamlField` call for one field, folding the list
    /// into a map when the field is remapped.
    fn generate_field_serialization(&self, field: &FieldDefinition) -> String {
        let ind = self.indent;
        let key = string_literal(&field.name);
        let member = field.cpp_name();

        if field.is_remapped() {
            format!(
                "{}addYamlField(n, {},\n{}{}convertListToMap(toYaml(*{}), {}));\n",
                ind,
                key,
                ind,
                ind,
                member,
                string_literal(&field.remap)
            )
        } else {
            format!("{}addYamlField(n, {}, toYaml(*{}));\n", ind, key, member)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saladgen_schema::parser::parse_record;
    use serde_json::{Value, json};

    fn finished_context(records: &[Value]) -> GenerationContext {
        let mut ctx = GenerationContext::new();
        for record in records {
            ctx.add_record(&parse_record(record).expect("Failed to parse"))
                .expect("Failed to add");
        }
        ctx.finish();
        ctx
    }

    #[test]
    fn test_forward_declarations() {
        let ctx = finished_context(&[
            json!({"type": "record", "name": "ns#A"}),
            json!({"type": "record", "name": "https://w3id.org/cwl/cwl#File"}),
        ]);
        let output = ClassGenerator::new(&ctx, "    ").generate_forward_declarations();
        assert_eq!(
            output,
            "namespace ns { struct A; }\nnamespace https___w3id_org_cwl_cwl { struct File; }\n"
        );
    }

    #[test]
    fn test_simple_record() {
        let ctx = finished_context(&[json!({
            "type": "record",
            "name": "ns#Foo",
            "fields": [{"name": "ns#Foo/bar", "type": "string"}]
        })]);
        let generator = ClassGenerator::new(&ctx, "    ");

        assert_eq!(
            generator.generate_definitions(),
            "namespace ns {\n\
             struct Foo {\n    \
             heap_object<std::string> bar;\n    \
             virtual auto toYaml() const -> YAML::Node;\n\
             };\n\
             }\n\n"
        );
        assert_eq!(
            generator.generate_implementations(),
            "inline auto ns::Foo::toYaml() const -> YAML::Node {\n    \
             using ::toYaml;\n    \
             auto n = YAML::Node{};\n    \
             addYamlField(n, \"bar\", toYaml(*bar));\n    \
             return n;\n\
             }\n"
        );
    }

    #[test]
    fn test_abstract_base_and_derived() {
        let ctx = finished_context(&[
            json!({"type": "record", "name": "ns#Base", "abstract": true,
                   "fields": [{"name": "ns#Base/id", "type": "string"}]}),
            json!({"type": "record", "name": "ns#Derived", "extends": "ns#Base",
                   "fields": [{"name": "ns#Derived/id", "type": "string"},
                              {"name": "ns#Derived/size", "type": "long"}]}),
        ]);
        let generator = ClassGenerator::new(&ctx, "    ");
        let definitions = generator.generate_definitions();
        let implementations = generator.generate_implementations();

        assert!(definitions.contains(
            "struct Base {\n    heap_object<std::string> id;\n    virtual ~Base() = 0;\n    \
             virtual auto toYaml() const -> YAML::Node;\n};"
        ));
        assert!(definitions.contains(
            "struct Derived\n    : ns::Base {\n    heap_object<int64_t> size;\n    \
             auto toYaml() const -> YAML::Node override;\n};"
        ));

        assert!(implementations.contains("inline ns::Base::~Base() = default;\n"));
        assert_eq!(implementations.matches("inline auto ns::Base::toYaml()").count(), 1);
        assert!(implementations.contains("    n = mergeYaml(n, ns::Base::toYaml());\n"));
        assert_eq!(implementations.matches("toYaml(*id)").count(), 1);
    }

    #[test]
    fn test_multiple_bases_in_declared_order() {
        let ctx = finished_context(&[
            json!({"type": "record", "name": "ns#L"}),
            json!({"type": "record", "name": "ns#R"}),
            json!({"type": "record", "name": "ns#Both", "extends": ["ns#L", "ns#R"]}),
        ]);
        let generator = ClassGenerator::new(&ctx, "    ");

        assert!(generator
            .generate_definitions()
            .contains("struct Both\n    : ns::L\n    , ns::R {\n"));
        assert!(generator.generate_implementations().contains(
            "    n = mergeYaml(n, ns::L::toYaml());\n    n = mergeYaml(n, ns::R::toYaml());\n"
        ));
    }

    #[test]
    fn test_specialized_class_drops_bases() {
        let ctx = finished_context(&[
            json!({"type": "record", "name": "ns#Generic",
                   "fields": [{"name": "ns#Generic/value", "type": "ns#T"}]}),
            json!({"type": "record", "name": "ns#Concrete", "extends": "ns#Generic",
                   "specialize": {"specializeFrom": "ns#T", "specializeTo": "string"},
                   "fields": [{"name": "ns#Concrete/value", "type": "string"}]}),
        ]);
        let generator = ClassGenerator::new(&ctx, "    ");
        let definitions = generator.generate_definitions();

        assert!(definitions.contains(
            "struct Concrete {\n    heap_object<std::string> value;\n    \
             virtual auto toYaml() const -> YAML::Node;\n};"
        ));
        assert!(!definitions.contains("override"));
        assert!(!generator.generate_implementations().contains("mergeYaml"));
    }

    #[test]
    fn test_remapped_field() {
        let ctx = finished_context(&[json!({
            "type": "record",
            "name": "ns#Workflow",
            "fields": [{"name": "ns#Workflow/steps",
                        "type": {"type": "array", "items": "ns#Step"},
                        "jsonldPredicate": {"mapSubject": "id"}}]
        })]);
        let generator = ClassGenerator::new(&ctx, "    ");

        assert!(generator
            .generate_definitions()
            .contains("    heap_object<std::vector<Step>> steps;\n"));
        assert!(generator.generate_implementations().contains(
            "    addYamlField(n, \"steps\",\n        convertListToMap(toYaml(*steps), \"id\"));\n"
        ));
    }

    #[test]
    fn test_member_names_and_foreign_types() {
        let ctx = finished_context(&[json!({
            "type": "record",
            "name": "ns#Tool",
            "fields": [
                {"name": "ns#Tool/class", "type": "string"},
                {"name": "ns#Tool/input-file", "type": ["null", "other#File"]}
            ]
        })]);
        let output = ClassGenerator::new(&ctx, "    ").generate_definitions();

        assert!(output.contains("    heap_object<std::string> class_;\n"));
        assert!(output.contains(
            "    heap_object<std::variant<std::monostate, other::File>> input_file;\n"
        ));

        let body = ClassGenerator::new(&ctx, "    ").generate_implementations();
        assert!(body.contains("addYamlField(n, \"class\", toYaml(*class_));"));
        assert!(body.contains("addYamlField(n, \"input-file\", toYaml(*input_file));"));
    }
}
