//! Enum code generation.

use crate::cpp::string_literal;
use saladgen_schema::ir::{EnumDefinition, GenerationContext};
use saladgen_schema::name::safename;

/// Generator for enum definitions and their string/YAML conversions.
pub struct EnumGenerator<'a> {
    ctx: &'a GenerationContext,
    indent: &'a str,
}

impl<'a> EnumGenerator<'a> {
    /// Creates a new enum generator.
    #[must_use]
    pub fn new(ctx: &'a GenerationContext, indent: &'a str) -> Self {
        Self { ctx, indent }
    }

    /// Generates all enum definitions in registration order.
    #[must_use]
    pub fn generate(&self) -> String {
        let mut output = String::new();
        for def in self.ctx.enums() {
            output.push_str(&self.generate_enum(def));
        }
        output
    }

    /// Generates one enum: the type, `to_string`, `to_enum`, `toYaml` and
    /// `yamlToEnum`.
    fn generate_enum(&self, def: &EnumDefinition) -> String {
        let mut output = String::new();
        let ind = self.indent;
        let namespace = def.cpp_namespace();
        let name = def.cpp_name();
        let qualified = def.cpp_type().to_string();

        if let Some(ns) = &namespace {
            output.push_str(&format!("namespace {} {{\n", ns));
        }

        // Enumerators take implicit values 0, 1, ... in declaration order.
        output.push_str(&format!("enum class {} : unsigned int {{\n", name));
        let enumerators: Vec<String> = def
            .symbols
            .iter()
            .map(|s| format!("{}{}", ind, safename(s)))
            .collect();
        if !enumerators.is_empty() {
            output.push_str(&enumerators.join(",\n"));
            output.push('\n');
        }
        output.push_str("};\n");

        output.push_str(&format!("inline auto to_string({} v) {{\n", name));
        output.push_str(&format!(
            "{}static auto m = std::vector<std::string_view> {{\n",
            ind
        ));
        let table: Vec<String> = def
            .symbols
            .iter()
            .map(|s| format!("{}{}{}", ind, ind, string_literal(s)))
            .collect();
        if !table.is_empty() {
            output.push_str(&table.join(",\n"));
            output.push('\n');
        }
        output.push_str(&format!("{}}};\n", ind));
        output.push_str(&format!(
            "{}using U = std::underlying_type_t<{}>;\n",
            ind, qualified
        ));
        output.push_str(&format!("{}return m.at(static_cast<U>(v));\n", ind));
        output.push_str("}\n");

        if namespace.is_some() {
            output.push_str("}\n");
        }

        output.push_str(&format!(
            "inline void to_enum(std::string_view v, {}& out) {{\n",
            qualified
        ));
        output.push_str(&format!(
            "{}static auto m = std::map<std::string, {}, std::less<>> {{\n",
            ind, qualified
        ));
        for symbol in &def.symbols {
            output.push_str(&format!(
                "{}{}{{{}, {}::{}}},\n",
                ind,
                ind,
                string_literal(symbol),
                qualified,
                safename(symbol)
            ));
        }
        output.push_str(&format!("{}}};\n", ind));
        output.push_str(&format!("{}auto it = m.find(v);\n", ind));
        output.push_str(&format!("{}if (it == m.end()) {{\n", ind));
        output.push_str(&format!(
            "{}{}throw std::out_of_range(\"unknown {} symbol: \" + std::string{{v}});\n",
            ind, ind, qualified
        ));
        output.push_str(&format!("{}}}\n", ind));
        output.push_str(&format!("{}out = it->second;\n", ind));
        output.push_str("}\n");

        output.push_str(&format!("inline auto toYaml({} v) {{\n", qualified));
        output.push_str(&format!(
            "{}return YAML::Node{{std::string{{to_string(v)}}}};\n",
            ind
        ));
        output.push_str("}\n");

        output.push_str(&format!(
            "inline auto yamlToEnum(YAML::Node n, {}& out) {{\n",
            qualified
        ));
        output.push_str(&format!("{}to_enum(n.as<std::string>(), out);\n", ind));
        output.push_str("}\n\n");

        output
    }
}
