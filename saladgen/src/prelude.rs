//! Convenient re-exports of the most used types.

pub use saladgen_codegen::{
    CodegenConfig, CodegenError, Generator, generate, generate_from_file, generate_from_json,
    generate_to_file,
};
pub use saladgen_schema::{
    CppType, GenerationContext, NamespacedName, PrimitiveType, SchemaError, SchemaItem,
    TypeResolver, classify, parse_items,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prelude_generate() {
        let items = parse_items(r#"[{"type": "record", "name": "ns#R"}]"#).unwrap();
        let mut generator = Generator::new(CodegenConfig::default());
        generator.add_items(&items).unwrap();
        assert_eq!(generator.context().class_count(), 1);
        assert!(generator.generate().contains("namespace ns { struct R; }"));
    }

    #[test]
    fn test_prelude_names() {
        let name = NamespacedName::parse("ns#R").unwrap();
        assert_eq!(name.qualified(), "ns::R");
        assert_eq!(PrimitiveType::from_tag("int").map(PrimitiveType::cpp_type), Some("int32_t"));
    }
}
