//! C++17 code generation modules.
//!
//! The generated code targets yaml-cpp: every class gets a `toYaml()`
//! member producing a `YAML::Node`.

pub mod classes;
pub mod enums;
pub mod runtime;

pub use classes::ClassGenerator;
pub use enums::EnumGenerator;

/// Quotes a string as a C++ string literal.
#[must_use]
pub fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_literal() {
        assert_eq!(string_literal("plain"), "\"plain\"");
        assert_eq!(string_literal("a\"b"), "\"a\\\"b\"");
        assert_eq!(string_literal("back\\slash"), "\"back\\\\slash\"");
        assert_eq!(string_literal("two\nlines"), "\"two\\nlines\"");
    }
}
