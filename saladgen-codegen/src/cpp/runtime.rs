//! Fixed runtime support emitted around the generated declarations.

use crate::config::CodegenConfig;

/// Includes and helpers every generated header starts with.
///
/// `heap_object<T>` owns its value on the heap and deep-copies on copy and
/// move, so records may contain themselves (directly or through a cycle)
/// and still have value semantics.
pub const PREAMBLE: &str = r#"#include <any>
#include <cassert>
#include <cstddef>
#include <cstdint>
#include <map>
#include <memory>
#include <stdexcept>
#include <string>
#include <string_view>
#include <type_traits>
#include <variant>
#include <vector>
#include <yaml-cpp/yaml.h>

template <typename T>
class heap_object {
    std::unique_ptr<T> data = std::make_unique<T>();

public:
    heap_object() = default;
    heap_object(heap_object const& oth) {
        *data = *oth;
    }
    heap_object(heap_object&& oth) {
        *data = *oth;
    }

    template <typename T2>
    heap_object(T2 const& oth) {
        *data = oth;
    }
    template <typename T2>
    heap_object(T2&& oth) {
        *data = oth;
    }

    auto operator=(heap_object const& oth) -> heap_object& {
        *data = *oth;
        return *this;
    }
    auto operator=(heap_object&& oth) -> heap_object& {
        *data = std::move(*oth);
        return *this;
    }

    template <typename T2>
    auto operator=(T2 const& oth) -> heap_object& {
        *data = oth;
        return *this;
    }
    template <typename T2>
    auto operator=(T2&& oth) -> heap_object& {
        *data = std::move(oth);
        return *this;
    }

    auto operator->() -> T* {
        return data.get();
    }
    auto operator->() const -> T const* {
        return data.get();
    }
    auto operator*() -> T& {
        return *data;
    }
    auto operator*() const -> T const& {
        return *data;
    }
};

inline auto mergeYaml(YAML::Node n1, YAML::Node n2) {
    for (auto const& e : n1) {
        n2[e.first.as<std::string>()] = e.second;
    }
    return n2;
}

inline auto toYaml(bool v) {
    return YAML::Node{v};
}
inline auto toYaml(float v) {
    return YAML::Node{v};
}
inline auto toYaml(double v) {
    return YAML::Node{v};
}
inline auto toYaml(int32_t v) {
    return YAML::Node{v};
}
inline auto toYaml(int64_t v) {
    return YAML::Node{v};
}
inline auto toYaml(std::any const&) {
    return YAML::Node{};
}
inline auto toYaml(std::monostate const&) {
    return YAML::Node(YAML::NodeType::Undefined);
}
inline auto toYaml(std::string const& v) {
    return YAML::Node{v};
}

inline void addYamlField(YAML::Node& node, std::string const& key, YAML::Node value) {
    if (value.IsDefined()) {
        node[key] = value;
    }
}

inline auto convertListToMap(YAML::Node list, std::string const& key_name) {
    if (list.size() == 0) return list;
    auto map = YAML::Node{};
    for (YAML::Node n : list) {
        auto key = n[key_name].as<std::string>();
        n.remove(key_name);
        map[key] = n;
    }
    return map;
}

template <typename T>
auto toYaml(std::vector<T> const& v) -> YAML::Node;
template <typename T>
auto toYaml(T const& t) -> YAML::Node;
template <typename... Args>
auto toYaml(std::variant<Args...> const& t) -> YAML::Node;

"#;

/// Generic `toYaml` definitions closing every generated header.
pub const EPILOGUE: &str = r#"
template <typename T>
auto toYaml(std::vector<T> const& v) -> YAML::Node {
    auto n = YAML::Node(YAML::NodeType::Sequence);
    for (auto const& e : v) {
        n.push_back(toYaml(e));
    }
    return n;
}

template <typename T>
auto toYaml(T const& t) -> YAML::Node {
    if constexpr (std::is_enum_v<T>) {
        return toYaml(t);
    } else {
        return t.toYaml();
    }
}

template <typename... Args>
auto toYaml(std::variant<Args...> const& t) -> YAML::Node {
    return std::visit([](auto const& e) {
        return toYaml(e);
    }, t);
}
"#;

/// Generates the banner, include guard and provenance comment.
#[must_use]
pub fn header(config: &CodegenConfig) -> String {
    let mut output = String::new();

    if let Some(copyright) = &config.copyright {
        for line in copyright.lines() {
            if line.is_empty() {
                output.push_str("//\n");
            } else {
                output.push_str(&format!("// {}\n", line));
            }
        }
        output.push('\n');
    }

    output.push_str("#pragma once\n\n");
    output.push_str("// Generated by saladgen from a Schema Salad definition.\n");
    if !config.package.is_empty() {
        output.push_str(&format!("// Package: {}\n", config.package));
    }
    if !config.base_uri.is_empty() {
        output.push_str(&format!("// Base URI: {}\n", config.base_uri));
    }
    output.push('\n');

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_minimal() {
        let output = header(&CodegenConfig::default());
        assert!(output.starts_with("#pragma once\n"));
        assert!(!output.contains("Package:"));
        assert!(!output.contains("Base URI:"));
    }

    #[test]
    fn test_header_with_banner_and_package() {
        let config = CodegenConfig::new()
            .copyright("Copyright 2024 Example\n\nLicensed under Apache-2.0")
            .package("cwl")
            .base_uri("https://w3id.org/cwl/cwl");
        let output = header(&config);

        assert!(output.starts_with(
            "// Copyright 2024 Example\n//\n// Licensed under Apache-2.0\n\n#pragma once\n"
        ));
        assert!(output.contains("// Package: cwl\n"));
        assert!(output.contains("// Base URI: https://w3id.org/cwl/cwl\n"));
    }

    #[test]
    fn test_preamble_declares_runtime() {
        assert!(PREAMBLE.contains("class heap_object"));
        assert!(PREAMBLE.contains("inline auto mergeYaml("));
        assert!(PREAMBLE.contains("inline void addYamlField("));
        assert!(PREAMBLE.contains("inline auto convertListToMap("));
        assert!(PREAMBLE.contains("auto toYaml(std::variant<Args...> const& t) -> YAML::Node;"));
    }

    #[test]
    fn test_epilogue_defines_templates() {
        assert!(EPILOGUE.contains("auto toYaml(std::vector<T> const& v) -> YAML::Node {"));
        assert!(EPILOGUE.contains("return t.toYaml();"));
        assert!(EPILOGUE.contains("std::visit("));
    }
}
