//! # saladgen Codegen
//!
//! C++17 code generation from Schema Salad definitions.
//!
//! This crate provides:
//! - The generation driver over an already-resolved item sequence
//! - Record struct and `toYaml` serializer generation
//! - Enum generation with string and YAML conversions
//! - Generator configuration
//!
//! The generated header depends only on yaml-cpp.

pub mod config;
pub mod cpp;
pub mod error;
pub mod generator;

pub use config::CodegenConfig;
pub use error::CodegenError;
pub use generator::Generator;

use serde_json::Value;
use std::path::Path;

/// Generates C++ code from a sequence of schema items.
///
/// # Arguments
/// * `items` - Import-resolved Schema Salad items, in input order
/// * `config` - Generator configuration
///
/// # Returns
/// The generated header as a string.
///
/// # Errors
/// Returns `CodegenError` if any item is malformed or unrecognized. No
/// output is produced in that case.
pub fn generate(items: &[Value], config: &CodegenConfig) -> Result<String, CodegenError> {
    let items = items
        .iter()
        .map(saladgen_schema::classify)
        .collect::<Result<Vec<_>, _>>()?;
    let mut generator = Generator::new(config.clone());
    generator.add_items(&items)?;
    Ok(generator.generate())
}

/// Generates C++ code from JSON text holding the item sequence.
///
/// # Errors
/// Returns `CodegenError` if parsing or generation fails.
pub fn generate_from_json(json: &str, config: &CodegenConfig) -> Result<String, CodegenError> {
    let items = saladgen_schema::parse_items(json)?;
    let mut generator = Generator::new(config.clone());
    generator.add_items(&items)?;
    Ok(generator.generate())
}

/// Generates C++ code from a JSON file holding the item sequence.
///
/// # Errors
/// Returns `CodegenError` if reading, parsing, or generation fails.
pub fn generate_from_file(path: &Path, config: &CodegenConfig) -> Result<String, CodegenError> {
    let json = std::fs::read_to_string(path)?;
    generate_from_json(&json, config)
}

/// Generates C++ code from `input` and writes it to `output`.
///
/// Nothing is written unless generation succeeds.
///
/// # Errors
/// Returns `CodegenError` if reading, generation, or writing fails.
pub fn generate_to_file(
    input: &Path,
    output: &Path,
    config: &CodegenConfig,
) -> Result<(), CodegenError> {
    let code = generate_from_file(input, config)?;
    std::fs::write(output, code)?;
    Ok(())
}
