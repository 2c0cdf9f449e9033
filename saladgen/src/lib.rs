//! # saladgen
//!
//! Generate C++17 data structures and yaml-cpp serializers from Schema Salad
//! definitions.
//!
//! The input is the item sequence produced by a Schema Salad loader, with
//! imports already resolved. Records become structs, enums become
//! `enum class`es with string conversions, and every struct gets a
//! `toYaml()` member.
//!
//! ## Quick Start
//!
//! ```
//! use saladgen::prelude::*;
//!
//! let items = serde_json::json!([{
//!     "type": "record",
//!     "name": "https://example.org/schema#Point",
//!     "fields": [
//!         {"name": "https://example.org/schema#Point/x", "type": "double"},
//!         {"name": "https://example.org/schema#Point/y", "type": "double"}
//!     ]
//! }]);
//!
//! let config = CodegenConfig::new().package("example");
//! let header = generate(items.as_array().unwrap(), &config)?;
//! assert!(header.contains("heap_object<double> x;"));
//! # Ok::<(), CodegenError>(())
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Item classification, type resolution and the class model
//! - [`codegen`] - Configuration, the generation driver and C++ emitters

pub mod prelude;

/// Schema item classification, type resolution and class model.
pub mod schema {
    pub use saladgen_schema::*;
}

/// C++ code generation.
pub mod codegen {
    pub use saladgen_codegen::*;
}
