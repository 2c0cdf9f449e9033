//! Generator configuration.

use crate::error::CodegenError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for a generation run.
///
/// None of these settings change how types are translated; they only affect
/// the emitted header and layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodegenConfig {
    /// Base URI the schema was loaded from.
    pub base_uri: String,
    /// Directory of example documents, for external test generation.
    pub examples: Option<PathBuf>,
    /// Package label written into the header.
    pub package: String,
    /// Copyright banner placed above the generated code.
    pub copyright: Option<String>,
    /// Indentation unit of the emitted code.
    pub indent: String,
}

impl CodegenConfig {
    /// Creates a configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_uri: String::new(),
            examples: None,
            package: String::new(),
            copyright: None,
            indent: "    ".to_string(),
        }
    }

    /// Reads a configuration from JSON; missing keys take their defaults.
    ///
    /// # Errors
    /// Returns `CodegenError::Config` if the text is not a valid configuration.
    pub fn from_json(json: &str) -> Result<Self, CodegenError> {
        serde_json::from_str(json).map_err(CodegenError::Config)
    }

    /// Sets the base URI.
    #[must_use]
    pub fn base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.base_uri = base_uri.into();
        self
    }

    /// Sets the example-document directory.
    #[must_use]
    pub fn examples(mut self, dir: impl Into<PathBuf>) -> Self {
        self.examples = Some(dir.into());
        self
    }

    /// Sets the package label.
    #[must_use]
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    /// Sets the copyright banner.
    #[must_use]
    pub fn copyright(mut self, copyright: impl Into<String>) -> Self {
        self.copyright = Some(copyright.into());
        self
    }

    /// Sets the indentation unit.
    #[must_use]
    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self::new()
    }
}
