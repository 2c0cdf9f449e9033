//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema item error (malformed identifier, unrecognized shape, ...).
    #[error("schema error: {0}")]
    Schema(#[from] saladgen_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be read.
    #[error("invalid configuration: {0}")]
    Config(#[source] serde_json::Error),
}
