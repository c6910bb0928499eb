//! Error types for loading schema documents.

use thiserror::Error;

/// Errors raised while reading a provider schema document.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The document is not valid JSON or does not match the schema shape.
    #[error("invalid schema document: {0}")]
    Json(#[from] serde_json::Error),

    /// The document could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document declares a `format_version` this crate does not understand.
    #[error("unsupported schema format version: {0}")]
    UnsupportedFormatVersion(String),
}

/// Result type for schema loading.
pub type Result<T> = std::result::Result<T, SchemaError>;
