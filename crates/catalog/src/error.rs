//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while building or loading a product catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file could not be found
    #[error("Failed to open catalog: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the catalog
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Line in a catalog couldn't be parsed
    #[error("Parse error at line {line} in {source_name}: {reason}")]
    ParseError {
        source_name: String,
        line: usize,
        reason: String,
    },

    /// An attribute had a value outside its closed set
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
