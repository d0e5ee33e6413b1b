//! Error types for the catalog
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Unified error type for catalog operations
#[derive(Debug, Error)]
pub enum CatalogError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Load Errors
    // -------------------------------------------------------------------------
    #[error("Malformed record on line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid search key: {0}")]
    InvalidSearchKey(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CatalogError {
    /// True when the error means the data file does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}
