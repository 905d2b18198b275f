//! Error types for RecordCat
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using CatalogError
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Unified error type for RecordCat operations
#[derive(Debug, Error)]
pub enum CatalogError {
    // -------------------------------------------------------------------------
    // Catalog Errors (expected, reported to the caller)
    // -------------------------------------------------------------------------
    #[error("id is required")]
    EmptyId,

    #[error("record with id {0:?} already exists")]
    AlreadyExists(String),

    #[error("record with id {0:?} not found")]
    NotFound(String),

    // -------------------------------------------------------------------------
    // Payload Errors
    // -------------------------------------------------------------------------
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CatalogError {
    /// True for conditions caused by the client rather than the server
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyId | Self::AlreadyExists(_) | Self::NotFound(_) | Self::MalformedPayload(_)
        )
    }
}
