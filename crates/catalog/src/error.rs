//! Error types for the catalog crate.

use crate::types::QuoteId;
use thiserror::Error;

/// Errors that can occur while loading and validating the quotes document
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be found or opened
    #[error("Failed to open quotes file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Document is not valid JSON or does not match the expected shape
    #[error("Invalid quotes document: {0}")]
    InvalidDocument(#[from] serde_json::Error),

    /// Two records share the same id
    #[error("Duplicate quote id: {id}")]
    DuplicateId { id: QuoteId },

    /// A required text field is empty or whitespace-only
    #[error("Quote {id} has a blank {field}")]
    BlankField { id: QuoteId, field: &'static str },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
