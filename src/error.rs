//! Error types for the careersync dataset pipeline.
//!
//! This module defines a hierarchy of error types:
//!
//! - [`CsvError`] - CSV parsing errors
//! - [`ValidationError`] - JSON Schema validation errors
//! - [`LoadError`] - runtime data loader errors
//! - [`SyncError`] - top-level sync driver errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// CSV Parsing Errors
// =============================================================================

/// Errors during CSV parsing.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// Empty file.
    #[error("CSV input is empty")]
    EmptyInput,

    /// No headers found.
    #[error("No headers found in CSV")]
    NoHeaders,

    /// Invalid CSV content.
    #[error("Invalid CSV at row {row}: {message}")]
    ParseError { row: usize, message: String },
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors during JSON Schema validation.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Schema validation failed.
    #[error("Validation failed: {errors:?}")]
    SchemaError { errors: Vec<String> },

    /// The embedded schema itself could not be compiled.
    #[error("Invalid schema: {0}")]
    InvalidSchema(String),

    /// JSON could not be parsed at all.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

// =============================================================================
// Loader Errors
// =============================================================================

/// Errors from the runtime data loader.
#[derive(Debug, Error)]
pub enum LoadError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("Request for '{url}' failed with status {status}")]
    BadStatus { url: String, status: u16 },

    /// Response body was not the expected JSON shape.
    #[error("Invalid response from '{url}': {message}")]
    InvalidResponse { url: String, message: String },
}

// =============================================================================
// Sync Errors (top-level)
// =============================================================================

/// Top-level sync driver errors.
///
/// This is the main error type returned by the [`crate::transform::pipeline`]
/// entry points. It wraps all lower-level errors and adds driver-specific
/// variants.
#[derive(Debug, Error)]
pub enum SyncError {
    /// CSV parsing error.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Required input file missing or unreadable.
    #[error("Cannot read required input file '{}': {message}", path.display())]
    MissingInput { path: PathBuf, message: String },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type for loader operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type for sync driver operations.
pub type SyncResult<T> = Result<T, SyncError>;
