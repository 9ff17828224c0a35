//! # Careersync - career-path dataset sync and validation
//!
//! Careersync keeps the two encodings of the hospital career-path dataset in
//! sync: the human-editable CSV master copy and the JSON runtime copy the
//! graph explorer loads.
//!
//! ## Architecture
//!
//! ```text
//! Export:  career-*.json ──▶ Mapper (flatten) ──▶ CSV writer ──▶ *.csv
//! Import:  *.csv ──▶ Parser ──▶ Mapper (structure) ──▶ Integrity ──▶ career-*.json
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use careersync::{import_dataset, DataPaths};
//!
//! let report = import_dataset(&DataPaths::with_dir("data"))?;
//! println!("Processed {} nodes and {} paths", report.node_count, report.path_count);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Domain models (Node, CareerPath, Dataset)
//! - [`parser`] - Quote-aware CSV parsing with encoding auto-detection
//! - [`serializer`] - CSV writing with round-trip-safe quoting
//! - [`transform`] - Field mapping and the sync pipelines
//! - [`validation`] - Schema validation and referential integrity
//! - [`loader`] - Runtime loading interface for the graph explorer

// Core modules
pub mod error;
pub mod models;

// CSV round trip
pub mod parser;
pub mod serializer;

// Transformation
pub mod transform;

// Validation
pub mod validation;

// Runtime loading
pub mod loader;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    CsvError, CsvResult, LoadError, LoadResult, SyncError, SyncResult, ValidationError,
    ValidationResult,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{CareerPath, Dataset, Node, NodesFile, PathsFile};

// =============================================================================
// Re-exports - CSV Parsing
// =============================================================================

pub use parser::{
    decode_content, detect_encoding, parse_bytes, parse_csv, parse_csv_file, ParseResult,
    SkippedRow,
};

// =============================================================================
// Re-exports - CSV Writing
// =============================================================================

pub use serializer::to_csv;

// =============================================================================
// Re-exports - Transformation
// =============================================================================

pub use transform::mapper::{
    node_to_row, path_to_row, row_to_node, row_to_path, split_requirements, NODE_COLUMNS,
    PATH_COLUMNS,
};
pub use transform::paths::DataPaths;
pub use transform::pipeline::{export_dataset, import_dataset, ExportReport, ImportReport};

// =============================================================================
// Re-exports - Validation
// =============================================================================

pub use validation::{
    check_path_references, find_duplicate_ids, is_valid, validate, validate_nodes_file,
    validate_paths_file, IntegrityViolation,
};

// =============================================================================
// Re-exports - Loader
// =============================================================================

pub use loader::{fetch_career_data, CareerData, DataLoader, LoadedNode};
