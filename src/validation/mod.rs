//! Dataset validation: JSON Schema checks and referential integrity.
//!
//! Two layers, both advisory from the sync driver's point of view:
//!
//! # Schema validation
//!
//! The on-disk JSON files are validated against JSON Schema Draft 7 schemas
//! embedded at compile time from the `schemas/` directory:
//! - `career-nodes.schema.json`
//! - `career-paths.schema.json`
//!
//! Extended node attributes (the Dutch-labeled source keys, ad hoc fields
//! like `roles`) are deliberately allowed through: the schemas pin only the
//! core contract.
//!
//! # Referential integrity
//!
//! Every path endpoint should reference an existing node id. Violations are
//! reported with their source row so a human editor can fix the CSV; they
//! never abort a run and the offending paths are still written.

use serde_json::Value;
use std::collections::HashSet;

use crate::models::{CareerPath, Node};

// =============================================================================
// Schema validation
// =============================================================================

/// Validate a JSON object against a JSON Schema.
///
/// # Returns
/// * `Ok(())` when valid
/// * `Err(Vec<String>)` with one message per violation
pub fn validate(schema: &Value, data: &Value) -> Result<(), Vec<String>> {
    let validator = jsonschema::draft7::new(schema)
        .map_err(|e| vec![format!("Invalid schema: {}", e)])?;

    let errors: Vec<String> = validator
        .iter_errors(data)
        .map(|e| e.to_string())
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Quick true/false check against a schema.
pub fn is_valid(schema: &Value, data: &Value) -> bool {
    jsonschema::draft7::is_valid(schema, data)
}

/// Validate a `career-nodes.json` document against the embedded schema.
pub fn validate_nodes_file(data: &Value) -> Result<(), Vec<String>> {
    let schema: Value =
        serde_json::from_str(include_str!("../../schemas/career-nodes.schema.json"))
            .expect("Invalid embedded schema");
    validate(&schema, data)
}

/// Validate a `career-paths.json` document against the embedded schema.
pub fn validate_paths_file(data: &Value) -> Result<(), Vec<String>> {
    let schema: Value =
        serde_json::from_str(include_str!("../../schemas/career-paths.schema.json"))
            .expect("Invalid embedded schema");
    validate(&schema, data)
}

// =============================================================================
// Identifier uniqueness
// =============================================================================

/// Node ids that occur more than once, in first-occurrence order.
///
/// `id` must be unique within a dataset snapshot; like the integrity check
/// this is a reporting aid, not an enforcement point.
pub fn find_duplicate_ids(nodes: &[Node]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();

    for node in nodes {
        if !seen.insert(node.id.as_str()) && reported.insert(node.id.as_str()) {
            duplicates.push(node.id.clone());
        }
    }

    duplicates
}

// =============================================================================
// Referential integrity
// =============================================================================

/// A path endpoint referencing a node id that does not exist.
///
/// `row` is the 1-based source row of the path: the header counts as row 1,
/// so the first data row is row 2.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegrityViolation {
    pub row: usize,
    pub endpoint: &'static str,
    pub id: String,
}

impl std::fmt::Display for IntegrityViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[Row {}] path '{}' id \"{}\" not found in nodes",
            self.row, self.endpoint, self.id
        )
    }
}

/// Check every path's endpoints against the set of known node ids.
///
/// Each dangling endpoint produces exactly one violation; a path whose two
/// endpoints are both dangling produces two. The caller decides what to do
/// with the report - the sync driver only logs it.
pub fn check_path_references(
    paths: &[CareerPath],
    known_ids: &HashSet<String>,
) -> Vec<IntegrityViolation> {
    let mut violations = Vec::new();

    for (index, path) in paths.iter().enumerate() {
        let row = index + 2;
        if !known_ids.contains(&path.from) {
            violations.push(IntegrityViolation {
                row,
                endpoint: "from",
                id: path.from.clone(),
            });
        }
        if !known_ids.contains(&path.to) {
            violations.push(IntegrityViolation {
                row,
                endpoint: "to",
                id: path.to.clone(),
            });
        }
    }

    violations
}
