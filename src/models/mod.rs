//! Domain models for the career-path dataset.
//!
//! This module contains the core data structures used throughout the sync
//! pipeline:
//!
//! - [`Node`] - a career position with identity and requirements
//! - [`CareerPath`] - a directed transition between two node ids
//! - [`NodesFile`] / [`PathsFile`] - the on-disk JSON wrappers
//! - [`Dataset`] - combined node set and path set

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// Extended attribute keys
// =============================================================================

/// Source JSON key for the care/non-care classification.
pub const KEY_CARE_NON_CARE: &str = "Care/non care";
/// Source JSON key for the care cluster.
pub const KEY_CARE_CLUSTER: &str = "Care cluster";
/// Source JSON key for the external vacancy link.
pub const KEY_PIO_LINK: &str = "Link naar PIO werkenbij (ter bespreking)";

// =============================================================================
// Node
// =============================================================================

/// A career position in the hospital workforce graph.
///
/// `id` is the stable key referenced by [`CareerPath`] endpoints and by the
/// graph renderer. It must be non-empty and unique within a dataset snapshot.
///
/// Field order matches the runtime JSON contract, so serialization reproduces
/// the key order the explorer expects. Attributes beyond the core seven
/// (including the Dutch-labeled source keys) are carried in `extra` and pass
/// through unvalidated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Node {
    /// Unique, stable identifier.
    pub id: String,
    /// Display name.
    pub label: String,
    /// Department the position belongs to.
    pub department: String,
    /// Seniority level (free text, e.g. "Entry Level").
    pub level: String,
    /// Role description.
    pub description: String,
    /// Entry requirements. Zero or more free-text strings.
    #[serde(default)]
    pub requirements: Vec<String>,
    /// Pay bucket or range. Display text, never parsed as a number.
    pub salary: String,
    /// Extended attributes (care cluster, vacancy links, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Node {
    /// Create a node with the seven core fields and no extended attributes.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        department: impl Into<String>,
        level: impl Into<String>,
        description: impl Into<String>,
        requirements: Vec<String>,
        salary: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            department: department.into(),
            level: level.into(),
            description: description.into(),
            requirements,
            salary: salary.into(),
            extra: Map::new(),
        }
    }
}

// =============================================================================
// Career Path
// =============================================================================

/// A permitted transition between two career positions.
///
/// `from` and `to` reference [`Node::id`] values. Self-loops and parallel
/// edges with different timeframes are allowed; referential integrity is
/// checked but never enforced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CareerPath {
    /// Source node id.
    pub from: String,
    /// Target node id.
    pub to: String,
    /// Estimated transition duration (free text, e.g. "2-4 years").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<String>,
}

impl CareerPath {
    /// Create a path between two node ids.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            timeframe: None,
        }
    }

    /// Attach a timeframe estimate.
    pub fn with_timeframe(mut self, timeframe: impl Into<String>) -> Self {
        self.timeframe = Some(timeframe.into());
        self
    }
}

// =============================================================================
// On-disk JSON wrappers
// =============================================================================

/// The `career-nodes.json` document: `{ "nodes": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct NodesFile {
    pub nodes: Vec<Node>,
}

/// The `career-paths.json` document: `{ "paths": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PathsFile {
    pub paths: Vec<CareerPath>,
}

// =============================================================================
// Dataset
// =============================================================================

/// The combined node set and path set describing a career-progression graph.
///
/// Both sequences keep insertion order; order is irrelevant to correctness
/// but preserved for diffability of the generated files.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Dataset {
    pub nodes: Vec<Node>,
    pub paths: Vec<CareerPath>,
}

impl Dataset {
    pub fn new(nodes: Vec<Node>, paths: Vec<CareerPath>) -> Self {
        Self { nodes, paths }
    }

    /// The set of node identifiers paths may legally reference.
    pub fn node_ids(&self) -> std::collections::HashSet<String> {
        self.nodes.iter().map(|n| n.id.clone()).collect()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_node() -> Node {
        Node::new(
            "registered-nurse",
            "Registered Nurse",
            "Nursing",
            "Professional",
            "Provide direct patient care.",
            vec!["Bachelor's in Nursing".into(), "RN License".into()],
            "$60,000 - $80,000",
        )
    }

    #[test]
    fn test_node_serialization_key_order() {
        let json = serde_json::to_string(&sample_node()).unwrap();
        let id_pos = json.find("\"id\"").unwrap();
        let desc_pos = json.find("\"description\"").unwrap();
        let salary_pos = json.find("\"salary\"").unwrap();
        assert!(id_pos < desc_pos);
        assert!(desc_pos < salary_pos);
    }

    #[test]
    fn test_node_extra_fields_pass_through() {
        let raw = json!({
            "id": "triage-nurse",
            "label": "Triage Nurse",
            "department": "Emergency",
            "level": "Professional",
            "description": "First assessment of incoming patients.",
            "requirements": ["RN License"],
            "salary": "Schaal 9",
            "Care/non care": "Care",
            "roles": "Triage"
        });

        let node: Node = serde_json::from_value(raw).unwrap();
        assert_eq!(node.extra[KEY_CARE_NON_CARE], "Care");
        assert_eq!(node.extra["roles"], "Triage");

        let back = serde_json::to_value(&node).unwrap();
        assert_eq!(back["Care/non care"], "Care");
    }

    #[test]
    fn test_missing_requirements_default_to_empty() {
        let raw = json!({
            "id": "porter",
            "label": "Porter",
            "department": "Logistics",
            "level": "Entry Level",
            "description": "Transport patients and goods.",
            "salary": "Schaal 3"
        });
        let node: Node = serde_json::from_value(raw).unwrap();
        assert!(node.requirements.is_empty());
    }

    #[test]
    fn test_path_timeframe_skipped_when_absent() {
        let path = CareerPath::new("a", "b");
        let json = serde_json::to_string(&path).unwrap();
        assert!(!json.contains("timeframe"));

        let timed = CareerPath::new("a", "b").with_timeframe("2-4 years");
        let json = serde_json::to_string(&timed).unwrap();
        assert!(json.contains("2-4 years"));
    }

    #[test]
    fn test_dataset_node_ids() {
        let dataset = Dataset::new(
            vec![sample_node()],
            vec![CareerPath::new("registered-nurse", "registered-nurse")],
        );
        assert!(dataset.node_ids().contains("registered-nurse"));
        assert_eq!(dataset.node_ids().len(), 1);
    }

    #[test]
    fn test_nodes_file_roundtrip() {
        let file = NodesFile {
            nodes: vec![sample_node()],
        };
        let text = serde_json::to_string_pretty(&file).unwrap();
        let back: NodesFile = serde_json::from_str(&text).unwrap();
        assert_eq!(back.nodes, file.nodes);
    }
}
