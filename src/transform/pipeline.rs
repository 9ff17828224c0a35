//! Sync drivers converting the dataset wholesale between its encodings.
//!
//! Two independent entry points, each a straight-line pipeline with no shared
//! runtime state:
//!
//! - [`export_dataset`] - JSON -> CSV (per-file: a missing input is skipped
//!   with a warning, partial export is allowed)
//! - [`import_dataset`] - CSV -> JSON (either input unreadable is fatal and
//!   nothing is written)
//!
//! Both overwrite their target files wholesale; there is no incremental
//! update and no merge of concurrent edits. Library code returns reports,
//! the CLI decides what to print.

use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::error::{SyncError, SyncResult};
use crate::models::{Dataset, NodesFile, PathsFile};
use crate::parser::{parse_bytes, SkippedRow};
use crate::serializer::to_csv;
use crate::transform::mapper::{
    node_to_row, path_to_row, row_to_node, row_to_path, NODE_COLUMNS, PATH_COLUMNS,
};
use crate::transform::paths::DataPaths;
use crate::validation::{check_path_references, IntegrityViolation};

// =============================================================================
// Export: JSON -> CSV
// =============================================================================

/// Result of an export run.
#[derive(Debug, Clone, Default)]
pub struct ExportReport {
    /// Number of node rows written, or `None` when the JSON input was absent.
    pub nodes_written: Option<usize>,
    /// Number of path rows written, or `None` when the JSON input was absent.
    pub paths_written: Option<usize>,
    /// Non-fatal conditions (missing inputs).
    pub warnings: Vec<String>,
}

/// Export the JSON dataset to the editable CSV master copy.
///
/// Each of the two files is handled independently: an absent JSON input
/// produces a warning and that output is skipped, so the other file may
/// still be exported. A present-but-unparseable input is fatal. Export
/// trusts the JSON content; no integrity check runs in this direction.
pub fn export_dataset(paths: &DataPaths) -> SyncResult<ExportReport> {
    let mut report = ExportReport::default();

    let nodes_json = paths.nodes_json();
    if nodes_json.exists() {
        let content = fs::read_to_string(&nodes_json)?;
        let file: NodesFile = serde_json::from_str(&content)?;
        let rows: Vec<Value> = file.nodes.iter().map(node_to_row).collect();
        fs::write(paths.nodes_csv(), to_csv(&rows, &NODE_COLUMNS))?;
        report.nodes_written = Some(rows.len());
    } else {
        report
            .warnings
            .push(format!("{} not found", nodes_json.display()));
    }

    let paths_json = paths.paths_json();
    if paths_json.exists() {
        let content = fs::read_to_string(&paths_json)?;
        let file: PathsFile = serde_json::from_str(&content)?;
        let rows: Vec<Value> = file.paths.iter().map(path_to_row).collect();
        fs::write(paths.paths_csv(), to_csv(&rows, &PATH_COLUMNS))?;
        report.paths_written = Some(rows.len());
    } else {
        report
            .warnings
            .push(format!("{} not found", paths_json.display()));
    }

    Ok(report)
}

// =============================================================================
// Import: CSV -> JSON
// =============================================================================

/// Result of an import run.
#[derive(Debug, Clone)]
pub struct ImportReport {
    /// Nodes written to `career-nodes.json`.
    pub node_count: usize,
    /// Paths written to `career-paths.json`.
    pub path_count: usize,
    /// Malformed rows dropped from `nodes.csv`.
    pub nodes_skipped: Vec<SkippedRow>,
    /// Malformed rows dropped from `paths.csv`.
    pub paths_skipped: Vec<SkippedRow>,
    /// Dangling path endpoints. Advisory: the paths are written regardless.
    pub violations: Vec<IntegrityViolation>,
}

/// Import the CSV master copy into the runtime JSON files.
///
/// Both CSV files are required; failure to read either aborts the run before
/// anything is written. Referential-integrity violations and dropped
/// malformed rows are reported but never fatal.
pub fn import_dataset(paths: &DataPaths) -> SyncResult<ImportReport> {
    // Read both inputs up front so a missing file leaves no partial output
    let nodes_raw = read_required(&paths.nodes_csv())?;
    let paths_raw = read_required(&paths.paths_csv())?;

    let nodes_parsed = parse_bytes(&nodes_raw)?;
    let paths_parsed = parse_bytes(&paths_raw)?;

    let dataset = Dataset::new(
        nodes_parsed.records.iter().map(row_to_node).collect(),
        paths_parsed.records.iter().map(row_to_path).collect(),
    );

    let violations = check_path_references(&dataset.paths, &dataset.node_ids());

    let report = ImportReport {
        node_count: dataset.nodes.len(),
        path_count: dataset.paths.len(),
        nodes_skipped: nodes_parsed.skipped,
        paths_skipped: paths_parsed.skipped,
        violations,
    };

    let nodes_file = NodesFile {
        nodes: dataset.nodes,
    };
    let paths_file = PathsFile {
        paths: dataset.paths,
    };
    fs::write(
        paths.nodes_json(),
        serde_json::to_string_pretty(&nodes_file)?,
    )?;
    fs::write(
        paths.paths_json(),
        serde_json::to_string_pretty(&paths_file)?,
    )?;

    Ok(report)
}

fn read_required(path: &Path) -> SyncResult<Vec<u8>> {
    fs::read(path).map_err(|e| SyncError::MissingInput {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn dataset_dir() -> (TempDir, DataPaths) {
        let dir = TempDir::new().unwrap();
        let paths = DataPaths::with_dir(dir.path());
        (dir, paths)
    }

    fn write_sample_json(paths: &DataPaths) {
        let nodes = json!({
            "nodes": [
                {
                    "id": "nurse-assistant",
                    "label": "Nurse Assistant",
                    "department": "Nursing",
                    "level": "Entry Level",
                    "description": "Basic patient care under supervision.",
                    "requirements": ["High school diploma", "CNA certification"],
                    "salary": "$25,000 - $35,000",
                    "Care/non care": "Care"
                },
                {
                    "id": "registered-nurse",
                    "label": "Registered Nurse",
                    "department": "Nursing",
                    "level": "Professional",
                    "description": "Direct patient care, \"hands-on\", medication.",
                    "requirements": ["Bachelor's in Nursing", "RN License"],
                    "salary": "$60,000 - $80,000"
                }
            ]
        });
        let paths_doc = json!({
            "paths": [
                {"from": "nurse-assistant", "to": "registered-nurse", "timeframe": "2-4 years"},
                {"from": "registered-nurse", "to": "registered-nurse"}
            ]
        });
        fs::write(
            paths.nodes_json(),
            serde_json::to_string_pretty(&nodes).unwrap(),
        )
        .unwrap();
        fs::write(
            paths.paths_json(),
            serde_json::to_string_pretty(&paths_doc).unwrap(),
        )
        .unwrap();
    }

    #[test]
    fn test_export_then_import_roundtrip() {
        let (_dir, paths) = dataset_dir();
        write_sample_json(&paths);

        let export = export_dataset(&paths).unwrap();
        assert_eq!(export.nodes_written, Some(2));
        assert_eq!(export.paths_written, Some(2));
        assert!(export.warnings.is_empty());

        let import = import_dataset(&paths).unwrap();
        assert_eq!(import.node_count, 2);
        assert_eq!(import.path_count, 2);
        assert!(import.violations.is_empty());

        let nodes: NodesFile =
            serde_json::from_str(&fs::read_to_string(paths.nodes_json()).unwrap()).unwrap();
        assert_eq!(nodes.nodes[0].id, "nurse-assistant");
        assert_eq!(nodes.nodes[0].requirements.len(), 2);
        assert_eq!(
            nodes.nodes[1].description,
            "Direct patient care, \"hands-on\", medication."
        );
        // Extended attributes are narrowed out of the editable master copy
        assert!(nodes.nodes[0].extra.is_empty());

        let path_file: PathsFile =
            serde_json::from_str(&fs::read_to_string(paths.paths_json()).unwrap()).unwrap();
        assert_eq!(path_file.paths[0].timeframe.as_deref(), Some("2-4 years"));
        assert_eq!(path_file.paths[1].timeframe, None);
    }

    #[test]
    fn test_export_skips_missing_input() {
        let (_dir, paths) = dataset_dir();
        write_sample_json(&paths);
        fs::remove_file(paths.nodes_json()).unwrap();

        let report = export_dataset(&paths).unwrap();
        assert_eq!(report.nodes_written, None);
        assert_eq!(report.paths_written, Some(2));
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("career-nodes.json"));
        assert!(!paths.nodes_csv().exists());
        assert!(paths.paths_csv().exists());
    }

    #[test]
    fn test_export_fails_on_unparseable_json() {
        let (_dir, paths) = dataset_dir();
        fs::write(paths.nodes_json(), "{ not json").unwrap();

        assert!(export_dataset(&paths).is_err());
    }

    #[test]
    fn test_import_missing_csv_is_fatal_and_writes_nothing() {
        let (_dir, paths) = dataset_dir();
        fs::write(paths.nodes_csv(), "id,label,department,level,salary,description,requirements\nx,X,D,L,S,desc,").unwrap();
        // paths.csv intentionally absent

        let err = import_dataset(&paths).unwrap_err();
        assert!(matches!(err, SyncError::MissingInput { .. }));
        assert!(!paths.nodes_json().exists());
        assert!(!paths.paths_json().exists());
    }

    #[test]
    fn test_import_reports_dangling_reference_but_writes_path() {
        let (_dir, paths) = dataset_dir();
        fs::write(
            paths.nodes_csv(),
            "id,label,department,level,salary,description,requirements\nrn,Registered Nurse,Nursing,Professional,S,desc,RN License",
        )
        .unwrap();
        fs::write(paths.paths_csv(), "from,to,timeframe\nghost-id,rn,").unwrap();

        let report = import_dataset(&paths).unwrap();
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].row, 2);
        assert_eq!(report.violations[0].endpoint, "from");
        assert_eq!(report.violations[0].id, "ghost-id");

        let path_file: PathsFile =
            serde_json::from_str(&fs::read_to_string(paths.paths_json()).unwrap()).unwrap();
        assert_eq!(path_file.paths.len(), 1);
        assert_eq!(path_file.paths[0].from, "ghost-id");
    }

    #[test]
    fn test_import_records_dropped_rows() {
        let (_dir, paths) = dataset_dir();
        fs::write(
            paths.nodes_csv(),
            "id,label,department,level,salary,description,requirements\nrn,Registered Nurse,Nursing\nna,Nurse Assistant,Nursing,Entry Level,S,desc,",
        )
        .unwrap();
        fs::write(paths.paths_csv(), "from,to,timeframe\nna,rn,1 year").unwrap();

        let report = import_dataset(&paths).unwrap();
        assert_eq!(report.node_count, 1);
        assert_eq!(report.nodes_skipped.len(), 1);
        assert_eq!(report.nodes_skipped[0].row, 2);
        assert!(report.paths_skipped.is_empty());
    }
}
