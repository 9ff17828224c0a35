//! File layout of the dataset directory.
//!
//! All four files live at fixed names inside one data directory. The
//! directory defaults to `data`, and can be overridden with the
//! `CAREER_DATA_DIR` environment variable or a CLI flag.

use std::path::{Path, PathBuf};

/// Default data directory (relative to the working directory).
pub const DEFAULT_DATA_DIR: &str = "data";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "CAREER_DATA_DIR";

pub const NODES_JSON: &str = "career-nodes.json";
pub const PATHS_JSON: &str = "career-paths.json";
pub const NODES_CSV: &str = "nodes.csv";
pub const PATHS_CSV: &str = "paths.csv";

/// Resolved locations of the four dataset files.
#[derive(Debug, Clone)]
pub struct DataPaths {
    dir: PathBuf,
}

impl DataPaths {
    /// Use an explicit data directory.
    pub fn with_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Resolve from the `CAREER_DATA_DIR` environment variable, falling back
    /// to [`DEFAULT_DATA_DIR`].
    pub fn from_env() -> Self {
        match std::env::var(DATA_DIR_ENV) {
            Ok(dir) if !dir.is_empty() => Self::with_dir(dir),
            _ => Self::with_dir(DEFAULT_DATA_DIR),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn nodes_json(&self) -> PathBuf {
        self.dir.join(NODES_JSON)
    }

    pub fn paths_json(&self) -> PathBuf {
        self.dir.join(PATHS_JSON)
    }

    pub fn nodes_csv(&self) -> PathBuf {
        self.dir.join(NODES_CSV)
    }

    pub fn paths_csv(&self) -> PathBuf {
        self.dir.join(PATHS_CSV)
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_file_names() {
        let paths = DataPaths::with_dir("/tmp/dataset");
        assert_eq!(
            paths.nodes_json(),
            PathBuf::from("/tmp/dataset/career-nodes.json")
        );
        assert_eq!(paths.paths_csv(), PathBuf::from("/tmp/dataset/paths.csv"));
    }
}
