//! Runtime loading interface for the graph explorer.
//!
//! The explorer renders whatever this module hands it: both JSON files are
//! fetched from a base URL, combined into one [`CareerData`] structure, and
//! the Dutch-labeled source keys are remapped onto stable field names the
//! presentation layer can rely on.
//!
//! Every request carries a cache-busting `?v=<millis>` query parameter so a
//! freshly imported dataset is never hidden behind an intermediate cache.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use careersync::loader::fetch_career_data;
//!
//! let data = fetch_career_data("https://intranet/assets/data").await?;
//! println!("{} nodes, {} paths", data.nodes.len(), data.paths.len());
//! ```

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{LoadError, LoadResult};
use crate::models::{
    CareerPath, Node, NodesFile, PathsFile, KEY_CARE_CLUSTER, KEY_CARE_NON_CARE, KEY_PIO_LINK,
};
use crate::transform::paths::{NODES_JSON, PATHS_JSON};

// =============================================================================
// Presentation shapes
// =============================================================================

/// A node as handed to the presentation layer: core fields plus the three
/// remapped extended attributes. Remaining ad hoc keys stay in `extra`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoadedNode {
    pub id: String,
    pub label: String,
    pub department: String,
    pub level: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub salary: String,
    /// Remapped from `"Care/non care"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub care_non_care: Option<String>,
    /// Remapped from `"Care cluster"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub care_cluster: Option<String>,
    /// Remapped from `"Link naar PIO werkenbij (ter bespreking)"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pio_link: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Combined dataset as consumed by the graph renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerData {
    pub nodes: Vec<LoadedNode>,
    pub paths: Vec<CareerPath>,
}

/// Move the Dutch-labeled source keys onto their stable field names.
pub fn remap_node(mut node: Node) -> LoadedNode {
    let mut take = |key: &str| {
        node.extra
            .remove(key)
            .and_then(|v| v.as_str().map(str::to_string))
    };
    let care_non_care = take(KEY_CARE_NON_CARE);
    let care_cluster = take(KEY_CARE_CLUSTER);
    let pio_link = take(KEY_PIO_LINK);

    LoadedNode {
        id: node.id,
        label: node.label,
        department: node.department,
        level: node.level,
        description: node.description,
        requirements: node.requirements,
        salary: node.salary,
        care_non_care,
        care_cluster,
        pio_link,
        extra: node.extra,
    }
}

// =============================================================================
// Loader
// =============================================================================

/// Fetches the dataset the graph explorer runs on.
#[derive(Debug, Clone)]
pub struct DataLoader {
    base_url: String,
    client: reqwest::Client,
}

impl DataLoader {
    /// Create a loader for a base URL (the directory serving the JSON files).
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Fetch both files and combine them.
    pub async fn fetch(&self) -> LoadResult<CareerData> {
        let version = chrono::Utc::now().timestamp_millis();

        let (nodes_file, paths_file): (NodesFile, PathsFile) = tokio::try_join!(
            self.fetch_json(NODES_JSON, version),
            self.fetch_json(PATHS_JSON, version),
        )?;

        Ok(CareerData {
            nodes: nodes_file.nodes.into_iter().map(remap_node).collect(),
            paths: paths_file.paths,
        })
    }

    async fn fetch_json<T: DeserializeOwned>(&self, file: &str, version: i64) -> LoadResult<T> {
        let url = file_url(&self.base_url, file, version);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::BadStatus {
                url,
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| LoadError::InvalidResponse {
                url,
                message: e.to_string(),
            })
    }
}

/// Fetch the combined dataset from a base URL.
pub async fn fetch_career_data(base_url: &str) -> LoadResult<CareerData> {
    DataLoader::new(base_url).fetch().await
}

fn file_url(base: &str, file: &str, version: i64) -> String {
    format!("{base}/{file}?v={version}")
}
