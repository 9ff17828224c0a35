//! Careersync CLI - keep the career-path dataset's CSV and JSON copies in sync
//!
//! # Main Commands
//!
//! ```bash
//! careersync export            # career-*.json -> nodes.csv / paths.csv
//! careersync import            # nodes.csv / paths.csv -> career-*.json
//! ```
//!
//! # Debug Commands (for development)
//!
//! ```bash
//! careersync check             # Validate the JSON files (schema + integrity)
//! careersync fetch <base-url>  # Exercise the runtime loader against a server
//! ```
//!
//! The data directory defaults to `data`, overridable with the
//! `CAREER_DATA_DIR` environment variable or `--data-dir`.

use clap::{Parser, Subcommand};
use careersync::{
    check_path_references, export_dataset, fetch_career_data, find_duplicate_ids, import_dataset,
    validate_nodes_file, validate_paths_file, DataPaths, NodesFile, PathsFile,
};
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "careersync")]
#[command(about = "Sync the career-path dataset between CSV and JSON", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export the JSON dataset to the editable CSV master copy
    Export {
        /// Dataset directory (default: data, or CAREER_DATA_DIR)
        #[arg(short, long)]
        data_dir: Option<PathBuf>,
    },

    /// Import the CSV master copy into the runtime JSON files
    Import {
        /// Dataset directory (default: data, or CAREER_DATA_DIR)
        #[arg(short, long)]
        data_dir: Option<PathBuf>,
    },

    /// Validate the JSON files: schema, duplicate ids, dangling paths
    Check {
        /// Dataset directory (default: data, or CAREER_DATA_DIR)
        #[arg(short, long)]
        data_dir: Option<PathBuf>,
    },

    /// Fetch the dataset through the runtime loader and print a summary
    Fetch {
        /// Base URL serving the JSON files
        base_url: String,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Export { data_dir } => cmd_export(resolve_paths(data_dir)),
        Commands::Import { data_dir } => cmd_import(resolve_paths(data_dir)),
        Commands::Check { data_dir } => cmd_check(resolve_paths(data_dir)),
        Commands::Fetch { base_url } => cmd_fetch(&base_url).await,
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn resolve_paths(data_dir: Option<PathBuf>) -> DataPaths {
    match data_dir {
        Some(dir) => DataPaths::with_dir(dir),
        None => DataPaths::from_env(),
    }
}

fn cmd_export(paths: DataPaths) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Exporting JSON dataset in {}", paths.dir().display());

    let report = export_dataset(&paths)?;

    for warning in &report.warnings {
        eprintln!("   ⚠️  {}", warning);
    }
    if let Some(count) = report.nodes_written {
        eprintln!("   ✅ nodes.csv created ({} rows)", count);
    }
    if let Some(count) = report.paths_written {
        eprintln!("   ✅ paths.csv created ({} rows)", count);
    }

    Ok(())
}

fn cmd_import(paths: DataPaths) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📄 Importing CSV master copy in {}", paths.dir().display());

    let report = import_dataset(&paths)?;

    for skip in &report.nodes_skipped {
        eprintln!("   ⚠️  nodes.csv: {}", skip);
    }
    for skip in &report.paths_skipped {
        eprintln!("   ⚠️  paths.csv: {}", skip);
    }
    for violation in &report.violations {
        eprintln!("   ⚠️  {}", violation);
    }

    eprintln!(
        "   ✅ Processed {} nodes and {} paths",
        report.node_count, report.path_count
    );

    Ok(())
}

fn cmd_check(paths: DataPaths) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("✔️  Checking JSON dataset in {}", paths.dir().display());

    let nodes_raw = fs::read_to_string(paths.nodes_json())?;
    let paths_raw = fs::read_to_string(paths.paths_json())?;

    let nodes_doc: Value = serde_json::from_str(&nodes_raw)?;
    let paths_doc: Value = serde_json::from_str(&paths_raw)?;

    let mut findings = 0usize;

    if let Err(errors) = validate_nodes_file(&nodes_doc) {
        for err in &errors {
            eprintln!("   ❌ career-nodes.json: {}", err);
        }
        findings += errors.len();
    }
    if let Err(errors) = validate_paths_file(&paths_doc) {
        for err in &errors {
            eprintln!("   ❌ career-paths.json: {}", err);
        }
        findings += errors.len();
    }

    // Structural checks only make sense once the shape deserializes
    if findings == 0 {
        let nodes_file: NodesFile = serde_json::from_value(nodes_doc)?;
        let paths_file: PathsFile = serde_json::from_value(paths_doc)?;

        let duplicates = find_duplicate_ids(&nodes_file.nodes);
        for id in &duplicates {
            eprintln!("   ❌ duplicate node id \"{}\"", id);
        }
        findings += duplicates.len();

        let known_ids: HashSet<String> =
            nodes_file.nodes.iter().map(|n| n.id.clone()).collect();
        let violations = check_path_references(&paths_file.paths, &known_ids);
        for violation in &violations {
            eprintln!("   ⚠️  {}", violation);
        }
        findings += violations.len();

        eprintln!(
            "   📊 {} nodes, {} paths",
            nodes_file.nodes.len(),
            paths_file.paths.len()
        );
    }

    if findings > 0 {
        eprintln!("   ❌ {} finding(s)", findings);
        std::process::exit(1);
    }

    eprintln!("   ✅ Dataset is valid");
    Ok(())
}

async fn cmd_fetch(base_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📡 Fetching dataset from {}", base_url);

    let data = fetch_career_data(base_url).await?;

    eprintln!("   ✅ {} nodes, {} paths", data.nodes.len(), data.paths.len());
    for node in data.nodes.iter().take(5) {
        eprintln!(
            "      {} ({}, {})",
            node.label, node.department, node.level
        );
    }
    if data.nodes.len() > 5 {
        eprintln!("      ... +{}", data.nodes.len() - 5);
    }

    Ok(())
}
