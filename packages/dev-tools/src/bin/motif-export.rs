//! Motif Index Export Tool
//!
//! Standalone binary that loads a Motif-Index taxonomy and prints query
//! results as JSON, for export scripts and quick inspection.
//!
//! # Usage
//!
//! ```bash
//! # All motifs in document order
//! cargo run --bin motif-export -- list
//!
//! # One motif with its breadcrumb
//! cargo run --bin motif-export -- find D1050
//!
//! # Substring search (default limit 20)
//! cargo run --bin motif-export -- search magic 5
//!
//! # Per-level counts, or the whole forest in source form
//! cargo run --bin motif-export -- stats
//! cargo run --bin motif-export -- tree
//! ```
//!
//! # Environment Variables
//!
//! - `MOTIF_INDEX_PATH`: JSON source file (default: bundled excerpt)
//! - `MOTIF_INDEX_STRICT_KEYS`: `1` or `true` to verify branch key paths
//! - `RUST_LOG`: Logging level (e.g., "info", "debug", "trace")

use std::env;
use std::process::ExitCode;

use anyhow::{bail, Context};
use motif_index_core::{LeafEntry, LookupService, TaxonomyConfig, TaxonomyStore};
use serde::Serialize;
use serde_json::Value;

const DEFAULT_SEARCH_LIMIT: usize = 20;

const USAGE: &str = "usage: motif-export <list|find|search|stats|tree> [ARGS]";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    List,
    Find { code: String },
    Search { query: String, limit: usize },
    Stats,
    Tree,
}

impl Command {
    fn parse(args: &[String]) -> anyhow::Result<Self> {
        let command = match args.first().map(String::as_str) {
            Some("list") => Command::List,
            Some("find") => Command::Find {
                code: args
                    .get(1)
                    .context("usage: motif-export find <CODE>")?
                    .clone(),
            },
            Some("search") => {
                let query = args
                    .get(1)
                    .context("usage: motif-export search <QUERY> [LIMIT]")?
                    .clone();
                let limit = match args.get(2) {
                    Some(raw) => raw
                        .parse::<usize>()
                        .with_context(|| format!("invalid limit: {}", raw))?,
                    None => DEFAULT_SEARCH_LIMIT,
                };
                Command::Search { query, limit }
            }
            Some("stats") => Command::Stats,
            Some("tree") => Command::Tree,
            Some(other) => bail!(
                "unknown command: {} (expected list|find|search|stats|tree)",
                other
            ),
            None => bail!(USAGE),
        };
        Ok(command)
    }
}

/// Result of running one command
#[derive(Debug)]
enum Outcome {
    Json(Value),
    NotFound(String),
}

impl Outcome {
    fn exit_code(&self) -> ExitCode {
        match self {
            Outcome::Json(_) => ExitCode::SUCCESS,
            Outcome::NotFound(_) => ExitCode::FAILURE,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FoundMotif<'a> {
    #[serde(flatten)]
    entry: &'a LeafEntry,
    breadcrumb: Vec<&'a str>,
}

fn main() -> anyhow::Result<ExitCode> {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let command = Command::parse(&args)?;

    let config = config_from_env(env::var("MOTIF_INDEX_STRICT_KEYS").ok().as_deref());
    let store = load_store(env::var("MOTIF_INDEX_PATH").ok().as_deref(), &config)?;

    let outcome = run(&command, &store)?;
    match &outcome {
        Outcome::Json(value) => println!("{}", serde_json::to_string_pretty(value)?),
        Outcome::NotFound(code) => eprintln!("Motif not found: {}", code),
    }

    Ok(outcome.exit_code())
}

/// Map `MOTIF_INDEX_STRICT_KEYS` onto a taxonomy config
fn config_from_env(strict_keys: Option<&str>) -> TaxonomyConfig {
    TaxonomyConfig {
        verify_key_paths: matches!(strict_keys.map(str::trim), Some("1" | "true")),
        ..TaxonomyConfig::default()
    }
}

fn load_store(path: Option<&str>, config: &TaxonomyConfig) -> anyhow::Result<TaxonomyStore> {
    match path {
        Some(path) => {
            tracing::info!("📦 Taxonomy source: {}", path);
            TaxonomyStore::from_path(path, config)
                .with_context(|| format!("failed to load taxonomy from {}", path))
        }
        None => {
            tracing::info!("📦 Taxonomy source: bundled excerpt");
            let store =
                TaxonomyStore::from_json_str(motif_index_core::BUNDLED_MOTIF_INDEX, config)?;
            Ok(store)
        }
    }
}

fn run(command: &Command, store: &TaxonomyStore) -> anyhow::Result<Outcome> {
    let lookup = LookupService::new(store);

    let value = match command {
        Command::List => serde_json::to_value(lookup.get_all_leaf_entries())?,
        Command::Find { code } => {
            let (Some(entry), Some(breadcrumb)) =
                (lookup.find_leaf_by_code(code), lookup.breadcrumb(code))
            else {
                return Ok(Outcome::NotFound(code.clone()));
            };
            serde_json::to_value(FoundMotif { entry, breadcrumb })?
        }
        Command::Search { query, limit } => serde_json::to_value(lookup.search(query, *limit))?,
        Command::Stats => serde_json::to_value(lookup.stats())?,
        Command::Tree => serde_json::to_value(store.export_sources())?,
    };

    Ok(Outcome::Json(value))
}
