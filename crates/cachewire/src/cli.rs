//! Command line interface
//!
//! Loads a topology document, runs the translation, and either reports
//! diagnostics (`validate`) or prints the resulting wiring plan as JSON
//! (`plan`). Diagnostics go to stderr with the source location the parser
//! captured for each node.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use cachewire_domain::error::{Error, Result};
use cachewire_infrastructure::config::{AppConfig, ConfigLoader};
use cachewire_infrastructure::error_ext::ErrorContext;
use cachewire_infrastructure::logging::init_logging;
use cachewire_infrastructure::topology::parse_topology_file;
use cachewire_infrastructure::wiring::{CacheManagerTranslator, InMemoryWiringRegistry};

/// Exit code for a run that completed but found an invalid topology
pub const EXIT_INVALID: u8 = 1;

/// Command line interface for cachewire
#[derive(Parser, Debug)]
#[command(name = "cachewire")]
#[command(about = "Declarative cache topology loader")]
#[command(version)]
pub struct Cli {
    /// Path to the application configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// What to do with the topology document
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a topology document and report diagnostics
    Validate {
        /// Topology document; falls back to `topology.file` from the
        /// application configuration
        file: Option<PathBuf>,
    },
    /// Translate a topology document and print the wiring plan as JSON
    Plan {
        /// Topology document; falls back to `topology.file` from the
        /// application configuration
        file: Option<PathBuf>,
    },
}

/// Run the CLI and return the process exit code
pub fn run(cli: Cli) -> Result<u8> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;
    init_logging(&config.logging)?;

    match cli.command {
        Command::Validate { file } => validate(&resolve_topology_path(file, &config)?),
        Command::Plan { file } => plan(&resolve_topology_path(file, &config)?),
    }
}

/// Pick the topology document path: CLI argument wins over configuration
fn resolve_topology_path(file: Option<PathBuf>, config: &AppConfig) -> Result<PathBuf> {
    file.or_else(|| config.topology.file.clone()).ok_or_else(|| {
        Error::configuration(
            "No topology file given; pass one as an argument or set topology.file",
        )
    })
}

fn validate(path: &Path) -> Result<u8> {
    let topology = parse_topology_file(path)?;
    let mut scope = InMemoryWiringRegistry::new();
    let outcome = CacheManagerTranslator::new().translate(&topology, &mut scope);

    if outcome.is_valid() {
        println!(
            "{}: OK ({} cache entries)",
            path.display(),
            outcome.plan.caches().len()
        );
        Ok(0)
    } else {
        for diagnostic in &outcome.diagnostics {
            eprintln!("{}: {}", path.display(), diagnostic);
        }
        Ok(EXIT_INVALID)
    }
}

fn plan(path: &Path) -> Result<u8> {
    let topology = parse_topology_file(path)?;
    let mut scope = InMemoryWiringRegistry::new();
    let plan = CacheManagerTranslator::new()
        .translate(&topology, &mut scope)
        .into_result()?;

    let rendered =
        serde_json::to_string_pretty(&plan).config_context("Failed to render wiring plan")?;
    println!("{}", rendered);
    Ok(0)
}
