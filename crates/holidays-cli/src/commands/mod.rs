//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod config;
pub mod export;
pub mod validate;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use holidays_core::config::Config;
use holidays_core::export::ExportJob;
use holidays_core::types::Category;
use holidays_storage::FileSystemDatasets;
use std::path::{Path, PathBuf};

/// holidays-kr - Korean public holiday and anniversary publisher
#[derive(Debug, Parser)]
#[command(name = "holidays-kr")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate the datasets and regenerate every output file
    Export(export::ExportArgs),

    /// Check the datasets without writing anything
    Validate(validate::ValidateArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Run the CLI application
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Export(args) => export::execute(args, config_path),
        Commands::Validate(args) => validate::execute(args, config_path),
        Commands::Config(cmd) => config::execute(cmd, config_path),
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Load every category under `data_dir` as an export job
pub(crate) fn load_jobs(config: &Config, data_dir: &Path) -> Result<Vec<ExportJob>> {
    let datasets = FileSystemDatasets::new(data_dir);
    let collections = datasets
        .load_all()
        .with_context(|| format!("Failed to load datasets from {}", data_dir.display()))?;

    Ok(collections
        .into_iter()
        .map(|collection| {
            let name = config.calendar.name_for(collection.category());
            ExportJob::new(name, collection)
        })
        .collect())
}

/// Output subdirectory label for messages
pub(crate) fn category_label(category: Category) -> String {
    match category {
        Category::Holidays => format!("{} (root)", category),
        Category::Anniversaries => format!("{} ({}/)", category, category.output_dir().display()),
    }
}
