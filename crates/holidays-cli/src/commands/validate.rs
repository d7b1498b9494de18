//! Validate command
//!
//! Load and check every dataset without touching the output directory.

use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use holidays_core::schema::HolidaySchema;
use std::path::{Path, PathBuf};

use super::{category_label, config, load_jobs};

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Dataset directory (defaults to the configured `data.dir`)
    #[arg(long, short)]
    pub data: Option<PathBuf>,
}

/// Execute the validate command
pub fn execute(args: ValidateArgs, config_path: Option<&Path>) -> Result<()> {
    let (config, _) = config::load(config_path)?;
    let data_dir = args.data.unwrap_or_else(|| config.data.dir.clone());

    let jobs = load_jobs(&config, &data_dir)?;
    let schema = HolidaySchema::korean();
    let mut failed = 0;

    for job in &jobs {
        let label = category_label(job.category());
        if job.collection.is_empty() {
            println!("{} {}: no presets", "-".dimmed(), label);
            continue;
        }

        match schema.validate_collection(&job.collection) {
            Ok(()) => {
                let keys: Vec<String> = job.collection.keys().map(|k| k.to_string()).collect();
                println!("{} {}: {}", "✓".green(), label, keys.join(", "));
            }
            Err(err) => {
                failed += 1;
                println!("{} {}", "✗".red(), label);
                println!("{}", err);
            }
        }
    }

    if failed > 0 {
        bail!("{} of {} categories failed validation", failed, jobs.len());
    }
    Ok(())
}
