//! Export command
//!
//! Validate every dataset, then regenerate the output directory.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use holidays_core::export::{ExportManager, ExportReport, GenerationStamp, Orchestrator};
use holidays_storage::FileSystemOutput;
use std::path::{Path, PathBuf};
use tracing::info;

use super::{category_label, config, load_jobs};

/// Arguments for the export command
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Dataset directory (defaults to the configured `data.dir`)
    #[arg(long, short)]
    pub data: Option<PathBuf>,

    /// Output directory, replaced as a whole (defaults to `export.output_dir`)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Generation time as RFC 3339, for reproducible DTSTAMP values
    #[arg(long, env = "HOLIDAYS_KR_TIMESTAMP")]
    pub timestamp: Option<String>,
}

/// Execute the export command
pub fn execute(args: ExportArgs, config_path: Option<&Path>) -> Result<()> {
    let (config, _) = config::load(config_path)?;

    let data_dir = args.data.unwrap_or_else(|| config.data.dir.clone());
    let output_dir = args
        .output
        .unwrap_or_else(|| config.export.output_dir.clone());
    let stamp = match args.timestamp.as_deref() {
        Some(raw) => GenerationStamp::parse(raw).context("Invalid --timestamp")?,
        None => GenerationStamp::now(),
    };

    let jobs = load_jobs(&config, &data_dir)?;
    for job in &jobs {
        info!(
            "{}: {} presets for {}",
            category_label(job.category()),
            job.collection.len(),
            job.calendar_name
        );
    }

    let orchestrator = Orchestrator::new()
        .with_manager(ExportManager::with_format_options(config.format.clone()))
        .with_calendar(config.calendar.meta.clone());
    let output = FileSystemOutput::new(&output_dir).protect(&data_dir);

    let report = orchestrator
        .run(&jobs, &output, stamp)
        .with_context(|| format!("Export to {} failed", output_dir.display()))?;

    print_report(&report, &output_dir);
    Ok(())
}

fn print_report(report: &ExportReport, output_dir: &Path) {
    for file in &report.files {
        println!(
            "  {} {} {}",
            "✓".green(),
            file.path.display(),
            format!("({} bytes, {})", file.size, &file.digest[..12]).dimmed()
        );
    }

    println!(
        "{} Wrote {} files ({} bytes) to {}",
        "✓".green(),
        report.files.len(),
        report.total_bytes(),
        output_dir.display().to_string().cyan()
    );
    println!(
        "{}",
        format!("DTSTAMP {}", report.stamp.to_ics()).dimmed()
    );
}
