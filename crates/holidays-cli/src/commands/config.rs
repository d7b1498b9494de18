//! Config command
//!
//! Locate, show and create holidays-kr configuration.

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use colored::Colorize;
use holidays_core::config::Config;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration file name looked up in the working directory
pub const CONFIG_FILE: &str = "holidays-kr.toml";

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, config_path: Option<&Path>) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => show_config(config_path, json),
        ConfigCommand::Init { force } => init_config(config_path, force),
    }
}

/// Per-user configuration file
pub fn user_config_path() -> PathBuf {
    directories::ProjectDirs::from("com", "holidays-kr", "holidays-kr")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".holidays-kr")
                .join("config.toml")
        })
}

/// Find the configuration file to use
///
/// An explicit path wins, then `./holidays-kr.toml`, then the per-user file.
pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let local = PathBuf::from(CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }

    let user = user_config_path();
    user.is_file().then_some(user)
}

/// Load the effective configuration and the file it came from
pub fn load(explicit: Option<&Path>) -> Result<(Config, Option<PathBuf>)> {
    let Some(path) = resolve_path(explicit) else {
        debug!("No configuration file found, using defaults");
        return Ok((Config::default(), None));
    };

    let config = read_config(&path)?;
    debug!("Loaded configuration from {:?}", path);
    Ok((config, Some(path)))
}

fn read_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Invalid configuration {}", path.display()))
}

fn show_config(config_path: Option<&Path>, as_json: bool) -> Result<()> {
    let (config, source) = load(config_path)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    println!("{}", "Configuration:".bold().underline());
    match &source {
        Some(path) => println!("{}", path.display().to_string().dimmed()),
        None => println!("{}", "(defaults)".dimmed()),
    }
    println!();
    print!("{}", toml::to_string_pretty(&config)?);

    Ok(())
}

fn init_config(config_path: Option<&Path>, force: bool) -> Result<()> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));

    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let content = format!(
        "# holidays-kr configuration\n\n{}",
        toml::to_string_pretty(&Config::default())?
    );
    fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    println!("{} Created {}", "✓".green(), path.display());
    Ok(())
}
