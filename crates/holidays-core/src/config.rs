//! Configuration management for holidays-kr

use crate::export::{CalendarMeta, FormatOptions};
use crate::types::Category;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dataset input settings
    pub data: DataConfig,
    /// Output settings
    pub export: ExportConfig,
    /// Calendar container settings
    pub calendar: CalendarConfig,
    /// JSON layout settings
    pub format: FormatOptions,
}

/// Dataset input configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding `holidays/` and `anniversaries/` preset files
    pub dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("data"),
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Output root; replaced as a whole by every successful export
    pub output_dir: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("public"),
        }
    }
}

/// Calendar configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Display name of the holidays calendar
    pub holidays_name: String,
    /// Display name of the anniversaries calendar
    pub anniversaries_name: String,
    /// Container fields
    #[serde(flatten)]
    pub meta: CalendarMeta,
}

impl CalendarConfig {
    /// Display name for a category
    pub fn name_for(&self, category: Category) -> &str {
        match category {
            Category::Holidays => &self.holidays_name,
            Category::Anniversaries => &self.anniversaries_name,
        }
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            holidays_name: "South Korean Public Holidays".to_string(),
            anniversaries_name: "South Korean Anniversaries".to_string(),
            meta: CalendarMeta::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.export.output_dir, PathBuf::from("public"));
        assert_eq!(config.data.dir, PathBuf::from("data"));
        assert!(config.format.use_tabs);
        assert_eq!(config.calendar.meta.timezone, "Asia/Seoul");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        assert!(toml.contains("[export]"));
        assert!(toml.contains("[calendar]"));
        assert!(toml.contains("timezone = \"Asia/Seoul\""));

        let config2: Config = toml::from_str(&toml).unwrap();
        assert_eq!(config, config2);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            [calendar]
            holidays_name = "Holidays"

            [format]
            print_width = 120
            "#,
        )
        .unwrap();

        assert_eq!(config.calendar.name_for(Category::Holidays), "Holidays");
        assert_eq!(
            config.calendar.name_for(Category::Anniversaries),
            "South Korean Anniversaries"
        );
        assert_eq!(config.calendar.meta.timezone, "Asia/Seoul");
        assert_eq!(config.format.print_width, 120);
        assert!(config.format.use_tabs);
    }
}
