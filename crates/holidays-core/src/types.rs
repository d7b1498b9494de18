//! Core type definitions for holidays-kr

use crate::error::{HolidaysError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Dataset category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Public holidays, subject to the holiday schema
    Holidays,
    /// Commemorative days, no required entries
    Anniversaries,
}

impl Category {
    /// All categories in publishing order
    pub const ALL: [Category; 2] = [Category::Holidays, Category::Anniversaries];

    /// Lowercase name, also used as the data directory name
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Holidays => "holidays",
            Category::Anniversaries => "anniversaries",
        }
    }

    /// Output directory relative to the output root
    pub fn output_dir(&self) -> PathBuf {
        match self {
            Category::Holidays => PathBuf::new(),
            Category::Anniversaries => PathBuf::from("anniversaries"),
        }
    }

    /// Whether datasets of this category must satisfy the holiday schema
    pub fn requires_schema(&self) -> bool {
        matches!(self, Category::Holidays)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = HolidaysError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "holidays" => Ok(Category::Holidays),
            "anniversaries" => Ok(Category::Anniversaries),
            other => Err(HolidaysError::Config(format!("Unknown category: {}", other))),
        }
    }
}

/// Name of a yearly dataset
/// Format: y<YYYY>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PresetKey(i32);

impl PresetKey {
    /// Create a key for a year
    pub fn new(year: i32) -> Self {
        PresetKey(year)
    }

    /// Bare year
    pub fn year(&self) -> i32 {
        self.0
    }

    /// Parse `y2024` style keys
    pub fn parse(s: &str) -> Result<Self> {
        s.parse()
    }

    /// Validate key format without parsing
    pub fn validate(s: &str) -> bool {
        let Some(digits) = s.strip_prefix('y') else {
            return false;
        };
        digits.len() == 4 && digits.bytes().all(|b| b.is_ascii_digit())
    }
}

impl FromStr for PresetKey {
    type Err = HolidaysError;

    fn from_str(s: &str) -> Result<Self> {
        if !Self::validate(s) {
            return Err(HolidaysError::InvalidPresetKey(s.to_string()));
        }
        s[1..]
            .parse()
            .map(PresetKey)
            .map_err(|_| HolidaysError::InvalidPresetKey(s.to_string()))
    }
}

impl fmt::Display for PresetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y{:04}", self.0)
    }
}

impl Serialize for PresetKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PresetKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
