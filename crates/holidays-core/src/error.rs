//! Error types for holidays-kr

use crate::schema::SchemaReport;
use crate::types::{Category, PresetKey};
use std::fmt;
use thiserror::Error;

/// Main error type for holidays-kr
#[derive(Debug, Error)]
pub enum HolidaysError {
    /// A holidays dataset is missing required entries
    #[error("Schema violation in {category} {year}:\n{report}")]
    SchemaViolation {
        category: Category,
        year: i32,
        report: SchemaReport,
    },

    /// Several datasets of one collection failed the schema
    #[error("{}", YearReports(.0))]
    SchemaViolations(Vec<HolidaysError>),

    /// A preset has no value where one was expected
    #[error("Missing dataset for {category} preset {key}")]
    MissingDataset { category: Category, key: PresetKey },

    /// Dataset literal breaks a base invariant
    #[error("Invalid dataset for {year}:\n{}", .problems.join("\n"))]
    InvalidDataset { year: i32, problems: Vec<String> },

    /// Preset key not of the form y<YYYY>
    #[error("Invalid preset key: {0}")]
    InvalidPresetKey(String),

    /// Date string not of the form YYYY-MM-DD
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<HolidaysError>,
    },
}

impl HolidaysError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        HolidaysError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Whether this error (or the one it wraps) is a schema failure
    pub fn is_schema_violation(&self) -> bool {
        match self {
            HolidaysError::SchemaViolation { .. } | HolidaysError::SchemaViolations(_) => true,
            HolidaysError::WithContext { source, .. } => source.is_schema_violation(),
            _ => false,
        }
    }
}

struct YearReports<'a>(&'a [HolidaysError]);

impl fmt::Display for YearReports<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} datasets failed schema validation", self.0.len())?;
        for err in self.0 {
            write!(f, "\n{}", err)?;
        }
        Ok(())
    }
}

/// Result type alias for holidays-kr
pub type Result<T> = std::result::Result<T, HolidaysError>;
