//! Schema violation reports

use chrono::NaiveDate;
use std::fmt;

/// A required fixed-date holiday that is absent or mislabeled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedDateViolation {
    /// Required date
    pub date: NaiveDate,
    /// Canonical name expected as the first label
    pub expected: String,
    /// First label actually present, if the date exists
    pub found: Option<String>,
}

impl fmt::Display for FixedDateViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.found {
            None => write!(f, "missing fixed date {} ({:?})", self.date, self.expected),
            Some(found) => write!(
                f,
                "wrong primary label on {}: expected {:?}, found {:?}",
                self.date, self.expected, found
            ),
        }
    }
}

/// Every problem found when checking one dataset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaReport {
    /// Fixed dates missing or carrying the wrong first label
    pub fixed: Vec<FixedDateViolation>,
    /// Lunar observance labels absent from the whole dataset
    pub lunar: Vec<String>,
}

impl SchemaReport {
    /// Check if no violations were found
    pub fn is_empty(&self) -> bool {
        self.fixed.is_empty() && self.lunar.is_empty()
    }

    /// Total number of violations
    pub fn len(&self) -> usize {
        self.fixed.len() + self.lunar.len()
    }

    /// Required dates that are absent or mislabeled
    pub fn missing_dates(&self) -> Vec<NaiveDate> {
        self.fixed.iter().map(|v| v.date).collect()
    }

    /// Check if a lunar observance was reported missing
    pub fn is_lunar_missing(&self, label: &str) -> bool {
        self.lunar.iter().any(|l| l == label)
    }
}

impl fmt::Display for SchemaReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for violation in &self.fixed {
            if !first {
                writeln!(f)?;
            }
            write!(f, "  - {}", violation)?;
            first = false;
        }
        for label in &self.lunar {
            if !first {
                writeln!(f)?;
            }
            write!(f, "  - missing lunar observance {:?}", label)?;
            first = false;
        }
        Ok(())
    }
}
