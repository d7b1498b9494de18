//! Per-run export context

use crate::error::{HolidaysError, Result};
use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar container fields shared by every calendar file of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarMeta {
    /// PRODID value
    pub product_id: String,
    /// X-WR-TIMEZONE value
    pub timezone: String,
    /// X-WR-CALDESC value
    pub description: String,
}

impl Default for CalendarMeta {
    fn default() -> Self {
        Self {
            product_id: "-//GitHub@hyunbinseo//holidays-kr//KO".to_string(),
            timezone: "Asia/Seoul".to_string(),
            description: "https://github.com/hyunbinseo/holidays-kr".to_string(),
        }
    }
}

/// Time a run was generated, shared by every calendar event
///
/// Sub-second precision is dropped on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GenerationStamp(DateTime<Utc>);

impl GenerationStamp {
    /// Stamp for the current instant
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Stamp for a fixed instant
    pub fn from_datetime(at: DateTime<Utc>) -> Self {
        GenerationStamp(at.trunc_subsecs(0))
    }

    /// Parse an RFC 3339 timestamp
    pub fn parse(s: &str) -> Result<Self> {
        DateTime::parse_from_rfc3339(s)
            .map(|at| Self::from_datetime(at.with_timezone(&Utc)))
            .map_err(|e| HolidaysError::Config(format!("Invalid timestamp '{}': {}", s, e)))
    }

    /// Underlying instant
    pub fn datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// iCalendar UTC date-time, e.g. `20240102T030405Z`
    pub fn to_ics(&self) -> String {
        self.0.format("%Y%m%dT%H%M%SZ").to_string()
    }
}

impl fmt::Display for GenerationStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

/// Everything an exporter needs besides the dataset itself
#[derive(Debug, Clone)]
pub struct ExportContext {
    /// Human-readable calendar name (X-WR-CALNAME)
    pub calendar_name: String,
    /// Container fields
    pub calendar: CalendarMeta,
    /// Generation time of this run
    pub stamp: GenerationStamp,
}

impl ExportContext {
    /// Create a context with default calendar fields
    pub fn new(calendar_name: impl Into<String>, stamp: GenerationStamp) -> Self {
        Self {
            calendar_name: calendar_name.into(),
            calendar: CalendarMeta::default(),
            stamp,
        }
    }

    /// Set the calendar fields
    pub fn with_calendar(mut self, calendar: CalendarMeta) -> Self {
        self.calendar = calendar;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_stamp_ics_format() {
        let stamp = GenerationStamp::parse("2024-01-02T03:04:05.678Z").unwrap();
        assert_eq!(stamp.to_ics(), "20240102T030405Z");
    }

    #[test]
    fn test_stamp_converts_to_utc() {
        let stamp = GenerationStamp::parse("2024-01-02T12:00:00+09:00").unwrap();
        assert_eq!(stamp.to_ics(), "20240102T030000Z");
    }

    #[test]
    fn test_stamp_truncates_subseconds() {
        let at = Utc.with_ymd_and_hms(2024, 5, 5, 0, 0, 0).unwrap()
            + chrono::Duration::milliseconds(999);
        let stamp = GenerationStamp::from_datetime(at);
        assert_eq!(stamp.datetime(), Utc.with_ymd_and_hms(2024, 5, 5, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_stamp_rejects_garbage() {
        assert!(GenerationStamp::parse("yesterday").is_err());
    }

    #[test]
    fn test_default_calendar_meta() {
        let meta = CalendarMeta::default();
        assert_eq!(meta.timezone, "Asia/Seoul");
        assert!(meta.product_id.starts_with("-//"));
    }
}
