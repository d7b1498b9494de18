//! Export functionality for datasets
//!
//! This module turns validated datasets into published files.
//!
//! # Overview
//!
//! Export functionality supports:
//! - JSON (tab-indented, width-aware layout)
//! - CSV (BOM-prefixed, one row per label)
//! - iCalendar (all-day events with stable UIDs)
//!
//! The [`Orchestrator`] validates every job, resets the [`OutputStore`]
//! once, stages `{year}.{ext}` per preset plus `basic.{ext}` aggregates
//! for the formats that have one, and commits the set only when every
//! write succeeded.
//!
//! # Example
//!
//! ```ignore
//! use holidays_core::export::{ExportJob, GenerationStamp, Orchestrator};
//!
//! let jobs = vec![ExportJob::new("Public Holidays", holidays)];
//! let report = Orchestrator::new().run(&jobs, &store, GenerationStamp::now())?;
//! ```

mod context;
mod csv;
mod exporter;
mod formatter;
mod ics;
mod json;
mod orchestrator;
mod store;

pub use context::{CalendarMeta, ExportContext, GenerationStamp};
pub use csv::CsvExporter;
pub use exporter::{ExportManager, Exporter};
pub use formatter::{FormatOptions, JsonLayout, TextFormatter};
pub use ics::{event_uid, ics_date, IcsExporter};
pub use json::JsonExporter;
pub use orchestrator::{ExportJob, ExportReport, Orchestrator, WrittenFile, AGGREGATE_STEM};
pub use store::OutputStore;

// Re-export memory store for testing
#[cfg(test)]
pub use store::memory::MemoryStore;
