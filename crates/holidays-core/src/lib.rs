//! holidays-core - Core library for holidays-kr
//!
//! This crate provides the dataset model, the holiday schema check, and the
//! multi-format export pipeline (JSON, CSV, iCalendar) used to publish
//! Korean public holidays and anniversaries.

pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod schema;
pub mod types;

pub use error::{HolidaysError, Result};
pub use types::*;
