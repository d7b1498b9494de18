//! Holiday dataset schema
//!
//! Every `holidays` dataset must list the eight fixed-date public
//! holidays with their canonical name as the first label, and must
//! mention each of the seven lunar-calendar observances somewhere.
//! The check runs once, before any output is produced.
//!
//! # Example
//!
//! ```ignore
//! use holidays_core::schema::HolidaySchema;
//!
//! let schema = HolidaySchema::korean();
//! let report = schema.check(2024, &dataset);
//! for violation in &report.fixed {
//!     eprintln!("{}", violation);
//! }
//! ```

mod report;
mod validator;

pub use report::{FixedDateViolation, SchemaReport};
pub use validator::{FixedHoliday, HolidaySchema, FIXED_HOLIDAYS, LUNAR_HOLIDAYS};
