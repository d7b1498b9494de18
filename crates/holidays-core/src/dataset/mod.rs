//! Holiday and anniversary datasets
//!
//! A [`YearlyDataset`] maps each date of one year to its ordered labels.
//! Datasets are grouped per category into a [`PresetCollection`] keyed by
//! [`crate::types::PresetKey`].
//!
//! # Example
//!
//! ```ignore
//! use holidays_core::dataset::{PresetCollection, YearlyDatasetBuilder};
//! use holidays_core::types::Category;
//!
//! let dataset = YearlyDatasetBuilder::new(2024)
//!     .entry_str("2024-01-01", ["New Year's Day"])
//!     .build()?;
//! let collection = PresetCollection::new(Category::Anniversaries).with(dataset)?;
//! ```

mod builder;
mod model;

pub use builder::YearlyDatasetBuilder;
pub use model::{parse_date, Entry, PresetCollection, RawDataset, YearlyDataset, DATE_FORMAT};
