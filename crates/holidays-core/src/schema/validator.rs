//! Holiday schema validation

use super::report::{FixedDateViolation, SchemaReport};
use crate::dataset::{PresetCollection, YearlyDataset};
use crate::error::{HolidaysError, Result};
use crate::types::Category;
use chrono::NaiveDate;
use std::collections::HashSet;
use tracing::debug;

/// Solar holidays that fall on the same date every year
pub const FIXED_HOLIDAYS: [(u32, u32, &str); 8] = [
    (1, 1, "New Year's Day"),
    (3, 1, "Independence Movement Day"),
    (5, 5, "Children's Day"),
    (6, 6, "Memorial Day"),
    (8, 15, "Liberation Day"),
    (10, 3, "National Foundation Day"),
    (10, 9, "Hangul Day"),
    (12, 25, "Christmas Day"),
];

/// Holidays defined on the lunar calendar; their solar date moves
pub const LUNAR_HOLIDAYS: [&str; 7] = [
    "Lunar New Year's Eve",
    "Lunar New Year's Day",
    "Day after Lunar New Year",
    "Buddha's Birthday",
    "Chuseok Eve",
    "Chuseok",
    "Day after Chuseok",
];

/// A required fixed-date holiday
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedHoliday {
    pub month: u32,
    pub day: u32,
    /// Must be the first label on the date
    pub name: String,
}

/// Required content of every holidays dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidaySchema {
    fixed: Vec<FixedHoliday>,
    lunar: Vec<String>,
}

impl HolidaySchema {
    /// Schema with custom requirements
    pub fn new(
        fixed: impl IntoIterator<Item = FixedHoliday>,
        lunar: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            fixed: fixed.into_iter().collect(),
            lunar: lunar.into_iter().map(Into::into).collect(),
        }
    }

    /// Public holidays of the Republic of Korea
    pub fn korean() -> Self {
        Self::new(
            FIXED_HOLIDAYS.iter().map(|(month, day, name)| FixedHoliday {
                month: *month,
                day: *day,
                name: name.to_string(),
            }),
            LUNAR_HOLIDAYS,
        )
    }

    /// Collect every violation in a dataset
    pub fn check(&self, year: i32, dataset: &YearlyDataset) -> SchemaReport {
        let mut report = SchemaReport::default();

        for holiday in &self.fixed {
            let Some(date) = NaiveDate::from_ymd_opt(year, holiday.month, holiday.day) else {
                continue;
            };
            let primary = dataset.get(&date).and_then(|labels| labels.first());
            if primary.map(String::as_str) != Some(holiday.name.as_str()) {
                report.fixed.push(FixedDateViolation {
                    date,
                    expected: holiday.name.clone(),
                    found: primary.cloned(),
                });
            }
        }

        let present: HashSet<&str> = dataset.labels().collect();
        report.lunar = self
            .lunar
            .iter()
            .filter(|label| !present.contains(label.as_str()))
            .cloned()
            .collect();

        report
    }

    /// Validate one holidays dataset
    pub fn validate(&self, year: i32, dataset: &YearlyDataset) -> Result<()> {
        let report = self.check(year, dataset);
        if report.is_empty() {
            debug!("Dataset {} satisfies the holiday schema", year);
            return Ok(());
        }

        Err(HolidaysError::SchemaViolation {
            category: Category::Holidays,
            year,
            report,
        })
    }

    /// Validate every dataset of a collection
    ///
    /// Collections whose category carries no schema only need each
    /// preset to hold a non-empty dataset.
    pub fn validate_collection(&self, collection: &PresetCollection) -> Result<()> {
        let datasets = collection.datasets()?;
        if !collection.category().requires_schema() {
            return Ok(());
        }

        let mut failures: Vec<HolidaysError> = datasets
            .into_iter()
            .filter_map(|(key, dataset)| self.validate(key.year(), dataset).err())
            .collect();

        match failures.len() {
            0 => Ok(()),
            1 => Err(failures.remove(0)),
            _ => Err(HolidaysError::SchemaViolations(failures)),
        }
    }
}

impl Default for HolidaySchema {
    fn default() -> Self {
        Self::korean()
    }
}
