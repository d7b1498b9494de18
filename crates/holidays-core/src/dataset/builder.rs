//! Dataset builder for fluent API

use super::model::{parse_date, Entry, RawDataset, YearlyDataset};
use crate::error::{HolidaysError, Result};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// Builder for yearly datasets
///
/// Problems are collected rather than raised one at a time, so `build`
/// reports every bad entry of a literal at once.
pub struct YearlyDatasetBuilder {
    year: i32,
    entries: Vec<(String, Vec<String>)>,
}

impl YearlyDatasetBuilder {
    /// Create a new builder for a year
    pub fn new(year: i32) -> Self {
        Self {
            year,
            entries: Vec::new(),
        }
    }

    /// Start from an authored dataset
    pub fn from_raw(year: i32, raw: RawDataset) -> Self {
        Self {
            year,
            entries: raw.0,
        }
    }

    /// Add an entry
    pub fn entry(mut self, date: NaiveDate, labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.entries.push((
            date.format(super::model::DATE_FORMAT).to_string(),
            labels.into_iter().map(Into::into).collect(),
        ));
        self
    }

    /// Add an entry keyed by a `YYYY-MM-DD` string
    pub fn entry_str(mut self, date: impl Into<String>, labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.entries
            .push((date.into(), labels.into_iter().map(Into::into).collect()));
        self
    }

    /// Add several entries
    pub fn entries(mut self, entries: impl IntoIterator<Item = Entry>) -> Self {
        for entry in entries {
            self = self.entry(entry.date, entry.labels);
        }
        self
    }

    /// Build the dataset
    pub fn build(self) -> Result<YearlyDataset> {
        let mut problems = Vec::new();
        let mut map: BTreeMap<NaiveDate, Vec<String>> = BTreeMap::new();

        for (key, labels) in self.entries {
            let date = match parse_date(&key) {
                Ok(date) => date,
                Err(_) => {
                    problems.push(format!("{}: not a YYYY-MM-DD date", key));
                    continue;
                }
            };

            if date.year() != self.year {
                problems.push(format!("{}: outside year {}", key, self.year));
            }
            if labels.is_empty() {
                problems.push(format!("{}: no labels", key));
            }
            if labels.iter().any(|l| l.trim().is_empty()) {
                problems.push(format!("{}: blank label", key));
            }
            if map.contains_key(&date) {
                problems.push(format!("{}: duplicate date", key));
                continue;
            }

            map.insert(date, labels);
        }

        if !problems.is_empty() {
            return Err(HolidaysError::InvalidDataset {
                year: self.year,
                problems,
            });
        }

        Ok(YearlyDataset {
            year: self.year,
            entries: map,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_basic() {
        let dataset = YearlyDatasetBuilder::new(2024)
            .entry(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), ["New Year's Day"])
            .entry_str("2024-03-01", ["Independence Movement Day"])
            .build()
            .unwrap();

        assert_eq!(dataset.year(), 2024);
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn test_build_empty_is_allowed() {
        let dataset = YearlyDatasetBuilder::new(2024).build().unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_duplicate_date_rejected() {
        let result = YearlyDatasetBuilder::new(2024)
            .entry_str("2024-01-01", ["a"])
            .entry_str("2024-01-01", ["b"])
            .build();

        match result {
            Err(HolidaysError::InvalidDataset { problems, .. }) => {
                assert_eq!(problems, vec!["2024-01-01: duplicate date".to_string()]);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_reports_every_problem() {
        let result = YearlyDatasetBuilder::new(2024)
            .entry_str("2023-12-31", ["Old"])
            .entry_str("2024-13-01", ["Nope"])
            .entry_str("2024-02-01", Vec::<String>::new())
            .entry_str("2024-02-02", ["  "])
            .build();

        match result {
            Err(HolidaysError::InvalidDataset { year, problems }) => {
                assert_eq!(year, 2024);
                assert_eq!(problems.len(), 4);
                assert!(problems[0].contains("outside year 2024"));
                assert!(problems[1].contains("not a YYYY-MM-DD date"));
                assert!(problems[2].contains("no labels"));
                assert!(problems[3].contains("blank label"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_from_raw() {
        let raw: RawDataset =
            serde_json::from_str(r#"{"2024-12-25":["Christmas Day"],"2024-01-01":["New Year's Day"]}"#)
                .unwrap();
        let dataset = YearlyDatasetBuilder::from_raw(2024, raw).build().unwrap();
        let first = dataset.iter().next().unwrap();
        assert_eq!(first.0.to_string(), "2024-01-01");
    }
}
