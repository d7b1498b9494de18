//! Dataset data models

use crate::error::{HolidaysError, Result};
use crate::types::{Category, PresetKey};
use chrono::NaiveDate;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Canonical date format for dataset keys
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One calendar date and its observances
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Day of the observances
    pub date: NaiveDate,
    /// Labels in display order
    pub labels: Vec<String>,
}

impl Entry {
    /// Create a new entry
    pub fn new(date: NaiveDate, labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            date,
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }
}

/// Parse a `YYYY-MM-DD` dataset key
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    // chrono accepts unpadded fields, dataset keys must be canonical
    if s.len() != 10 {
        return Err(HolidaysError::InvalidDate(s.to_string()));
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| HolidaysError::InvalidDate(s.to_string()))
}

/// All entries of a single year, ordered by date
///
/// Construct with [`super::YearlyDatasetBuilder`], which enforces the
/// base invariants (unique dates, matching year, non-empty labels).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearlyDataset {
    pub(crate) year: i32,
    pub(crate) entries: BTreeMap<NaiveDate, Vec<String>>,
}

impl YearlyDataset {
    /// Year every date belongs to
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Number of distinct dates
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the dataset has no dates
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Labels for a date
    pub fn get(&self, date: &NaiveDate) -> Option<&[String]> {
        self.entries.get(date).map(Vec::as_slice)
    }

    /// Iterate dates in ascending order
    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &[String])> {
        self.entries.iter().map(|(d, l)| (d, l.as_slice()))
    }

    /// Iterate every (date, label) pair, date order then label order
    pub fn pairs(&self) -> impl Iterator<Item = (&NaiveDate, &str)> {
        self.entries
            .iter()
            .flat_map(|(date, labels)| labels.iter().map(move |l| (date, l.as_str())))
    }

    /// Total number of (date, label) pairs
    pub fn pair_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Every label, in pair order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.values().flatten().map(String::as_str)
    }

    /// Owned entries
    pub fn to_entries(&self) -> Vec<Entry> {
        self.entries
            .iter()
            .map(|(date, labels)| Entry::new(*date, labels.iter().cloned()))
            .collect()
    }
}

impl Serialize for YearlyDataset {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (date, labels) in &self.entries {
            map.serialize_entry(&date.format(DATE_FORMAT).to_string(), labels)?;
        }
        map.end()
    }
}

/// Dataset as authored, before any invariant is checked
///
/// Keeps document order and duplicate keys so the builder can report them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDataset(pub Vec<(String, Vec<String>)>);

impl<'de> Deserialize<'de> for RawDataset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct RawVisitor;

        impl<'de> Visitor<'de> for RawVisitor {
            type Value = RawDataset;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of YYYY-MM-DD dates to label lists")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((date, labels)) = access.next_entry::<String, Vec<String>>()? {
                    entries.push((date, labels));
                }
                Ok(RawDataset(entries))
            }
        }

        deserializer.deserialize_map(RawVisitor)
    }
}

/// Yearly datasets of one category
///
/// A preset may be registered without a value; exporting such a
/// collection fails with [`HolidaysError::MissingDataset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetCollection {
    category: Category,
    presets: BTreeMap<PresetKey, Option<YearlyDataset>>,
}

impl PresetCollection {
    /// Create an empty collection
    pub fn new(category: Category) -> Self {
        Self {
            category,
            presets: BTreeMap::new(),
        }
    }

    /// Category of every dataset in the collection
    pub fn category(&self) -> Category {
        self.category
    }

    /// Add a dataset under its year's key
    pub fn insert(&mut self, dataset: YearlyDataset) -> Result<()> {
        self.insert_as(PresetKey::new(dataset.year()), dataset)
    }

    /// Add a dataset under an explicit key
    pub fn insert_as(&mut self, key: PresetKey, dataset: YearlyDataset) -> Result<()> {
        if key.year() != dataset.year() {
            return Err(HolidaysError::InvalidDataset {
                year: dataset.year(),
                problems: vec![format!(
                    "preset {} holds dates of year {}",
                    key,
                    dataset.year()
                )],
            });
        }
        self.presets.insert(key, Some(dataset));
        Ok(())
    }

    /// Register a preset that has no value
    pub fn insert_missing(&mut self, key: PresetKey) {
        self.presets.insert(key, None);
    }

    /// Builder-style insert
    pub fn with(mut self, dataset: YearlyDataset) -> Result<Self> {
        self.insert(dataset)?;
        Ok(self)
    }

    /// Dataset for a key
    pub fn get(&self, key: &PresetKey) -> Result<&YearlyDataset> {
        match self.presets.get(key) {
            Some(Some(dataset)) if !dataset.is_empty() => Ok(dataset),
            _ => Err(HolidaysError::MissingDataset {
                category: self.category,
                key: *key,
            }),
        }
    }

    /// Preset keys in ascending year order
    pub fn keys(&self) -> impl Iterator<Item = &PresetKey> {
        self.presets.keys()
    }

    /// Number of presets, including those without a value
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Check if no presets are registered
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Every dataset in ascending year order
    ///
    /// Fails on the first preset that is absent or empty.
    pub fn datasets(&self) -> Result<Vec<(PresetKey, &YearlyDataset)>> {
        self.presets
            .keys()
            .map(|key| self.get(key).map(|dataset| (*key, dataset)))
            .collect()
    }
}
