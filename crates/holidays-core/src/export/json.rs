//! JSON exporter for datasets

use super::context::ExportContext;
use super::exporter::Exporter;
use super::formatter::{JsonLayout, TextFormatter};
use crate::dataset::YearlyDataset;
use crate::error::Result;
use crate::types::PresetKey;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// JSON exporter
///
/// Writes `date -> labels` per year and `year -> (date -> labels)` for the
/// aggregate, then passes the text through a [`TextFormatter`].
pub struct JsonExporter {
    formatter: Box<dyn TextFormatter>,
}

impl JsonExporter {
    /// Create a new JSON exporter
    pub fn new(formatter: Box<dyn TextFormatter>) -> Self {
        Self { formatter }
    }

    fn render<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>> {
        let raw = serde_json::to_string(value)?;
        Ok(self.formatter.format(&raw)?.into_bytes())
    }
}

impl Default for JsonExporter {
    fn default() -> Self {
        Self::new(Box::new(JsonLayout::default()))
    }
}

impl Exporter for JsonExporter {
    fn export_year(&self, _ctx: &ExportContext, dataset: &YearlyDataset) -> Result<Vec<u8>> {
        self.render(dataset)
    }

    fn export_all(
        &self,
        _ctx: &ExportContext,
        presets: &[(PresetKey, &YearlyDataset)],
    ) -> Result<Option<Vec<u8>>> {
        self.render(&ByYear(presets)).map(Some)
    }

    fn format_name(&self) -> &str {
        "json"
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

/// Aggregate keyed by bare year, in the given order
struct ByYear<'a>(&'a [(PresetKey, &'a YearlyDataset)]);

impl Serialize for ByYear<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, dataset) in self.0 {
            map.serialize_entry(&key.year().to_string(), dataset)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::YearlyDatasetBuilder;
    use crate::export::context::GenerationStamp;
    use pretty_assertions::assert_eq;

    fn ctx() -> ExportContext {
        ExportContext::new("Test", GenerationStamp::parse("2024-01-02T03:04:05Z").unwrap())
    }

    fn dataset(year: i32) -> YearlyDataset {
        YearlyDatasetBuilder::new(year)
            .entry_str(format!("{}-01-01", year), ["New Year's Day"])
            .entry_str(format!("{}-03-01", year), ["Independence Movement Day"])
            .entry_str(format!("{}-05-05", year), ["Children's Day", "Substitute Holiday"])
            .build()
            .unwrap()
    }

    #[test]
    fn test_json_exporter_creation() {
        let exporter = JsonExporter::default();
        assert_eq!(exporter.format_name(), "json");
        assert_eq!(exporter.file_extension(), "json");
    }

    #[test]
    fn test_export_year() {
        let out = JsonExporter::default().export_year(&ctx(), &dataset(2024)).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\n\
             \t\"2024-01-01\": [\"New Year's Day\"],\n\
             \t\"2024-03-01\": [\"Independence Movement Day\"],\n\
             \t\"2024-05-05\": [\"Children's Day\", \"Substitute Holiday\"]\n\
             }\n"
        );
    }

    #[test]
    fn test_export_all_keys_by_bare_year() {
        let d2024 = dataset(2024);
        let d2025 = dataset(2025);
        let presets = [(PresetKey::new(2024), &d2024), (PresetKey::new(2025), &d2025)];

        let out = JsonExporter::default()
            .export_all(&ctx(), &presets)
            .unwrap()
            .unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("{\n\t\"2024\": {\n\t\t\"2024-01-01\": [\"New Year's Day\"],\n"));
        assert!(text.contains("\n\t},\n\t\"2025\": {\n"));
        assert!(!text.contains("y2024"));
        assert!(text.ends_with("\t}\n}\n"));
    }

    #[test]
    fn test_output_parses_back() {
        let out = JsonExporter::default().export_year(&ctx(), &dataset(2024)).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["2024-05-05"][1], "Substitute Holiday");
    }
}
