//! CSV exporter for datasets

use super::context::ExportContext;
use super::exporter::Exporter;
use crate::dataset::YearlyDataset;
use crate::error::Result;

/// UTF-8 byte-order mark, so spreadsheet tools detect the encoding
pub const BOM: &str = "\u{feff}";

/// Header row understood by calendar import tools
pub const HEADER: &str = "Start date,Subject";

/// CSV exporter
///
/// One row per (date, label) pair. Values are written as-is.
pub struct CsvExporter;

impl CsvExporter {
    /// Create a new CSV exporter
    pub fn new() -> Self {
        Self
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Exporter for CsvExporter {
    fn export_year(&self, _ctx: &ExportContext, dataset: &YearlyDataset) -> Result<Vec<u8>> {
        let mut output = String::new();
        output.push_str(BOM);
        output.push_str(HEADER);
        output.push('\n');

        for (date, label) in dataset.pairs() {
            output.push_str(&format!("{},{}\n", date, label));
        }

        Ok(output.into_bytes())
    }

    fn format_name(&self) -> &str {
        "csv"
    }

    fn file_extension(&self) -> &str {
        "csv"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::YearlyDatasetBuilder;
    use crate::export::context::GenerationStamp;
    use crate::types::PresetKey;

    fn ctx() -> ExportContext {
        ExportContext::new("Test", GenerationStamp::now())
    }

    #[test]
    fn test_starts_with_bom_and_header() {
        let dataset = YearlyDatasetBuilder::new(2024)
            .entry_str("2024-01-01", ["New Year's Day"])
            .build()
            .unwrap();
        let out = CsvExporter::new().export_year(&ctx(), &dataset).unwrap();

        assert_eq!(&out[..3], &[0xEF, 0xBB, 0xBF]);
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\u{feff}Start date,Subject\n2024-01-01,New Year's Day\n"));
    }

    #[test]
    fn test_one_row_per_label() {
        let dataset = YearlyDatasetBuilder::new(2024)
            .entry_str("2024-05-06", ["Substitute Holiday", "Some Anniversary"])
            .entry_str("2024-05-05", ["Children's Day"])
            .build()
            .unwrap();
        let out = CsvExporter::new().export_year(&ctx(), &dataset).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "\u{feff}Start date,Subject\n\
             2024-05-05,Children's Day\n\
             2024-05-06,Substitute Holiday\n\
             2024-05-06,Some Anniversary\n"
        );
    }

    #[test]
    fn test_line_count_is_pairs_plus_header() {
        let dataset = YearlyDatasetBuilder::new(2024)
            .entry_str("2024-01-01", ["a", "b", "c"])
            .entry_str("2024-02-01", ["d"])
            .entry_str("2024-03-01", ["e", "f"])
            .build()
            .unwrap();
        let out = CsvExporter::new().export_year(&ctx(), &dataset).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.lines().count(), dataset.pair_count() + 1);
        assert!(text.ends_with('\n'));
        assert!(!text.contains('\r'));
    }

    #[test]
    fn test_no_aggregate() {
        let dataset = YearlyDatasetBuilder::new(2024)
            .entry_str("2024-01-01", ["a"])
            .build()
            .unwrap();
        let all = CsvExporter::new()
            .export_all(&ctx(), &[(PresetKey::new(2024), &dataset)])
            .unwrap();
        assert!(all.is_none());
    }
}
