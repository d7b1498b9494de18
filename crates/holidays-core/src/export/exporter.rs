//! Exporter trait and manager

use super::context::ExportContext;
use super::formatter::{FormatOptions, JsonLayout};
use crate::dataset::YearlyDataset;
use crate::error::Result;
use crate::types::PresetKey;

/// Trait for dataset exporters
pub trait Exporter: Send + Sync {
    /// Render one year's dataset
    fn export_year(&self, ctx: &ExportContext, dataset: &YearlyDataset) -> Result<Vec<u8>>;

    /// Render every year into one document
    ///
    /// `presets` is in ascending year order. Formats without an aggregate
    /// file return `None`.
    fn export_all(
        &self,
        _ctx: &ExportContext,
        _presets: &[(PresetKey, &YearlyDataset)],
    ) -> Result<Option<Vec<u8>>> {
        Ok(None)
    }

    /// Get the format name
    fn format_name(&self) -> &str;

    /// Get the file extension
    fn file_extension(&self) -> &str;
}

/// Manager for handling multiple export formats
///
/// Formats are written in registration order.
pub struct ExportManager {
    exporters: Vec<Box<dyn Exporter>>,
}

impl ExportManager {
    /// Create a new export manager with the default exporters
    pub fn new() -> Self {
        Self::with_format_options(FormatOptions::default())
    }

    /// Create the default exporters, laying out JSON with `options`
    pub fn with_format_options(options: FormatOptions) -> Self {
        let mut manager = Self::empty();

        manager.register(Box::new(super::json::JsonExporter::new(Box::new(
            JsonLayout::new(options),
        ))));
        manager.register(Box::new(super::csv::CsvExporter::new()));
        manager.register(Box::new(super::ics::IcsExporter::new()));

        manager
    }

    /// Create a manager with no exporters
    pub fn empty() -> Self {
        Self {
            exporters: Vec::new(),
        }
    }

    /// Register a new exporter, replacing one of the same name in place
    pub fn register(&mut self, exporter: Box<dyn Exporter>) {
        match self
            .exporters
            .iter_mut()
            .find(|e| e.format_name() == exporter.format_name())
        {
            Some(slot) => *slot = exporter,
            None => self.exporters.push(exporter),
        }
    }

    /// Exporters in registration order
    pub fn exporters(&self) -> impl Iterator<Item = &dyn Exporter> {
        self.exporters.iter().map(|e| e.as_ref())
    }
}

impl Default for ExportManager {
    fn default() -> Self {
        Self::new()
    }
}
