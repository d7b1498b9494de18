//! Full-run export orchestration

use super::context::{CalendarMeta, ExportContext, GenerationStamp};
use super::exporter::ExportManager;
use super::store::OutputStore;
use crate::dataset::PresetCollection;
use crate::error::Result;
use crate::schema::HolidaySchema;
use crate::types::Category;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// File name stem of the aggregate files
pub const AGGREGATE_STEM: &str = "basic";

/// One category to publish
#[derive(Debug, Clone)]
pub struct ExportJob {
    /// Calendar display name (X-WR-CALNAME)
    pub calendar_name: String,
    /// Datasets to publish
    pub collection: PresetCollection,
}

impl ExportJob {
    /// Create a new job
    pub fn new(calendar_name: impl Into<String>, collection: PresetCollection) -> Self {
        Self {
            calendar_name: calendar_name.into(),
            collection,
        }
    }

    /// Category of the job's datasets
    pub fn category(&self) -> Category {
        self.collection.category()
    }
}

/// A file written during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    /// Path relative to the output root
    pub path: PathBuf,
    /// Size in bytes
    pub size: usize,
    /// blake3 hex digest of the contents
    pub digest: String,
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// Generation time shared by the run
    pub stamp: GenerationStamp,
    /// Files in write order
    pub files: Vec<WrittenFile>,
}

impl ExportReport {
    fn new(stamp: GenerationStamp) -> Self {
        Self {
            stamp,
            files: Vec::new(),
        }
    }

    fn record(&mut self, path: PathBuf, contents: &[u8]) {
        self.files.push(WrittenFile {
            path,
            size: contents.len(),
            digest: blake3::hash(contents).to_hex().to_string(),
        });
    }

    /// Look up a written file
    pub fn get(&self, path: impl AsRef<Path>) -> Option<&WrittenFile> {
        self.files.iter().find(|f| f.path == path.as_ref())
    }

    /// Total bytes written
    pub fn total_bytes(&self) -> usize {
        self.files.iter().map(|f| f.size).sum()
    }
}

/// Validates datasets and writes every output file
pub struct Orchestrator {
    manager: ExportManager,
    schema: HolidaySchema,
    calendar: CalendarMeta,
}

impl Orchestrator {
    /// Create an orchestrator with default exporters and the Korean schema
    pub fn new() -> Self {
        Self {
            manager: ExportManager::new(),
            schema: HolidaySchema::korean(),
            calendar: CalendarMeta::default(),
        }
    }

    /// Use a custom set of exporters
    pub fn with_manager(mut self, manager: ExportManager) -> Self {
        self.manager = manager;
        self
    }

    /// Use custom calendar container fields
    pub fn with_calendar(mut self, calendar: CalendarMeta) -> Self {
        self.calendar = calendar;
        self
    }

    /// Check every job without writing anything
    pub fn validate(&self, jobs: &[ExportJob]) -> Result<()> {
        for job in jobs {
            self.schema
                .validate_collection(&job.collection)
                .map_err(|e| e.with_context(format!("Cannot publish {}", job.category())))?;
        }
        Ok(())
    }

    /// Validate, stage every job, then publish the whole set at once
    ///
    /// Nothing is written unless every job validates, and the published
    /// set is only replaced when every file was staged.
    pub fn run(&self, jobs: &[ExportJob], store: &dyn OutputStore, stamp: GenerationStamp) -> Result<ExportReport> {
        self.validate(jobs)?;

        let dirs: Vec<PathBuf> = jobs.iter().map(|j| j.category().output_dir()).collect();
        store.reset(&dirs)?;

        let mut report = ExportReport::new(stamp);
        let staged = jobs
            .iter()
            .try_for_each(|job| self.write_job(job, store, stamp, &mut report))
            .and_then(|()| store.commit());

        if let Err(err) = staged {
            if let Err(abort_err) = store.abort() {
                warn!("Failed to discard staged output: {}", abort_err);
            }
            return Err(err);
        }

        info!(
            "Exported {} files ({} bytes)",
            report.files.len(),
            report.total_bytes()
        );
        Ok(report)
    }

    fn write_job(
        &self,
        job: &ExportJob,
        store: &dyn OutputStore,
        stamp: GenerationStamp,
        report: &mut ExportReport,
    ) -> Result<()> {
        let dir = job.category().output_dir();
        let ctx = ExportContext::new(job.calendar_name.clone(), stamp).with_calendar(self.calendar.clone());
        // An empty collection still gets its (empty) aggregate files.
        let presets = job.collection.datasets()?;

        info!("Exporting {} presets for {}", presets.len(), job.category());

        for (key, dataset) in &presets {
            for exporter in self.manager.exporters() {
                let contents = exporter.export_year(&ctx, dataset)?;
                let path = dir.join(format!("{}.{}", key.year(), exporter.file_extension()));
                Self::write_file(store, path, &contents, report)?;
            }
        }

        for exporter in self.manager.exporters() {
            if let Some(contents) = exporter.export_all(&ctx, &presets)? {
                let path = dir.join(format!("{}.{}", AGGREGATE_STEM, exporter.file_extension()));
                Self::write_file(store, path, &contents, report)?;
            }
        }

        Ok(())
    }

    fn write_file(store: &dyn OutputStore, path: PathBuf, contents: &[u8], report: &mut ExportReport) -> Result<()> {
        store
            .write(&path, contents)
            .map_err(|e| e.with_context(format!("Failed to write {}", path.display())))?;
        debug!("Wrote {} ({} bytes)", path.display(), contents.len());
        report.record(path, contents);
        Ok(())
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}
