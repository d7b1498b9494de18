//! File system output for exports

use holidays_core::error::{HolidaysError, Result};
use holidays_core::export::OutputStore;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// File system based output store
///
/// Files are staged in a hidden sibling of the root (`.public.staging` for
/// `public`) and swapped into place on commit.
pub struct FileSystemOutput {
    /// Output root
    root: PathBuf,
    /// Directories the root must never contain
    protected: Vec<PathBuf>,
}

impl FileSystemOutput {
    /// Create a new output store rooted at `root`
    ///
    /// Nothing is touched on disk until [`OutputStore::reset`].
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            protected: Vec::new(),
        }
    }

    /// Refuse to publish over a root that contains `path`
    pub fn protect(mut self, path: impl Into<PathBuf>) -> Self {
        self.protected.push(path.into());
        self
    }

    /// Get the output root
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding the staged set
    pub fn staging_dir(&self) -> PathBuf {
        self.sibling("staging")
    }

    fn backup_dir(&self) -> PathBuf {
        self.sibling("previous")
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let name = self
            .root
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        self.root.with_file_name(format!(".{}.{}", name, suffix))
    }

    /// Refuse roots whose replacement would delete the working directory
    /// or a protected path
    fn check_root(&self) -> Result<()> {
        let refuse = |reason: &str| -> Result<()> {
            Err(HolidaysError::Config(format!(
                "Refusing to publish into {:?}: {}",
                self.root, reason
            )))
        };

        if self.root.file_name().is_none() {
            return refuse("not a named directory");
        }
        if !self.root.exists() {
            return Ok(());
        }

        let root = self.root.canonicalize()?;
        if root.parent().is_none() {
            return refuse("filesystem root");
        }
        if std::env::current_dir()?.starts_with(&root) {
            return refuse("contains the working directory");
        }
        for path in &self.protected {
            if path.exists() && path.canonicalize()?.starts_with(&root) {
                return refuse(&format!("contains {}", path.display()));
            }
        }
        Ok(())
    }

    fn remove_if_exists(dir: &Path) -> Result<()> {
        if dir.exists() {
            fs::remove_dir_all(dir).map_err(|e| {
                HolidaysError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to remove {}: {}", dir.display(), e),
                ))
            })?;
        }
        Ok(())
    }
}

impl OutputStore for FileSystemOutput {
    fn reset(&self, dirs: &[PathBuf]) -> Result<()> {
        self.check_root()?;

        let staging = self.staging_dir();
        Self::remove_if_exists(&staging)?;

        fs::create_dir_all(&staging)?;
        for dir in dirs {
            fs::create_dir_all(staging.join(dir)).map_err(|e| {
                HolidaysError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Failed to create output directory: {}", e),
                ))
            })?;
        }

        debug!("Staging output in {:?}", staging);
        Ok(())
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        let staging = self.staging_dir();
        if !staging.is_dir() {
            return Err(HolidaysError::Config(format!(
                "No staged output at {:?}; reset first",
                staging
            )));
        }

        let staged_path = staging.join(path);
        if let Some(parent) = staged_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = fs::File::create(&staged_path).map_err(|e| {
            HolidaysError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to create staged file: {}", e),
            ))
        })?;
        let mut writer = BufWriter::new(file);
        writer.write_all(contents)?;
        writer.flush()?;

        debug!("Staged {:?} ({} bytes)", staged_path, contents.len());
        Ok(())
    }

    fn commit(&self) -> Result<()> {
        self.check_root()?;

        let staging = self.staging_dir();
        let backup = self.backup_dir();
        Self::remove_if_exists(&backup)?;

        let had_previous = self.root.exists();
        if had_previous {
            fs::rename(&self.root, &backup)?;
        }

        if let Err(e) = fs::rename(&staging, &self.root) {
            if had_previous {
                if let Err(restore) = fs::rename(&backup, &self.root) {
                    warn!("Failed to restore previous output: {}", restore);
                }
            }
            return Err(HolidaysError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to publish staged output: {}", e),
            )));
        }

        if had_previous {
            if let Err(e) = Self::remove_if_exists(&backup) {
                warn!("Failed to remove previous output: {}", e);
            }
        }

        debug!("Published {:?}", self.root);
        Ok(())
    }

    fn abort(&self) -> Result<()> {
        Self::remove_if_exists(&self.staging_dir())
    }
}
