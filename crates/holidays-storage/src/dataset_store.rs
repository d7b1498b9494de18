//! File system loading of preset datasets

use holidays_core::dataset::{PresetCollection, RawDataset, YearlyDatasetBuilder};
use holidays_core::error::{HolidaysError, Result};
use holidays_core::types::{Category, PresetKey};
use std::fs;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Preset files laid out as `<base>/<category>/y<YYYY>.json`
pub struct FileSystemDatasets {
    /// Base data directory
    base_dir: PathBuf,
}

impl FileSystemDatasets {
    /// Create a loader for a data directory
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Get base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Directory holding a category's presets
    pub fn category_dir(&self, category: Category) -> PathBuf {
        self.base_dir.join(category.as_str())
    }

    /// Load every preset of a category
    ///
    /// A missing category directory yields an empty collection.
    pub fn load(&self, category: Category) -> Result<PresetCollection> {
        let dir = self.category_dir(category);
        let mut collection = PresetCollection::new(category);

        if !dir.is_dir() {
            warn!("No {} directory at {:?}", category, dir);
            return Ok(collection);
        }

        let entries = fs::read_dir(&dir).map_err(|e| {
            HolidaysError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read data directory: {}", e),
            ))
        })?;

        let mut paths: Vec<PathBuf> = entries
            .filter_map(|entry| match entry {
                Ok(e) => Some(e.path()),
                Err(e) => {
                    warn!("Failed to read directory entry: {}", e);
                    None
                }
            })
            .filter(|p| p.extension().map(|e| e == "json").unwrap_or(false))
            .collect();
        paths.sort();

        for path in paths {
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default();
            let key = match PresetKey::parse(stem) {
                Ok(key) => key,
                Err(_) => {
                    warn!("Skipping {:?}: file name is not a preset key", path);
                    continue;
                }
            };

            self.load_preset(&mut collection, key, &path)
                .map_err(|e| e.with_context(format!("Failed to load {}", path.display())))?;
        }

        info!("Loaded {} {} presets from {:?}", collection.len(), category, dir);
        Ok(collection)
    }

    /// Load every category
    pub fn load_all(&self) -> Result<Vec<PresetCollection>> {
        Category::ALL.iter().map(|c| self.load(*c)).collect()
    }

    fn load_preset(&self, collection: &mut PresetCollection, key: PresetKey, path: &Path) -> Result<()> {
        let file = fs::File::open(path)?;
        let raw: Option<RawDataset> = serde_json::from_reader(BufReader::new(file))?;

        match raw {
            Some(raw) => {
                let dataset = YearlyDatasetBuilder::from_raw(key.year(), raw).build()?;
                debug!("Loaded preset {} ({} dates)", key, dataset.len());
                collection.insert_as(key, dataset)
            }
            None => {
                warn!("Preset {} has no value", key);
                collection.insert_missing(key);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn create_test_data() -> (FileSystemDatasets, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("holidays")).unwrap();
        let datasets = FileSystemDatasets::new(temp_dir.path());
        (datasets, temp_dir)
    }

    fn write(temp: &TempDir, name: &str, contents: &str) {
        fs::write(temp.path().join(name), contents).unwrap();
    }

    #[test]
    fn test_load_presets_in_year_order() {
        let (datasets, temp) = create_test_data();
        write(&temp, "holidays/y2025.json", r#"{"2025-01-01":["New Year's Day"]}"#);
        write(&temp, "holidays/y2024.json", r#"{"2024-01-01":["New Year's Day"]}"#);

        let collection = datasets.load(Category::Holidays).unwrap();
        let years: Vec<_> = collection.keys().map(|k| k.year()).collect();
        assert_eq!(years, vec![2024, 2025]);
        assert_eq!(collection.category(), Category::Holidays);
    }

    #[test]
    fn test_missing_category_dir_is_empty() {
        let (datasets, _temp) = create_test_data();
        let collection = datasets.load(Category::Anniversaries).unwrap();
        assert!(collection.is_empty());
    }

    #[test]
    fn test_ignores_unrelated_files() {
        let (datasets, temp) = create_test_data();
        write(&temp, "holidays/y2024.json", r#"{"2024-01-01":["New Year's Day"]}"#);
        write(&temp, "holidays/all.json", r#"{}"#);
        write(&temp, "holidays/readme.txt", "notes");

        let collection = datasets.load(Category::Holidays).unwrap();
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_null_preset_is_missing() {
        let (datasets, temp) = create_test_data();
        write(&temp, "holidays/y2024.json", "null");

        let collection = datasets.load(Category::Holidays).unwrap();
        assert_eq!(collection.len(), 1);
        let err = collection.get(&PresetKey::new(2024)).unwrap_err();
        assert!(matches!(err, HolidaysError::MissingDataset { .. }));
    }

    #[test]
    fn test_duplicate_dates_rejected_with_path() {
        let (datasets, temp) = create_test_data();
        write(
            &temp,
            "holidays/y2024.json",
            r#"{"2024-01-01":["a"],"2024-01-01":["b"]}"#,
        );

        let err = datasets.load(Category::Holidays).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("y2024.json"));
        assert!(msg.contains("duplicate date"));
    }

    #[test]
    fn test_dates_outside_preset_year_rejected() {
        let (datasets, temp) = create_test_data();
        write(&temp, "holidays/y2024.json", r#"{"2025-01-01":["New Year's Day"]}"#);

        let err = datasets.load(Category::Holidays).unwrap_err();
        assert!(err.to_string().contains("outside year 2024"));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let (datasets, temp) = create_test_data();
        write(&temp, "holidays/y2024.json", r#"{"2024-01-01": "not a list"}"#);

        assert!(datasets.load(Category::Holidays).is_err());
    }

    #[test]
    fn test_load_all() {
        let (datasets, temp) = create_test_data();
        fs::create_dir_all(temp.path().join("anniversaries")).unwrap();
        write(&temp, "holidays/y2024.json", r#"{"2024-01-01":["New Year's Day"]}"#);
        write(&temp, "anniversaries/y2024.json", r#"{"2024-05-08":["Parents' Day"]}"#);

        let all = datasets.load_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].category(), Category::Holidays);
        assert_eq!(all[1].category(), Category::Anniversaries);
    }
}
