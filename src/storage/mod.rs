//! Storage layer for spendlog
//!
//! A single JSON file holds the entire dataset. Writes are atomic: data goes
//! to a temp file in the same directory, is synced, then renamed over the
//! real file, so a crash mid-write never corrupts existing data.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{SpendlogError, SpendlogResult};
use crate::models::Dataset;

/// Handle to the JSON store file
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Create a store handle for the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the store file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the dataset from disk.
    ///
    /// A missing file is initialized as an empty dataset and persisted
    /// immediately. An existing but empty file also yields an empty dataset.
    pub fn load(&self) -> SpendlogResult<Dataset> {
        if !self.path.exists() {
            let dataset = Dataset::default();
            self.save(&dataset)?;
            return Ok(dataset);
        }

        let contents = fs::read_to_string(&self.path).map_err(|e| {
            SpendlogError::Io(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        if contents.trim().is_empty() {
            return Ok(Dataset::default());
        }

        serde_json::from_str(&contents).map_err(|e| {
            SpendlogError::CorruptStore(format!(
                "Failed to parse {}: {}",
                self.path.display(),
                e
            ))
        })
    }

    /// Write the dataset to disk atomically (write to temp, then rename)
    pub fn save(&self, dataset: &Dataset) -> SpendlogResult<()> {
        // Ensure parent directory exists (a bare filename has an empty parent)
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| {
                    SpendlogError::Io(format!(
                        "Failed to create directory {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        // Temp file in the same directory (important for atomic rename)
        let temp_path = self.path.with_extension("json.tmp");

        let file = File::create(&temp_path)
            .map_err(|e| SpendlogError::Io(format!("Failed to create temp file: {}", e)))?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, dataset)
            .map_err(|e| SpendlogError::Format(e.to_string()))?;

        writer
            .flush()
            .map_err(|e| SpendlogError::Io(format!("Failed to flush data: {}", e)))?;

        // Sync to disk before rename
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| SpendlogError::Io(format!("Failed to sync data: {}", e)))?;

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            SpendlogError::Io(format!("Failed to rename temp file: {}", e))
        })?;

        Ok(())
    }
}
