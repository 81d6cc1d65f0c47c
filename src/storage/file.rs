//! File-backed key-value store
//!
//! Persists the whole key space as a single JSON object file with atomic
//! writes (write to temp, then rename), so the file is either completely
//! written or not modified at all.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::PathBuf;

use crate::error::{CashboardError, CashboardResult};

use super::kv::KeyValueStore;

/// Key-value store backed by one JSON object file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by the given file path
    ///
    /// The file is created lazily on first write; a missing file reads as an
    /// empty store.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The backing file path
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn read_map(&self) -> CashboardResult<HashMap<String, String>> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }

        let file = File::open(&self.path).map_err(|e| {
            CashboardError::Store(format!("Failed to open {}: {}", self.path.display(), e))
        })?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| {
            CashboardError::Store(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }

    fn write_map(&self, map: &HashMap<String, String>) -> CashboardResult<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                CashboardError::Store(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        // Create temp file in same directory (important for atomic rename)
        let temp_path = self.path.with_extension("json.tmp");

        let file = File::create(&temp_path)
            .map_err(|e| CashboardError::Store(format!("Failed to create temp file: {}", e)))?;

        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, map)
            .map_err(|e| CashboardError::Store(format!("Failed to serialize store: {}", e)))?;

        writer
            .flush()
            .map_err(|e| CashboardError::Store(format!("Failed to flush store: {}", e)))?;

        // Sync to disk before rename
        writer
            .get_ref()
            .sync_all()
            .map_err(|e| CashboardError::Store(format!("Failed to sync store: {}", e)))?;

        // Atomic rename
        fs::rename(&temp_path, &self.path).map_err(|e| {
            // Try to clean up temp file if rename fails
            let _ = fs::remove_file(&temp_path);
            CashboardError::Store(format!("Failed to rename temp file: {}", e))
        })?;

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> CashboardResult<Option<String>> {
        Ok(self.read_map()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> CashboardResult<()> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map)
    }

    fn remove(&mut self, key: &str) -> CashboardResult<()> {
        let mut map = self.read_map()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }
}
