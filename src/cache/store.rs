//! Disk-backed photoset cache.
//!
//! One YAML file per cache key, holding the ordered photo-record list for a
//! photoset render. Entries never expire and are never invalidated; a stale
//! entry is served until its file is removed (out of band, or via
//! `flickrset cache clear`).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::error::Result;
use crate::photo::PhotoRecord;

use super::key::CacheKey;

/// Storage for cached photoset resolutions.
pub struct PhotosetCache {
    /// Directory holding the `.yml` entries.
    root: PathBuf,
}

impl PhotosetCache {
    /// Create a cache over the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The cache directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the entry backing a key.
    pub fn entry_path(&self, key: &CacheKey) -> PathBuf {
        self.root.join(key.file_name())
    }

    fn ensure_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.root)
            .with_context(|| format!("Failed to create cache directory {:?}", self.root))?;
        Ok(())
    }

    /// Load the records for a key, or `None` on a cache miss.
    pub fn get(&self, key: &CacheKey) -> Result<Option<Vec<PhotoRecord>>> {
        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let yaml = fs::read_to_string(&path)?;
        let records: Vec<PhotoRecord> = serde_yaml::from_str(&yaml)
            .with_context(|| format!("Corrupt cache entry {path:?}"))?;
        Ok(Some(records))
    }

    /// Persist the records for a key.
    ///
    /// The entry is written to a sibling temp file and renamed into place,
    /// so a concurrent reader sees either the old entry or the complete new
    /// one. Concurrent writers race; last rename wins.
    pub fn put(&self, key: &CacheKey, records: &[PhotoRecord]) -> Result<()> {
        self.ensure_dir()?;

        let path = self.entry_path(key);
        let yaml = serde_yaml::to_string(records)
            .with_context(|| format!("Failed to serialize cache entry {key}"))?;

        let tmp = self.root.join(format!(".{}.tmp", key.file_name()));
        fs::write(&tmp, yaml)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    /// List the keys of all stored entries, sorted by file name.
    pub fn list(&self) -> Result<Vec<String>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut keys = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().is_some_and(|e| e == "yml") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    keys.push(stem.to_string());
                }
            }
        }
        keys.sort();
        Ok(keys)
    }

    /// Remove all stored entries. Returns the number removed.
    pub fn clear(&self) -> Result<usize> {
        if !self.root.exists() {
            return Ok(0);
        }

        let mut removed = 0;
        for entry in fs::read_dir(&self.root)? {
            let path = entry?.path();
            if path.extension().is_some_and(|e| e == "yml") {
                fs::remove_file(&path)?;
                removed += 1;
            }
        }
        Ok(removed)
    }
}
