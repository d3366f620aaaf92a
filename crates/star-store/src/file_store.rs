//! File-per-star repository.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use star_model::{Star, StarName};
use tracing::{debug, info, warn};

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::io::{read_unit, write_unit};
use crate::repository::StarRepository;
use crate::snapshot::StarSnapshot;

/// Extension of a committed star unit.
pub const UNIT_EXTENSION: &str = "json";

/// Stores each star as `<catalog_dir>/<NAME>.json`.
#[derive(Debug, Clone)]
pub struct FileStarStore {
    config: StoreConfig,
}

impl FileStarStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }

    /// Store rooted at `dir` with otherwise default configuration.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self::new(StoreConfig::default().with_catalog_dir(dir))
    }

    pub fn catalog_dir(&self) -> &Path {
        &self.config.catalog_dir
    }

    /// Path of the unit for `name`. Only valid admission names map to a
    /// path, which keeps lookups inside the catalog directory.
    pub fn unit_path(&self, name: &str) -> Option<PathBuf> {
        let name = StarName::new(name).ok()?;
        Some(
            self.config
                .catalog_dir
                .join(format!("{name}.{UNIT_EXTENSION}")),
        )
    }

    fn require_unit_path(&self, name: &str) -> Result<PathBuf> {
        self.unit_path(name).ok_or_else(|| StoreError::NotFound {
            name: name.to_string(),
        })
    }

    /// Committed unit files with their keys, sorted by key.
    fn unit_files(&self) -> Result<Vec<(String, PathBuf)>> {
        let dir = self.catalog_dir();
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(dir = %dir.display(), "catalog directory absent, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::io("read catalog directory", dir, e)),
        };

        let mut units = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StoreError::io("read catalog directory", dir, e))?;
            let path = entry.path();
            let is_unit = path.extension().and_then(|ext| ext.to_str()) == Some(UNIT_EXTENSION);
            if !is_unit || !path.is_file() {
                continue;
            }
            let Some(key) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            units.push((key.to_string(), path.clone()));
        }
        units.sort();
        Ok(units)
    }
}

impl StarRepository for FileStarStore {
    fn put(&mut self, star: &Star) -> Result<()> {
        let path = self.require_unit_path(star.name().as_str())?;
        write_unit(&StarSnapshot::from(star), &path)?;
        info!(
            name = %star.name(),
            designation = %star.designation(),
            path = %path.display(),
            "star record written"
        );
        Ok(())
    }

    fn get(&self, name: &str) -> Result<Star> {
        let path = self.require_unit_path(name)?;
        read_unit(&path, name)
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        let path = self.require_unit_path(name)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                info!(name, path = %path.display(), "star record deleted");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Err(StoreError::NotFound {
                name: name.to_string(),
            }),
            Err(e) => Err(StoreError::io("delete star record", path, e)),
        }
    }

    fn list_all(&self) -> Result<Vec<Star>> {
        let units = self.unit_files()?;
        let mut stars = Vec::with_capacity(units.len());
        for (key, path) in units {
            match read_unit(&path, &key) {
                Ok(star) => stars.push(star),
                // Removed between enumeration and read.
                Err(StoreError::NotFound { .. }) => {}
                Err(error) => {
                    warn!(path = %path.display(), %error, "skipping unreadable star record");
                }
            }
        }
        debug!(
            dir = %self.catalog_dir().display(),
            count = stars.len(),
            "catalog scanned"
        );
        Ok(stars)
    }
}
