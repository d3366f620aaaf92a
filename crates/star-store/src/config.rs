//! Store configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable that overrides the default catalog directory.
pub const CATALOG_DIR_ENV: &str = "STARS_CATALOG_DIR";

/// Default catalog directory, relative to the working directory.
pub const DEFAULT_CATALOG_DIR: &str = "stars";

/// Where and how star records are stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Directory holding one file per star.
    pub catalog_dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            catalog_dir: PathBuf::from(DEFAULT_CATALOG_DIR),
        }
    }
}

impl StoreConfig {
    /// Default configuration with `STARS_CATALOG_DIR` applied when set.
    pub fn from_env() -> Self {
        match std::env::var_os(CATALOG_DIR_ENV) {
            Some(dir) if !dir.is_empty() => Self::default().with_catalog_dir(dir),
            _ => Self::default(),
        }
    }

    /// Set the catalog directory.
    #[must_use]
    pub fn with_catalog_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.catalog_dir = dir.into();
        self
    }
}
