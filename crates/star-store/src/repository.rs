//! Keyed star repository abstraction.

use std::collections::BTreeMap;

use star_model::Star;

use crate::error::{Result, StoreError};

/// Durable keyed storage of stars, one unit per admission name.
///
/// `list_all` is the single source of truth for catalog membership; no
/// index is kept alongside the units.
pub trait StarRepository {
    /// Write or replace the unit for `star`'s name.
    fn put(&mut self, star: &Star) -> Result<()>;

    /// Load one star by exact admission name.
    fn get(&self, name: &str) -> Result<Star>;

    /// Remove the unit for `name`; `NotFound` if there is none.
    fn delete(&mut self, name: &str) -> Result<()>;

    /// Every readable star, ordered by admission name.
    fn list_all(&self) -> Result<Vec<Star>>;

    /// Whether a unit exists for `name`.
    fn contains(&self, name: &str) -> Result<bool> {
        match self.get(name) {
            Ok(_) => Ok(true),
            Err(StoreError::NotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}

/// Non-durable repository backed by a map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStarStore {
    stars: BTreeMap<String, Star>,
}

impl MemoryStarStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

impl StarRepository for MemoryStarStore {
    fn put(&mut self, star: &Star) -> Result<()> {
        self.stars.insert(star.name().to_string(), star.clone());
        Ok(())
    }

    fn get(&self, name: &str) -> Result<Star> {
        self.stars
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                name: name.to_string(),
            })
    }

    fn delete(&mut self, name: &str) -> Result<()> {
        self.stars
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound {
                name: name.to_string(),
            })
    }

    fn list_all(&self) -> Result<Vec<Star>> {
        Ok(self.stars.values().cloned().collect())
    }
}
