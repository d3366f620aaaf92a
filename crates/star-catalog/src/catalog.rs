//! Catalog mutations: insertion and removal with designation upkeep.
//!
//! Mutating methods take `&mut self`; the exclusive borrow makes each
//! scan-then-write sequence a critical section.

use star_model::{Constellation, Star, StarCandidate, ValidationContext, ValidationError};
use star_store::{FileStarStore, StarRepository, StoreConfig, StoreError};
use tracing::{info, info_span};

use crate::error::{CatalogError, Result};
use crate::namer::{Rename, next_designation, resequence};
use crate::query::QueryEngine;

/// Outcome of a successful removal.
#[derive(Debug, Clone)]
pub struct Removal {
    pub removed: Star,
    /// Siblings whose designation moved up to close the gap.
    pub renames: Vec<Rename>,
}

/// A star catalog over some repository.
#[derive(Debug, Clone)]
pub struct Catalog<R> {
    repo: R,
}

impl Catalog<FileStarStore> {
    /// Catalog backed by the file store described by `config`.
    pub fn open(config: StoreConfig) -> Self {
        Self::new(FileStarStore::new(config))
    }
}

impl<R: StarRepository> Catalog<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn into_inner(self) -> R {
        self.repo
    }

    pub fn query(&self) -> QueryEngine<'_, R> {
        QueryEngine::new(&self.repo)
    }

    /// Validate `candidate`, give it the next free letter of its
    /// constellation and persist it.
    ///
    /// Nothing is written unless every check passes.
    pub fn insert(&mut self, candidate: &StarCandidate) -> Result<Star> {
        let span = info_span!("insert", name = %candidate.name);
        let _guard = span.enter();

        let stars = self.repo.list_all()?;
        let ctx = ValidationContext::new()
            .with_taken_names(stars.iter().map(|star| star.name().to_string()));
        let mut validated = candidate.validate(&ctx)?;
        let canonical = stars
            .iter()
            .map(Star::constellation)
            .find(|constellation| *constellation == validated.constellation())
            .cloned();
        if let Some(canonical) = canonical {
            validated.adopt_spelling(&canonical);
        }

        // A damaged unit still claims its name even though the scan skipped it.
        match self.repo.get(validated.name().as_str()) {
            Err(StoreError::NotFound { .. }) => {}
            Ok(_) | Err(StoreError::Corrupt { .. }) => {
                return Err(ValidationError::NameTaken {
                    name: validated.name().to_string(),
                }
                .into());
            }
            Err(error) => return Err(error.into()),
        }

        let designation = next_designation(&stars, validated.constellation())?;
        let star = validated.designate(designation.letter());
        self.repo.put(&star)?;

        info!(
            name = %star.name(),
            designation = %star.designation(),
            "star added to catalog"
        );
        Ok(star)
    }

    /// Remove the star with catalog designation `designation`
    /// (case-insensitive, e.g. "beta orion") and close the gap it leaves.
    pub fn remove(&mut self, designation: &str) -> Result<Removal> {
        let span = info_span!("remove", designation);
        let _guard = span.enter();

        let not_found = || CatalogError::NotFound {
            key: designation.to_string(),
        };
        let mut matches: Vec<Star> = self
            .repo
            .list_all()?
            .into_iter()
            .filter(|star| star.designation().matches(designation))
            .collect();
        // Only hand-edited records can share a designation.
        if matches.len() > 1 {
            return Err(CatalogError::Ambiguous {
                key: designation.to_string(),
                names: matches.iter().map(|star| star.name().to_string()).collect(),
            });
        }
        let target = matches.pop().ok_or_else(not_found)?;

        self.repo
            .delete(target.name().as_str())
            .map_err(|error| match error {
                StoreError::NotFound { .. } => not_found(),
                other => other.into(),
            })?;
        info!(name = %target.name(), designation = %target.designation(), "star removed");

        let renames = resequence(&mut self.repo, target.constellation())?;
        Ok(Removal {
            removed: target,
            renames,
        })
    }

    /// Re-derive the designations of one constellation.
    pub fn resequence(&mut self, constellation: &Constellation) -> Result<Vec<Rename>> {
        resequence(&mut self.repo, constellation)
    }
}
