//! Greek-letter designation assignment and resequencing.
//!
//! Membership counts are never cached: they are derived from the stars the
//! repository currently holds.

use star_model::{CatalogDesignation, Constellation, GreekLetter, Star, StarName};
use star_store::StarRepository;
use tracing::{debug, info, warn};

use crate::error::{CatalogError, Result};

/// Maximum number of stars a constellation can hold.
pub const CONSTELLATION_CAPACITY: usize = GreekLetter::COUNT;

/// One designation change made by [`resequence`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rename {
    pub name: StarName,
    pub from: CatalogDesignation,
    pub to: CatalogDesignation,
}

/// Number of stars in `stars` filed under `constellation`.
pub fn member_count(stars: &[Star], constellation: &Constellation) -> usize {
    stars
        .iter()
        .filter(|star| star.constellation() == constellation)
        .count()
}

/// Next free designation given a snapshot of the catalog.
pub fn next_designation(
    stars: &[Star],
    constellation: &Constellation,
) -> Result<CatalogDesignation> {
    let count = member_count(stars, constellation);
    let letter = GreekLetter::from_index(count).ok_or_else(|| CatalogError::CapacityExceeded {
        constellation: constellation.to_string(),
        capacity: CONSTELLATION_CAPACITY,
    })?;
    debug!(%constellation, members = count, %letter, "next designation computed");
    Ok(CatalogDesignation::new(letter, constellation.clone()))
}

/// Next free designation for `constellation` in the stored catalog.
pub fn assign_designation<R>(repo: &R, constellation: &Constellation) -> Result<CatalogDesignation>
where
    R: StarRepository + ?Sized,
{
    let stars = repo.list_all()?;
    next_designation(&stars, constellation)
}

/// Reassign Alpha, Beta, ... to the members of `constellation`, keeping
/// their current relative order, and persist every changed record.
///
/// Members are ordered by their current letter; ties keep the repository's
/// enumeration order (ascending admission name).
pub fn resequence<R>(repo: &mut R, constellation: &Constellation) -> Result<Vec<Rename>>
where
    R: StarRepository + ?Sized,
{
    let mut members: Vec<Star> = repo
        .list_all()?
        .into_iter()
        .filter(|star| star.constellation() == constellation)
        .collect();
    members.sort_by_key(|star| star.letter().index());

    let mut renames = Vec::new();
    for (index, mut star) in members.into_iter().enumerate() {
        let Some(letter) = GreekLetter::from_index(index) else {
            warn!(
                %constellation,
                name = %star.name(),
                "constellation exceeds alphabet, leaving designation unchanged"
            );
            continue;
        };
        if star.letter() == letter {
            continue;
        }
        let from = star.designation().clone();
        star.redesignate(letter);
        repo.put(&star)?;
        info!(name = %star.name(), %from, to = %star.designation(), "star redesignated");
        renames.push(Rename {
            name: star.name().clone(),
            from,
            to: star.designation().clone(),
        });
    }
    Ok(renames)
}
