//! Sky classification enumerations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::ValidationError;

/// Celestial hemisphere a star is catalogued under.
///
/// The hemisphere fixes the sign of the declination degrees:
/// - **Northern**: degrees in [0, 90]
/// - **Southern**: degrees in [-90, 0]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Hemisphere {
    Northern,
    Southern,
}

impl Hemisphere {
    /// Returns the canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Hemisphere::Northern => "Northern",
            Hemisphere::Southern => "Southern",
        }
    }

    /// Returns the single-letter abbreviation.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Hemisphere::Northern => "N",
            Hemisphere::Southern => "S",
        }
    }

    /// Allowed declination degrees for stars in this hemisphere.
    pub fn degree_range(&self) -> RangeInclusive<i32> {
        match self {
            Hemisphere::Northern => 0..=90,
            Hemisphere::Southern => -90..=0,
        }
    }

    pub(crate) fn degree_bound(&self) -> &'static str {
        match self {
            Hemisphere::Northern => "[0, 90]",
            Hemisphere::Southern => "[-90, 0]",
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Hemisphere {
    type Err = ValidationError;

    /// Parse a hemisphere from its full name, short name or abbreviation
    /// (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "N" | "NORTH" | "NORTHERN" => Ok(Hemisphere::Northern),
            "S" | "SOUTH" | "SOUTHERN" => Ok(Hemisphere::Southern),
            _ => Err(ValidationError::UnknownHemisphere {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hemisphere_from_str() {
        assert_eq!("N".parse::<Hemisphere>().unwrap(), Hemisphere::Northern);
        assert_eq!("north".parse::<Hemisphere>().unwrap(), Hemisphere::Northern);
        assert_eq!(
            " Southern ".parse::<Hemisphere>().unwrap(),
            Hemisphere::Southern
        );
        assert_eq!("s".parse::<Hemisphere>().unwrap(), Hemisphere::Southern);
    }

    #[test]
    fn test_hemisphere_rejects_unknown_tokens() {
        for input in ["", "E", "equatorial", "NS"] {
            assert!(matches!(
                input.parse::<Hemisphere>(),
                Err(ValidationError::UnknownHemisphere { .. })
            ));
        }
    }

    #[test]
    fn test_degree_ranges_share_equator() {
        assert!(Hemisphere::Northern.degree_range().contains(&0));
        assert!(Hemisphere::Southern.degree_range().contains(&0));
        assert!(!Hemisphere::Northern.degree_range().contains(&-1));
        assert!(!Hemisphere::Southern.degree_range().contains(&1));
    }
}
