//! On-disk star record format.
//!
//! A snapshot holds every attribute of a [`Star`] as plain values. Reading
//! one back re-runs validation, so a hand-edited or truncated file can never
//! produce an invalid star.

use serde::{Deserialize, Serialize};

use star_model::{CatalogDesignation, Hemisphere, Star, StarCandidate, ValidationContext};

/// Current record format version.
///
/// The loader rejects records with a newer version.
pub const FORMAT_VERSION: u32 = 1;

/// Complete serialized snapshot of one star.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarSnapshot {
    pub format_version: u32,
    pub name: String,
    pub designation: String,
    pub hemisphere: Hemisphere,
    pub declination: DeclinationSnapshot,
    pub right_ascension: RightAscensionSnapshot,
    pub constellation: String,
    pub apparent_magnitude: f64,
    pub distance_ly: f64,
    pub absolute_magnitude: f64,
    pub temperature: f64,
    pub mass: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeclinationSnapshot {
    pub degrees: i32,
    pub minutes: i32,
    pub seconds: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RightAscensionSnapshot {
    pub hours: i32,
    pub minutes: i32,
    pub seconds: i32,
}

impl From<&Star> for StarSnapshot {
    fn from(star: &Star) -> Self {
        let declination = star.declination();
        let right_ascension = star.right_ascension();
        Self {
            format_version: FORMAT_VERSION,
            name: star.name().to_string(),
            designation: star.designation().to_string(),
            hemisphere: star.hemisphere(),
            declination: DeclinationSnapshot {
                degrees: declination.degrees(),
                minutes: declination.minutes() as i32,
                seconds: declination.seconds(),
            },
            right_ascension: RightAscensionSnapshot {
                hours: right_ascension.hours() as i32,
                minutes: right_ascension.minutes() as i32,
                seconds: right_ascension.seconds() as i32,
            },
            constellation: star.constellation().to_string(),
            apparent_magnitude: star.apparent_magnitude(),
            distance_ly: star.distance_ly(),
            absolute_magnitude: star.absolute_magnitude(),
            temperature: star.temperature(),
            mass: star.mass(),
        }
    }
}

impl StarSnapshot {
    /// Rebuild the star, re-validating every field.
    ///
    /// The stored absolute magnitude is ignored and recomputed. Returns a
    /// human-readable reason on failure.
    pub fn into_star(self) -> Result<Star, String> {
        if self.format_version > FORMAT_VERSION {
            return Err(format!(
                "record format version {} is not supported (maximum: {FORMAT_VERSION})",
                self.format_version
            ));
        }
        let candidate = StarCandidate {
            name: self.name,
            hemisphere: self.hemisphere.as_str().to_string(),
            declination_degrees: self.declination.degrees,
            declination_minutes: self.declination.minutes,
            declination_seconds: self.declination.seconds,
            right_ascension_hours: self.right_ascension.hours,
            right_ascension_minutes: self.right_ascension.minutes,
            right_ascension_seconds: self.right_ascension.seconds,
            apparent_magnitude: self.apparent_magnitude,
            distance_ly: self.distance_ly,
            constellation: self.constellation,
            temperature: self.temperature,
            mass: self.mass,
        };
        let validated = candidate
            .validate(&ValidationContext::new())
            .map_err(|e| e.to_string())?;
        let designation = self
            .designation
            .parse::<CatalogDesignation>()
            .map_err(|e| e.to_string())?;
        validated
            .with_designation(designation)
            .map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use star_model::GreekLetter;

    fn star() -> Star {
        StarCandidate {
            name: "CRU0002".to_string(),
            hemisphere: "S".to_string(),
            declination_degrees: -59,
            declination_minutes: 41,
            declination_seconds: 19.5,
            right_ascension_hours: 12,
            right_ascension_minutes: 47,
            right_ascension_seconds: 43,
            apparent_magnitude: 1.25,
            distance_ly: 280.0,
            constellation: "Crux".to_string(),
            temperature: 27000.0,
            mass: 16.0,
        }
        .validate(&ValidationContext::new())
        .unwrap()
        .designate(GreekLetter::Beta)
    }

    #[test]
    fn test_snapshot_restores_identity() {
        let original = star();
        let restored = StarSnapshot::from(&original).into_star().unwrap();
        assert_eq!(restored, original);
        assert_eq!(restored.hemisphere(), Hemisphere::Southern);
        assert_eq!(restored.constellation(), original.constellation());
    }

    #[test]
    fn test_snapshot_recomputes_absolute_magnitude() {
        let original = star();
        let mut snapshot = StarSnapshot::from(&original);
        snapshot.absolute_magnitude = 99.0;
        let restored = snapshot.into_star().unwrap();
        assert_eq!(restored.absolute_magnitude(), original.absolute_magnitude());
    }

    #[test]
    fn test_snapshot_rejects_invalid_fields() {
        let mut snapshot = StarSnapshot::from(&star());
        snapshot.mass = 0.0;
        assert!(snapshot.into_star().is_err());

        let mut snapshot = StarSnapshot::from(&star());
        snapshot.designation = "Beta Orion".to_string();
        assert!(snapshot.into_star().is_err());

        let mut snapshot = StarSnapshot::from(&star());
        snapshot.format_version = FORMAT_VERSION + 1;
        assert!(snapshot.into_star().is_err());
    }
}
