use crate::error::DesignationError;
use crate::validate::{CHANDRASEKHAR_LIMIT, PARSECS_PER_LIGHT_YEAR};
use crate::{
    CatalogDesignation, Constellation, Declination, GreekLetter, Hemisphere, RightAscension,
    StarName,
};

/// A star that passed validation but has no catalog designation yet.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedStar {
    pub(crate) name: StarName,
    pub(crate) hemisphere: Hemisphere,
    pub(crate) declination: Declination,
    pub(crate) right_ascension: RightAscension,
    pub(crate) constellation: Constellation,
    pub(crate) apparent_magnitude: f64,
    pub(crate) distance_ly: f64,
    pub(crate) absolute_magnitude: f64,
    pub(crate) temperature: f64,
    pub(crate) mass: f64,
}

impl ValidatedStar {
    pub fn name(&self) -> &StarName {
        &self.name
    }

    pub fn constellation(&self) -> &Constellation {
        &self.constellation
    }

    /// Take over `canonical`'s spelling if it names the same constellation,
    /// so one constellation is never stored under two spellings.
    pub fn adopt_spelling(&mut self, canonical: &Constellation) {
        if self.constellation == *canonical {
            self.constellation = canonical.clone();
        }
    }

    /// File the star under `letter` in its own constellation.
    pub fn designate(self, letter: GreekLetter) -> Star {
        let designation = CatalogDesignation::new(letter, self.constellation.clone());
        Star {
            inner: self,
            designation,
        }
    }

    /// Attach a previously assigned designation, e.g. one read back from
    /// storage. The designation must name the star's own constellation.
    pub fn with_designation(
        self,
        designation: CatalogDesignation,
    ) -> Result<Star, DesignationError> {
        if designation.constellation() != &self.constellation {
            return Err(DesignationError::ConstellationMismatch {
                designation: designation.to_string(),
                constellation: self.constellation.to_string(),
            });
        }
        Ok(self.designate(designation.letter()))
    }
}

/// A catalogued star.
///
/// All attributes are fixed at creation except the Greek letter of the
/// designation, which changes when siblings are removed.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    inner: ValidatedStar,
    designation: CatalogDesignation,
}

impl Star {
    pub fn name(&self) -> &StarName {
        &self.inner.name
    }

    pub fn designation(&self) -> &CatalogDesignation {
        &self.designation
    }

    pub fn letter(&self) -> GreekLetter {
        self.designation.letter()
    }

    pub fn hemisphere(&self) -> Hemisphere {
        self.inner.hemisphere
    }

    pub fn declination(&self) -> Declination {
        self.inner.declination
    }

    pub fn right_ascension(&self) -> RightAscension {
        self.inner.right_ascension
    }

    pub fn constellation(&self) -> &Constellation {
        &self.inner.constellation
    }

    pub fn apparent_magnitude(&self) -> f64 {
        self.inner.apparent_magnitude
    }

    /// Distance from Earth in light-years.
    pub fn distance_ly(&self) -> f64 {
        self.inner.distance_ly
    }

    pub fn distance_parsecs(&self) -> f64 {
        self.inner.distance_ly * PARSECS_PER_LIGHT_YEAR
    }

    pub fn absolute_magnitude(&self) -> f64 {
        self.inner.absolute_magnitude
    }

    /// Surface temperature in degrees Celsius.
    pub fn temperature(&self) -> f64 {
        self.inner.temperature
    }

    /// Mass in solar masses.
    pub fn mass(&self) -> f64 {
        self.inner.mass
    }

    /// Mass strictly above the Chandrasekhar limit.
    pub fn is_supernova_candidate(&self) -> bool {
        self.inner.mass > CHANDRASEKHAR_LIMIT
    }

    /// Move the star to another letter within its constellation.
    pub fn redesignate(&mut self, letter: GreekLetter) {
        self.designation = CatalogDesignation::new(letter, self.inner.constellation.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{StarCandidate, ValidationContext};

    fn validated(name: &str, constellation: &str) -> ValidatedStar {
        StarCandidate {
            name: name.to_string(),
            hemisphere: "S".to_string(),
            declination_degrees: -60,
            declination_minutes: 50,
            declination_seconds: 2.3,
            right_ascension_hours: 14,
            right_ascension_minutes: 39,
            right_ascension_seconds: 36,
            apparent_magnitude: -0.27,
            distance_ly: 4.37,
            constellation: constellation.to_string(),
            temperature: 5500.0,
            mass: 1.1,
        }
        .validate(&ValidationContext::new())
        .unwrap()
    }

    #[test]
    fn test_designate_uses_own_constellation() {
        let star = validated("CEN0001", "Centaurus").designate(GreekLetter::Alpha);
        assert_eq!(star.designation().to_string(), "Alpha Centaurus");
        assert_eq!(star.constellation(), star.designation().constellation());
    }

    #[test]
    fn test_adopt_spelling_only_for_same_constellation() {
        let mut star = validated("CEN0001", "centaurus");
        star.adopt_spelling(&Constellation::new("Crux").unwrap());
        assert_eq!(star.constellation().name(), "centaurus");

        star.adopt_spelling(&Constellation::new("Centaurus").unwrap());
        assert_eq!(star.constellation().name(), "Centaurus");
        assert_eq!(
            star.designate(GreekLetter::Alpha).designation().to_string(),
            "Alpha Centaurus"
        );
    }

    #[test]
    fn test_with_designation_rejects_foreign_constellation() {
        let foreign: CatalogDesignation = "Alpha Orion".parse().unwrap();
        assert!(matches!(
            validated("CEN0001", "Centaurus").with_designation(foreign),
            Err(DesignationError::ConstellationMismatch { .. })
        ));
    }

    #[test]
    fn test_redesignate_changes_only_letter() {
        let mut star = validated("CEN0001", "Centaurus").designate(GreekLetter::Gamma);
        let before = star.clone();
        star.redesignate(GreekLetter::Beta);
        assert_eq!(star.letter(), GreekLetter::Beta);
        assert_eq!(star.name(), before.name());
        assert_eq!(star.absolute_magnitude(), before.absolute_magnitude());
        assert_eq!(star.constellation(), before.constellation());
    }

    #[test]
    fn test_supernova_threshold() {
        let mut star = validated("CEN0001", "Centaurus").designate(GreekLetter::Alpha);
        star.inner.mass = 1.44;
        assert!(!star.is_supernova_candidate());
        star.inner.mass = 1.45;
        assert!(star.is_supernova_candidate());
    }
}
