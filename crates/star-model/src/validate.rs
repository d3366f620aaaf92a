//! Candidate star validation and derived photometry.
//!
//! A [`StarCandidate`] holds raw, unchecked field values. Running
//! [`StarCandidate::validate`] is the only way to obtain a [`ValidatedStar`],
//! which in turn is the only way to obtain a [`crate::Star`].

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::{Field, Result, ValidationError};
use crate::star::ValidatedStar;
use crate::{Constellation, Declination, Hemisphere, RightAscension, StarName};

/// Brightest observable apparent magnitude (the Sun).
pub const MIN_APPARENT_MAGNITUDE: f64 = -26.74;
/// Faintest apparent magnitude accepted into the catalog.
pub const MAX_APPARENT_MAGNITUDE: f64 = 15.00;
/// Minimum surface temperature in degrees Celsius.
pub const MIN_TEMPERATURE_CELSIUS: f64 = 2000.0;
/// Mass bounds in solar masses.
pub const MIN_MASS_SOLAR: f64 = 0.1;
pub const MAX_MASS_SOLAR: f64 = 50.0;
/// Chandrasekhar limit in solar masses.
pub const CHANDRASEKHAR_LIMIT: f64 = 1.44;
/// Light-years per parsec, as used for absolute magnitude.
pub const LIGHT_YEARS_PER_PARSEC: f64 = 3.26;
/// Parsecs per light-year, as used for distance lookups.
pub const PARSECS_PER_LIGHT_YEAR: f64 = 0.306_601_393_8;

const APPARENT_MAGNITUDE_BOUND: &str = "[-26.74, 15.00]";
const DISTANCE_BOUND: &str = "(0, inf)";

/// Raw field values for a star that has not been validated yet.
#[derive(Debug, Clone, PartialEq)]
pub struct StarCandidate {
    pub name: String,
    pub hemisphere: String,
    pub declination_degrees: i32,
    pub declination_minutes: i32,
    pub declination_seconds: f64,
    pub right_ascension_hours: i32,
    pub right_ascension_minutes: i32,
    pub right_ascension_seconds: i32,
    pub apparent_magnitude: f64,
    /// Distance from Earth in light-years.
    pub distance_ly: f64,
    pub constellation: String,
    /// Surface temperature in degrees Celsius.
    pub temperature: f64,
    /// Mass in solar masses.
    pub mass: f64,
}

/// Catalog state a candidate is checked against.
#[derive(Debug, Clone, Default)]
pub struct ValidationContext {
    taken_names: BTreeSet<String>,
}

impl ValidationContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admission names already present in the catalog.
    pub fn with_taken_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.taken_names.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn is_taken(&self, name: &str) -> bool {
        self.taken_names.contains(name)
    }
}

impl StarCandidate {
    /// Check every constraint and derive the absolute magnitude.
    ///
    /// Checks run in dependency order and the first violation is returned.
    pub fn validate(&self, ctx: &ValidationContext) -> Result<ValidatedStar> {
        let name = StarName::new(self.name.as_str())?;
        if ctx.is_taken(name.as_str()) {
            return Err(ValidationError::NameTaken {
                name: name.to_string(),
            });
        }

        let hemisphere: Hemisphere = self.hemisphere.parse()?;
        let declination = Declination::new(
            hemisphere,
            self.declination_degrees,
            self.declination_minutes,
            self.declination_seconds,
        )?;
        let right_ascension = RightAscension::new(
            self.right_ascension_hours,
            self.right_ascension_minutes,
            self.right_ascension_seconds,
        )?;

        check_apparent_magnitude(self.apparent_magnitude)?;
        check_distance(self.distance_ly)?;
        let constellation = Constellation::new(self.constellation.as_str())?;

        if !(self.temperature.is_finite() && self.temperature >= MIN_TEMPERATURE_CELSIUS) {
            return Err(ValidationError::out_of_range(
                Field::Temperature,
                self.temperature,
                "[2000, inf)",
            ));
        }
        if !(MIN_MASS_SOLAR..=MAX_MASS_SOLAR).contains(&self.mass) {
            return Err(ValidationError::out_of_range(Field::Mass, self.mass, "[0.1, 50]"));
        }

        let absolute_magnitude = absolute_magnitude(self.apparent_magnitude, self.distance_ly)?;
        debug!(
            name = %name,
            constellation = %constellation,
            absolute_magnitude,
            "candidate star validated"
        );

        Ok(ValidatedStar {
            name,
            hemisphere,
            declination,
            right_ascension,
            constellation,
            apparent_magnitude: self.apparent_magnitude,
            distance_ly: self.distance_ly,
            absolute_magnitude,
            temperature: self.temperature,
            mass: self.mass,
        })
    }
}

/// Absolute magnitude from apparent magnitude and distance in light-years.
///
/// `M = m - 5 * log10(d / 3.26) + 5`. Both inputs are re-checked so the
/// function is safe to call on its own.
pub fn absolute_magnitude(apparent_magnitude: f64, distance_ly: f64) -> Result<f64> {
    check_distance(distance_ly)?;
    check_apparent_magnitude(apparent_magnitude)?;
    let distance_parsecs = distance_ly / LIGHT_YEARS_PER_PARSEC;
    Ok(apparent_magnitude - 5.0 * distance_parsecs.log10() + 5.0)
}

fn check_apparent_magnitude(value: f64) -> Result<()> {
    if (MIN_APPARENT_MAGNITUDE..=MAX_APPARENT_MAGNITUDE).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::out_of_range(
            Field::ApparentMagnitude,
            value,
            APPARENT_MAGNITUDE_BOUND,
        ))
    }
}

fn check_distance(value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::out_of_range(Field::Distance, value, DISTANCE_BOUND))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate() -> StarCandidate {
        StarCandidate {
            name: "ORI0001".to_string(),
            hemisphere: "N".to_string(),
            declination_degrees: 7,
            declination_minutes: 24,
            declination_seconds: 25.4,
            right_ascension_hours: 5,
            right_ascension_minutes: 55,
            right_ascension_seconds: 10,
            apparent_magnitude: 0.5,
            distance_ly: 548.0,
            constellation: "Orion".to_string(),
            temperature: 3300.0,
            mass: 16.5,
        }
    }

    #[test]
    fn test_valid_candidate() {
        let star = candidate().validate(&ValidationContext::new()).unwrap();
        assert_eq!(star.name().as_str(), "ORI0001");
        assert_eq!(star.constellation().name(), "Orion");
    }

    #[test]
    fn test_name_checked_before_other_fields() {
        let mut c = candidate();
        c.name = "ori0001".to_string();
        c.mass = 100.0;
        assert!(matches!(
            c.validate(&ValidationContext::new()),
            Err(ValidationError::InvalidName { .. })
        ));
    }

    #[test]
    fn test_taken_name_rejected() {
        let ctx = ValidationContext::new().with_taken_names(["ORI0001"]);
        assert_eq!(
            candidate().validate(&ctx).unwrap_err(),
            ValidationError::NameTaken {
                name: "ORI0001".to_string()
            }
        );
    }

    #[test]
    fn test_physical_bounds() {
        let cases: [(fn(&mut StarCandidate), Field); 6] = [
            (|c| c.apparent_magnitude = 15.01, Field::ApparentMagnitude),
            (|c| c.apparent_magnitude = -26.75, Field::ApparentMagnitude),
            (|c| c.distance_ly = 0.0, Field::Distance),
            (|c| c.temperature = 1999.9, Field::Temperature),
            (|c| c.mass = 0.09, Field::Mass),
            (|c| c.mass = 50.01, Field::Mass),
        ];
        for (mutate, field) in cases {
            let mut c = candidate();
            mutate(&mut c);
            let err = c.validate(&ValidationContext::new()).unwrap_err();
            assert_eq!(err.field(), Some(field), "{err}");
        }
    }

    #[test]
    fn test_inclusive_bounds_accepted() {
        let mut c = candidate();
        c.apparent_magnitude = MAX_APPARENT_MAGNITUDE;
        c.temperature = MIN_TEMPERATURE_CELSIUS;
        c.mass = MAX_MASS_SOLAR;
        assert!(c.validate(&ValidationContext::new()).is_ok());
    }

    #[test]
    fn test_absolute_magnitude_at_ten_parsecs() {
        // 10 pc is the reference distance, so M == m.
        let m = absolute_magnitude(4.83, 32.6).unwrap();
        assert!((m - 4.83).abs() < 1e-9);
    }

    #[test]
    fn test_absolute_magnitude_rejects_bad_inputs() {
        assert_eq!(
            absolute_magnitude(1.0, 0.0).unwrap_err().field(),
            Some(Field::Distance)
        );
        assert_eq!(
            absolute_magnitude(1.0, -3.0).unwrap_err().field(),
            Some(Field::Distance)
        );
        assert_eq!(
            absolute_magnitude(20.0, 10.0).unwrap_err().field(),
            Some(Field::ApparentMagnitude)
        );
        assert!(absolute_magnitude(f64::NAN, 10.0).is_err());
    }
}
