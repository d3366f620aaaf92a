//! Equatorial sky coordinates.
//!
//! Both coordinate types validate on construction and are immutable
//! afterwards.

use std::fmt;

use crate::Hemisphere;
use crate::error::{Field, Result, ValidationError};

/// Declination as degrees, arc-minutes and arc-seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Declination {
    degrees: i32,
    minutes: u32,
    seconds: f64,
}

impl Declination {
    /// Build a declination for a star in `hemisphere`.
    ///
    /// Degrees must fall inside [`Hemisphere::degree_range`]; minutes and
    /// seconds must be in [0, 60).
    pub fn new(hemisphere: Hemisphere, degrees: i32, minutes: i32, seconds: f64) -> Result<Self> {
        if !hemisphere.degree_range().contains(&degrees) {
            return Err(ValidationError::out_of_range(
                Field::DeclinationDegrees,
                degrees,
                hemisphere.degree_bound(),
            ));
        }
        let minutes = sexagesimal(Field::DeclinationMinutes, minutes)?;
        if !(0.0..60.0).contains(&seconds) {
            return Err(ValidationError::out_of_range(
                Field::DeclinationSeconds,
                seconds,
                "[0, 60)",
            ));
        }
        Ok(Self {
            degrees,
            minutes,
            seconds,
        })
    }

    pub fn degrees(&self) -> i32 {
        self.degrees
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> f64 {
        self.seconds
    }
}

impl fmt::Display for Declination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}° {}' {:.2}''",
            self.degrees, self.minutes, self.seconds
        )
    }
}

/// Right ascension as hours, minutes and seconds of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RightAscension {
    hours: u32,
    minutes: u32,
    seconds: u32,
}

impl RightAscension {
    /// Hours must be in [0, 24); minutes and seconds in [0, 60).
    pub fn new(hours: i32, minutes: i32, seconds: i32) -> Result<Self> {
        if !(0..24).contains(&hours) {
            return Err(ValidationError::out_of_range(Field::RightAscensionHours, hours, "[0, 24)"));
        }
        Ok(Self {
            hours: hours.unsigned_abs(),
            minutes: sexagesimal(Field::RightAscensionMinutes, minutes)?,
            seconds: sexagesimal(Field::RightAscensionSeconds, seconds)?,
        })
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }
}

impl fmt::Display for RightAscension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m {}s", self.hours, self.minutes, self.seconds)
    }
}

fn sexagesimal(field: Field, value: i32) -> Result<u32> {
    if (0..60).contains(&value) {
        Ok(value.unsigned_abs())
    } else {
        Err(ValidationError::out_of_range(field, value, "[0, 60)"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declination_hemisphere_bounds() {
        assert!(Declination::new(Hemisphere::Northern, 90, 0, 0.0).is_ok());
        assert!(Declination::new(Hemisphere::Northern, -1, 0, 0.0).is_err());
        assert!(Declination::new(Hemisphere::Southern, -90, 0, 0.0).is_ok());
        assert!(Declination::new(Hemisphere::Southern, 1, 0, 0.0).is_err());
    }

    #[test]
    fn test_declination_minutes_and_seconds() {
        let err = Declination::new(Hemisphere::Northern, 10, 60, 0.0).unwrap_err();
        assert_eq!(err.field(), Some(Field::DeclinationMinutes));

        let err = Declination::new(Hemisphere::Northern, 10, 0, 60.0).unwrap_err();
        assert_eq!(err.field(), Some(Field::DeclinationSeconds));

        let err = Declination::new(Hemisphere::Northern, 10, 0, f64::NAN).unwrap_err();
        assert_eq!(err.field(), Some(Field::DeclinationSeconds));

        assert!(Declination::new(Hemisphere::Northern, 10, 59, 59.99).is_ok());
    }

    #[test]
    fn test_right_ascension_bounds() {
        assert!(RightAscension::new(23, 59, 59).is_ok());

        let err = RightAscension::new(24, 0, 0).unwrap_err();
        assert_eq!(err.field(), Some(Field::RightAscensionHours));

        let err = RightAscension::new(5, -1, 0).unwrap_err();
        assert_eq!(err.field(), Some(Field::RightAscensionMinutes));

        let err = RightAscension::new(5, 0, 60).unwrap_err();
        assert_eq!(err.field(), Some(Field::RightAscensionSeconds));
    }

    #[test]
    fn test_display() {
        let dec = Declination::new(Hemisphere::Southern, -60, 50, 2.3).unwrap();
        assert_eq!(dec.to_string(), "-60° 50' 2.30''");
        let ra = RightAscension::new(14, 39, 36).unwrap();
        assert_eq!(ra.to_string(), "14h 39m 36s");
    }
}
