use std::fmt;

use thiserror::Error;

/// A star attribute subject to a physical or positional bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    DeclinationDegrees,
    DeclinationMinutes,
    DeclinationSeconds,
    RightAscensionHours,
    RightAscensionMinutes,
    RightAscensionSeconds,
    ApparentMagnitude,
    Distance,
    Temperature,
    Mass,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::DeclinationDegrees => "declination degrees",
            Field::DeclinationMinutes => "declination minutes",
            Field::DeclinationSeconds => "declination seconds",
            Field::RightAscensionHours => "right ascension hours",
            Field::RightAscensionMinutes => "right ascension minutes",
            Field::RightAscensionSeconds => "right ascension seconds",
            Field::ApparentMagnitude => "apparent magnitude",
            Field::Distance => "distance",
            Field::Temperature => "temperature",
            Field::Mass => "mass",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reason a candidate star was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("star name '{name}' must be 3 uppercase letters followed by 4 digits")]
    InvalidName { name: String },

    #[error("a star named '{name}' already exists in the catalog")]
    NameTaken { name: String },

    #[error("invalid hemisphere: '{input}' (expected Northern/N or Southern/S)")]
    UnknownHemisphere { input: String },

    #[error("{field} {value} is outside the allowed range {bound}")]
    OutOfRange {
        field: Field,
        value: f64,
        bound: &'static str,
    },

    #[error("constellation name must not be empty")]
    EmptyConstellation,
}

impl ValidationError {
    pub(crate) fn out_of_range(field: Field, value: impl Into<f64>, bound: &'static str) -> Self {
        Self::OutOfRange {
            field,
            value: value.into(),
            bound,
        }
    }

    /// The bounded field that was violated, if any.
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::OutOfRange { field, .. } => Some(*field),
            _ => None,
        }
    }
}

/// Failure to interpret a catalog designation such as "Beta Orion".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DesignationError {
    #[error("unknown Greek letter: '{0}'")]
    UnknownLetter(String),

    #[error("malformed catalog designation: '{0}' (expected '<Letter> <Constellation>')")]
    Malformed(String),

    #[error("designation '{designation}' does not belong to constellation '{constellation}'")]
    ConstellationMismatch {
        designation: String,
        constellation: String,
    },
}

pub type Result<T> = std::result::Result<T, ValidationError>;
