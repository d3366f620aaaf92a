//! Data model for the star catalog.
//!
//! - `coordinates` - declination and right ascension
//! - `enums` - hemisphere classification
//! - `ids` - admission names and constellations
//! - `designation` - Greek letters and Bayer designations
//! - `star` - validated and catalogued stars
//! - `validate` - candidate validation and absolute magnitude

pub mod coordinates;
pub mod designation;
pub mod enums;
pub mod error;
pub mod ids;
pub mod star;
pub mod validate;

pub use coordinates::{Declination, RightAscension};
pub use designation::{CatalogDesignation, GreekLetter};
pub use enums::Hemisphere;
pub use error::{DesignationError, Field, Result, ValidationError};
pub use ids::{Constellation, STAR_NAME_PATTERN, StarName};
pub use star::{Star, ValidatedStar};
pub use validate::{
    CHANDRASEKHAR_LIMIT, LIGHT_YEARS_PER_PARSEC, PARSECS_PER_LIGHT_YEAR, StarCandidate,
    ValidationContext, absolute_magnitude,
};
