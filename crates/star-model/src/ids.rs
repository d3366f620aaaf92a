use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use regex::Regex;

use crate::error::ValidationError;

/// Admission name pattern: three uppercase letters then four digits.
pub const STAR_NAME_PATTERN: &str = r"^[A-Z]{3}[0-9]{4}$";

static STAR_NAME_RE: OnceLock<Regex> = OnceLock::new();

fn star_name_regex() -> &'static Regex {
    STAR_NAME_RE.get_or_init(|| Regex::new(STAR_NAME_PATTERN).expect("valid star name regex"))
}

/// A star's admission name, e.g. `ABC1234`. Unique across the catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StarName(String);

impl StarName {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if !star_name_regex().is_match(&value) {
            return Err(ValidationError::InvalidName { name: value });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StarName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A constellation, identified by its name.
///
/// Two constellations are the same constellation iff their names are equal
/// ignoring ASCII case. The spelling given at construction is kept for
/// display.
#[derive(Debug, Clone)]
pub struct Constellation(String);

impl Constellation {
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyConstellation);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a user-supplied name.
    pub fn matches_name(&self, name: &str) -> bool {
        self.0.eq_ignore_ascii_case(name.trim())
    }

    fn key(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.bytes().map(|b| b.to_ascii_lowercase())
    }
}

impl PartialEq for Constellation {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for Constellation {}

impl Ord for Constellation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(other.key())
    }
}

impl PartialOrd for Constellation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Constellation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_ascii_lowercase().hash(state);
    }
}

impl fmt::Display for Constellation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
