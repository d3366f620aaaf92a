//! Bayer designations: a Greek letter followed by the constellation name.

use std::fmt;
use std::str::FromStr;

use crate::Constellation;
use crate::error::DesignationError;

/// The 24 letters of the Greek alphabet in Bayer order.
///
/// The alphabet size is the hard capacity limit of a constellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GreekLetter {
    Alpha,
    Beta,
    Gamma,
    Delta,
    Epsilon,
    Zeta,
    Eta,
    Theta,
    Iota,
    Kappa,
    Lambda,
    Mu,
    Nu,
    Xi,
    Omicron,
    Pi,
    Rho,
    Sigma,
    Tau,
    Upsilon,
    Phi,
    Chi,
    Psi,
    Omega,
}

impl GreekLetter {
    pub const ALL: [GreekLetter; 24] = [
        GreekLetter::Alpha,
        GreekLetter::Beta,
        GreekLetter::Gamma,
        GreekLetter::Delta,
        GreekLetter::Epsilon,
        GreekLetter::Zeta,
        GreekLetter::Eta,
        GreekLetter::Theta,
        GreekLetter::Iota,
        GreekLetter::Kappa,
        GreekLetter::Lambda,
        GreekLetter::Mu,
        GreekLetter::Nu,
        GreekLetter::Xi,
        GreekLetter::Omicron,
        GreekLetter::Pi,
        GreekLetter::Rho,
        GreekLetter::Sigma,
        GreekLetter::Tau,
        GreekLetter::Upsilon,
        GreekLetter::Phi,
        GreekLetter::Chi,
        GreekLetter::Psi,
        GreekLetter::Omega,
    ];

    /// Number of assignable letters per constellation.
    pub const COUNT: usize = Self::ALL.len();

    /// Letter at zero-based position `index`, or `None` past Omega.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GreekLetter::Alpha => "Alpha",
            GreekLetter::Beta => "Beta",
            GreekLetter::Gamma => "Gamma",
            GreekLetter::Delta => "Delta",
            GreekLetter::Epsilon => "Epsilon",
            GreekLetter::Zeta => "Zeta",
            GreekLetter::Eta => "Eta",
            GreekLetter::Theta => "Theta",
            GreekLetter::Iota => "Iota",
            GreekLetter::Kappa => "Kappa",
            GreekLetter::Lambda => "Lambda",
            GreekLetter::Mu => "Mu",
            GreekLetter::Nu => "Nu",
            GreekLetter::Xi => "Xi",
            GreekLetter::Omicron => "Omicron",
            GreekLetter::Pi => "Pi",
            GreekLetter::Rho => "Rho",
            GreekLetter::Sigma => "Sigma",
            GreekLetter::Tau => "Tau",
            GreekLetter::Upsilon => "Upsilon",
            GreekLetter::Phi => "Phi",
            GreekLetter::Chi => "Chi",
            GreekLetter::Psi => "Psi",
            GreekLetter::Omega => "Omega",
        }
    }
}

impl fmt::Display for GreekLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GreekLetter {
    type Err = DesignationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .find(|letter| letter.as_str().eq_ignore_ascii_case(trimmed))
            .copied()
            .ok_or_else(|| DesignationError::UnknownLetter(s.to_string()))
    }
}

/// A catalog designation such as "Beta Orion".
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CatalogDesignation {
    letter: GreekLetter,
    constellation: Constellation,
}

impl CatalogDesignation {
    pub fn new(letter: GreekLetter, constellation: Constellation) -> Self {
        Self {
            letter,
            constellation,
        }
    }

    pub fn letter(&self) -> GreekLetter {
        self.letter
    }

    pub fn constellation(&self) -> &Constellation {
        &self.constellation
    }

    /// Case-insensitive comparison against user input like "beta orion".
    pub fn matches(&self, input: &str) -> bool {
        input
            .parse::<CatalogDesignation>()
            .is_ok_and(|parsed| parsed == *self)
    }
}

impl fmt::Display for CatalogDesignation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.letter, self.constellation)
    }
}

impl FromStr for CatalogDesignation {
    type Err = DesignationError;

    /// Split on the first space; the remainder is the constellation name
    /// and may itself contain spaces ("Alpha Ursa Major").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (letter, constellation) = s
            .trim()
            .split_once(char::is_whitespace)
            .ok_or_else(|| DesignationError::Malformed(s.to_string()))?;
        let letter = letter.parse::<GreekLetter>()?;
        let constellation = Constellation::new(constellation)
            .map_err(|_| DesignationError::Malformed(s.to_string()))?;
        Ok(Self::new(letter, constellation))
    }
}
