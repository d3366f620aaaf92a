//! Read-only queries over the stored catalog.
//!
//! Every query performs one full scan of the repository.

use star_model::{Hemisphere, PARSECS_PER_LIGHT_YEAR, Star};
use star_store::StarRepository;
use tracing::debug;

use crate::error::Result;

/// Stars matched by a query, plus how many stars were examined.
///
/// `scanned == 0` means the catalog itself is empty, which callers report
/// differently from a query that matched nothing.
#[derive(Debug, Clone, Default)]
pub struct QueryResult {
    pub matches: Vec<Star>,
    pub scanned: usize,
}

impl QueryResult {
    pub fn is_catalog_empty(&self) -> bool {
        self.scanned == 0
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }
}

/// Round half-up to two decimal places, expressed in hundredths.
///
/// Rounding works on the shortest decimal form of `value`, so a written
/// half such as `0.285` rounds up even though its binary value lies just
/// below it. Negative values round away from zero. `value` must be finite.
pub fn hundredths(value: f64) -> i64 {
    if value.abs() >= 1e15 {
        return (value * 100.0).round() as i64;
    }
    let text = value.abs().to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let mut digits = fraction.bytes().map(|digit| i64::from(digit - b'0'));
    let tenths = digits.next().unwrap_or(0);
    let cents = digits.next().unwrap_or(0);
    let carry = digits.next().is_some_and(|digit| digit >= 5);
    let whole = whole.parse::<i64>().unwrap_or(0);
    let magnitude = whole * 100 + tenths * 10 + cents + i64::from(carry);
    if value.is_sign_negative() {
        -magnitude
    } else {
        magnitude
    }
}

/// Distance in parsecs as used by [`QueryEngine::by_distance`].
pub fn lookup_parsecs(distance_ly: f64) -> f64 {
    distance_ly * PARSECS_PER_LIGHT_YEAR
}

pub struct QueryEngine<'a, R: ?Sized> {
    repo: &'a R,
}

impl<'a, R> QueryEngine<'a, R>
where
    R: StarRepository + ?Sized,
{
    pub fn new(repo: &'a R) -> Self {
        Self { repo }
    }

    fn select(&self, query: &str, predicate: impl Fn(&Star) -> bool) -> Result<QueryResult> {
        let stars = self.repo.list_all()?;
        let scanned = stars.len();
        let matches: Vec<Star> = stars.into_iter().filter(|star| predicate(star)).collect();
        debug!(query, scanned, matched = matches.len(), "query evaluated");
        Ok(QueryResult { matches, scanned })
    }

    pub fn all(&self) -> Result<QueryResult> {
        self.select("all", |_| true)
    }

    /// Stars whose distance, converted to parsecs and rounded to two
    /// places, equals `parsecs` rounded the same way.
    pub fn by_distance(&self, parsecs: f64) -> Result<QueryResult> {
        let wanted = parsecs.is_finite().then(|| hundredths(parsecs));
        self.select("distance", |star| {
            wanted == Some(hundredths(lookup_parsecs(star.distance_ly())))
        })
    }

    /// Temperature in degrees Celsius within `[min, max]`.
    pub fn by_temperature(&self, min: f64, max: f64) -> Result<QueryResult> {
        self.select("temperature", |star| {
            (min..=max).contains(&star.temperature())
        })
    }

    /// Absolute magnitude within `[min, max]`.
    pub fn by_absolute_magnitude(&self, min: f64, max: f64) -> Result<QueryResult> {
        self.select("absolute magnitude", |star| {
            (min..=max).contains(&star.absolute_magnitude())
        })
    }

    pub fn by_hemisphere(&self, hemisphere: Hemisphere) -> Result<QueryResult> {
        self.select("hemisphere", |star| star.hemisphere() == hemisphere)
    }

    /// Stars above the Chandrasekhar limit.
    pub fn supernova_candidates(&self) -> Result<QueryResult> {
        self.select("supernova", Star::is_supernova_candidate)
    }

    /// Members of the named constellation (case-insensitive).
    pub fn by_constellation(&self, name: &str) -> Result<QueryResult> {
        self.select("constellation", |star| {
            star.constellation().matches_name(name)
        })
    }

    /// The star with admission name `name` (case-insensitive).
    pub fn by_name(&self, name: &str) -> Result<Option<Star>> {
        let wanted = name.trim();
        let result = self.select("name", |star| {
            star.name().as_str().eq_ignore_ascii_case(wanted)
        })?;
        Ok(result.matches.into_iter().next())
    }
}
