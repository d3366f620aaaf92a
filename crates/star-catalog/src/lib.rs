//! Star catalog engine.
//!
//! Ties validation, designation bookkeeping and storage together:
//!
//! - `namer` - Greek-letter assignment and gap closing
//! - `catalog` - insertion and removal
//! - `query` - read-only predicates over the stored stars

mod catalog;
mod error;
pub mod namer;
pub mod query;

pub use catalog::{Catalog, Removal};
pub use error::{CatalogError, Result};
pub use namer::{CONSTELLATION_CAPACITY, Rename, assign_designation, resequence};
pub use query::{QueryEngine, QueryResult};
