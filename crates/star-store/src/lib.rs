//! Durable storage for the star catalog.
//!
//! Each star is persisted as one self-contained unit keyed by its admission
//! name. There is no index: membership and designation order are always
//! recomputed from a full scan.
//!
//! # Features
//!
//! - **Atomic writes** (temp file + rename) so no partial record is visible
//! - **Corruption tolerance**: unreadable units are skipped by `list_all`
//! - **Re-validation on load** so stored records obey the same rules as
//!   new candidates
//!
//! # File Format
//!
//! ```text
//! <catalog_dir>/
//!   ABC1234.json      committed unit (pretty-printed StarSnapshot)
//!   ABC1234.json.tmp  in-flight write, never read
//! ```
//!
//! # Example
//!
//! ```ignore
//! use star_store::{FileStarStore, StarRepository, StoreConfig};
//!
//! let mut store = FileStarStore::new(StoreConfig::from_env());
//! store.put(&star)?;
//! let stars = store.list_all()?;
//! ```

mod config;
mod error;
mod file_store;
mod io;
mod repository;
mod snapshot;

pub use config::{CATALOG_DIR_ENV, DEFAULT_CATALOG_DIR, StoreConfig};
pub use error::{Result, StoreError};
pub use file_store::{FileStarStore, UNIT_EXTENSION};
pub use repository::{MemoryStarStore, StarRepository};
pub use snapshot::{DeclinationSnapshot, FORMAT_VERSION, RightAscensionSnapshot, StarSnapshot};
