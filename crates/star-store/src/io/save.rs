//! Unit writing.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::error::{Result, StoreError};
use crate::snapshot::StarSnapshot;

/// Extension of a unit that is still being written.
pub(crate) const TEMP_EXTENSION: &str = "json.tmp";

/// Write a snapshot to `path`, replacing any previous unit wholesale.
///
/// Uses atomic write (temp file + rename) so a reader never observes a
/// half-written record, even after a crash.
pub(crate) fn write_unit(snapshot: &StarSnapshot, path: &Path) -> Result<()> {
    let bytes =
        serde_json::to_vec_pretty(snapshot).map_err(|e| StoreError::Serialization {
            name: snapshot.name.clone(),
            source: e,
        })?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| StoreError::io("create catalog directory", parent, e))?;
    }

    let temp_path = path.with_extension(TEMP_EXTENSION);

    let mut file =
        File::create(&temp_path).map_err(|e| StoreError::io("create temp file", &temp_path, e))?;
    file.write_all(&bytes)
        .map_err(|e| StoreError::io("write temp file", &temp_path, e))?;
    file.sync_all()
        .map_err(|e| StoreError::io("sync temp file", &temp_path, e))?;

    fs::rename(&temp_path, path).map_err(|e| StoreError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
