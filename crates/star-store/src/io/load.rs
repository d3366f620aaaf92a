//! Unit reading.

use std::fs;
use std::path::Path;

use star_model::Star;

use crate::error::{Result, StoreError};
use crate::snapshot::StarSnapshot;

/// Read and validate the unit at `path`.
///
/// A missing file is `NotFound`; any other read failure, a decode failure
/// or a record whose name differs from the file's key is `Corrupt`.
pub(crate) fn read_unit(path: &Path, key: &str) -> Result<Star> {
    let bytes = fs::read(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StoreError::NotFound {
                name: key.to_string(),
            }
        } else {
            corrupt(path, format!("unreadable: {e}"))
        }
    })?;

    let snapshot: StarSnapshot =
        serde_json::from_slice(&bytes).map_err(|e| corrupt(path, format!("invalid JSON: {e}")))?;

    if snapshot.name != key {
        return Err(corrupt(
            path,
            format!("record names star {} but is stored as {key}", snapshot.name),
        ));
    }

    snapshot.into_star().map_err(|reason| corrupt(path, reason))
}

fn corrupt(path: &Path, reason: String) -> StoreError {
    StoreError::Corrupt {
        path: path.to_path_buf(),
        reason,
    }
}
