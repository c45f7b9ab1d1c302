//! Output directory creation.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::types::{DoxyError, Result};

/// Create `path` and any missing ancestors.
///
/// - already a directory: nothing happens
/// - a non-directory in the way (at `path` or any ancestor): `DoxyError::Conflict`
pub fn ensure_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }

    if path.exists() {
        return Err(DoxyError::Conflict {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        ensure_dir(parent)?;
    }

    match fs::create_dir(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Err(DoxyError::Conflict {
            path: path.to_path_buf(),
        }),
        Err(e) => Err(DoxyError::Io(e)),
    }
}
