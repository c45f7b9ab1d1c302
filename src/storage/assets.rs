//! Static style asset copy.

use ignore::WalkBuilder;
use std::fs;
use std::path::Path;

use tracing::debug;

use super::dirs::ensure_dir;
use crate::types::{DoxyError, Result};

/// Copy the directory `source` into `dest_root`, keeping its name
/// (`css/` lands at `dest_root/css/`). Existing files are overwritten.
///
/// Returns the number of files copied.
pub fn copy_dir_into(source: &Path, dest_root: &Path) -> Result<usize> {
    let name = source.file_name().ok_or_else(|| {
        DoxyError::Config(format!(
            "Style directory has no name: {}",
            source.display()
        ))
    })?;
    let dest = dest_root.join(name);
    ensure_dir(&dest)?;

    let walker = WalkBuilder::new(source)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut copied = 0;
    for entry in walker {
        let entry = entry.map_err(|e| DoxyError::Io(std::io::Error::other(e.to_string())))?;
        let path = entry.path();
        let Ok(relative) = path.strip_prefix(source) else {
            continue;
        };
        let target = dest.join(relative);

        match entry.file_type() {
            Some(ft) if ft.is_dir() => ensure_dir(&target)?,
            Some(ft) if ft.is_file() => {
                fs::copy(path, &target)?;
                copied += 1;
            }
            _ => debug!("Skipping non-regular asset: {}", path.display()),
        }
    }

    Ok(copied)
}
