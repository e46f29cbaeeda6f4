//! Changelog file operations

use std::path::Path;

use tracing::{debug, info};

use crate::error::{ChangelogError, Result};

/// Read the full changelog file.
///
/// A missing file is reported as [`ChangelogError::FileNotFound`].
pub fn read_changelog(path: &Path) -> Result<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            debug!(path = %path.display(), bytes = content.len(), "read changelog");
            Ok(content)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(ChangelogError::FileNotFound(path.to_path_buf()).into())
        }
        Err(source) => Err(ChangelogError::Read {
            path: path.to_path_buf(),
            source,
        }
        .into()),
    }
}

/// Overwrite the changelog file with new content
pub fn write_changelog(path: &Path, content: &str) -> Result<()> {
    info!(path = %path.display(), bytes = content.len(), "writing changelog");
    std::fs::write(path, content).map_err(|source| ChangelogError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
