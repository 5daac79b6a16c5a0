// SPDX-License-Identifier: MPL-2.0
//! Writing diagnostics reports to disk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;

// =============================================================================
// Export Error
// =============================================================================

/// Errors that can occur during diagnostic report export.
#[derive(Debug)]
pub enum ExportError {
    Io(io::Error),
    Serialization(serde_json::Error),
}

impl std::fmt::Display for ExportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Serialization(err) => write!(f, "serialization error: {err}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialization(err) => Some(err),
        }
    }
}

impl From<io::Error> for ExportError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err)
    }
}

// =============================================================================
// Files
// =============================================================================

/// Format: `comment_wall_diagnostics_YYYYMMDD_HHMMSS.json`, local time.
#[must_use]
pub fn generate_default_filename() -> String {
    let now = Local::now();
    format!(
        "comment_wall_diagnostics_{}.json",
        now.format("%Y%m%d_%H%M%S")
    )
}

/// Full path of a new report inside `directory`.
#[must_use]
pub fn report_path(directory: &Path) -> PathBuf {
    directory.join(generate_default_filename())
}

/// Writes through a temporary sibling then renames it into place.
///
/// # Errors
///
/// Returns any I/O error; the temporary file is removed if the rename fails.
pub fn write_atomic(path: &Path, content: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, content)?;
    if let Err(e) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filename_has_prefix_and_extension() {
        let name = generate_default_filename();
        assert!(name.starts_with("comment_wall_diagnostics_"));
        assert!(name.ends_with(".json"));
        // prefix + YYYYMMDD_HHMMSS + .json
        assert_eq!(name.len(), "comment_wall_diagnostics_".len() + 15 + 5);
    }

    #[test]
    fn write_atomic_creates_parent_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("report.json");

        write_atomic(&path, "{}").expect("write succeeds");

        assert_eq!(fs::read_to_string(&path).expect("readable"), "{}");
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn write_atomic_replaces_existing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("report.json");
        fs::write(&path, "old").expect("seed");

        write_atomic(&path, "new").expect("write succeeds");

        assert_eq!(fs::read_to_string(&path).expect("readable"), "new");
    }

    #[test]
    fn export_error_displays_cause() {
        let err = ExportError::Io(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
        assert_eq!(err.to_string(), "I/O error: denied");
    }
}
