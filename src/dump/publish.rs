//! Artifact publishing
//!
//! Creates the output directory and writes header artifacts into it.
//! Writes are atomic-replace: content goes to a temporary sibling file
//! which is then renamed over the destination, so a name collision
//! silently replaces the earlier file (last write wins).

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Errors that can occur while writing output artifacts
#[derive(Debug, Clone)]
pub enum PublishError {
    /// An artifact file name was empty
    InvalidFileName(String),
    /// Directory creation or file writing failed
    Io(String),
}

impl fmt::Display for PublishError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublishError::InvalidFileName(name) => {
                write!(f, "invalid artifact file name: {:?}", name)
            }
            PublishError::Io(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for PublishError {}

impl From<std::io::Error> for PublishError {
    fn from(err: std::io::Error) -> Self {
        PublishError::Io(err.to_string())
    }
}

/// Create the output directory, including intermediate path segments.
/// Idempotent: an existing directory is not an error.
pub fn create_output_dir(dir: &Path) -> Result<(), PublishError> {
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Write one artifact into the output directory and return its path.
///
/// Content is written to a temporary sibling first and renamed over the
/// destination, replacing any file already there.
pub fn write_artifact(
    dir: &Path,
    file_name: &str,
    contents: &str,
) -> Result<PathBuf, PublishError> {
    if file_name.is_empty() {
        return Err(PublishError::InvalidFileName(file_name.to_string()));
    }
    let path = dir.join(file_name);
    let staging = dir.join(format!("{}.tmp", file_name));
    fs::write(&staging, contents)?;
    fs::rename(&staging, &path)?;
    log::debug!("wrote {}", path.display());
    Ok(path)
}
