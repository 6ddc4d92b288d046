//! Writing the manifest to `<output_dir>/package.json`.

mod error;

pub use error::WriteError;

use crate::manifest::Manifest;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of the generated manifest.
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// Creates `path` and any missing parents. Succeeds if it already exists.
///
/// # Errors
///
/// Returns [`WriteError::CreateDirError`] if the directory can't be created.
pub fn ensure_dir(path: &Path) -> Result<(), WriteError> {
    debug!(path = %path.display(), "Ensuring output directory");
    fs::create_dir_all(path).map_err(|source| WriteError::CreateDirError {
        path: path.display().to_string(),
        source,
    })
}

/// Writes `manifest` as 2-space indented JSON into `dir`, replacing any
/// existing `package.json`.
///
/// # Returns
///
/// The path of the written file.
///
/// # Errors
///
/// Returns [`WriteError`] if serialization or the write fails.
pub fn write_manifest(dir: &Path, manifest: &Manifest) -> Result<PathBuf, WriteError> {
    let path = dir.join(MANIFEST_FILE_NAME);
    let contents = serde_json::to_string_pretty(manifest)?;

    fs::write(&path, contents).map_err(|source| WriteError::IoError {
        path: path.display().to_string(),
        source,
    })?;

    debug!(path = %path.display(), "Wrote manifest");
    Ok(path)
}
