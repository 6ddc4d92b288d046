//! Manifest writer error types.

use thiserror::Error;

/// Errors that can occur while writing the manifest to disk.
#[derive(Debug, Error)]
pub enum WriteError {
    /// Failed to create the output directory.
    #[error("Failed to create directory '{path}': {source}")]
    CreateDirError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the manifest file.
    #[error("Failed to write file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize the manifest.
    #[error("Failed to serialize manifest: {0}")]
    SerializeError(#[from] serde_json::Error),
}
