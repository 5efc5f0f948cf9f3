//! Error type for registry generation.

use std::path::PathBuf;

/// Error type for registry operations.
///
/// Per-subtree read failures during a scan are deliberately not represented
/// here: the scanner skips the affected module or version and records it in
/// [`crate::ScanReport::skipped`] instead of aborting the run.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Module root not found or not a directory: {0}")]
    RootNotFound(PathBuf),

    #[error("Failed to read directory {path}: {reason}")]
    DirectoryRead { path: PathBuf, reason: String },

    #[error("Failed to write registry {path}: {reason}")]
    Write { path: PathBuf, reason: String },

    #[error("Failed to serialize registry: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
