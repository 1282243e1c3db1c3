//! Error types for release packaging operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using `PackageError`.
pub type Result<T> = std::result::Result<T, PackageError>;

/// Errors that can occur while packaging a release.
#[derive(Error, Debug)]
pub enum PackageError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The project manifest file does not exist.
    #[error("manifest not found: {path}")]
    ManifestNotFound {
        /// Expected manifest location.
        path: PathBuf,
    },

    /// The project manifest exists but is not valid JSON.
    #[error("cannot parse manifest {path}: {source}")]
    ManifestParse {
        /// Manifest location.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// The pre-built output directory does not exist.
    #[error("build output directory not found: {path}")]
    DistNotFound {
        /// Expected build output location.
        path: PathBuf,
    },

    /// A source path to be archived does not exist.
    #[error("source path not found: {path}")]
    SourceNotFound {
        /// The missing path.
        path: PathBuf,
    },

    /// Compression level outside the supported range.
    #[error("invalid compression level: {level} (expected 1-9)")]
    InvalidCompressionLevel {
        /// The rejected level.
        level: u8,
    },
}

impl PackageError {
    /// Returns `true` when the failure is a missing input (manifest or
    /// build output) rather than an unexpected runtime error.
    #[must_use]
    pub fn is_missing_input(&self) -> bool {
        matches!(
            self,
            Self::ManifestNotFound { .. } | Self::DistNotFound { .. } | Self::SourceNotFound { .. }
        )
    }
}
