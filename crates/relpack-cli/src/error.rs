//! Error conversion utilities for the CLI.
//!
//! Converts relpack-core's typed errors (thiserror) into user-friendly
//! contextual errors (anyhow) with actionable guidance.

use anyhow::Result;
use anyhow::anyhow;
use relpack_core::PackageError;
use std::path::Path;

/// Converts `PackageError` to a user-friendly anyhow error with context
pub fn convert_package_error(err: PackageError, project_dir: &Path) -> anyhow::Error {
    match err {
        PackageError::ManifestNotFound { path } => {
            anyhow!(
                "Manifest not found: {}\n\
                 HINT: Run relpack from the extension project root, or pass PROJECT_DIR.",
                path.display()
            )
        }
        PackageError::ManifestParse { path, source } => {
            anyhow!(
                "Cannot parse manifest '{}': {source}\n\
                 HINT: The manifest must be valid JSON.",
                path.display()
            )
        }
        PackageError::DistNotFound { path } => {
            anyhow!(
                "Build output directory not found: {}\n\
                 HINT: Run `npm run build` first to produce the dist folder.",
                path.display()
            )
        }
        PackageError::Io(io_err) => {
            anyhow!(
                "I/O error while packaging '{}': {}",
                project_dir.display(),
                io_err
            )
        }
        _ => anyhow::Error::from(err).context(format!(
            "Error packaging project '{}'",
            project_dir.display()
        )),
    }
}

/// Adds project context to a core packaging result
pub fn add_package_context<T>(
    result: Result<T, PackageError>,
    project_dir: &Path,
) -> anyhow::Result<T> {
    result.map_err(|e| convert_package_error(e, project_dir))
}
