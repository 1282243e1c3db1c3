//! Version lookup in the extension manifest.

use crate::PackageError;
use crate::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

/// Manifest file name expected at the project root.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Version used when the manifest carries no `version` field.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Only the version field is read; the rest of the manifest is opaque.
#[derive(Debug, Deserialize)]
struct Manifest {
    version: Option<String>,
}

/// Returns the path to the manifest inside a project directory.
#[must_use]
pub fn manifest_path(project_dir: &Path) -> PathBuf {
    project_dir.join(MANIFEST_FILE)
}

/// Reads the version string from a manifest file.
///
/// Returns the exact `version` value, or [`DEFAULT_VERSION`] when the field
/// is absent.
///
/// # Errors
///
/// Returns an error if:
/// - The manifest file does not exist (`ManifestNotFound`)
/// - The file cannot be read
/// - The file is not valid JSON (`ManifestParse`)
pub fn read_version<P: AsRef<Path>>(manifest_path: P) -> Result<String> {
    let path = manifest_path.as_ref();

    if !path.exists() {
        return Err(PackageError::ManifestNotFound {
            path: path.to_path_buf(),
        });
    }

    let data = fs::read_to_string(path)?;
    let manifest: Manifest =
        serde_json::from_str(&data).map_err(|source| PackageError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(manifest
        .version
        .unwrap_or_else(|| DEFAULT_VERSION.to_string()))
}

/// Reads the version from `manifest.json` in a project directory.
///
/// # Errors
///
/// Same failure modes as [`read_version`].
pub fn read_project_version(project_dir: &Path) -> Result<String> {
    read_version(manifest_path(project_dir))
}
