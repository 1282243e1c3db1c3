//! Directory tree walking with exclusion filtering.
//!
//! Excluded directories are pruned before descending, so an excluded
//! `node_modules` tree is never traversed at all.

use crate::PackageError;
use crate::Result;
use crate::filters;
use std::ffi::OsStr;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// A regular file that survived filtering, with its archive-relative path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedFile {
    /// Full filesystem path.
    pub path: PathBuf,

    /// Path relative to the walk root.
    pub relative: PathBuf,

    /// Size in bytes.
    pub size: u64,
}

/// Walks a project tree applying the source exclusion patterns.
///
/// # Examples
///
/// ```no_run
/// use relpack_core::config::default_excludes;
/// use relpack_core::walker::FilteredWalker;
/// use std::path::Path;
///
/// let patterns = default_excludes();
/// let walker = FilteredWalker::new(Path::new("."), &patterns);
/// for file in walker.files()? {
///     println!("{}", file.relative.display());
/// }
/// # Ok::<(), relpack_core::PackageError>(())
/// ```
pub struct FilteredWalker<'a> {
    root: &'a Path,
    patterns: &'a [String],
}

impl<'a> FilteredWalker<'a> {
    /// Creates a walker over `root` with the given exclusion patterns.
    #[must_use]
    pub fn new(root: &'a Path, patterns: &'a [String]) -> Self {
        Self { root, patterns }
    }

    /// Collects all surviving regular files, sorted by file name for
    /// deterministic archive ordering.
    ///
    /// # Errors
    ///
    /// Returns an error if the root does not exist, traversal fails, or
    /// file metadata cannot be read.
    pub fn files(&self) -> Result<Vec<WalkedFile>> {
        if !self.root.exists() {
            return Err(PackageError::SourceNotFound {
                path: self.root.to_path_buf(),
            });
        }

        let walker = WalkDir::new(self.root)
            .sort_by_file_name()
            .into_iter()
            // The root itself is never filtered; everything below it is.
            .filter_entry(|entry| {
                entry.depth() == 0 || !filters::is_excluded(entry.path(), self.patterns)
            });

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| {
                PackageError::Io(std::io::Error::other(format!("walkdir error: {e}")))
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let metadata = entry.metadata().map_err(|e| {
                PackageError::Io(std::io::Error::other(format!(
                    "cannot read metadata for {}: {e}",
                    entry.path().display()
                )))
            })?;

            let relative = relative_to(entry.path(), self.root)?;
            files.push(WalkedFile {
                path: entry.path().to_path_buf(),
                relative,
                size: metadata.len(),
            });
        }

        Ok(files)
    }
}

/// Collects all files under a build output directory.
///
/// Only the `.vite` tool-cache directory is pruned; everything else is
/// included with paths relative to `dist_root`.
///
/// # Errors
///
/// Returns `DistNotFound` when `dist_root` is not a directory, or an I/O
/// error when traversal fails.
pub fn collect_dist_files(dist_root: &Path) -> Result<Vec<WalkedFile>> {
    if !dist_root.is_dir() {
        return Err(PackageError::DistNotFound {
            path: dist_root.to_path_buf(),
        });
    }

    let walker = WalkDir::new(dist_root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.file_name() != OsStr::new(".vite"));

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry
            .map_err(|e| PackageError::Io(std::io::Error::other(format!("walkdir error: {e}"))))?;

        if !entry.file_type().is_file() {
            continue;
        }

        let metadata = entry.metadata().map_err(|e| {
            PackageError::Io(std::io::Error::other(format!(
                "cannot read metadata for {}: {e}",
                entry.path().display()
            )))
        })?;

        let relative = relative_to(entry.path(), dist_root)?;
        files.push(WalkedFile {
            path: entry.path().to_path_buf(),
            relative,
            size: metadata.len(),
        });
    }

    Ok(files)
}

fn relative_to(path: &Path, root: &Path) -> Result<PathBuf> {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .map_err(|_| {
            PackageError::Io(std::io::Error::other(format!(
                "path {} is not under walk root {}",
                path.display(),
                root.display()
            )))
        })
}
