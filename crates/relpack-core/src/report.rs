//! Run reporting and progress callbacks.

use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

/// Statistics for one produced zip bundle.
#[derive(Debug, Clone, Default)]
pub struct BundleReport {
    /// Number of files added to the bundle.
    pub files_added: usize,

    /// Total uncompressed bytes written into the bundle.
    pub bytes_written: u64,

    /// Duration of the bundling operation.
    pub duration: Duration,

    /// Warnings generated while bundling.
    pub warnings: Vec<String>,
}

impl BundleReport {
    /// Creates a new empty bundle report.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a warning message to the report.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Returns whether any warnings were generated.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Report of a complete packaging run.
///
/// The artifact list preserves production order: source bundle, install
/// bundle, then the two changelog files.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Version read from the manifest, shared by every artifact name.
    pub version: String,

    /// Release directory the artifacts were written into.
    pub release_dir: PathBuf,

    /// Paths of all produced files.
    pub artifacts: Vec<PathBuf>,

    /// Source bundle statistics.
    pub source: BundleReport,

    /// Install bundle statistics.
    pub install: BundleReport,
}

impl RunReport {
    /// Returns whether any stage generated warnings.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.source.has_warnings() || self.install.has_warnings()
    }
}

/// Callback trait for progress reporting during bundling.
///
/// Implement this trait to receive updates while files are written into a
/// bundle, for example to drive a progress bar.
pub trait ProgressCallback {
    /// Called before a file is added. `current` is 1-based.
    fn on_entry_start(&mut self, path: &Path, total: usize, current: usize);

    /// Called for each chunk of data written.
    fn on_bytes_written(&mut self, bytes: u64);

    /// Called after a file has been added.
    fn on_entry_complete(&mut self, path: &Path);

    /// Called once when a bundle is finished.
    fn on_complete(&mut self);
}

/// Progress callback that does nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl ProgressCallback for NoopProgress {
    fn on_entry_start(&mut self, _path: &Path, _total: usize, _current: usize) {}

    fn on_bytes_written(&mut self, _bytes: u64) {}

    fn on_entry_complete(&mut self, _path: &Path) {}

    fn on_complete(&mut self) {}
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_report_warnings() {
        let mut report = BundleReport::new();
        assert!(!report.has_warnings());

        report.add_warning("skipped unreadable file");
        assert!(report.has_warnings());
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_run_report_warning_aggregation() {
        let mut source = BundleReport::new();
        source.add_warning("w");

        let report = RunReport {
            version: "1.0.0".to_string(),
            release_dir: PathBuf::from("release"),
            artifacts: vec![],
            source,
            install: BundleReport::new(),
        };
        assert!(report.has_warnings());
    }

    #[test]
    fn test_noop_progress_is_inert() {
        let mut progress = NoopProgress;
        progress.on_entry_start(Path::new("a"), 1, 1);
        progress.on_bytes_written(42);
        progress.on_entry_complete(Path::new("a"));
        progress.on_complete();
    }
}
