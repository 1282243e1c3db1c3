//! Zip bundle creation.
//!
//! Two bundle variants are produced per release: a source bundle with the
//! filtered project tree under a versioned root folder, and an install
//! bundle with the pre-built `dist/` contents at the archive root.

use crate::PackageError;
use crate::Result;
use crate::config::PackageConfig;
use crate::report::BundleReport;
use crate::report::ProgressCallback;
use crate::walker::FilteredWalker;
use crate::walker::WalkedFile;
use crate::walker::collect_dist_files;
use std::fs::File;
use std::io::Read;
use std::io::Seek;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

/// Creates the source bundle zip in the release directory.
///
/// Walks the project tree, applies the exclusion patterns, and stores every
/// surviving file under the `{project}_v{version}_Source/` prefix. Returns
/// the bundle path and its statistics.
///
/// # Errors
///
/// Returns an error if:
/// - The project directory does not exist
/// - The output file cannot be created
/// - Any I/O error occurs while writing (no partial-archive recovery)
pub fn write_source_bundle(
    project_dir: &Path,
    release_dir: &Path,
    version: &str,
    config: &PackageConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<(PathBuf, BundleReport)> {
    let files = FilteredWalker::new(project_dir, &config.exclude_patterns).files()?;
    let zip_path = release_dir.join(config.source_bundle_name(version));
    let prefix = config.source_bundle_root(version);

    let report = write_bundle(&zip_path, &files, Some(&prefix), config, progress)?;
    Ok((zip_path, report))
}

/// Creates the install bundle zip from the pre-built output directory.
///
/// Entry paths are relative to the dist root with no extra prefix; the
/// `.vite` tool cache is skipped.
///
/// # Errors
///
/// Returns `DistNotFound` when `{project_dir}/{dist_folder}` is missing,
/// or an I/O error when writing fails.
pub fn write_install_bundle(
    project_dir: &Path,
    release_dir: &Path,
    version: &str,
    config: &PackageConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<(PathBuf, BundleReport)> {
    let dist_dir = project_dir.join(&config.dist_folder);
    let files = collect_dist_files(&dist_dir)?;
    let zip_path = release_dir.join(config.install_bundle_name(version));

    let report = write_bundle(&zip_path, &files, None, config, progress)?;
    Ok((zip_path, report))
}

/// Writes a set of files into a new zip, optionally under a root prefix.
fn write_bundle(
    zip_path: &Path,
    files: &[WalkedFile],
    prefix: Option<&str>,
    config: &PackageConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<BundleReport> {
    let file = File::create(zip_path)?;
    write_bundle_internal(file, files, prefix, config, progress)
}

fn write_bundle_internal<W: Write + Seek>(
    writer: W,
    files: &[WalkedFile],
    prefix: Option<&str>,
    config: &PackageConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<BundleReport> {
    let mut zip = ZipWriter::new(writer);
    let mut report = BundleReport::default();
    let start = std::time::Instant::now();

    let options = match config.compression_level {
        Some(level) => SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(i64::from(level))),
        None => SimpleFileOptions::default().compression_method(CompressionMethod::Deflated),
    };

    let total = files.len();
    // Reusable buffer for file copying.
    let mut buffer = vec![0u8; 64 * 1024];

    for (idx, entry) in files.iter().enumerate() {
        progress.on_entry_start(&entry.relative, total, idx + 1);

        let name = entry_name(&entry.relative, prefix)?;
        add_file_to_zip(&mut zip, &entry.path, &name, &options, &mut report, progress, &mut buffer)?;

        progress.on_entry_complete(&entry.relative);
    }

    zip.finish()
        .map_err(|e| std::io::Error::other(format!("failed to finish zip: {e}")))?;

    report.duration = start.elapsed();
    progress.on_complete();

    Ok(report)
}

/// Adds a single file to the zip under the given entry name.
fn add_file_to_zip<W: Write + Seek>(
    zip: &mut ZipWriter<W>,
    file_path: &Path,
    entry_name: &str,
    options: &SimpleFileOptions,
    report: &mut BundleReport,
    progress: &mut dyn ProgressCallback,
    buffer: &mut [u8],
) -> Result<()> {
    let mut file = File::open(file_path)?;

    zip.start_file(entry_name, *options)
        .map_err(|e| std::io::Error::other(format!("failed to start zip entry: {e}")))?;

    let mut bytes_written = 0u64;
    loop {
        let bytes_read = file.read(buffer)?;
        if bytes_read == 0 {
            break;
        }
        zip.write_all(&buffer[..bytes_read])?;
        bytes_written += bytes_read as u64;
        progress.on_bytes_written(bytes_read as u64);
    }

    report.files_added += 1;
    report.bytes_written += bytes_written;

    Ok(())
}

/// Builds a zip entry name with forward slashes and an optional root prefix.
fn entry_name(relative: &Path, prefix: Option<&str>) -> Result<String> {
    let path_str = relative.to_str().ok_or_else(|| {
        PackageError::Io(std::io::Error::other(format!(
            "path is not valid UTF-8: {}",
            relative.display()
        )))
    })?;

    // Zip entries use forward slashes regardless of platform.
    #[cfg(windows)]
    let normalized = path_str.replace('\\', "/");

    #[cfg(not(windows))]
    let normalized = path_str.to_string();

    Ok(match prefix {
        Some(prefix) => format!("{prefix}/{normalized}"),
        None => normalized,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::report::NoopProgress;
    use std::fs;
    use tempfile::TempDir;

    fn bare_config() -> PackageConfig {
        PackageConfig::default()
            .with_project_name("Ext")
            .with_exclude_patterns(vec![])
    }

    fn archive_names(zip_path: &Path) -> Vec<String> {
        let file = File::open(zip_path).unwrap();
        let mut archive = zip::ZipArchive::new(file).unwrap();
        (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect()
    }

    #[test]
    fn test_source_bundle_contains_surviving_files_under_prefix() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("project");
        let release = temp.path().join("out");
        fs::create_dir_all(project.join("src")).unwrap();
        fs::create_dir(&release).unwrap();
        fs::write(project.join("manifest.json"), "{}").unwrap();
        fs::write(project.join("src/main.ts"), "code").unwrap();
        fs::write(project.join("debug.log"), "noise").unwrap();

        let config = bare_config().with_exclude_patterns(vec!["*.log".to_string()]);
        let (zip_path, report) =
            write_source_bundle(&project, &release, "1.2.3", &config, &mut NoopProgress).unwrap();

        assert_eq!(zip_path.file_name().unwrap(), "Ext_v1.2.3_Source.zip");
        assert_eq!(report.files_added, 2);
        assert!(report.bytes_written > 0);

        let names = archive_names(&zip_path);
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"Ext_v1.2.3_Source/manifest.json".to_string()));
        assert!(names.contains(&"Ext_v1.2.3_Source/src/main.ts".to_string()));
    }

    #[test]
    fn test_source_bundle_missing_project_dir() {
        let temp = TempDir::new().unwrap();
        let release = temp.path().join("out");
        fs::create_dir(&release).unwrap();

        let config = bare_config();
        let err = write_source_bundle(
            &temp.path().join("gone"),
            &release,
            "1.0.0",
            &config,
            &mut NoopProgress,
        )
        .unwrap_err();
        assert!(matches!(err, PackageError::SourceNotFound { .. }));
    }

    #[test]
    fn test_install_bundle_relative_paths_no_prefix() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("project");
        let release = temp.path().join("out");
        fs::create_dir_all(project.join("dist/assets")).unwrap();
        fs::create_dir(&release).unwrap();
        fs::write(project.join("dist/manifest.json"), "{}").unwrap();
        fs::write(project.join("dist/assets/app.js"), "js").unwrap();
        fs::create_dir_all(project.join("dist/.vite")).unwrap();
        fs::write(project.join("dist/.vite/cache.json"), "{}").unwrap();

        let config = bare_config();
        let (zip_path, report) =
            write_install_bundle(&project, &release, "1.2.3", &config, &mut NoopProgress).unwrap();

        assert_eq!(zip_path.file_name().unwrap(), "Ext_v1.2.3_Install.zip");
        assert_eq!(report.files_added, 2);

        let names = archive_names(&zip_path);
        assert!(names.contains(&"manifest.json".to_string()));
        assert!(names.contains(&"assets/app.js".to_string()));
        assert!(!names.iter().any(|n| n.contains(".vite")));
    }

    #[test]
    fn test_install_bundle_missing_dist() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("project");
        let release = temp.path().join("out");
        fs::create_dir(&project).unwrap();
        fs::create_dir(&release).unwrap();

        let config = bare_config();
        let err = write_install_bundle(&project, &release, "1.0.0", &config, &mut NoopProgress)
            .unwrap_err();
        assert!(matches!(err, PackageError::DistNotFound { .. }));
        // Fails fast: no half-written archive left behind.
        assert!(!release.join("Ext_v1.0.0_Install.zip").exists());
    }

    #[test]
    fn test_bundle_roundtrip_preserves_contents() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("project");
        let release = temp.path().join("out");
        fs::create_dir_all(project.join("dist")).unwrap();
        fs::create_dir(&release).unwrap();
        fs::write(project.join("dist/loader.js"), "export default 1;").unwrap();

        let config = bare_config();
        let (zip_path, _) =
            write_install_bundle(&project, &release, "2.0.0", &config, &mut NoopProgress).unwrap();

        let file = File::open(&zip_path).unwrap();
        let mut archive = zip::ZipArchive::new(file).unwrap();
        let mut entry = archive.by_name("loader.js").unwrap();
        let mut contents = String::new();
        entry.read_to_string(&mut contents).unwrap();
        assert_eq!(contents, "export default 1;");
    }

    #[test]
    fn test_bundle_is_valid_zip() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("project");
        let release = temp.path().join("out");
        fs::create_dir(&project).unwrap();
        fs::create_dir(&release).unwrap();
        fs::write(project.join("a.txt"), "a".repeat(1000)).unwrap();

        let config = bare_config().with_compression_level(9);
        let (zip_path, _) =
            write_source_bundle(&project, &release, "1.0.0", &config, &mut NoopProgress).unwrap();

        let data = fs::read(&zip_path).unwrap();
        assert_eq!(&data[0..4], b"PK\x03\x04");
    }

    #[test]
    fn test_bundle_progress_callbacks() {
        #[derive(Default)]
        struct TestProgress {
            started: Vec<String>,
            completed: usize,
            bytes: u64,
            finished: bool,
        }

        impl ProgressCallback for TestProgress {
            fn on_entry_start(&mut self, path: &Path, _total: usize, _current: usize) {
                self.started.push(path.to_string_lossy().to_string());
            }

            fn on_bytes_written(&mut self, bytes: u64) {
                self.bytes += bytes;
            }

            fn on_entry_complete(&mut self, _path: &Path) {
                self.completed += 1;
            }

            fn on_complete(&mut self) {
                self.finished = true;
            }
        }

        let temp = TempDir::new().unwrap();
        let project = temp.path().join("project");
        let release = temp.path().join("out");
        fs::create_dir(&project).unwrap();
        fs::create_dir(&release).unwrap();
        fs::write(project.join("one.txt"), "1").unwrap();
        fs::write(project.join("two.txt"), "22").unwrap();

        let config = bare_config();
        let mut progress = TestProgress::default();
        let (_, report) =
            write_source_bundle(&project, &release, "1.0.0", &config, &mut progress).unwrap();

        assert_eq!(report.files_added, 2);
        assert_eq!(progress.started.len(), 2);
        assert_eq!(progress.completed, 2);
        assert_eq!(progress.bytes, 3);
        assert!(progress.finished);
    }

    #[test]
    fn test_entry_name_prefix_and_slashes() {
        let name = entry_name(Path::new("src/main.ts"), Some("Ext_v1.0.0_Source")).unwrap();
        assert_eq!(name, "Ext_v1.0.0_Source/src/main.ts");

        let bare = entry_name(Path::new("assets/app.js"), None).unwrap();
        assert_eq!(bare, "assets/app.js");
    }
}
