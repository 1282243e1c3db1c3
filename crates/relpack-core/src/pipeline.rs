//! Packaging pipeline orchestration.
//!
//! Stages run strictly in order: version lookup, release directory reset,
//! source bundle, install bundle, changelog generation. The first error
//! aborts the remaining stages, so a missing `dist/` leaves the source
//! bundle on disk and no changelog files.

use crate::Result;
use crate::bundle;
use crate::config::PackageConfig;
use crate::manifest;
use crate::notes;
use crate::report::ProgressCallback;
use crate::report::RunReport;
use std::fs;
use std::path::Path;

/// Runs the full packaging pipeline for a project directory.
///
/// The version is read once from `manifest.json` and shared by both bundle
/// names and both changelog documents. The release directory is deleted and
/// recreated, then the four artifacts are produced into it.
///
/// # Examples
///
/// ```no_run
/// use relpack_core::NoopProgress;
/// use relpack_core::PackageConfig;
/// use relpack_core::pipeline::package_release;
/// use std::path::Path;
///
/// let config = PackageConfig::default();
/// let report = package_release(Path::new("."), &config, &mut NoopProgress)?;
/// assert_eq!(report.artifacts.len(), 4);
/// # Ok::<(), relpack_core::PackageError>(())
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - The configuration is invalid
/// - `manifest.json` is missing or unparsable
/// - The build output directory is missing
/// - Any I/O error occurs in a stage
pub fn package_release(
    project_dir: &Path,
    config: &PackageConfig,
    progress: &mut dyn ProgressCallback,
) -> Result<RunReport> {
    config.validate()?;

    let version = manifest::read_project_version(project_dir)?;

    // The release folder is recreated from scratch on every run.
    let release_dir = project_dir.join(&config.release_folder);
    if release_dir.exists() {
        fs::remove_dir_all(&release_dir)?;
    }
    fs::create_dir_all(&release_dir)?;

    let (source_path, source) =
        bundle::write_source_bundle(project_dir, &release_dir, &version, config, progress)?;
    let (install_path, install) =
        bundle::write_install_bundle(project_dir, &release_dir, &version, config, progress)?;
    let notes = notes::write_release_notes(&release_dir, &version, config)?;

    Ok(RunReport {
        version,
        release_dir,
        artifacts: vec![source_path, install_path, notes.zh, notes.en],
        source,
        install,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::PackageError;
    use crate::report::NoopProgress;
    use tempfile::TempDir;

    fn make_project(version: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        fs::write(
            root.join("manifest.json"),
            format!(r#"{{"name": "ext", "version": "{version}"}}"#),
        )
        .unwrap();
        fs::create_dir(root.join("src")).unwrap();
        fs::write(root.join("src/main.ts"), "code").unwrap();
        fs::create_dir_all(root.join("dist/assets")).unwrap();
        fs::write(root.join("dist/manifest.json"), "{}").unwrap();
        fs::write(root.join("dist/assets/app.js"), "js").unwrap();
        temp
    }

    fn test_config() -> PackageConfig {
        PackageConfig::default().with_project_name("Ext")
    }

    #[test]
    fn test_pipeline_produces_four_artifacts() {
        let temp = make_project("1.4.0");
        let config = test_config();

        let report = package_release(temp.path(), &config, &mut NoopProgress).unwrap();

        assert_eq!(report.version, "1.4.0");
        assert_eq!(report.artifacts.len(), 4);
        for artifact in &report.artifacts {
            assert!(artifact.exists(), "missing artifact: {}", artifact.display());
        }
        let names: Vec<_> = report
            .artifacts
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(
            names,
            vec![
                "Ext_v1.4.0_Source.zip",
                "Ext_v1.4.0_Install.zip",
                "release_note_zh.txt",
                "release_note_en.txt",
            ]
        );
    }

    #[test]
    fn test_pipeline_version_consistency() {
        // The manifest version flows into every artifact of the run.
        let temp = make_project("9.9.9");
        let config = test_config();

        let report = package_release(temp.path(), &config, &mut NoopProgress).unwrap();

        assert!(report.artifacts[0].to_string_lossy().contains("v9.9.9"));
        assert!(report.artifacts[1].to_string_lossy().contains("v9.9.9"));
        let en = fs::read_to_string(&report.artifacts[3]).unwrap();
        assert!(en.contains("v9.9.9"));
        assert!(en.contains("Ext_v9.9.9_Install.zip"));
    }

    #[test]
    fn test_pipeline_recreates_release_dir() {
        let temp = make_project("1.0.0");
        let config = test_config();
        let release_dir = temp.path().join("release");

        fs::create_dir(&release_dir).unwrap();
        fs::write(release_dir.join("stale.zip"), "old").unwrap();

        package_release(temp.path(), &config, &mut NoopProgress).unwrap();

        assert!(!release_dir.join("stale.zip").exists());
        assert!(release_dir.join("Ext_v1.0.0_Source.zip").exists());
    }

    #[test]
    fn test_pipeline_missing_dist_aborts_after_source_bundle() {
        let temp = make_project("1.0.0");
        fs::remove_dir_all(temp.path().join("dist")).unwrap();
        let config = test_config();

        let err = package_release(temp.path(), &config, &mut NoopProgress).unwrap_err();
        assert!(matches!(err, PackageError::DistNotFound { .. }));

        // The source bundle was already written; later stages never ran.
        let release_dir = temp.path().join("release");
        assert!(release_dir.join("Ext_v1.0.0_Source.zip").exists());
        assert!(!release_dir.join("Ext_v1.0.0_Install.zip").exists());
        assert!(!release_dir.join("release_note_zh.txt").exists());
        assert!(!release_dir.join("release_note_en.txt").exists());
    }

    #[test]
    fn test_pipeline_missing_manifest() {
        let temp = TempDir::new().unwrap();
        let config = test_config();

        let err = package_release(temp.path(), &config, &mut NoopProgress).unwrap_err();
        assert!(matches!(err, PackageError::ManifestNotFound { .. }));
        // Nothing was produced.
        assert!(!temp.path().join("release").exists());
    }

    #[test]
    fn test_pipeline_default_version_when_field_absent() {
        let temp = make_project("ignored");
        fs::write(temp.path().join("manifest.json"), r#"{"name": "ext"}"#).unwrap();
        let config = test_config();

        let report = package_release(temp.path(), &config, &mut NoopProgress).unwrap();
        assert_eq!(report.version, "1.0.0");
    }
}
