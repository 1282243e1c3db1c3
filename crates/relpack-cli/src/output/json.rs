//! JSON output formatter for machine consumption.

use super::formatter::JsonOutput;
use super::formatter::OutputFormatter;
use anyhow::Result;
use relpack_core::BundleReport;
use relpack_core::RunReport;
use serde::Serialize;
use std::fs;
use std::path::Path;

pub struct JsonFormatter;

#[derive(Debug, Serialize)]
struct ArtifactJson {
    path: String,
    size_bytes: Option<u64>,
}

#[derive(Debug, Serialize)]
struct BundleJson {
    files_added: usize,
    bytes_written: u64,
    duration_ms: u128,
    warnings: Vec<String>,
}

#[derive(Debug, Serialize)]
struct RunJson {
    version: String,
    release_dir: String,
    artifacts: Vec<ArtifactJson>,
    source: BundleJson,
    install: BundleJson,
}

fn artifact_json(path: &Path) -> ArtifactJson {
    ArtifactJson {
        path: path.display().to_string(),
        size_bytes: fs::metadata(path).map(|m| m.len()).ok(),
    }
}

fn bundle_json(report: &BundleReport) -> BundleJson {
    BundleJson {
        files_added: report.files_added,
        bytes_written: report.bytes_written,
        duration_ms: report.duration.as_millis(),
        warnings: report.warnings.clone(),
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_run_result(&self, report: &RunReport) -> Result<()> {
        let data = RunJson {
            version: report.version.clone(),
            release_dir: report.release_dir.display().to_string(),
            artifacts: report.artifacts.iter().map(|p| artifact_json(p)).collect(),
            source: bundle_json(&report.source),
            install: bundle_json(&report.install),
        };

        let output = JsonOutput::success("package", data);
        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }

    fn format_version(&self, version: &str) -> Result<()> {
        #[derive(Serialize)]
        struct VersionJson {
            version: String,
        }

        let output = JsonOutput::success(
            "version",
            VersionJson {
                version: version.to_string(),
            },
        );
        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }

    fn format_error(&self, error: &anyhow::Error) {
        let output = JsonOutput::<()>::error("relpack", format!("{error:?}"));
        if let Ok(text) = serde_json::to_string_pretty(&output) {
            eprintln!("{text}");
        }
    }

    fn format_warning(&self, message: &str) {
        eprintln!("{{\"warning\": {}}}", serde_json::json!(message));
    }
}
