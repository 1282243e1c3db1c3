//! Human-readable output formatter with colors and styling.

use super::formatter::OutputFormatter;
use anyhow::Result;
use console::Term;
use console::style;
use relpack_core::RunReport;
use std::fs;
use std::path::Path;

pub struct HumanFormatter {
    verbose: bool,
    quiet: bool,
    use_colors: bool,
    term: Term,
}

impl HumanFormatter {
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            verbose,
            quiet,
            use_colors: console::colors_enabled(),
            term: Term::stdout(),
        }
    }

    fn format_size(bytes: u64) -> String {
        const KB: u64 = 1024;
        const MB: u64 = KB * 1024;
        const GB: u64 = MB * 1024;

        if bytes >= GB {
            format!("{:.2} GB", bytes as f64 / GB as f64)
        } else if bytes >= MB {
            format!("{:.2} MB", bytes as f64 / MB as f64)
        } else if bytes >= KB {
            format!("{:.2} KB", bytes as f64 / KB as f64)
        } else {
            format!("{bytes} B")
        }
    }

    fn write_artifact_line(&self, path: &Path) {
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().to_string());

        // Stat the produced file; a vanished artifact is listed without a size.
        let line = match fs::metadata(path) {
            Ok(meta) => format!("  • {name} ({})", Self::format_size(meta.len())),
            Err(_) => format!("  • {name}"),
        };
        let _ = self.term.write_line(&line);
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_run_result(&self, report: &RunReport) -> Result<()> {
        if self.quiet {
            return Ok(());
        }

        if self.use_colors {
            let _ = self.term.write_line(&format!(
                "{} Release v{} packaged into {}",
                style("✓").green().bold(),
                report.version,
                report.release_dir.display()
            ));
        } else {
            let _ = self.term.write_line(&format!(
                "Release v{} packaged into {}",
                report.version,
                report.release_dir.display()
            ));
        }

        let _ = self.term.write_line("");
        let _ = self.term.write_line("Artifacts:");
        for artifact in &report.artifacts {
            self.write_artifact_line(artifact);
        }

        if self.verbose {
            let _ = self.term.write_line("");
            let _ = self.term.write_line(&format!(
                "  Source bundle:  {} files, {} ({:?})",
                report.source.files_added,
                Self::format_size(report.source.bytes_written),
                report.source.duration
            ));
            let _ = self.term.write_line(&format!(
                "  Install bundle: {} files, {} ({:?})",
                report.install.files_added,
                Self::format_size(report.install.bytes_written),
                report.install.duration
            ));
        }

        if report.has_warnings() {
            let _ = self.term.write_line("");
            if self.use_colors {
                let _ = self
                    .term
                    .write_line(&format!("{}", style("Warnings:").yellow().bold()));
            } else {
                let _ = self.term.write_line("Warnings:");
            }
            for warning in report
                .source
                .warnings
                .iter()
                .chain(report.install.warnings.iter())
            {
                let _ = self.term.write_line(&format!("  - {warning}"));
            }
        }

        let _ = self.term.write_line("");
        let _ = self.term.write_line("Next steps:");
        let _ = self
            .term
            .write_line("  1. Fill in release_note_zh.txt and release_note_en.txt");
        let _ = self
            .term
            .write_line("  2. Upload the Install bundle to the Chrome Web Store");
        let _ = self
            .term
            .write_line("  3. Upload to other distribution channels");

        Ok(())
    }

    fn format_version(&self, version: &str) -> Result<()> {
        // Printed bare so it can be captured in scripts, quiet or not.
        let _ = self.term.write_line(version);
        Ok(())
    }

    fn format_error(&self, error: &anyhow::Error) {
        // Always show errors, even in quiet mode
        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {error:?}", style("ERROR:").red().bold()));
        } else {
            let _ = self.term.write_line(&format!("ERROR: {error:?}"));
        }
    }

    fn format_warning(&self, message: &str) {
        if self.quiet {
            return;
        }

        if self.use_colors {
            let _ = self
                .term
                .write_line(&format!("{} {message}", style("⚠").yellow().bold()));
        } else {
            let _ = self.term.write_line(&format!("WARNING: {message}"));
        }
    }
}
