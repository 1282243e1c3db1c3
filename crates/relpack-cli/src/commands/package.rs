//! Package command implementation.

use crate::cli::PackageArgs;
use crate::error::add_package_context;
use crate::output::OutputFormatter;
use crate::progress::CliProgress;
use anyhow::Context;
use anyhow::Result;
use relpack_core::NoopProgress;
use relpack_core::PackageConfig;
use relpack_core::package_release;
use std::env;

pub fn execute(
    args: &PackageArgs,
    formatter: &dyn OutputFormatter,
    quiet: bool,
    json: bool,
) -> Result<()> {
    let project_dir = match &args.project_dir {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("failed to get current directory")?,
    };

    let mut config = PackageConfig::default()
        .with_dist_folder(&args.dist)
        .with_release_folder(&args.release_dir)
        .with_extra_excludes(args.exclude.iter().cloned());

    if let Some(name) = &args.name {
        config = config.with_project_name(name);
    }
    if let Some(level) = args.compression_level {
        config = config.with_compression_level(level);
    }

    // Progress bar only on a TTY, and never when machine-readable or quiet.
    let report = if CliProgress::should_show() && !quiet && !json {
        let mut progress = CliProgress::new("Packaging");
        add_package_context(
            package_release(&project_dir, &config, &mut progress),
            &project_dir,
        )?
    } else {
        let mut noop = NoopProgress;
        add_package_context(
            package_release(&project_dir, &config, &mut noop),
            &project_dir,
        )?
    };

    formatter.format_run_result(&report)?;

    Ok(())
}
