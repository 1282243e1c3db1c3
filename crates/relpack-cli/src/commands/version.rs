//! Version command implementation.
//!
//! Prints the version that a packaging run would embed in artifact names,
//! without producing anything.

use crate::cli::VersionArgs;
use crate::error::add_package_context;
use crate::output::OutputFormatter;
use anyhow::Context;
use anyhow::Result;
use relpack_core::manifest;
use std::env;

pub fn execute(args: &VersionArgs, formatter: &dyn OutputFormatter) -> Result<()> {
    let project_dir = match &args.project_dir {
        Some(dir) => dir.clone(),
        None => env::current_dir().context("failed to get current directory")?,
    };

    let version = add_package_context(
        manifest::read_project_version(&project_dir),
        &project_dir,
    )?;

    formatter.format_version(&version)?;

    Ok(())
}
