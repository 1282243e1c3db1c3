//! CLI argument parsing using clap.

use clap::Parser;
use clap::Subcommand;
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "relpack")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Output results in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Package a release: source bundle, install bundle, and changelogs
    Package(PackageArgs),
    /// Print the version from the project manifest
    Version(VersionArgs),
    /// Generate shell completions
    Completion(CompletionArgs),
}

#[derive(clap::Args)]
pub struct PackageArgs {
    /// Extension project directory (default: current directory)
    #[arg(value_name = "PROJECT_DIR")]
    pub project_dir: Option<PathBuf>,

    /// Project name used in bundle file names
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Build output folder inside the project
    #[arg(long, value_name = "DIR", default_value = "dist")]
    pub dist: String,

    /// Release output folder inside the project (recreated on each run)
    #[arg(long, value_name = "DIR", default_value = "release")]
    pub release_dir: String,

    /// Extra exclude pattern for the source bundle (can be repeated)
    #[arg(long = "exclude", short = 'x', value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Compression level (1-9)
    #[arg(short = 'l', long, value_parser = clap::value_parser!(u8).range(1..=9))]
    pub compression_level: Option<u8>,
}

#[derive(clap::Args)]
pub struct VersionArgs {
    /// Extension project directory (default: current directory)
    #[arg(value_name = "PROJECT_DIR")]
    pub project_dir: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct CompletionArgs {
    /// Target shell
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}
