//! Release packaging library for browser extension distributions.
//!
//! `relpack-core` turns an extension project directory into a set of release
//! artifacts: a filtered source-code zip, an install zip built from the
//! pre-built `dist/` output, and bilingual changelog templates. The version
//! embedded in all artifact names comes from the project's `manifest.json`.
//!
//! # Examples
//!
//! ```no_run
//! use relpack_core::NoopProgress;
//! use relpack_core::PackageConfig;
//! use relpack_core::package_release;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PackageConfig::default();
//! let report = package_release(Path::new("."), &config, &mut NoopProgress)?;
//! println!("Packaged v{} into {}", report.version, report.release_dir.display());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod bundle;
pub mod config;
pub mod error;
pub mod filters;
pub mod manifest;
pub mod notes;
pub mod pipeline;
pub mod report;
pub mod walker;

// Re-export main API types
pub use config::PackageConfig;
pub use error::PackageError;
pub use error::Result;
pub use pipeline::package_release;
pub use report::BundleReport;
pub use report::NoopProgress;
pub use report::ProgressCallback;
pub use report::RunReport;
