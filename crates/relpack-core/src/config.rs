//! Configuration for a packaging run.

use crate::PackageError;
use crate::Result;

/// Default project name used in bundle file names.
pub const DEFAULT_PROJECT_NAME: &str = "HBSY_VideoGrabber_Pro";

/// Default human-readable product name used in changelog headings.
pub const DEFAULT_DISPLAY_NAME: &str = "HBSY VideoGrabber Pro";

/// Default build output folder inside the project directory.
pub const DEFAULT_DIST_FOLDER: &str = "dist";

/// Default release output folder inside the project directory.
pub const DEFAULT_RELEASE_FOLDER: &str = "release";

/// Default exclusion list applied to the source bundle.
pub fn default_excludes() -> Vec<String> {
    [
        ".git",
        ".gitignore",
        ".vscode",
        ".idea",
        "node_modules",
        "dist",
        "release",
        ".DS_Store",
        "Thumbs.db",
        "*.log",
        "*.zip",
        "__pycache__",
        ".env",
        ".env.local",
    ]
    .iter()
    .map(ToString::to_string)
    .collect()
}

/// Configuration for a packaging run.
///
/// Controls artifact naming, the build output and release folder locations,
/// source-bundle exclusion patterns, and zip compression.
///
/// # Examples
///
/// ```
/// use relpack_core::PackageConfig;
///
/// let config = PackageConfig::default()
///     .with_project_name("My_Extension")
///     .with_compression_level(9);
/// assert_eq!(config.source_bundle_name("2.1.0"), "My_Extension_v2.1.0_Source.zip");
/// ```
#[derive(Debug, Clone)]
pub struct PackageConfig {
    /// Project name embedded in bundle file names.
    pub project_name: String,

    /// Human-readable product name used in changelog templates.
    pub display_name: String,

    /// Build output folder, relative to the project directory.
    pub dist_folder: String,

    /// Release output folder, relative to the project directory.
    ///
    /// Deleted and recreated on every run.
    pub release_folder: String,

    /// Patterns excluded from the source bundle.
    ///
    /// A pattern starting with `*` matches by file-name suffix; any other
    /// pattern matches an exact file name or a substring of the full path.
    pub exclude_patterns: Vec<String>,

    /// Zip compression level (1-9).
    ///
    /// `None` uses the zip crate default.
    ///
    /// Default: `Some(6)`.
    pub compression_level: Option<u8>,
}

impl Default for PackageConfig {
    fn default() -> Self {
        Self {
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            dist_folder: DEFAULT_DIST_FOLDER.to_string(),
            release_folder: DEFAULT_RELEASE_FOLDER.to_string(),
            exclude_patterns: default_excludes(),
            compression_level: Some(6),
        }
    }
}

impl PackageConfig {
    /// Creates a `PackageConfig` with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the project name used in bundle file names.
    #[must_use]
    pub fn with_project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = name.into();
        self
    }

    /// Sets the display name used in changelog templates.
    #[must_use]
    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = name.into();
        self
    }

    /// Sets the build output folder.
    #[must_use]
    pub fn with_dist_folder(mut self, folder: impl Into<String>) -> Self {
        self.dist_folder = folder.into();
        self
    }

    /// Sets the release output folder.
    #[must_use]
    pub fn with_release_folder(mut self, folder: impl Into<String>) -> Self {
        self.release_folder = folder.into();
        self
    }

    /// Replaces the source-bundle exclusion patterns.
    #[must_use]
    pub fn with_exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.exclude_patterns = patterns;
        self
    }

    /// Appends extra exclusion patterns to the current list.
    #[must_use]
    pub fn with_extra_excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Sets the zip compression level.
    ///
    /// # Panics
    ///
    /// Panics if the level is not in the range 1-9.
    /// Use `validate()` for non-panicking validation.
    #[must_use]
    pub fn with_compression_level(mut self, level: u8) -> Self {
        assert!((1..=9).contains(&level), "compression level must be 1-9");
        self.compression_level = Some(level);
        self
    }

    /// File name of the source bundle for the given version.
    #[must_use]
    pub fn source_bundle_name(&self, version: &str) -> String {
        format!("{}_v{version}_Source.zip", self.project_name)
    }

    /// File name of the install bundle for the given version.
    #[must_use]
    pub fn install_bundle_name(&self, version: &str) -> String {
        format!("{}_v{version}_Install.zip", self.project_name)
    }

    /// Root folder prefix used inside the source bundle.
    #[must_use]
    pub fn source_bundle_root(&self, version: &str) -> String {
        format!("{}_v{version}_Source", self.project_name)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the compression level is set but not in 1-9.
    pub fn validate(&self) -> Result<()> {
        if let Some(level) = self.compression_level
            && !(1..=9).contains(&level)
        {
            return Err(PackageError::InvalidCompressionLevel { level });
        }
        Ok(())
    }
}
