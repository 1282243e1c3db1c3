//! Path exclusion matching for the source bundle.

use std::path::Path;

/// Checks whether a path matches any exclusion pattern.
///
/// Matching policy:
/// - A pattern starting with `*` (e.g. `*.log`) matches by file-name suffix.
/// - Any other pattern matches the exact file name OR a substring of the
///   full path string. The substring rule is deliberately broad and kept
///   for compatibility: `release` also excludes `docs/release_plan.md`.
///
/// # Examples
///
/// ```
/// use relpack_core::filters::is_excluded;
/// use std::path::Path;
///
/// let patterns = vec!["node_modules".to_string(), "*.log".to_string()];
/// assert!(is_excluded(Path::new("node_modules/pkg/index.js"), &patterns));
/// assert!(is_excluded(Path::new("build/debug.log"), &patterns));
/// assert!(!is_excluded(Path::new("src/main.ts"), &patterns));
/// ```
#[must_use]
pub fn is_excluded(path: &Path, patterns: &[String]) -> bool {
    let path_str = path.to_string_lossy();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();

    for pattern in patterns {
        if let Some(suffix) = pattern.strip_prefix('*') {
            if name.ends_with(suffix) {
                return true;
            }
        } else if name.as_ref() == pattern.as_str() || path_str.contains(pattern.as_str()) {
            return true;
        }
    }

    false
}
