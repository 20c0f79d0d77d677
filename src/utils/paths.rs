// Path conversion utilities
//
// Element file paths are stored relative to the traversal root with `/`
// separators on every platform.

use anyhow::{Context, Result};
use std::path::{Path, MAIN_SEPARATOR};

/// Convert a path under `root` to a relative Unix-style path
///
/// # Examples
/// ```
/// use code_harvester::utils::paths::to_relative_unix_style;
/// use std::path::Path;
///
/// let rel = to_relative_unix_style(
///     Path::new("/home/dev/project/src/Main.java"),
///     Path::new("/home/dev/project"),
/// )
/// .unwrap();
/// assert_eq!(rel, "src/Main.java");
/// ```
pub fn to_relative_unix_style(path: &Path, root: &Path) -> Result<String> {
    let relative = path.strip_prefix(root).with_context(|| {
        format!(
            "File path '{}' is not within root '{}'",
            path.display(),
            root.display()
        )
    })?;

    let path_str = relative.to_str().context("Path contains invalid UTF-8")?;

    // On Unix, MAIN_SEPARATOR is already '/', so this is a no-op
    let unix_style = if MAIN_SEPARATOR == '\\' {
        path_str.replace('\\', "/")
    } else {
        path_str.to_string()
    };

    Ok(unix_style)
}
