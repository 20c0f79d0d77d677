//! Traversal driver
//!
//! Walks the tree under a root directory, prunes excluded paths, and hands
//! every `.java` / `.proto` file to the [`ExtractorManager`]. Elements and
//! diagnostics accumulate in a [`HarvestReport`] in visitation order.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::config::HarvestConfig;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::error::{ExtractError, WalkError};
use crate::extractors::base::Element;
use crate::extractors::ExtractorManager;
use crate::language::detect_source_kind;
use crate::utils::ignore::is_excluded_path;
use crate::utils::paths::to_relative_unix_style;

/// Everything one run produced
#[derive(Debug, Default)]
pub struct HarvestReport {
    pub elements: Vec<Element>,
    pub diagnostics: Diagnostics,
    /// Source files handed to an extractor (including ones that failed)
    pub files_visited: usize,
    /// Files and directories skipped because of an excluded segment
    pub paths_excluded: usize,
}

/// Harvest every element under `root`
pub fn harvest(root: &Path, config: &HarvestConfig) -> Result<HarvestReport, WalkError> {
    harvest_with_progress(root, config, |_| {})
}

/// Harvest every element under `root`, calling `on_file` with the relative
/// path of each source file before it is read
pub fn harvest_with_progress<F>(
    root: &Path,
    config: &HarvestConfig,
    mut on_file: F,
) -> Result<HarvestReport, WalkError>
where
    F: FnMut(&str),
{
    let metadata = fs::metadata(root).map_err(|source| WalkError::RootUnavailable {
        root: root.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(WalkError::NotADirectory(root.to_path_buf()));
    }

    info!("Harvesting source elements under {}", root.display());

    let manager = ExtractorManager::new(config.max_nesting_depth());
    let mut report = HarvestReport::default();
    let mut paths_excluded = 0;

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            let excluded = is_excluded_entry(entry, root, config);
            if excluded {
                debug!("Skipping excluded path: {}", entry.path().display());
                paths_excluded += 1;
            }
            !excluded
        });

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                let message = e.to_string();
                let source = e
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other(message));
                return Err(WalkError::RootUnavailable {
                    root: root.to_path_buf(),
                    source,
                });
            }
            Err(e) => {
                let file_path = e
                    .path()
                    .map(|p| display_path(p, root))
                    .unwrap_or_else(|| root.display().to_string());
                report.diagnostics.push(Diagnostic::new(
                    file_path,
                    format!("Failed to read directory entry: {}", e),
                ));
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        let Some(kind) = detect_source_kind(entry.path()) else {
            continue;
        };

        let relative = display_path(entry.path(), root);
        on_file(&relative);
        debug!("Processing {} file: {}", kind.label(), relative);
        report.files_visited += 1;

        let content = match fs::read_to_string(entry.path()) {
            Ok(content) => content,
            Err(source) => {
                let error = ExtractError::Read {
                    kind: kind.label(),
                    source,
                };
                report.diagnostics.extend(error.into_diagnostics(&relative));
                continue;
            }
        };

        let results = manager.extract_file(kind, &relative, &content);
        report.elements.extend(results.elements);
        report.diagnostics.extend(results.diagnostics);
    }

    report.paths_excluded = paths_excluded;

    info!(
        "Harvested {} elements from {} files ({} diagnostics, {} excluded paths)",
        report.elements.len(),
        report.files_visited,
        report.diagnostics.len(),
        report.paths_excluded
    );
    Ok(report)
}

fn is_excluded_entry(entry: &DirEntry, root: &Path, config: &HarvestConfig) -> bool {
    if entry.depth() == 0 {
        return false;
    }
    is_excluded_path(
        &display_path(entry.path(), root),
        entry.file_type().is_dir(),
        config.excluded_segments(),
    )
}

/// Relative `/`-separated path; components that are not valid UTF-8 are
/// replaced lossily so segment matching still sees every separator
fn display_path(path: &Path, root: &Path) -> String {
    to_relative_unix_style(path, root).unwrap_or_else(|_| {
        let relative = path.strip_prefix(root).unwrap_or(path);
        relative
            .to_string_lossy()
            .replace(std::path::MAIN_SEPARATOR, "/")
    })
}
