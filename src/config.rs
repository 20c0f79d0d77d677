//! Run configuration
//!
//! Resolved once (usually by the CLI) and passed by reference to the
//! traversal driver. Nothing in the library reads global configuration.

/// Path segments that exclude a file when present in its relative path.
///
/// Build output, packaging output, generated code, VCS and editor metadata.
pub const DEFAULT_EXCLUDED_SEGMENTS: &[&str] = &[
    "build",
    "target",
    "out",
    "gradle/wrapper",
    "generated-sources",
    "generated",
    ".git",
    ".idea",
    ".vscode",
];

/// Default cap on declaration nesting during Java tree traversal
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 1024;

/// Immutable configuration for one harvesting run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestConfig {
    excluded_segments: Vec<String>,
    max_nesting_depth: usize,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            excluded_segments: DEFAULT_EXCLUDED_SEGMENTS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

impl HarvestConfig {
    /// Replace the excluded segment list. Segments use `/` separators and are
    /// trimmed of surrounding slashes.
    pub fn with_excluded_segments<I, S>(mut self, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.excluded_segments = segments
            .into_iter()
            .map(|s| s.as_ref().trim_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .collect();
        self
    }

    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }

    pub fn excluded_segments(&self) -> &[String] {
        &self.excluded_segments
    }

    pub fn max_nesting_depth(&self) -> usize {
        self.max_nesting_depth
    }
}
