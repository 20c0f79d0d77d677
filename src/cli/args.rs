//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::Parser;

use crate::config::HarvestConfig;

/// Extract Java methods and proto message/enum blocks into JSON
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Root directory to scan
    pub root: PathBuf,

    /// Where to write the JSON element array
    #[arg(short, long, default_value = "output.json")]
    pub output: PathBuf,

    /// Where to write one line per recoverable failure
    #[arg(long, default_value = "errors.log")]
    pub error_log: PathBuf,

    /// Excluded path segment; replaces the built-in list when given (repeatable)
    #[arg(long = "exclude", value_name = "SEGMENT")]
    pub excludes: Vec<String>,

    /// Maximum declaration nesting depth during Java traversal
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Print every processed file
    #[arg(short, long)]
    pub verbose: bool,
}

impl Arguments {
    /// Resolve the run configuration from the defaults and any overrides
    pub fn harvest_config(&self) -> HarvestConfig {
        let mut config = HarvestConfig::default();
        if !self.excludes.is_empty() {
            config = config.with_excluded_segments(&self.excludes);
        }
        if let Some(depth) = self.max_depth {
            config = config.with_max_nesting_depth(depth);
        }
        config
    }
}
