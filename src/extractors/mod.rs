//! Extractors Module
//!
//! - `base` - element model and the shared tree-sitter extractor helpers
//! - `java` - method extraction over the tree-sitter Java grammar
//! - `proto` - line scanner for top-level `message`/`enum` blocks
//! - `manager` - per-file dispatch that turns every failure into diagnostics

pub mod base;
pub mod java;
pub mod manager;
pub mod proto;

// Re-export the public API
pub use base::{Element, ElementContext, ElementKind, ExtractionResults, FileContext};
pub use manager::ExtractorManager;
