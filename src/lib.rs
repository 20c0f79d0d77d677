// code-harvester - source element extraction for search indexing
//
// Walks a source tree and turns every Java method and every top-level proto
// `message`/`enum` block into a uniform element record. Java goes through the
// tree-sitter grammar; proto files go through a line scanner.

pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod extractors;
pub mod language;
pub mod output;
pub mod utils;
pub mod walker;

pub use config::HarvestConfig;
pub use diagnostics::{Diagnostic, Diagnostics};
pub use error::{ExtractError, WalkError};
pub use extractors::{Element, ElementContext, ElementKind, ExtractorManager};
pub use walker::{harvest, harvest_with_progress, HarvestReport};
