// Base extractor types and shared tree-sitter utilities
//
// - types.rs: Element model shared with the proto scanner
// - extractor.rs: BaseExtractor (file content, node text, doc comments)
// - tree_methods.rs: tree navigation and syntax-problem collection
// - creation_methods.rs: Element construction from nodes

pub mod creation_methods;
pub mod extractor;
pub mod tree_methods;
pub mod types;

pub use creation_methods::ElementOptions;
pub use extractor::{clean_doc_comment, BaseExtractor, DocComment};
pub use types::{snippet_lines, Element, ElementContext, ElementKind, ExtractionResults, FileContext};
