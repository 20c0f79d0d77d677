//! Language Support - source kinds and tree-sitter configuration
//!
//! Two kinds of files participate in a harvest: Java sources (parsed with
//! tree-sitter) and proto schemas (scanned line by line, no grammar). All
//! extension and node-kind tables live here.

use anyhow::Result;
use std::path::Path;

/// Kind of source file, selected by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Java,
    Proto,
}

impl SourceKind {
    /// Human-readable name used in diagnostics ("Java file", "proto file")
    pub fn label(&self) -> &'static str {
        match self {
            SourceKind::Java => "Java",
            SourceKind::Proto => "proto",
        }
    }
}

/// Detect source kind from a bare extension (no leading dot)
pub fn detect_source_kind_from_extension(extension: &str) -> Option<SourceKind> {
    match extension {
        "java" => Some(SourceKind::Java),
        "proto" => Some(SourceKind::Proto),
        _ => None,
    }
}

/// Detect source kind from a file path
pub fn detect_source_kind(path: &Path) -> Option<SourceKind> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(detect_source_kind_from_extension)
}

/// Get the tree-sitter grammar for a source kind
///
/// Proto files have no grammar; they go through the line scanner instead.
pub fn get_tree_sitter_language(kind: SourceKind) -> Result<tree_sitter::Language> {
    match kind {
        SourceKind::Java => Ok(tree_sitter_java::LANGUAGE.into()),
        SourceKind::Proto => Err(anyhow::anyhow!(
            "No tree-sitter grammar is used for proto files; they are line-scanned"
        )),
    }
}

/// Java node kinds that declare a named type and can enclose methods
pub const JAVA_TYPE_DECLARATION_KINDS: &[&str] = &[
    "class_declaration",
    "interface_declaration",
    "enum_declaration",
    "record_declaration",
    "annotation_type_declaration",
];

/// Java node kinds extracted as methods
pub const JAVA_METHOD_DECLARATION_KINDS: &[&str] = &["method_declaration"];
