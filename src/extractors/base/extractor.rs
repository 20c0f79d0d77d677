// BaseExtractor implementation
//
// Holds one file's content and relative path, and the text/comment utilities
// the tree-sitter extractors share.

use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;
use tree_sitter::Node;

use super::types::{snippet_lines, FileContext};

/// Per-line `*` decoration inside a `/** ... */` comment
static DOC_LINE_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*\* ?").expect("valid doc marker regex"));

/// Base implementation for tree-sitter extractors
pub struct BaseExtractor {
    pub file: FileContext,
    pub content: String,
}

/// A documentation comment attached to a declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocComment {
    /// 1-based line the comment starts on
    pub start_line: usize,
    /// Comment body with delimiters and line markers stripped; `None` if empty
    pub text: Option<String>,
}

impl BaseExtractor {
    pub fn new(file_path: impl Into<String>, content: String) -> Self {
        let file = FileContext::new(file_path);
        debug!("BaseExtractor for '{}'", file.file_path);
        Self { file, content }
    }

    /// Get text from a tree-sitter node
    pub fn get_node_text(&self, node: &Node) -> String {
        let start_byte = node.start_byte();
        let end_byte = node.end_byte();

        let content_bytes = self.content.as_bytes();
        if start_byte < content_bytes.len() && end_byte <= content_bytes.len() {
            String::from_utf8_lossy(&content_bytes[start_byte..end_byte]).to_string()
        } else {
            String::new()
        }
    }

    /// Find the `/** ... */` comment immediately preceding `node`
    ///
    /// Only the directly preceding sibling is considered. A line comment or a
    /// plain block comment in that position means the declaration has no
    /// documentation.
    pub fn find_doc_comment(&self, node: &Node) -> Option<DocComment> {
        let sibling = node.prev_sibling()?;
        if sibling.kind() != "block_comment" {
            return None;
        }

        let raw = self.get_node_text(&sibling);
        if !raw.starts_with("/**") || raw == "/**/" {
            return None;
        }

        Some(DocComment {
            start_line: sibling.start_position().row + 1,
            text: clean_doc_comment(&raw),
        })
    }

    /// Verbatim lines `start_line..=end_line` of this file
    pub fn snippet(&self, start_line: usize, end_line: usize) -> String {
        snippet_lines(&self.content, start_line, end_line)
    }
}

/// Strip `/**`, `*/` and per-line `*` markers, then trim
pub fn clean_doc_comment(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let body = trimmed.strip_prefix("/**").unwrap_or(trimmed);
    let body = body.strip_suffix("*/").unwrap_or(body);
    let cleaned = DOC_LINE_MARKER_RE.replace_all(body, "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_single_line_doc() {
        assert_eq!(
            clean_doc_comment("/** Returns the answer. */"),
            Some("Returns the answer.".to_string())
        );
    }

    #[test]
    fn test_clean_multi_line_doc() {
        let raw = "/**\n     * Adds two numbers.\n     *\n     * @param a first\n     */";
        assert_eq!(
            clean_doc_comment(raw),
            Some("Adds two numbers.\n\n@param a first".to_string())
        );
    }

    #[test]
    fn test_clean_empty_doc() {
        assert_eq!(clean_doc_comment("/** */"), None);
        assert_eq!(clean_doc_comment("/**\n *\n */"), None);
    }
}
