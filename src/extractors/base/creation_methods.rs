// Element creation for tree-sitter extractors

use tree_sitter::Node;

use super::extractor::BaseExtractor;
use super::types::{Element, ElementContext, ElementKind};

/// Optional parts of an element the caller already resolved
#[derive(Debug, Clone, Default)]
pub struct ElementOptions {
    pub signature: Option<String>,
    pub module: Option<String>,
    pub enclosing_type_name: Option<String>,
}

impl BaseExtractor {
    /// Create an element spanning `node`
    ///
    /// The declaration line is the node's first line. When a doc comment is
    /// attached the element (and its snippet) starts at the comment instead.
    pub fn create_element(
        &self,
        node: &Node,
        name: String,
        kind: ElementKind,
        options: ElementOptions,
    ) -> Element {
        let declaration_line = node.start_position().row + 1;
        let end_line = node.end_position().row + 1;

        let doc = self.find_doc_comment(node);
        let start_line = doc
            .as_ref()
            .map(|d| d.start_line.min(declaration_line))
            .unwrap_or(declaration_line);
        let documentation = doc.and_then(|d| d.text);

        Element {
            name,
            signature: options.signature,
            kind,
            documentation,
            declaration_line,
            start_line,
            end_line,
            context: ElementContext {
                module: options.module,
                file_path: self.file.file_path.clone(),
                file_name: self.file.file_name.clone(),
                enclosing_type_name: options.enclosing_type_name,
                snippet: self.snippet(start_line, end_line),
            },
        }
    }
}
