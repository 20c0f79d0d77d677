/// Java method extractor
///
/// Walks a tree-sitter-java syntax tree depth-first and emits one element per
/// method declaration, at any nesting depth (inner, local and anonymous
/// classes included). Type declarations only contribute the enclosing type
/// name; they are not extracted themselves.
///
/// - helpers: type text normalization, parameter types, declaration names
/// - methods: method element construction and signatures
/// - packages: package declaration lookup
mod helpers;
mod methods;
mod packages;

use crate::error::ExtractError;
use crate::extractors::base::{BaseExtractor, Element};
use crate::language::{JAVA_METHOD_DECLARATION_KINDS, JAVA_TYPE_DECLARATION_KINDS};
use tree_sitter::{Node, Tree};

/// Closed set of node roles the traversal cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Declaration {
    /// class / interface / enum / record / annotation type
    Type,
    Method,
    Other,
}

impl Declaration {
    fn classify(kind: &str) -> Self {
        if JAVA_TYPE_DECLARATION_KINDS.contains(&kind) {
            Declaration::Type
        } else if JAVA_METHOD_DECLARATION_KINDS.contains(&kind) {
            Declaration::Method
        } else {
            Declaration::Other
        }
    }
}

/// Java extractor for one source file
pub struct JavaExtractor {
    base: BaseExtractor,
    package: Option<String>,
    max_depth: usize,
}

impl JavaExtractor {
    pub fn new(file_path: impl Into<String>, content: String, max_depth: usize) -> Self {
        Self {
            base: BaseExtractor::new(file_path, content),
            package: None,
            max_depth,
        }
    }

    /// Extract all method elements from a parsed file
    ///
    /// A tree with any syntax error yields [`ExtractError::Syntax`] and no
    /// elements at all.
    pub fn extract_elements(&mut self, tree: &Tree) -> Result<Vec<Element>, ExtractError> {
        let root = tree.root_node();

        let problems = self.base.collect_syntax_problems(&root);
        if !problems.is_empty() {
            return Err(ExtractError::Syntax { problems });
        }

        self.package = packages::extract_package(self, root);

        let mut elements = Vec::new();
        self.walk_tree(root, &mut elements)?;
        Ok(elements)
    }

    /// Pre-order walk over the whole tree
    ///
    /// Uses a cursor and an explicit scope stack rather than recursion, so
    /// the nesting limit is a policy choice and not what keeps the stack from
    /// overflowing.
    fn walk_tree(&self, root: Node, elements: &mut Vec<Element>) -> Result<(), ExtractError> {
        let mut cursor = root.walk();
        let mut depth = 0usize;
        // (depth of the type declaration, name its members see)
        let mut scopes: Vec<(usize, Option<String>)> = Vec::new();

        loop {
            if depth > self.max_depth {
                return Err(ExtractError::NestingTooDeep {
                    limit: self.max_depth,
                });
            }

            let node = cursor.node();
            while scopes.last().is_some_and(|(d, _)| *d >= depth) {
                scopes.pop();
            }
            let enclosing_type = scopes.last().and_then(|(_, name)| name.as_deref());

            match Declaration::classify(node.kind()) {
                Declaration::Type => {
                    let scope = helpers::extract_type_name(&self.base, node)
                        .or_else(|| enclosing_type.map(str::to_string));
                    scopes.push((depth, scope));
                }
                Declaration::Method => {
                    if let Some(element) = methods::extract_method(self, node, enclosing_type) {
                        elements.push(element);
                    }
                }
                Declaration::Other => {}
            }

            if cursor.goto_first_child() {
                depth += 1;
                continue;
            }
            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return Ok(());
                }
                depth -= 1;
            }
        }
    }

    // ========================================================================
    // Accessors for sub-modules
    // ========================================================================

    pub(crate) fn base(&self) -> &BaseExtractor {
        &self.base
    }

    pub(crate) fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }
}
