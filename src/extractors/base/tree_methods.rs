// Tree navigation methods for BaseExtractor

use super::extractor::BaseExtractor;
use crate::error::SyntaxProblem;
use tree_sitter::Node;

/// Longest excerpt of offending source quoted in a syntax problem
const PROBLEM_EXCERPT_CHARS: usize = 40;

impl BaseExtractor {
    /// Get field text safely
    pub fn get_field_text(&self, node: &Node, field_name: &str) -> Option<String> {
        node.child_by_field_name(field_name)
            .map(|field_node| self.get_node_text(&field_node))
    }

    /// Collect every `ERROR` and missing node under `root`, in source order
    ///
    /// Uses a cursor instead of recursion so deeply nested broken input cannot
    /// exhaust the stack. Children of an `ERROR` node are not reported again.
    pub fn collect_syntax_problems(&self, root: &Node) -> Vec<SyntaxProblem> {
        let mut problems = Vec::new();
        if !root.has_error() {
            return problems;
        }

        let mut cursor = root.walk();
        loop {
            let node = cursor.node();
            let mut descend = node.has_error();

            if node.is_error() {
                problems.push(SyntaxProblem {
                    line: Some(node.start_position().row + 1),
                    message: format!("syntax error near `{}`", self.problem_excerpt(&node)),
                });
                descend = false;
            } else if node.is_missing() {
                problems.push(SyntaxProblem {
                    line: Some(node.start_position().row + 1),
                    message: format!("missing `{}`", node.kind()),
                });
            }

            if descend && cursor.goto_first_child() {
                continue;
            }
            loop {
                if cursor.goto_next_sibling() {
                    break;
                }
                if !cursor.goto_parent() {
                    return problems;
                }
            }
        }
    }

    fn problem_excerpt(&self, node: &Node) -> String {
        let text = self.get_node_text(node);
        let first_line = text.lines().next().unwrap_or("").trim();
        if first_line.chars().count() > PROBLEM_EXCERPT_CHARS {
            first_line
                .chars()
                .take(PROBLEM_EXCERPT_CHARS)
                .collect::<String>()
                + "..."
        } else {
            first_line.to_string()
        }
    }
}
