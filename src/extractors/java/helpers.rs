/// Helper functions for Java extraction
/// Handles type text normalization, parameter types and declaration names
use crate::extractors::base::BaseExtractor;
use tree_sitter::Node;

/// Node kinds inside a parameter that are not part of its type
const NON_TYPE_PARAMETER_KINDS: &[&str] = &[
    "modifiers",
    "annotation",
    "marker_annotation",
    "variable_declarator",
    "identifier",
    "dimensions",
];

/// Collapse whitespace runs so multi-line generic types print on one line
pub(super) fn normalize_type_text(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .replace("< ", "<")
        .replace(" >", ">")
}

/// Extract the type of every parameter in a `formal_parameters` node
///
/// Receiver parameters (`Foo this`) are not real parameters and are skipped.
/// Varargs print as `Type...`, C-style array parameters (`int a[]`) as `int[]`.
pub(super) fn extract_parameter_types(base: &BaseExtractor, params: Node) -> Vec<String> {
    let mut types = Vec::new();
    for param in params.named_children(&mut params.walk()) {
        match param.kind() {
            "formal_parameter" => {
                let Some(type_node) = param.child_by_field_name("type") else {
                    continue;
                };
                let mut type_text = normalize_type_text(&base.get_node_text(&type_node));
                if let Some(dims) = param.child_by_field_name("dimensions") {
                    type_text.push_str(&normalize_type_text(&base.get_node_text(&dims)));
                }
                types.push(type_text);
            }
            "spread_parameter" => {
                let type_node = param
                    .named_children(&mut param.walk())
                    .find(|c| !NON_TYPE_PARAMETER_KINDS.contains(&c.kind()));
                if let Some(type_node) = type_node {
                    types.push(format!(
                        "{}...",
                        normalize_type_text(&base.get_node_text(&type_node))
                    ));
                }
            }
            _ => {}
        }
    }
    types
}

/// Name of a type declaration (class, interface, enum, record, annotation)
pub(super) fn extract_type_name(base: &BaseExtractor, node: Node) -> Option<String> {
    base.get_field_text(&node, "name")
}
