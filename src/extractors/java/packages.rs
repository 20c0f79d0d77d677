/// Package declaration lookup
use crate::extractors::java::JavaExtractor;
use tree_sitter::Node;

/// Find the file's `package a.b.c;` declaration among the root's children
pub(super) fn extract_package(extractor: &JavaExtractor, root: Node) -> Option<String> {
    let package_node = root
        .children(&mut root.walk())
        .find(|c| c.kind() == "package_declaration")?;

    let name_node = package_node
        .named_children(&mut package_node.walk())
        .find(|c| matches!(c.kind(), "scoped_identifier" | "identifier"))?;

    Some(extractor.base().get_node_text(&name_node))
}
