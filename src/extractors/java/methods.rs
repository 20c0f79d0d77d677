/// Method extraction
use crate::extractors::base::{Element, ElementKind, ElementOptions};
use crate::extractors::java::JavaExtractor;
use tree_sitter::Node;

use super::helpers;

/// Extract a method declaration into an element
///
/// The signature is `ReturnType name(ParamType, ...)`: modifiers, annotations,
/// type parameters, parameter names and the throws clause are left out.
pub(super) fn extract_method(
    extractor: &JavaExtractor,
    node: Node,
    enclosing_type: Option<&str>,
) -> Option<Element> {
    let base = extractor.base();
    let name = base.get_field_text(&node, "name")?;

    let return_type = node
        .child_by_field_name("type")
        .map(|t| helpers::normalize_type_text(&base.get_node_text(&t)))
        .unwrap_or_else(|| "void".to_string());

    let parameter_types = node
        .child_by_field_name("parameters")
        .map(|params| helpers::extract_parameter_types(base, params))
        .unwrap_or_default();

    let signature = format!("{} {}({})", return_type, name, parameter_types.join(", "));

    let options = ElementOptions {
        signature: Some(signature),
        module: extractor.package().map(str::to_string),
        enclosing_type_name: enclosing_type.map(str::to_string),
    };

    Some(base.create_element(&node, name, ElementKind::Method, options))
}
