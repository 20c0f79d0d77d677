// Element model shared by every extractor
//
// Both the tree-sitter method extractor and the proto block scanner produce
// the same record. Field names on the wire follow the format downstream
// indexers already consume (`code_type`, `docstring`, `line_from`, ...).

use serde::{Deserialize, Serialize};

/// One extracted method or schema block
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Element {
    /// Method name or block name as it appears in code
    pub name: String,
    /// Return type, name and parameter types (methods only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    /// Kind of element (Method, Message, Enum)
    #[serde(rename = "code_type")]
    pub kind: ElementKind,
    /// Attached documentation with comment markers stripped
    #[serde(rename = "docstring", skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    /// Line holding the signature or the `message`/`enum Name {` opener (1-based)
    #[serde(rename = "line")]
    pub declaration_line: usize,
    /// First line including the attached documentation (1-based)
    #[serde(rename = "line_from")]
    pub start_line: usize,
    /// Line of the matching closing delimiter (1-based)
    #[serde(rename = "line_to")]
    pub end_line: usize,
    pub context: ElementContext,
}

/// Where an element lives and the verbatim code it spans
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ElementContext {
    /// Java package or proto package
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<String>,
    /// Path relative to the traversal root, `/`-separated
    pub file_path: String,
    pub file_name: String,
    /// Nearest enclosing class/interface/enum/record (methods only)
    #[serde(rename = "class_name", skip_serializing_if = "Option::is_none")]
    pub enclosing_type_name: Option<String>,
    /// Lines `start_line..=end_line`, each terminated by `\n`
    pub snippet: String,
}

/// Element kinds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Method,
    Message,
    Enum,
}

impl ElementKind {
    /// Map a proto block keyword onto its kind
    pub fn from_block_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "message" => Some(ElementKind::Message),
            "enum" => Some(ElementKind::Enum),
            _ => None,
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ElementKind::Method => write!(f, "Method"),
            ElementKind::Message => write!(f, "Message"),
            ElementKind::Enum => write!(f, "Enum"),
        }
    }
}

/// File-level facts every element from one file shares
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileContext {
    /// Relative `/`-separated path
    pub file_path: String,
    pub file_name: String,
}

impl FileContext {
    pub fn new(file_path: impl Into<String>) -> Self {
        let file_path = file_path.into();
        let file_name = file_path
            .rsplit('/')
            .next()
            .unwrap_or(file_path.as_str())
            .to_string();
        Self {
            file_path,
            file_name,
        }
    }
}

/// Everything one file produced: elements plus recoverable failures
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionResults {
    pub elements: Vec<Element>,
    pub diagnostics: Vec<crate::diagnostics::Diagnostic>,
}

impl ExtractionResults {
    pub fn failed(diagnostics: Vec<crate::diagnostics::Diagnostic>) -> Self {
        Self {
            elements: Vec::new(),
            diagnostics,
        }
    }
}

/// Copy lines `start_line..=end_line` (1-based) out of `content`, each with a trailing newline
pub fn snippet_lines(content: &str, start_line: usize, end_line: usize) -> String {
    if start_line == 0 || end_line < start_line {
        return String::new();
    }
    content
        .lines()
        .skip(start_line - 1)
        .take(end_line - start_line + 1)
        .fold(String::new(), |mut acc, line| {
            acc.push_str(line);
            acc.push('\n');
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_absent_fields_are_omitted() {
        let element = Element {
            name: "Status".to_string(),
            signature: None,
            kind: ElementKind::Enum,
            documentation: None,
            declaration_line: 3,
            start_line: 3,
            end_line: 6,
            context: ElementContext {
                module: None,
                file_path: "proto/status.proto".to_string(),
                file_name: "status.proto".to_string(),
                enclosing_type_name: None,
                snippet: "enum Status {\n}\n".to_string(),
            },
        };

        let json = serde_json::to_value(&element).unwrap();
        let object = json.as_object().unwrap();

        assert!(!object.contains_key("signature"));
        assert!(!object.contains_key("docstring"));
        assert_eq!(json["code_type"], "Enum");
        assert_eq!(json["line"], 3);
        assert_eq!(json["line_from"], 3);
        assert_eq!(json["line_to"], 6);

        let context = json["context"].as_object().unwrap();
        assert!(!context.contains_key("module"));
        assert!(!context.contains_key("class_name"));
        assert_eq!(context["file_path"], "proto/status.proto");
    }

    #[test]
    fn test_file_context_takes_last_segment() {
        let ctx = FileContext::new("src/main/java/Foo.java");
        assert_eq!(ctx.file_name, "Foo.java");

        let root_level = FileContext::new("Bar.proto");
        assert_eq!(root_level.file_name, "Bar.proto");
    }

    #[test]
    fn test_snippet_lines_is_inclusive() {
        let content = "a\nb\nc\nd";
        assert_eq!(snippet_lines(content, 2, 3), "b\nc\n");
        assert_eq!(snippet_lines(content, 4, 4), "d\n");
        assert_eq!(snippet_lines(content, 3, 2), "");
    }
}
