/// Line classification patterns for proto files
use regex::Regex;
use std::sync::LazyLock;

use crate::extractors::base::ElementKind;

/// `message Name {` or `enum Name {`, indentation allowed, rest of line ignored
pub(super) static BLOCK_START_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(message|enum)\s+([A-Za-z_][A-Za-z0-9_]*)\s*\{").unwrap()
});

/// `package foo.bar;` on a trimmed line
pub(super) static PACKAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^package\s+([A-Za-z_][\w.]*)\s*;").unwrap());

/// Statements that carry no content of their own
pub(super) static DIRECTIVE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(syntax|edition|package|import|option)\b").unwrap());

/// A recognized block opener
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct BlockStart {
    pub kind: ElementKind,
    pub name: String,
}

/// Match the block-start rule against a raw line
pub(super) fn match_block_start(line: &str) -> Option<BlockStart> {
    let caps = BLOCK_START_RE.captures(line)?;
    let kind = ElementKind::from_block_keyword(caps.get(1)?.as_str())?;
    Some(BlockStart {
        kind,
        name: caps.get(2)?.as_str().to_string(),
    })
}

/// Package name declared on a trimmed line, if any
pub(super) fn match_package(trimmed: &str) -> Option<String> {
    PACKAGE_RE
        .captures(trimmed)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Text of a line that is nothing but a `//` comment, marker stripped and trimmed
pub(super) fn line_comment_text(trimmed: &str) -> Option<String> {
    trimmed
        .strip_prefix("//")
        .map(|text| text.trim().to_string())
}

pub(super) fn is_directive(trimmed: &str) -> bool {
    DIRECTIVE_RE.is_match(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_start_forms() {
        assert_eq!(
            match_block_start("message User {"),
            Some(BlockStart {
                kind: ElementKind::Message,
                name: "User".to_string()
            })
        );
        assert_eq!(
            match_block_start("  enum Status{ UNKNOWN = 0; }"),
            Some(BlockStart {
                kind: ElementKind::Enum,
                name: "Status".to_string()
            })
        );
        assert_eq!(match_block_start("message User"), None);
        assert_eq!(match_block_start("service Api {"), None);
        assert_eq!(match_block_start("messages Foo {"), None);
        assert_eq!(match_block_start("// message Foo {"), None);
    }

    #[test]
    fn test_package_and_directives() {
        assert_eq!(match_package("package acme.v1;"), Some("acme.v1".to_string()));
        assert_eq!(match_package("package acme.v1"), None);
        assert!(is_directive("syntax = \"proto3\";"));
        assert!(is_directive("import \"google/protobuf/any.proto\";"));
        assert!(is_directive("option java_package = \"com.acme\";"));
        assert!(!is_directive("optional string name = 1;"));
        assert!(!is_directive("service Api {"));
    }

    #[test]
    fn test_line_comment_text() {
        assert_eq!(line_comment_text("//   hello "), Some("hello".to_string()));
        assert_eq!(line_comment_text("///"), Some("/".to_string()));
        assert_eq!(line_comment_text("int32 x = 1; // trailing"), None);
    }
}
