//! ExtractorManager - per-file dispatch to the Java extractor or the proto scanner
//!
//! Every failure below this point is converted into diagnostics here, so the
//! caller always gets an [`ExtractionResults`] back and can move on to the
//! next file.

use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::error::ExtractError;
use crate::extractors::base::{Element, ExtractionResults};
use crate::extractors::java::JavaExtractor;
use crate::extractors::proto::scan_proto;
use crate::language::{get_tree_sitter_language, SourceKind};
use tree_sitter::Parser;

/// Manager for the two extractors
pub struct ExtractorManager {
    max_nesting_depth: usize,
}

impl Default for ExtractorManager {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MAX_NESTING_DEPTH)
    }
}

impl ExtractorManager {
    pub fn new(max_nesting_depth: usize) -> Self {
        Self { max_nesting_depth }
    }

    /// Extract elements from one file's content
    ///
    /// `file_path` is the relative `/`-separated path recorded on elements.
    pub fn extract_file(&self, kind: SourceKind, file_path: &str, content: &str) -> ExtractionResults {
        match kind {
            SourceKind::Java => match self.extract_java(file_path, content) {
                Ok(elements) => ExtractionResults {
                    elements,
                    diagnostics: Vec::new(),
                },
                Err(e) => ExtractionResults::failed(e.into_diagnostics(file_path)),
            },
            SourceKind::Proto => scan_proto(file_path, content),
        }
    }

    /// Parse a Java file and extract its methods
    ///
    /// Panics from the grammar or the traversal are caught and reported as
    /// [`ExtractError::Panicked`].
    pub fn extract_java(&self, file_path: &str, content: &str) -> Result<Vec<Element>, ExtractError> {
        let outcome = catch_unwind(AssertUnwindSafe(|| {
            self.parse_and_extract_java(file_path, content)
        }));

        match outcome {
            Ok(result) => result,
            Err(payload) => Err(ExtractError::Panicked(panic_message(payload.as_ref()))),
        }
    }

    fn parse_and_extract_java(&self, file_path: &str, content: &str) -> Result<Vec<Element>, ExtractError> {
        let mut parser = Parser::new();
        let language = get_tree_sitter_language(SourceKind::Java)
            .map_err(|e| ExtractError::Language(e.to_string()))?;
        parser
            .set_language(&language)
            .map_err(|e| ExtractError::Language(e.to_string()))?;

        let tree = parser.parse(content, None).ok_or(ExtractError::NoTree)?;

        let mut extractor = JavaExtractor::new(file_path, content.to_string(), self.max_nesting_depth);
        let elements = extractor.extract_elements(&tree)?;

        tracing::debug!(
            "Extracted {} methods from Java file: {}",
            elements.len(),
            file_path
        );
        Ok(elements)
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::base::ElementKind;

    #[test]
    fn test_dispatch_by_kind() {
        let manager = ExtractorManager::default();

        let java = manager.extract_file(SourceKind::Java, "A.java", "class A { void f() {} }");
        assert_eq!(java.elements.len(), 1);
        assert_eq!(java.elements[0].kind, ElementKind::Method);

        let proto = manager.extract_file(SourceKind::Proto, "a.proto", "message M {}\nenum E {}\n");
        assert_eq!(proto.elements.len(), 2);
        assert_eq!(proto.elements[0].kind, ElementKind::Message);
        assert_eq!(proto.elements[1].kind, ElementKind::Enum);
    }

    #[test]
    fn test_java_syntax_error_becomes_diagnostics() {
        let manager = ExtractorManager::default();
        let results = manager.extract_file(
            SourceKind::Java,
            "src/Broken.java",
            "class Broken {\n  void f( {\n}\n",
        );

        assert!(results.elements.is_empty());
        assert!(!results.diagnostics.is_empty());
        for diagnostic in &results.diagnostics {
            assert_eq!(diagnostic.file_path, "src/Broken.java");
            assert!(diagnostic.message.starts_with("Failed to parse Java file"));
        }
    }

    #[test]
    fn test_depth_limit_becomes_single_diagnostic() {
        let manager = ExtractorManager::new(2);
        let results = manager.extract_file(SourceKind::Java, "Deep.java", "class A { class B { void f() {} } }");

        assert!(results.elements.is_empty());
        assert_eq!(results.diagnostics.len(), 1);
        assert!(results.diagnostics[0].message.contains("Nesting deeper than 2"));
    }

    fn long_concatenation(terms: usize) -> String {
        let expression = vec!["\"a\""; terms].join(" + ");
        format!("class A {{\n  String s() {{\n    return {};\n  }}\n}}\n", expression)
    }

    #[test]
    fn test_deep_expression_on_small_stack_does_not_overflow() {
        // Embedders may call in from threads with much less than 8 MB of stack
        let handle = std::thread::Builder::new()
            .stack_size(2 * 1024 * 1024)
            .spawn(|| {
                let content = long_concatenation(1100);

                let limited = ExtractorManager::default().extract_file(SourceKind::Java, "A.java", &content);
                let unlimited =
                    ExtractorManager::new(usize::MAX).extract_file(SourceKind::Java, "A.java", &content);
                (limited, unlimited)
            })
            .unwrap();
        let (limited, unlimited) = handle.join().unwrap();

        assert!(limited.elements.is_empty());
        assert_eq!(limited.diagnostics.len(), 1);
        assert!(limited.diagnostics[0].message.contains("Nesting deeper than 1024"));

        assert!(unlimited.diagnostics.is_empty());
        assert_eq!(unlimited.elements.len(), 1);
        assert_eq!(unlimited.elements[0].name, "s");
        assert_eq!(unlimited.elements[0].end_line, 4);
    }

    #[test]
    fn test_panic_payload_messages() {
        let payload: Box<dyn std::any::Any + Send> = Box::new("static message");
        assert_eq!(panic_message(payload.as_ref()), "static message");

        let payload: Box<dyn std::any::Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(payload.as_ref()), "owned");

        let payload: Box<dyn std::any::Any + Send> = Box::new(42_u8);
        assert_eq!(panic_message(payload.as_ref()), "unknown panic");
    }
}
