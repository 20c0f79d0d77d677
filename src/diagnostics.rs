//! Diagnostic sink
//!
//! Every recoverable failure (a Java file that does not parse, a proto block
//! with unbalanced braces, an unreadable file) becomes one [`Diagnostic`].
//! Extractors return diagnostics as values; the traversal driver appends them
//! to a [`Diagnostics`] collection that lives for the whole run.

use std::fmt;
use tracing::warn;

/// One human-readable failure line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Relative path of the file the failure belongs to
    pub file_path: String,
    /// Line the failure points at, when known. Messages name the line
    /// themselves, so this is not repeated in the rendered form.
    pub line: Option<usize>,
    pub message: String,
}

impl Diagnostic {
    pub fn new(file_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            line: None,
            message: message.into(),
        }
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ERROR: {}: {}", self.message, self.file_path)
    }
}

/// Append-only collection of diagnostics for one run
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        warn!("{}", diagnostic);
        self.entries.push(diagnostic);
    }

    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        for diagnostic in diagnostics {
            self.push(diagnostic);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    /// Render every diagnostic as one line
    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_without_line() {
        let diagnostic = Diagnostic::new("src/Foo.java", "Failed to read Java file");
        assert_eq!(
            diagnostic.to_string(),
            "ERROR: Failed to read Java file: src/Foo.java"
        );
    }

    #[test]
    fn test_line_is_kept_but_not_rendered_twice() {
        let diagnostic =
            Diagnostic::new("a.proto", "Mismatched braces detected near line 7").at_line(7);
        assert_eq!(diagnostic.line, Some(7));
        assert_eq!(
            diagnostic.to_string(),
            "ERROR: Mismatched braces detected near line 7: a.proto"
        );
    }

    #[test]
    fn test_sink_is_append_only_and_ordered() {
        let mut sink = Diagnostics::new();
        assert!(sink.is_empty());

        sink.push(Diagnostic::new("a.proto", "first"));
        sink.extend(vec![
            Diagnostic::new("b.proto", "second"),
            Diagnostic::new("c.proto", "third"),
        ]);

        assert_eq!(sink.len(), 3);
        let messages: Vec<&str> = sink.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second", "third"]);
    }
}
