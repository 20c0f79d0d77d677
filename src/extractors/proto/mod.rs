//! Proto block scanner
//!
//! Extracts top-level `message` and `enum` blocks from `.proto` files without
//! a grammar: a single pass over the lines drives [`ScannerState`] through
//! its SEEKING / IN_BLOCK transitions. Nested blocks are folded into the
//! outermost one.
//!
//! Known limitation: block comments and string literals are only recognized
//! within one line. A `/* ... */` comment or a literal spanning several lines
//! that contains braces will throw the balance off.
//!
//! - delimiters: comment/string-aware brace counting
//! - helpers: line classification patterns
//! - state: the per-line transition function

mod delimiters;
mod helpers;
mod state;

pub use delimiters::{count_delimiters, net_delimiters, DelimiterCount};
pub use state::{ScannerState, Step};

use crate::extractors::base::{ExtractionResults, FileContext};
use tracing::debug;

/// Scan one proto file's content
pub fn scan_proto(file_path: &str, content: &str) -> ExtractionResults {
    let file = FileContext::new(file_path);
    let mut results = ExtractionResults::default();
    let mut state = ScannerState::new();

    for (idx, line) in content.lines().enumerate() {
        let step = state.step(&file, idx + 1, line);
        state = step.state;
        results.elements.extend(step.element);
        results.diagnostics.extend(step.diagnostic);
    }
    results.diagnostics.extend(state.finish(&file));

    debug!(
        "Scanned {} proto blocks from {} ({} diagnostics)",
        results.elements.len(),
        file.file_path,
        results.diagnostics.len()
    );
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::base::ElementKind;
    use pretty_assertions::assert_eq;

    const USER_PROTO: &str = r#"syntax = "proto3";

package acme.users.v1;

import "google/protobuf/timestamp.proto";

// A registered user.
// Identified by id.
message User {
  string id = 1;
  string name = 2 [json_name = "{name}"];

  message Address {
    string street = 1;
  }

  enum Role {
    ROLE_UNSPECIFIED = 0;
  }
}

enum Status {
  STATUS_UNSPECIFIED = 0;
  STATUS_ACTIVE = 1; // }
}

service Users {
  rpc Get(User) returns (User);
}
"#;

    #[test]
    fn test_scan_realistic_file() {
        let results = scan_proto("api/users.proto", USER_PROTO);
        assert!(results.diagnostics.is_empty());
        assert_eq!(results.elements.len(), 2);

        let user = &results.elements[0];
        assert_eq!(user.name, "User");
        assert_eq!(user.kind, ElementKind::Message);
        assert_eq!(
            user.documentation.as_deref(),
            Some("A registered user.\nIdentified by id.")
        );
        assert_eq!(user.start_line, 7);
        assert_eq!(user.declaration_line, 9);
        assert_eq!(user.end_line, 20);
        assert_eq!(user.context.module.as_deref(), Some("acme.users.v1"));
        assert_eq!(user.context.file_name, "users.proto");
        assert_eq!(user.context.enclosing_type_name, None);

        let expected_snippet: String = USER_PROTO
            .lines()
            .skip(6)
            .take(14)
            .map(|l| format!("{}\n", l))
            .collect();
        assert_eq!(user.context.snippet, expected_snippet);

        let status = &results.elements[1];
        assert_eq!(status.name, "Status");
        assert_eq!(status.kind, ElementKind::Enum);
        assert_eq!(status.documentation, None);
        assert_eq!(status.start_line, 22);
        assert_eq!(status.end_line, 25);
    }

    #[test]
    fn test_malformed_block_does_not_stop_file() {
        let content = "message A {\n}\n}\nmessage B {\n  int32 x = 1;\n}\n";
        // Stray `}` at line 3 is outside any block and ignored while seeking
        let results = scan_proto("a.proto", content);
        assert!(results.diagnostics.is_empty());
        assert_eq!(results.elements.len(), 2);

        let content = "message A {\n  }}\nmessage B {}\n";
        let results = scan_proto("a.proto", content);
        assert_eq!(results.diagnostics.len(), 1);
        assert_eq!(results.elements.len(), 1);
        assert_eq!(results.elements[0].name, "B");
    }

    #[test]
    fn test_unterminated_block_is_reported_once() {
        let results = scan_proto("open.proto", "message Open {\n  int32 a = 1;\n");
        assert!(results.elements.is_empty());
        assert_eq!(results.diagnostics.len(), 1);
        assert!(results.diagnostics[0].message.contains("unclosed definition: Open"));
    }

    #[test]
    fn test_multiline_block_comment_is_a_known_limitation() {
        let content = "message A {\n  /* starts here\n  a { brace */\n}\n";
        let results = scan_proto("limit.proto", content);
        // Line 3 is not known to be inside the comment, so its `{` is counted
        assert!(results.elements.is_empty());
        assert_eq!(results.diagnostics.len(), 1);
    }

    #[test]
    fn test_crlf_lines() {
        let results = scan_proto("win.proto", "// Doc\r\nmessage W {\r\n}\r\n");
        assert_eq!(results.elements.len(), 1);
        assert_eq!(results.elements[0].documentation.as_deref(), Some("Doc"));
        assert_eq!(results.elements[0].context.snippet, "// Doc\nmessage W {\n}\n");
    }

    #[test]
    fn test_empty_file() {
        let results = scan_proto("empty.proto", "");
        assert!(results.elements.is_empty());
        assert!(results.diagnostics.is_empty());
    }
}
