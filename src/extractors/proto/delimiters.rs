/// Comment- and string-aware brace counting for a single line
///
/// Braces are ignored after `//`, between `/*` and `*/` on the same line,
/// and inside `"..."` / `'...'` literals. A quote preceded by `\` does not
/// open or close a literal. No state survives the end of the line: a block
/// comment or literal left open keeps swallowing braces only until the line
/// ends.

/// Opening and closing brace counts found on one line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DelimiterCount {
    pub open: usize,
    pub close: usize,
}

impl DelimiterCount {
    /// Opening minus closing
    pub fn net(&self) -> i64 {
        self.open as i64 - self.close as i64
    }
}

/// Count structural braces on `line`
pub fn count_delimiters(line: &str) -> DelimiterCount {
    let chars: Vec<char> = line.chars().collect();
    let mut count = DelimiterCount::default();
    let mut in_block_comment = false;
    let mut quote: Option<char> = None;

    let mut i = 0;
    while i < chars.len() {
        let current = chars[i];
        let prev = if i > 0 { chars[i - 1] } else { '\0' };
        let next = chars.get(i + 1).copied().unwrap_or('\0');

        if in_block_comment {
            if current == '*' && next == '/' {
                in_block_comment = false;
                i += 2;
            } else {
                i += 1;
            }
            continue;
        }

        if let Some(open_quote) = quote {
            if current == open_quote && prev != '\\' {
                quote = None;
            }
            i += 1;
            continue;
        }

        match current {
            '/' if next == '/' => break,
            '/' if next == '*' => {
                in_block_comment = true;
                i += 2;
                continue;
            }
            '"' | '\'' if prev != '\\' => quote = Some(current),
            '{' => count.open += 1,
            '}' => count.close += 1,
            _ => {}
        }
        i += 1;
    }

    count
}

/// Net brace count of `line` (opening minus closing)
pub fn net_delimiters(line: &str) -> i64 {
    count_delimiters(line).net()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_braces() {
        assert_eq!(net_delimiters("message Foo {"), 1);
        assert_eq!(net_delimiters("}"), -1);
        assert_eq!(net_delimiters("message Foo { }"), 0);
        assert_eq!(net_delimiters("message A { message B { } }"), 0);
        assert_eq!(
            count_delimiters("{ { }"),
            DelimiterCount { open: 2, close: 1 }
        );
    }

    #[test]
    fn test_line_comment_hides_rest_of_line() {
        assert_eq!(net_delimiters("  int32 id = 1; // closes }"), 0);
        assert_eq!(net_delimiters("message Foo { // }"), 1);
    }

    #[test]
    fn test_block_comment_on_same_line() {
        assert_eq!(net_delimiters("/* } */ }"), -1);
        assert_eq!(net_delimiters("{ /* { { */"), 1);
    }

    #[test]
    fn test_unterminated_block_comment_stops_at_line_end() {
        // The comment state is not carried to the next line
        assert_eq!(net_delimiters("/* starts here { {"), 0);
        assert_eq!(net_delimiters("still comment? } */"), -1);
    }

    #[test]
    fn test_string_literals() {
        assert_eq!(
            net_delimiters(r#"  string pattern = 1 [default = "{}}"];"#),
            0
        );
        assert_eq!(net_delimiters("  option (x) = '{';"), 0);
        assert_eq!(net_delimiters(r#"  string s = 1 [default = "a\"}"]; }"#), -1);
    }

    #[test]
    fn test_comment_markers_inside_strings_are_text() {
        assert_eq!(net_delimiters(r#"option url = "http://x"; }"#), -1);
    }

    #[test]
    fn test_escaped_quote_outside_string_does_not_open_literal() {
        assert_eq!(net_delimiters(r#"\" { }"#), 0);
        assert_eq!(net_delimiters(r#"\" {"#), 1);
    }
}
