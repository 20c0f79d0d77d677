/// Scanner state machine for proto block extraction
///
/// [`ScannerState::step`] is a pure transition: it consumes the state and one
/// line and returns the next state plus at most one emitted element and at
/// most one diagnostic. No I/O happens here.
use crate::diagnostics::Diagnostic;
use crate::extractors::base::{Element, ElementContext, ElementKind, FileContext};

use super::delimiters::{count_delimiters, net_delimiters};
use super::helpers::{self, BlockStart};

/// Scanner state for one file
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScannerState {
    /// First `package` directive seen outside any block
    module: Option<String>,
    phase: Phase,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Phase {
    Seeking { pending: PendingComments },
    InBlock(BlockDraft),
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Seeking {
            pending: PendingComments::default(),
        }
    }
}

/// Comment run waiting to document the next block
///
/// Holds the raw lines from the first comment of the current run onward, so
/// the element snippet can start at the comment. Blank and directive lines
/// after a comment stay in the run and in the snippet; only another
/// statement clears it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct PendingComments {
    lines: Vec<PendingLine>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct PendingLine {
    number: usize,
    raw: String,
    /// Comment text for comment lines; `None` for kept blank/directive lines
    comment: Option<String>,
}

impl PendingComments {
    fn push_comment(&mut self, number: usize, raw: &str, text: String) {
        self.lines.push(PendingLine {
            number,
            raw: raw.to_string(),
            comment: Some(text),
        });
    }

    fn push_gap(&mut self, number: usize, raw: &str) {
        if self.lines.is_empty() {
            return;
        }
        self.lines.push(PendingLine {
            number,
            raw: raw.to_string(),
            comment: None,
        });
    }

    fn clear(&mut self) {
        self.lines.clear();
    }

    fn comment_count(&self) -> usize {
        self.lines.iter().filter(|l| l.comment.is_some()).count()
    }

    fn first_line(&self) -> Option<usize> {
        self.lines.first().map(|l| l.number)
    }

    fn documentation(&self) -> Option<String> {
        let comments: Vec<&str> = self
            .lines
            .iter()
            .filter_map(|l| l.comment.as_deref())
            .collect();
        if comments.is_empty() {
            None
        } else {
            Some(comments.join("\n"))
        }
    }

    fn raw_text(&self) -> String {
        self.lines.iter().fold(String::new(), |mut acc, l| {
            acc.push_str(&l.raw);
            acc.push('\n');
            acc
        })
    }
}

/// In-progress block and its accumulating snippet
#[derive(Debug, Clone, PartialEq, Eq)]
struct BlockDraft {
    kind: ElementKind,
    name: String,
    declaration_line: usize,
    start_line: usize,
    documentation: Option<String>,
    module: Option<String>,
    snippet: String,
    brace_balance: i64,
}

impl BlockDraft {
    fn finish(self, file: &FileContext, end_line: usize) -> Element {
        Element {
            name: self.name,
            signature: None,
            kind: self.kind,
            documentation: self.documentation,
            declaration_line: self.declaration_line,
            start_line: self.start_line,
            end_line,
            context: ElementContext {
                module: self.module,
                file_path: file.file_path.clone(),
                file_name: file.file_name.clone(),
                enclosing_type_name: None,
                snippet: self.snippet,
            },
        }
    }

    fn label(&self) -> String {
        format!("{} {}", self.kind.to_string().to_lowercase(), self.name)
    }
}

/// Result of feeding one line to the scanner
#[derive(Debug)]
pub struct Step {
    pub state: ScannerState,
    pub element: Option<Element>,
    pub diagnostic: Option<Diagnostic>,
}

impl Step {
    fn quiet(state: ScannerState) -> Self {
        Self {
            state,
            element: None,
            diagnostic: None,
        }
    }
}

impl ScannerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Package captured so far
    pub fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }

    /// `true` while no block is open
    pub fn is_seeking(&self) -> bool {
        matches!(self.phase, Phase::Seeking { .. })
    }

    /// Unmatched opening braces of the open block; 0 while seeking
    pub fn brace_balance(&self) -> i64 {
        match &self.phase {
            Phase::Seeking { .. } => 0,
            Phase::InBlock(draft) => draft.brace_balance,
        }
    }

    /// Number of comment lines waiting to document the next block
    pub fn pending_comment_count(&self) -> usize {
        match &self.phase {
            Phase::Seeking { pending } => pending.comment_count(),
            Phase::InBlock(_) => 0,
        }
    }

    /// Feed one line (1-based `line_number`, without its terminator)
    pub fn step(self, file: &FileContext, line_number: usize, line: &str) -> Step {
        let ScannerState { module, phase } = self;
        match phase {
            Phase::Seeking { pending } => seek(module, pending, file, line_number, line),
            Phase::InBlock(draft) => advance_block(module, draft, file, line_number, line),
        }
    }

    /// End of file: report a block that never closed
    pub fn finish(self, file: &FileContext) -> Option<Diagnostic> {
        match self.phase {
            Phase::Seeking { .. } => None,
            Phase::InBlock(draft) => Some(
                Diagnostic::new(
                    &file.file_path,
                    format!(
                        "Proto Parse Error: Reached end of file with unclosed definition: {} starting at line {}",
                        draft.name, draft.start_line
                    ),
                )
                .at_line(draft.start_line),
            ),
        }
    }
}

fn seek(
    mut module: Option<String>,
    mut pending: PendingComments,
    file: &FileContext,
    line_number: usize,
    line: &str,
) -> Step {
    let trimmed = line.trim();

    if module.is_none() {
        module = helpers::match_package(trimmed);
    }

    if let Some(text) = helpers::line_comment_text(trimmed) {
        pending.push_comment(line_number, line, text);
        return Step::quiet(ScannerState {
            module,
            phase: Phase::Seeking { pending },
        });
    }

    let Some(start) = helpers::match_block_start(line) else {
        if trimmed.is_empty() || helpers::is_directive(trimmed) {
            pending.push_gap(line_number, line);
        } else {
            pending.clear();
        }
        return Step::quiet(ScannerState {
            module,
            phase: Phase::Seeking { pending },
        });
    };

    open_block(module, pending, start, file, line_number, line)
}

fn open_block(
    module: Option<String>,
    pending: PendingComments,
    start: BlockStart,
    file: &FileContext,
    line_number: usize,
    line: &str,
) -> Step {
    let mut snippet = pending.raw_text();
    snippet.push_str(line);
    snippet.push('\n');

    let draft = BlockDraft {
        kind: start.kind,
        name: start.name,
        declaration_line: line_number,
        start_line: pending.first_line().unwrap_or(line_number),
        documentation: pending.documentation(),
        module: module.clone(),
        snippet,
        brace_balance: opening_balance(line),
    };

    settle(module, draft, file, line_number)
}

/// Balance right after an opener: its own `{` minus every structural `}`
/// on the line. Further `{` on the opener line are not counted.
fn opening_balance(line: &str) -> i64 {
    1 - count_delimiters(line).close as i64
}

fn advance_block(
    module: Option<String>,
    mut draft: BlockDraft,
    file: &FileContext,
    line_number: usize,
    line: &str,
) -> Step {
    draft.snippet.push_str(line);
    draft.snippet.push('\n');
    draft.brace_balance += net_delimiters(line);
    settle(module, draft, file, line_number)
}

/// Decide what a draft's balance means after `line_number`
fn settle(module: Option<String>, draft: BlockDraft, file: &FileContext, line_number: usize) -> Step {
    let seeking = |module: Option<String>| ScannerState {
        module,
        phase: Phase::default(),
    };

    match draft.brace_balance {
        0 => Step {
            state: seeking(module),
            element: Some(draft.finish(file, line_number)),
            diagnostic: None,
        },
        balance if balance < 0 => {
            let diagnostic = Diagnostic::new(
                &file.file_path,
                format!(
                    "Proto Parse Error: Mismatched braces detected near line {} in {} starting at line {}. Resetting state",
                    line_number,
                    draft.label(),
                    draft.start_line
                ),
            )
            .at_line(line_number);
            Step {
                state: seeking(module),
                element: None,
                diagnostic: Some(diagnostic),
            }
        }
        _ => Step::quiet(ScannerState {
            module,
            phase: Phase::InBlock(draft),
        }),
    }
}
