//! Error types for code-harvester
//!
//! Per-file failures are recoverable: the driver turns an [`ExtractError`] into
//! diagnostics and moves on to the next file. Only [`WalkError`] ends a run.

use std::path::PathBuf;
use thiserror::Error;

use crate::diagnostics::Diagnostic;

/// One problem tree-sitter reported while parsing a Java file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxProblem {
    /// 1-based line, when the problem node has a usable position
    pub line: Option<usize>,
    pub message: String,
}

/// Per-file extraction failures
#[derive(Error, Debug)]
pub enum ExtractError {
    /// File could not be read as UTF-8 text
    #[error("Failed to read {kind} file: {source}")]
    Read {
        kind: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// The Java source contains syntax errors
    #[error("Failed to parse Java file ({} problem(s))", problems.len())]
    Syntax { problems: Vec<SyntaxProblem> },

    /// Declarations nest deeper than the configured traversal limit
    #[error("Nesting deeper than {limit} levels during Java extraction (likely pathological input). Skipping file")]
    NestingTooDeep { limit: usize },

    /// The grammar or the traversal panicked
    #[error("Unexpected failure during Java extraction: {0}. Skipping file")]
    Panicked(String),

    /// The parser returned no tree at all
    #[error("Java parser produced no syntax tree. Skipping file")]
    NoTree,

    /// The Java grammar could not be loaded into the parser
    #[error("Failed to load Java grammar: {0}")]
    Language(String),
}

impl ExtractError {
    /// Convert into the diagnostic lines recorded for `file_path`
    ///
    /// Syntax failures produce one line per reported problem; everything else
    /// produces exactly one line naming the failure kind.
    pub fn into_diagnostics(self, file_path: &str) -> Vec<Diagnostic> {
        match self {
            ExtractError::Syntax { problems } => problems
                .into_iter()
                .map(|problem| {
                    let line = problem
                        .line
                        .map(|l| l.to_string())
                        .unwrap_or_else(|| "?".to_string());
                    Diagnostic {
                        file_path: file_path.to_string(),
                        line: problem.line,
                        message: format!(
                            "Failed to parse Java file: Line {}: {}",
                            line, problem.message
                        ),
                    }
                })
                .collect(),
            other => vec![Diagnostic::new(file_path, other.to_string())],
        }
    }
}

/// Fatal traversal failures
#[derive(Error, Debug)]
pub enum WalkError {
    /// The root itself could not be enumerated
    #[error("Failed during file traversal of {}: {source}", root.display())]
    RootUnavailable {
        root: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Traversal root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}
