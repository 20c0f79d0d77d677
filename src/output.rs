//! Element JSON output and the diagnostic log file

use std::fmt::Display;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::diagnostics::Diagnostics;
use crate::extractors::base::Element;

/// Serialize elements as a pretty-printed JSON array
pub fn elements_to_json(elements: &[Element]) -> Result<String> {
    serde_json::to_string_pretty(elements).context("Failed to serialize elements to JSON")
}

/// Write the element array to `path`, replacing any previous file
///
/// The document is serialized in full before the file is touched, so a
/// serialization failure leaves an existing output untouched.
pub fn write_elements(path: &Path, elements: &[Element]) -> Result<()> {
    let json = elements_to_json(elements)?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write output file {}", path.display()))
}

/// Line-oriented diagnostic log
///
/// Created (truncated) at the start of a run so that a log from a previous
/// run never survives into this one.
pub struct ErrorLog {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl ErrorLog {
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create error log {}", path.display()))?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: BufWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append every diagnostic, one `ERROR: ...` line each
    pub fn write_diagnostics(&mut self, diagnostics: &Diagnostics) -> Result<()> {
        for diagnostic in diagnostics.iter() {
            writeln!(self.writer, "{}", diagnostic).with_context(|| self.write_failed())?;
        }
        self.flush()
    }

    /// Append a failure that ended the run
    pub fn write_fatal(&mut self, error: &dyn Display) -> Result<()> {
        writeln!(self.writer, "FATAL: {}", error).with_context(|| self.write_failed())?;
        self.flush()
    }

    /// Append a failure of the output stage
    pub fn write_critical(&mut self, error: &dyn Display) -> Result<()> {
        writeln!(self.writer, "CRITICAL: {}", error).with_context(|| self.write_failed())?;
        self.flush()
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush().with_context(|| self.write_failed())
    }

    fn write_failed(&self) -> String {
        format!("Failed to write error log {}", self.path.display())
    }
}
