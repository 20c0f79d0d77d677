use std::process::ExitCode;

/// Exit status for the harvester.
///
/// - `Success` (0): Run completed, with or without recorded diagnostics
/// - `Error` (2): Run aborted (unusable root, unwritable output or log)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Run completed; per-file failures live in the error log.
    Success,
    /// Run aborted before producing output.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
