//! Command-line front end
//!
//! Owns everything the library leaves to the caller: the error log file, the
//! JSON output file, terminal reporting and the exit status.

use anyhow::Result;
use colored::Colorize;

use crate::output::{write_elements, ErrorLog};
use crate::walker::harvest_with_progress;

mod args;
mod exit_status;

pub use args::Arguments;
pub use exit_status::ExitStatus;

/// Run one harvest as configured by `args`
///
/// `Err` is only returned when the error log itself cannot be created.
/// Every other fatal failure is recorded in the log and mapped to
/// [`ExitStatus::Error`].
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let mut log = ErrorLog::create(&args.error_log)?;
    let config = args.harvest_config();
    let verbose = args.verbose;

    let report = match harvest_with_progress(&args.root, &config, |path| {
        if verbose {
            println!("Processing: {}", path);
        }
    }) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("{} {}", "error:".bold().red(), e);
            log.write_fatal(&e)?;
            return Ok(ExitStatus::Error);
        }
    };

    for diagnostic in report.diagnostics.iter() {
        eprintln!("{} {}", "warning:".bold().yellow(), diagnostic);
    }
    log.write_diagnostics(&report.diagnostics)?;

    if let Err(e) = write_elements(&args.output, &report.elements) {
        eprintln!("{} {:#}", "error:".bold().red(), e);
        log.write_critical(&format!("{:#}", e))?;
        return Ok(ExitStatus::Error);
    }

    println!(
        "{} Extracted {} elements from {} files",
        "Done:".bold().green(),
        report.elements.len(),
        report.files_visited
    );
    println!("  Output written to {}", args.output.display());
    if report.diagnostics.is_empty() {
        println!("  No errors recorded in {}", log.path().display());
    } else {
        println!(
            "  {} errors recorded in {}",
            report.diagnostics.len(),
            log.path().display()
        );
    }

    Ok(ExitStatus::Success)
}
