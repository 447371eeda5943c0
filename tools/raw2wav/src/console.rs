//! Console report of a batch run

use crate::batch::{self, BatchError};
use crate::{Config, FileOutcome};
use std::io::{self, Write};
use std::process::ExitCode;

/// Overall result of a batch run as seen by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Every recording was converted, or there was none
    Success,
    /// The source directory is unusable or a recording failed to convert
    Failure,
}

impl From<Status> for ExitCode {
    fn from(status: Status) -> Self {
        match status {
            Status::Success => ExitCode::SUCCESS,
            Status::Failure => ExitCode::FAILURE,
        }
    }
}

/// Convert every recording in `config.source_dir`, reporting progress to `out`
///
/// Only errors writing to `out` are returned, conversion failures are part of the report.
pub fn run(config: &Config, out: &mut impl Write) -> io::Result<Status> {
    let source_dir = config.source_dir.display();

    let jobs = match batch::discover(config) {
        Ok(jobs) => jobs,
        Err(BatchError::MissingDirectory(_)) => {
            writeln!(out, "Directory '{source_dir}' does not exist.")?;
            return Ok(Status::Failure);
        }
        Err(BatchError::ReadDir { source, .. }) => {
            writeln!(out, "Cannot list directory '{source_dir}': {source}")?;
            return Ok(Status::Failure);
        }
    };

    if jobs.is_empty() {
        writeln!(out, "No .raw files found in '{source_dir}'.")?;
        return Ok(Status::Success);
    }

    writeln!(
        out,
        "Found {} .raw file(s) in '{source_dir}'. Starting conversion...",
        jobs.len()
    )?;

    // convert_all keeps going regardless, remember the first failed write
    let mut write_result = Ok(());

    let report = batch::convert_all(jobs, &config.options, |outcome| {
        if write_result.is_ok() {
            write_result = write_outcome(out, outcome);
        }
    });

    write_result?;

    writeln!(out, "Conversion process completed.")?;
    writeln!(
        out,
        "Converted {} of {} file(s).",
        report.converted(),
        report.found()
    )?;
    out.flush()?;

    if report.failed() > 0 {
        Ok(Status::Failure)
    } else {
        Ok(Status::Success)
    }
}

fn write_outcome(out: &mut impl Write, outcome: &FileOutcome) -> io::Result<()> {
    match &outcome.result {
        Ok(_) => writeln!(
            out,
            "Converted: {} -> {}",
            outcome.source.display(),
            outcome.destination.display()
        ),
        Err(e) => writeln!(out, "Failed to convert {}: {e}", outcome.source.display()),
    }
}
