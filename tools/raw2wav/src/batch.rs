//! Conversion of every recording in a directory
//!
//! A failing recording is reported as a [`FileOutcome`] and does not stop the
//! remaining ones from being converted.

use crate::{Config, Conversion, ConvertError, Options, convert_file};
use std::fs;
use std::io;
use std::path::PathBuf;

/// Suffix of recordings, matched ignoring ASCII case
pub const INPUT_SUFFIX: &str = ".raw";

/// Suffix of the files written for each recording
pub const OUTPUT_SUFFIX: &str = ".wav";

/// Errors which prevent a batch from starting
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("directory '{}' does not exist", .0.display())]
    MissingDirectory(PathBuf),
    #[error("failed to list directory '{}': {}", .path.display(), .source)]
    ReadDir { path: PathBuf, source: io::Error },
}

/// A recording and the file it is converted into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl Job {
    pub fn run(&self, options: &Options) -> FileOutcome {
        let result = convert_file(&self.source, &self.destination, options);

        if let Err(e) = &result {
            log::warn!("failed to convert {}: {e}", self.source.display());
        }

        FileOutcome {
            source: self.source.clone(),
            destination: self.destination.clone(),
            result,
        }
    }
}

/// Result of converting one recording
#[derive(Debug)]
pub struct FileOutcome {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub result: Result<Conversion, ConvertError>,
}

impl FileOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Aggregate result of a batch
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
}

impl BatchReport {
    /// Number of recordings found
    pub fn found(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of recordings successfully converted
    pub fn converted(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.found() - self.converted()
    }
}

/// Derive the output file name of a recording
///
/// Returns `None` if the name does not end in `.raw` (in any case).
pub fn output_file_name(file_name: &str) -> Option<String> {
    let split = file_name.len().checked_sub(INPUT_SUFFIX.len())?;

    if !file_name.is_char_boundary(split) {
        return None;
    }

    let (stem, suffix) = file_name.split_at(split);

    suffix
        .eq_ignore_ascii_case(INPUT_SUFFIX)
        .then(|| format!("{stem}{OUTPUT_SUFFIX}"))
}

/// List the recordings in the configured source directory, ordered by path
pub fn discover(config: &Config) -> Result<Vec<Job>, BatchError> {
    let dir = &config.source_dir;

    if !dir.is_dir() {
        return Err(BatchError::MissingDirectory(dir.clone()));
    }

    let read_dir_err = |source| BatchError::ReadDir {
        path: dir.clone(),
        source,
    };

    let mut jobs = Vec::new();

    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let path = entry.path();

        let file_name = entry.file_name();
        let Some(file_name) = file_name.to_str() else {
            log::warn!("skipping {}, file name is not valid UTF-8", path.display());
            continue;
        };

        let Some(output) = output_file_name(file_name) else {
            continue;
        };

        if !path.is_file() {
            log::debug!("skipping {}, not a regular file", path.display());
            continue;
        }

        jobs.push(Job {
            source: path,
            destination: config.destination_dir().join(output),
        });
    }

    jobs.sort_by(|a, b| a.source.cmp(&b.source));

    Ok(jobs)
}

/// Run all jobs, `on_outcome` is called after each one
pub fn convert_all(
    jobs: Vec<Job>,
    options: &Options,
    mut on_outcome: impl FnMut(&FileOutcome),
) -> BatchReport {
    let mut report = BatchReport {
        outcomes: Vec::with_capacity(jobs.len()),
    };

    for job in jobs {
        let outcome = job.run(options);
        on_outcome(&outcome);
        report.outcomes.push(outcome);
    }

    log::debug!(
        "converted {} of {} recordings",
        report.converted(),
        report.found()
    );

    report
}

/// Convert every recording in the configured source directory
pub fn run(
    config: &Config,
    on_outcome: impl FnMut(&FileOutcome),
) -> Result<BatchReport, BatchError> {
    let jobs = discover(config)?;

    Ok(convert_all(jobs, &config.options, on_outcome))
}
