use crate::Options;
use std::path::{Path, PathBuf};

/// Configuration of a batch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory scanned for `.raw` recordings
    pub source_dir: PathBuf,

    /// Directory the `.wav` files are written to, defaults to `source_dir`
    pub output_dir: Option<PathBuf>,

    pub options: Options,
}

impl Config {
    pub const DEFAULT_SOURCE_DIR: &'static str = "recordings";

    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            output_dir: None,
            options: Options::default(),
        }
    }

    pub fn destination_dir(&self) -> &Path {
        self.output_dir.as_deref().unwrap_or(&self.source_dir)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SOURCE_DIR)
    }
}
