//! Conversion of a single recording

use g711::{Decoder, Scale};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;
use wav::Format;

/// Errors encountered while converting a single recording
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("failed to read {}: {}", .path.display(), .source)]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {}", .path.display(), .source)]
    Write { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Container(#[from] wav::Error),
    /// Reserved for codecs which, unlike μ-law, can encounter undecodable input
    #[error("failed to decode samples, {0}")]
    DecodeAnomaly(String),
}

/// How recordings are decoded and stored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Format of the recording, which is also the format of the WAV output
    pub format: Format,
    pub scale: Scale,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            format: Format::TELEPHONY,
            scale: Scale::default(),
        }
    }
}

/// Summary of a successful conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion {
    pub samples: usize,
    pub bytes_written: usize,
    pub duration: Duration,
}

/// Decode raw μ-law data and wrap it into a WAV container
pub fn convert_bytes(raw: &[u8], options: &Options) -> Result<Vec<u8>, ConvertError> {
    let mut samples = Vec::new();
    Decoder::with_scale(options.scale).decode(raw, &mut samples);

    Ok(wav::write(&samples, options.format)?)
}

/// Convert the recording at `source` into a WAV file at `destination`
pub fn convert_file(
    source: &Path,
    destination: &Path,
    options: &Options,
) -> Result<Conversion, ConvertError> {
    let raw = fs::read(source).map_err(|e| ConvertError::Read {
        path: source.to_path_buf(),
        source: e,
    })?;

    let container = convert_bytes(&raw, options)?;

    fs::write(destination, &container).map_err(|e| ConvertError::Write {
        path: destination.to_path_buf(),
        source: e,
    })?;

    let conversion = Conversion {
        samples: raw.len(),
        bytes_written: container.len(),
        duration: options.format.duration(raw.len()),
    };

    log::debug!(
        "converted {} -> {}, {} samples ({:?})",
        source.display(),
        destination.display(),
        conversion.samples,
        conversion.duration
    );

    Ok(conversion)
}
