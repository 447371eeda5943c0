//! Canonical RIFF/WAVE container for uncompressed PCM audio.
//!
//! [`write`] serializes i16 samples together with a [`Format`] into a complete
//! WAV byte stream, [`Header::parse`] reads the header of such a stream back.

use std::io;

mod format;
mod header;
mod writer;

pub use format::{Format, SUPPORTED_BITS_PER_SAMPLE};
pub use header::{HEADER_LEN, Header};
pub use writer::{write, write_to};

type LE = byteorder::LittleEndian;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid format, {0}")]
    InvalidFormat(&'static str),
    #[error("{0} bytes of sample data do not fit into a RIFF container")]
    TooLarge(u64),
    #[error("{samples} samples do not form whole frames of {channels} channels")]
    PartialFrame { samples: usize, channels: u16 },
    #[error("invalid input data, {0}")]
    InvalidData(&'static str),
    #[error(transparent)]
    Io(#[from] io::Error),
}
