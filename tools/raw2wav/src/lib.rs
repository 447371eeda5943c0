//! Conversion of headerless G.711 μ-law recordings (`.raw`) into PCM WAV files.
//!
//! [`convert`] turns a single recording into a WAV file, [`batch`] does so for
//! every recording found in a directory, [`console`] reports such a batch to the user.

pub mod batch;
mod config;
pub mod console;
pub mod convert;

pub use batch::{BatchError, BatchReport, FileOutcome, Job};
pub use config::Config;
pub use console::Status;
pub use convert::{Conversion, ConvertError, Options, convert_bytes, convert_file};
