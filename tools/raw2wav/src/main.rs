use anyhow::Context;
use clap::Parser;
use g711::Scale;
use raw2wav::{Config, Options, console};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use wav::Format;

/// Convert G.711 μ-law encoded .raw recordings into WAV files
#[derive(Parser, Debug)]
#[command(name = "raw2wav")]
#[command(version)]
struct Args {
    /// Directory containing the .raw files
    #[arg(short, long, default_value = Config::DEFAULT_SOURCE_DIR)]
    dir: PathBuf,

    /// Directory to write the .wav files to (default: next to the .raw files)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Sample rate of the recordings in Hz
    #[arg(long, default_value_t = 8000)]
    sample_rate: u32,

    /// Number of interleaved channels in the recordings
    #[arg(long, default_value_t = 1)]
    channels: u16,

    /// Bits per sample of the WAV output (8, 16, 24 or 32), other than 16 implies --full-scale
    #[arg(long, default_value_t = 16)]
    bits: u16,

    /// Scale samples to 16-bit full scale instead of the 14-bit G.711 levels
    ///
    /// Always on for --bits other than 16, which are derived from 16-bit full scale samples.
    #[arg(long)]
    full_scale: bool,
}

impl Args {
    fn into_config(self) -> Config {
        Config {
            source_dir: self.dir,
            output_dir: self.output_dir,
            options: Options {
                format: Format::new(self.sample_rate, self.channels, self.bits),
                // 8-bit output keeps only the high byte, 14-bit levels would be close to silence
                scale: if self.full_scale || self.bits != 16 {
                    Scale::Linear16
                } else {
                    Scale::Linear14
                },
            },
        }
    }
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();

    let config = Args::parse().into_config();

    config
        .options
        .format
        .validate()
        .context("Invalid output format")?;

    let status = console::run(&config, &mut io::stdout().lock())?;

    Ok(status.into())
}
