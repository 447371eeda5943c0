use crate::Error;
use std::time::Duration;

/// Sample depths accepted for uncompressed PCM
pub const SUPPORTED_BITS_PER_SAMPLE: [u16; 4] = [8, 16, 24, 32];

/// Layout of the PCM samples inside a WAV container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Format {
    pub sample_rate: u32,
    pub channels: u16,
    pub bits_per_sample: u16,
}

impl Format {
    /// 8kHz mono 16-bit, a decoded narrowband telephony channel
    pub const TELEPHONY: Format = Format::new(8000, 1, 16);

    pub const fn new(sample_rate: u32, channels: u16, bits_per_sample: u16) -> Self {
        Self {
            sample_rate,
            channels,
            bits_per_sample,
        }
    }

    /// Check that the format can be described by a PCM `fmt ` chunk
    pub fn validate(&self) -> Result<(), Error> {
        if self.channels < 1 {
            return Err(Error::InvalidFormat("channel count must be at least 1"));
        }

        if self.sample_rate == 0 {
            return Err(Error::InvalidFormat("sample rate must be greater than 0"));
        }

        if !SUPPORTED_BITS_PER_SAMPLE.contains(&self.bits_per_sample) {
            return Err(Error::InvalidFormat(
                "bits per sample must be one of 8, 16, 24 or 32",
            ));
        }

        if self.checked_block_align().is_none() {
            return Err(Error::InvalidFormat("block align does not fit into 16 bits"));
        }

        if self.checked_byte_rate().is_none() {
            return Err(Error::InvalidFormat("byte rate does not fit into 32 bits"));
        }

        Ok(())
    }

    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Size of one frame (one sample of every channel) in bytes
    ///
    /// Saturates for formats rejected by [`Format::validate`].
    pub fn block_align(&self) -> u16 {
        self.checked_block_align().unwrap_or(u16::MAX)
    }

    /// Bytes of sample data per second of audio
    ///
    /// Saturates for formats rejected by [`Format::validate`].
    pub fn byte_rate(&self) -> u32 {
        self.checked_byte_rate().unwrap_or(u32::MAX)
    }

    /// Playback duration of the given number of samples (counted over all channels)
    pub fn duration(&self, samples: usize) -> Duration {
        if self.sample_rate == 0 || self.channels == 0 {
            return Duration::ZERO;
        }

        let frames = samples as u64 / u64::from(self.channels);
        let nanos = u128::from(frames) * 1_000_000_000 / u128::from(self.sample_rate);

        Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
    }

    fn checked_block_align(&self) -> Option<u16> {
        self.channels.checked_mul(self.bytes_per_sample())
    }

    fn checked_byte_rate(&self) -> Option<u32> {
        self.sample_rate
            .checked_mul(u32::from(self.checked_block_align()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn telephony() {
        let format = Format::TELEPHONY;

        format.validate().unwrap();
        assert_eq!(format.bytes_per_sample(), 2);
        assert_eq!(format.block_align(), 2);
        assert_eq!(format.byte_rate(), 16000);
    }

    #[test]
    fn derived_fields() {
        let format = Format::new(48000, 2, 24);

        format.validate().unwrap();
        assert_eq!(format.block_align(), 6);
        assert_eq!(format.byte_rate(), 288000);
    }

    #[test]
    fn rejects_zero_channels() {
        let err = Format::new(8000, 0, 16).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidFormat(_)));
    }

    #[test]
    fn rejects_zero_sample_rate() {
        let err = Format::new(0, 1, 16).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidFormat(_)));
    }

    #[test]
    fn rejects_unsupported_depth() {
        for bits in [0, 4, 12, 20, 64] {
            let err = Format::new(8000, 1, bits).validate().unwrap_err();
            assert!(matches!(err, Error::InvalidFormat(_)), "bits {bits}");
        }
    }

    #[test]
    fn rejects_overflowing_byte_rate() {
        let err = Format::new(u32::MAX, 2, 32).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidFormat(_)));

        let err = Format::new(8000, u16::MAX, 32).validate().unwrap_err();
        assert!(matches!(err, Error::InvalidFormat(_)));
    }

    #[test]
    fn duration() {
        assert_eq!(Format::TELEPHONY.duration(8000), Duration::from_secs(1));
        assert_eq!(Format::TELEPHONY.duration(160), Duration::from_millis(20));
        assert_eq!(
            Format::new(8000, 2, 16).duration(8000),
            Duration::from_millis(500)
        );
        assert_eq!(Format::TELEPHONY.duration(0), Duration::ZERO);
    }
}
