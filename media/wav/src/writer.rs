use crate::{Error, Format, HEADER_LEN, Header};
use bytes::BufMut;
use std::io;

/// Serialize the samples into a complete WAV byte stream
///
/// Samples are interleaved when `format.channels > 1`. They are stored with
/// `format.bits_per_sample` bits each: 8-bit output is offset binary, wider
/// depths keep the 16-bit value in their most significant bits.
pub fn write(samples: &[i16], format: Format) -> Result<Vec<u8>, Error> {
    let header = Header::for_samples(format, samples.len())?;

    let mut buf = Vec::with_capacity(HEADER_LEN + header.data_len as usize + header.padding());

    header.encode(&mut buf);
    put_samples(&mut buf, samples, format.bits_per_sample);
    buf.put_bytes(0, header.padding());

    Ok(buf)
}

/// Serialize the samples into a WAV byte stream and write it to `sink`
pub fn write_to<W: io::Write>(mut sink: W, samples: &[i16], format: Format) -> Result<(), Error> {
    let buf = write(samples, format)?;

    sink.write_all(&buf)?;
    sink.flush()?;

    Ok(())
}

fn put_samples(buf: &mut impl BufMut, samples: &[i16], bits_per_sample: u16) {
    match bits_per_sample {
        8 => {
            for &sample in samples {
                buf.put_u8(((sample >> 8) + 128) as u8);
            }
        }
        16 => {
            for &sample in samples {
                buf.put_i16_le(sample);
            }
        }
        24 => {
            for &sample in samples {
                buf.put_int_le(i64::from(sample) << 8, 3);
            }
        }
        32 => {
            for &sample in samples {
                buf.put_i32_le(i32::from(sample) << 16);
            }
        }
        _ => unreachable!("bits per sample are validated by Header::for_samples"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(buf: &[u8]) -> &[u8] {
        let (header, offset) = Header::parse(buf).unwrap();
        &buf[offset..offset + header.data_len as usize]
    }

    #[test]
    fn empty() {
        let buf = write(&[], Format::TELEPHONY).unwrap();

        assert_eq!(buf.len(), HEADER_LEN);

        let (header, offset) = Header::parse(&buf).unwrap();
        assert_eq!(header.format, Format::TELEPHONY);
        assert_eq!(header.data_len, 0);
        assert_eq!(offset, HEADER_LEN);
    }

    #[test]
    fn pcm16_little_endian() {
        let buf = write(&[1, -1, 0x1234, i16::MIN], Format::TELEPHONY).unwrap();

        assert_eq!(buf.len(), HEADER_LEN + 8);
        assert_eq!(
            data(&buf),
            [0x01, 0x00, 0xFF, 0xFF, 0x34, 0x12, 0x00, 0x80]
        );
    }

    #[test]
    fn pcm8_offset_binary_and_padding() {
        let buf = write(&[0, i16::MIN, i16::MAX], Format::new(8000, 1, 8)).unwrap();

        // 3 data bytes and one pad byte
        assert_eq!(buf.len(), HEADER_LEN + 4);
        assert_eq!(data(&buf), [0x80, 0x00, 0xFF]);
        assert_eq!(buf[HEADER_LEN + 3], 0);
    }

    #[test]
    fn pcm24() {
        let buf = write(&[0x1234, -1], Format::new(8000, 1, 24)).unwrap();

        assert_eq!(data(&buf), [0x00, 0x34, 0x12, 0x00, 0xFF, 0xFF]);
    }

    #[test]
    fn pcm32() {
        let buf = write(&[0x1234, -2], Format::new(8000, 1, 32)).unwrap();

        assert_eq!(
            data(&buf),
            [0x00, 0x00, 0x34, 0x12, 0x00, 0x00, 0xFE, 0xFF]
        );
    }

    #[test]
    fn stereo_interleaved() {
        let format = Format::new(8000, 2, 16);
        let buf = write(&[1, 2, 3, 4], format).unwrap();

        let (header, _) = Header::parse(&buf).unwrap();
        assert_eq!(header.format.block_align(), 4);
        assert_eq!(header.sample_count(), 4);
        assert_eq!(data(&buf), [1, 0, 2, 0, 3, 0, 4, 0]);
    }

    #[test]
    fn partial_frame() {
        let err = write(&[1, 2, 3], Format::new(8000, 2, 16)).unwrap_err();
        assert!(matches!(
            err,
            Error::PartialFrame {
                samples: 3,
                channels: 2
            }
        ));

        let mut sink = Vec::new();
        let err = write_to(&mut sink, &[1, 2, 3, 4], Format::new(8000, 3, 8)).unwrap_err();
        assert!(matches!(err, Error::PartialFrame { .. }));
        assert!(sink.is_empty());
    }

    #[test]
    fn invalid_format() {
        for format in [
            Format::new(8000, 0, 16),
            Format::new(0, 1, 16),
            Format::new(8000, 1, 12),
        ] {
            let err = write(&[0, 1, 2], format).unwrap_err();
            assert!(matches!(err, Error::InvalidFormat(_)), "{format:?}");
        }
    }

    #[test]
    fn write_to_sink() {
        let mut sink = Vec::new();
        write_to(&mut sink, &[7, 8, 9], Format::TELEPHONY).unwrap();

        assert_eq!(sink, write(&[7, 8, 9], Format::TELEPHONY).unwrap());
    }

    #[test]
    fn write_to_failing_sink() {
        struct Broken;

        impl io::Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::other("disk on fire"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = write_to(Broken, &[1], Format::TELEPHONY).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
