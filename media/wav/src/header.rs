use crate::{Error, Format, LE};
use byteorder::ReadBytesExt;
use bytes::BufMut;
use std::io::{self, Cursor, Read};

/// Length of the canonical header written in front of the sample data
pub const HEADER_LEN: usize = 44;

/// Length of the `fmt ` chunk body for plain PCM
const FMT_CHUNK_LEN: u32 = 16;

/// `WAVE_FORMAT_PCM`
const FORMAT_TAG_PCM: u16 = 1;

/// Everything in a WAV stream that precedes the sample data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub format: Format,

    /// Length of the `data` chunk in bytes, excluding the pad byte
    pub data_len: u32,
}

impl Header {
    /// Create the header for `samples` samples (counted over all channels) of the given format
    pub fn for_samples(format: Format, samples: usize) -> Result<Self, Error> {
        format.validate()?;

        if samples % usize::from(format.channels) != 0 {
            return Err(Error::PartialFrame {
                samples,
                channels: format.channels,
            });
        }

        let data_len = (samples as u64).saturating_mul(u64::from(format.bytes_per_sample()));

        // RIFF size covers "WAVE", both chunk headers, the fmt body, the data and its padding
        let riff_len = 4 + 8 + u64::from(FMT_CHUNK_LEN) + 8 + data_len + (data_len & 1);

        if riff_len > u64::from(u32::MAX) {
            return Err(Error::TooLarge(data_len));
        }

        Ok(Self {
            format,
            data_len: u32::try_from(data_len).map_err(|_| Error::TooLarge(data_len))?,
        })
    }

    /// Number of samples (counted over all channels) in the data chunk
    pub fn sample_count(&self) -> usize {
        self.data_len
            .checked_div(u32::from(self.format.bytes_per_sample()))
            .unwrap_or(0) as usize
    }

    /// Number of zero bytes following the data chunk to keep it word aligned
    pub fn padding(&self) -> usize {
        (self.data_len & 1) as usize
    }

    /// Value of the RIFF chunk size field
    pub fn riff_len(&self) -> u32 {
        (HEADER_LEN as u32 - 8)
            .saturating_add(self.data_len)
            .saturating_add(self.data_len & 1)
    }

    /// Serialize the header, it must be followed by exactly `data_len` bytes of samples
    pub fn encode(&self, buf: &mut impl BufMut) {
        buf.put_slice(b"RIFF");
        buf.put_u32_le(self.riff_len());
        buf.put_slice(b"WAVE");

        buf.put_slice(b"fmt ");
        buf.put_u32_le(FMT_CHUNK_LEN);
        buf.put_u16_le(FORMAT_TAG_PCM);
        buf.put_u16_le(self.format.channels);
        buf.put_u32_le(self.format.sample_rate);
        buf.put_u32_le(self.format.byte_rate());
        buf.put_u16_le(self.format.block_align());
        buf.put_u16_le(self.format.bits_per_sample);

        buf.put_slice(b"data");
        buf.put_u32_le(self.data_len);
    }

    /// Parse the header of a WAV stream
    ///
    /// Chunks other than `fmt ` and `data` are skipped. Returns the header and
    /// the offset of the first sample byte inside `i`.
    pub fn parse(i: &[u8]) -> Result<(Header, usize), Error> {
        let mut cursor = Cursor::new(i);

        if read_tag(&mut cursor)? != *b"RIFF" {
            return Err(Error::InvalidData("not a RIFF stream"));
        }

        let _riff_len = cursor.read_u32::<LE>().map_err(incomplete)?;

        if read_tag(&mut cursor)? != *b"WAVE" {
            return Err(Error::InvalidData("not a WAVE stream"));
        }

        let mut format = None;

        loop {
            if cursor.position() as usize >= i.len() {
                return Err(Error::InvalidData("missing data chunk"));
            }

            let tag = read_tag(&mut cursor)?;
            let len = cursor.read_u32::<LE>().map_err(incomplete)?;
            let body = cursor.position() as usize;

            match &tag {
                b"fmt " => format = Some(parse_fmt(&mut cursor, len)?),
                b"data" => {
                    let format = format.ok_or(Error::InvalidData("data chunk before fmt chunk"))?;

                    if chunk_end(body, len).is_none_or(|end| end > i.len()) {
                        return Err(Error::InvalidData("buffer seems incomplete"));
                    }

                    return Ok((
                        Header {
                            format,
                            data_len: len,
                        },
                        body,
                    ));
                }
                _ => {}
            }

            let next = chunk_end(body, len)
                .and_then(|end| end.checked_add((len & 1) as usize))
                .filter(|&next| next <= i.len())
                .ok_or(Error::InvalidData("buffer seems incomplete"))?;

            cursor.set_position(next as u64);
        }
    }
}

fn parse_fmt(cursor: &mut Cursor<&[u8]>, len: u32) -> Result<Format, Error> {
    if len < FMT_CHUNK_LEN {
        return Err(Error::InvalidData("fmt chunk too short"));
    }

    if cursor.read_u16::<LE>().map_err(incomplete)? != FORMAT_TAG_PCM {
        return Err(Error::InvalidData("not an uncompressed PCM stream"));
    }

    let channels = cursor.read_u16::<LE>().map_err(incomplete)?;
    let sample_rate = cursor.read_u32::<LE>().map_err(incomplete)?;
    let byte_rate = cursor.read_u32::<LE>().map_err(incomplete)?;
    let block_align = cursor.read_u16::<LE>().map_err(incomplete)?;
    let bits_per_sample = cursor.read_u16::<LE>().map_err(incomplete)?;

    let format = Format::new(sample_rate, channels, bits_per_sample);

    format
        .validate()
        .map_err(|_| Error::InvalidData("unsupported PCM format"))?;

    if byte_rate != format.byte_rate() || block_align != format.block_align() {
        return Err(Error::InvalidData("inconsistent byte rate or block align"));
    }

    Ok(format)
}

fn chunk_end(body: usize, len: u32) -> Option<usize> {
    body.checked_add(usize::try_from(len).ok()?)
}

fn read_tag(cursor: &mut Cursor<&[u8]>) -> Result<[u8; 4], Error> {
    let mut tag = [0u8; 4];
    cursor.read_exact(&mut tag).map_err(incomplete)?;
    Ok(tag)
}

fn incomplete(_: io::Error) -> Error {
    Error::InvalidData("buffer seems incomplete")
}
