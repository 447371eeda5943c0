//! G.711 μ-law algorithm aka. PCMU

/// Offset added to the magnitude before shifting it into its segment
const BIAS: i16 = 33;

/// Expansion of every possible μ-law code at 14-bit scale
const TABLE: [i16; 256] = {
    let mut table = [0i16; 256];
    let mut code = 0;

    while code < 256 {
        table[code] = expand(code as u8);
        code += 1;
    }

    table
};

const fn expand(y: u8) -> i16 {
    // μ-law codes are transmitted with all bits inverted
    let y = !y;

    let exponent = (y >> 4) & 0x7;
    let mantissa = (y & 0xF) as i16;

    let magnitude = (((mantissa << 1) + BIAS) << exponent) - BIAS;

    if y & 0x80 != 0 { -magnitude } else { magnitude }
}

/// Amplitude scale of decoded samples
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    /// G.711 reconstruction levels, in the range `-8031..=8031`
    #[default]
    Linear14,
    /// Reconstruction levels left-aligned into 16 bits, in the range `-32124..=32124`
    Linear16,
}

impl Scale {
    #[inline]
    fn apply(self, sample: i16) -> i16 {
        match self {
            Scale::Linear14 => sample,
            Scale::Linear16 => sample << 2,
        }
    }
}

/// Decode a μ-law sample to an i16 audio sample
#[inline]
pub fn decode(y: u8) -> i16 {
    TABLE[usize::from(y)]
}

/// Decode a buffer of μ-law samples, one output sample per input byte
pub fn decode_samples(data: &[u8]) -> Vec<i16> {
    data.iter().copied().map(decode).collect()
}

/// μ-law decoder producing samples at a configurable [`Scale`]
#[derive(Debug, Default, Clone, Copy)]
pub struct Decoder {
    scale: Scale,
}

impl Decoder {
    /// Create a new decoder producing 14-bit samples
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new decoder producing samples at the given scale
    pub fn with_scale(scale: Scale) -> Self {
        Self { scale }
    }

    /// Scale of the samples produced by this decoder
    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// Decode the given μ-law data, the decoded audio samples will be appended to `out`
    pub fn decode(&self, data: &[u8], out: &mut Vec<i16>) {
        out.reserve(data.len());
        out.extend(data.iter().map(|&y| self.scale.apply(decode(y))));
    }
}
