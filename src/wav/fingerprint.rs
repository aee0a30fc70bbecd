//! WAV header fingerprint
//!
//! The 28 bytes at file offsets 8..36 hold the `WAVE` form type and the
//! canonical 16-byte `fmt ` chunk. Two files can be concatenated as raw PCM
//! only when these bytes are identical, so the region is compared verbatim
//! and decoded separately for reporting.
//!
//! Layout relative to the start of the fingerprint (all little-endian):
//!
//! | offset | size | field            |
//! |--------|------|------------------|
//! | 0      | 4    | form type `WAVE` |
//! | 4      | 4    | chunk id `fmt `  |
//! | 8      | 4    | fmt chunk size   |
//! | 12     | 2    | audio format tag |
//! | 14     | 2    | channel count    |
//! | 16     | 4    | sample rate      |
//! | 20     | 4    | byte rate        |
//! | 24     | 2    | block align      |
//! | 26     | 2    | bits per sample  |

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::error::{Result, WavcatError};

/// Bytes skipped before the fingerprint: `RIFF` tag plus the container size.
pub const RIFF_PREAMBLE_LEN: usize = 8;

/// Size of the fingerprint region.
pub const FINGERPRINT_LEN: usize = 28;

/// File offset where the fingerprint ends and the payload region begins.
pub const HEADER_LEN: usize = RIFF_PREAMBLE_LEN + FINGERPRINT_LEN;

/// Channel count accepted without a diagnostic
pub const SUPPORTED_CHANNELS: u16 = 1;

/// Sample rates accepted without a diagnostic
pub const SUPPORTED_SAMPLE_RATES: [u32; 6] = [8000, 16000, 24000, 32000, 44100, 48000];

/// Bit depths accepted without a diagnostic
pub const SUPPORTED_BITS_PER_SAMPLE: [u16; 3] = [16, 24, 32];

const FORM_TYPE: usize = 0;
const FMT_CHUNK_ID: usize = 4;
const FMT_CHUNK_SIZE: usize = 8;
const FORMAT_TAG: usize = 12;
const CHANNELS: usize = 14;
const SAMPLE_RATE: usize = 16;
const BYTE_RATE: usize = 20;
const BLOCK_ALIGN: usize = 24;
const BITS_PER_SAMPLE: usize = 26;

/// The 28-byte format region used to test format equality across files.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint([u8; FINGERPRINT_LEN]);

impl Fingerprint {
    /// Wrap raw fingerprint bytes.
    pub fn from_bytes(bytes: [u8; FINGERPRINT_LEN]) -> Self {
        Fingerprint(bytes)
    }

    /// Cut the fingerprint out of a whole file's contents.
    ///
    /// # Errors
    /// * `TruncatedHeader` - If the file is shorter than [`HEADER_LEN`]
    pub fn from_file_bytes(path: &Path, bytes: &[u8]) -> Result<Self> {
        let region = bytes
            .get(RIFF_PREAMBLE_LEN..HEADER_LEN)
            .ok_or_else(|| WavcatError::TruncatedHeader {
                path: path.to_path_buf(),
                len: bytes.len(),
            })?;

        let mut fingerprint = [0u8; FINGERPRINT_LEN];
        fingerprint.copy_from_slice(region);
        Ok(Fingerprint(fingerprint))
    }

    /// Raw fingerprint bytes
    pub fn as_bytes(&self) -> &[u8; FINGERPRINT_LEN] {
        &self.0
    }

    /// Decode the named format fields.
    pub fn params(&self) -> FormatParameters {
        FormatParameters::decode(self)
    }

    /// Offset of the first byte that differs from `other`, if any.
    pub fn first_difference(&self, other: &Fingerprint) -> Option<usize> {
        self.0.iter().zip(other.0.iter()).position(|(a, b)| a != b)
    }

    fn u16_at(&self, offset: usize) -> u16 {
        u16::from_le_bytes([self.0[offset], self.0[offset + 1]])
    }

    fn u32_at(&self, offset: usize) -> u32 {
        u32::from_le_bytes([
            self.0[offset],
            self.0[offset + 1],
            self.0[offset + 2],
            self.0[offset + 3],
        ])
    }

    fn tag_at(&self, offset: usize) -> [u8; 4] {
        [
            self.0[offset],
            self.0[offset + 1],
            self.0[offset + 2],
            self.0[offset + 3],
        ]
    }
}

/// Hex dump in 4-byte groups, e.g. `57415645 666d7420 ...`
impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, group) in self.0.chunks(4).enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            for byte in group {
                write!(f, "{:02x}", byte)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({})", self)
    }
}

/// Format fields decoded from a [`Fingerprint`].
///
/// These values are advisory. Concatenation is gated on fingerprint
/// equality alone; unsupported values only produce diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormatParameters {
    /// Form type, `WAVE` for well-formed files
    pub form_type: [u8; 4],
    /// First chunk id, `fmt ` for well-formed files
    pub fmt_chunk_id: [u8; 4],
    /// Declared size of the fmt chunk body
    pub fmt_chunk_size: u32,
    /// 1 = integer PCM, 3 = IEEE float, 0xFFFE = extensible
    pub format_tag: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
}

impl FormatParameters {
    /// Decode all fields at their fixed offsets.
    pub fn decode(fingerprint: &Fingerprint) -> Self {
        FormatParameters {
            form_type: fingerprint.tag_at(FORM_TYPE),
            fmt_chunk_id: fingerprint.tag_at(FMT_CHUNK_ID),
            fmt_chunk_size: fingerprint.u32_at(FMT_CHUNK_SIZE),
            format_tag: fingerprint.u16_at(FORMAT_TAG),
            channels: fingerprint.u16_at(CHANNELS),
            sample_rate: fingerprint.u32_at(SAMPLE_RATE),
            byte_rate: fingerprint.u32_at(BYTE_RATE),
            block_align: fingerprint.u16_at(BLOCK_ALIGN),
            bits_per_sample: fingerprint.u16_at(BITS_PER_SAMPLE),
        }
    }

    pub fn has_supported_channels(&self) -> bool {
        self.channels == SUPPORTED_CHANNELS
    }

    pub fn has_supported_sample_rate(&self) -> bool {
        SUPPORTED_SAMPLE_RATES.contains(&self.sample_rate)
    }

    pub fn has_supported_bits_per_sample(&self) -> bool {
        SUPPORTED_BITS_PER_SAMPLE.contains(&self.bits_per_sample)
    }

    /// Number of samples held in `bytes` of PCM at this bit depth.
    ///
    /// Counted in bits so depths that are not a multiple of 8 (12-bit, 4-bit)
    /// come out exact. A bit depth of 0 yields 0.
    pub fn samples_in(&self, bytes: u64) -> u64 {
        (u128::from(bytes) * 8)
            .checked_div(u128::from(self.bits_per_sample))
            .map_or(0, |samples| samples as u64)
    }
}
