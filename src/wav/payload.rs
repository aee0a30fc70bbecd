//! Locating the PCM payload inside a WAV file
//!
//! Two strategies are offered. `ReverseScan` looks for the last `data`
//! marker after the fingerprint and takes everything past its size field to
//! the end of the file. `ChunkWalk` follows the size-prefixed RIFF
//! sub-chunks from offset 12 and takes exactly the declared `data` body,
//! which is unambiguous when other chunks follow the audio.

use std::ops::Range;

use serde::Serialize;

use crate::wav::fingerprint::HEADER_LEN;

/// ASCII id of the audio data sub-chunk
pub const DATA_MARKER: &[u8; 4] = b"data";

/// File offset of the first sub-chunk (after `RIFF`, size and `WAVE`)
const FIRST_CHUNK_OFFSET: usize = 12;

/// Chunk id plus little-endian `u32` size
const CHUNK_HEADER_LEN: usize = 8;

/// How the payload start is found
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum MarkerSearch {
    /// Last `data` marker after the fingerprint, payload runs to end of file
    #[default]
    ReverseScan,
    /// Walk RIFF sub-chunks and take the declared `data` chunk body
    ChunkWalk,
}

/// Byte range of the payload within `file`, or `None` if no data chunk can be
/// located.
pub fn locate_payload(file: &[u8], search: MarkerSearch) -> Option<Range<usize>> {
    match search {
        MarkerSearch::ReverseScan => reverse_scan(file),
        MarkerSearch::ChunkWalk => chunk_walk(file),
    }
}

fn reverse_scan(file: &[u8]) -> Option<Range<usize>> {
    let region = file.get(HEADER_LEN..)?;
    let marker = region
        .windows(DATA_MARKER.len())
        .rposition(|window| window == DATA_MARKER)?;

    // A size field cut off by EOF leaves an empty payload.
    let start = (HEADER_LEN + marker + CHUNK_HEADER_LEN).min(file.len());
    Some(start..file.len())
}

fn chunk_walk(file: &[u8]) -> Option<Range<usize>> {
    let mut offset = FIRST_CHUNK_OFFSET;

    while let Some(header) = file.get(offset..offset.checked_add(CHUNK_HEADER_LEN)?) {
        let size = u32::from_le_bytes([header[4], header[5], header[6], header[7]]) as usize;
        let body = offset + CHUNK_HEADER_LEN;

        if &header[..4] == DATA_MARKER {
            // Streaming writers leave 0xFFFFFFFF; any overrun means "to EOF".
            let end = body.saturating_add(size).min(file.len());
            return Some(body..end);
        }

        // Odd-sized chunks carry one pad byte.
        offset = body.checked_add(size)?.checked_add(size & 1)?;
    }

    None
}
