//! Shared WAV fixture builders for integration tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Format fields written into a canonical 16-byte fmt chunk
#[derive(Debug, Clone, Copy)]
pub struct Format {
    pub channels: u16,
    pub sample_rate: u32,
    pub bits_per_sample: u16,
}

impl Format {
    pub const MONO_16K_16: Format = Format {
        channels: 1,
        sample_rate: 16000,
        bits_per_sample: 16,
    };

    pub fn new(channels: u16, sample_rate: u32, bits_per_sample: u16) -> Self {
        Format {
            channels,
            sample_rate,
            bits_per_sample,
        }
    }
}

/// Serialize a RIFF sub-chunk, padding odd bodies.
pub fn chunk(id: &[u8; 4], body: &[u8]) -> Vec<u8> {
    let mut bytes = id.to_vec();
    bytes.extend_from_slice(&(body.len() as u32).to_le_bytes());
    bytes.extend_from_slice(body);
    if body.len() % 2 == 1 {
        bytes.push(0);
    }
    bytes
}

/// A WAV file: fmt chunk followed by `chunks` in order.
pub fn wav_with_chunks(format: Format, chunks: &[Vec<u8>]) -> Vec<u8> {
    let block_align = format.channels * (format.bits_per_sample / 8);
    let mut fmt = Vec::new();
    fmt.extend_from_slice(&1u16.to_le_bytes());
    fmt.extend_from_slice(&format.channels.to_le_bytes());
    fmt.extend_from_slice(&format.sample_rate.to_le_bytes());
    fmt.extend_from_slice(&(format.sample_rate * u32::from(block_align)).to_le_bytes());
    fmt.extend_from_slice(&block_align.to_le_bytes());
    fmt.extend_from_slice(&format.bits_per_sample.to_le_bytes());

    let mut body = b"WAVE".to_vec();
    body.extend(chunk(b"fmt ", &fmt));
    for c in chunks {
        body.extend_from_slice(c);
    }

    let mut bytes = b"RIFF".to_vec();
    bytes.extend_from_slice(&(body.len() as u32).to_le_bytes());
    bytes.extend(body);
    bytes
}

/// A canonical 44-byte-header WAV file carrying `payload`.
pub fn wav(format: Format, payload: &[u8]) -> Vec<u8> {
    wav_with_chunks(format, &[chunk(b"data", payload)])
}

/// Payload of `len` bytes that never contains the `data` marker.
pub fn filler(len: usize, seed: u8) -> Vec<u8> {
    (0..len).map(|i| (i as u8 % 32).wrapping_add(seed % 32)).collect()
}

pub fn write(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, bytes).unwrap();
    path
}

/// Write a 16-bit mono WAV with hound.
pub fn write_hound(dir: &Path, name: &str, sample_rate: u32, samples: &[i16]) -> PathBuf {
    let path = dir.join(name);
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(&path, spec).unwrap();
    for &sample in samples {
        writer.write_sample(sample).unwrap();
    }
    writer.finalize().unwrap();
    path
}
