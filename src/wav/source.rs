//! A single input file, read fully into memory

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, WavcatError};
use crate::wav::fingerprint::{Fingerprint, FormatParameters};
use crate::wav::payload::{locate_payload, MarkerSearch};

/// An input WAV file with its fingerprint cut out.
///
/// The payload is located on demand so that callers can compare
/// fingerprints before deciding whether the payload matters at all.
#[derive(Debug)]
pub struct WavSource {
    path: PathBuf,
    fingerprint: Fingerprint,
    bytes: Vec<u8>,
}

impl WavSource {
    /// Read `path` and extract its fingerprint.
    ///
    /// # Errors
    /// * `FileReadError` - If the file cannot be read
    /// * `TruncatedHeader` - If the file is shorter than 36 bytes
    pub fn open(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|e| WavcatError::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let fingerprint = Fingerprint::from_file_bytes(path, &bytes)?;

        Ok(WavSource {
            path: path.to_path_buf(),
            fingerprint,
            bytes,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    pub fn params(&self) -> FormatParameters {
        self.fingerprint.params()
    }

    /// The raw PCM bytes of this file.
    ///
    /// # Errors
    /// * `MarkerNotFound` - If no data chunk can be located
    pub fn payload(&self, search: MarkerSearch) -> Result<&[u8]> {
        let range =
            locate_payload(&self.bytes, search).ok_or_else(|| WavcatError::MarkerNotFound {
                path: self.path.clone(),
            })?;
        Ok(&self.bytes[range])
    }
}
