//! Error handling for wavcat
//!
//! Every fatal condition aborts the whole concatenation before the output
//! file is touched, so an error always means "nothing was written".

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::wav::Fingerprint;

/// Result type alias for wavcat operations
pub type Result<T> = std::result::Result<T, WavcatError>;

/// Main error type for wavcat operations
#[derive(Error, Debug)]
pub enum WavcatError {
    // File Errors
    #[error("Failed to read file: {path}: {source}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}: {source}")]
    FileWriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk directory: {path}: {source}")]
    Discovery {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    // Format Errors
    #[error("File too short for a WAV header: {path} ({len} bytes, need at least 36)")]
    TruncatedHeader { path: PathBuf, len: usize },

    #[error("No data chunk marker found in {path}")]
    MarkerNotFound { path: PathBuf },

    #[error(
        "WAV header of {path} does not match {reference} (first difference at header byte {offset})\n  \
         reference: {reference_header}\n  \
         found:     {header}"
    )]
    FormatMismatch {
        reference: PathBuf,
        reference_header: Fingerprint,
        path: PathBuf,
        header: Fingerprint,
        offset: usize,
    },

    // Serialization Errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl WavcatError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            WavcatError::FileReadError { .. } => "FILE_READ_ERROR",
            WavcatError::FileWriteError { .. } => "FILE_WRITE_ERROR",
            WavcatError::Discovery { .. } => "DISCOVERY_ERROR",
            WavcatError::TruncatedHeader { .. } => "TRUNCATED_HEADER",
            WavcatError::MarkerNotFound { .. } => "MARKER_NOT_FOUND",
            WavcatError::FormatMismatch { .. } => "FORMAT_MISMATCH",
            WavcatError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// The file that caused the failure, if the error concerns one.
    pub fn path(&self) -> Option<&Path> {
        match self {
            WavcatError::FileReadError { path, .. }
            | WavcatError::FileWriteError { path, .. }
            | WavcatError::Discovery { path, .. }
            | WavcatError::TruncatedHeader { path, .. }
            | WavcatError::MarkerNotFound { path }
            | WavcatError::FormatMismatch { path, .. } => Some(path),
            WavcatError::Serialization(_) => None,
        }
    }

    /// Returns a user-friendly recovery suggestion.
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            WavcatError::FileReadError { .. } => Some("Check the file exists and is readable."),
            WavcatError::FileWriteError { .. } => {
                Some("Check the output directory exists and is writable.")
            }
            WavcatError::TruncatedHeader { .. } => {
                Some("The file is empty or cut off; remove it from the input set.")
            }
            WavcatError::MarkerNotFound { .. } => {
                Some("The file has no data chunk; re-export it as plain PCM WAV.")
            }
            WavcatError::FormatMismatch { .. } => {
                Some("Resample or re-encode the inputs so they share one format.")
            }
            WavcatError::Discovery { .. } | WavcatError::Serialization(_) => None,
        }
    }
}
