//! Structured results of a concatenation
//!
//! The library does not log. Everything a caller may want to surface is
//! returned here and rendered by the CLI.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::wav::{FormatParameters, SUPPORTED_BITS_PER_SAMPLE, SUPPORTED_SAMPLE_RATES};

/// How loudly a diagnostic should be surfaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
}

/// A non-fatal observation made during a concatenation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Fewer than two inputs; nothing was written
    InsufficientInputs { file_count: usize },
    UnsupportedChannelCount { path: PathBuf, channels: u16 },
    UnsupportedSampleRate { path: PathBuf, sample_rate: u32 },
    UnsupportedBitDepth { path: PathBuf, bits_per_sample: u16 },
}

impl Diagnostic {
    /// Format warnings for a file whose fields fall outside the supported sets.
    pub fn for_format(path: &Path, params: &FormatParameters) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        if !params.has_supported_channels() {
            diagnostics.push(Diagnostic::UnsupportedChannelCount {
                path: path.to_path_buf(),
                channels: params.channels,
            });
        }
        if !params.has_supported_sample_rate() {
            diagnostics.push(Diagnostic::UnsupportedSampleRate {
                path: path.to_path_buf(),
                sample_rate: params.sample_rate,
            });
        }
        if !params.has_supported_bits_per_sample() {
            diagnostics.push(Diagnostic::UnsupportedBitDepth {
                path: path.to_path_buf(),
                bits_per_sample: params.bits_per_sample,
            });
        }

        diagnostics
    }

    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::InsufficientInputs { .. } => Severity::Info,
            _ => Severity::Warning,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::InsufficientInputs { file_count } => write!(
                f,
                "need at least 2 wav files to concatenate, got {}",
                file_count
            ),
            Diagnostic::UnsupportedChannelCount { path, channels } => write!(
                f,
                "{} has {} channels, only mono is supported",
                path.display(),
                channels
            ),
            Diagnostic::UnsupportedSampleRate { path, sample_rate } => write!(
                f,
                "{} has sample rate {} Hz, supported rates are {:?}",
                path.display(),
                sample_rate,
                SUPPORTED_SAMPLE_RATES
            ),
            Diagnostic::UnsupportedBitDepth {
                path,
                bits_per_sample,
            } => write!(
                f,
                "{} has {} bits per sample, supported depths are {:?}",
                path.display(),
                bits_per_sample,
                SUPPORTED_BITS_PER_SAMPLE
            ),
        }
    }
}

/// Statistics for a completed concatenation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConcatSummary {
    /// Number of input files merged
    pub file_count: usize,
    pub output: PathBuf,
    pub total_bytes: u64,
    /// `total_bytes * 8 / bits_per_sample`
    pub sample_count: u64,
    /// Reference file's sample rate
    pub sample_rate: u32,
    /// Reference file's bit depth
    pub bits_per_sample: u16,
    /// Whole minutes, integer-divided
    pub duration_minutes: u64,
    pub duration_secs: f64,
    /// Hex SHA-256 of the written bytes
    pub sha256: String,
}

impl ConcatSummary {
    /// Derive the statistics from the final buffer and the reference format.
    pub fn new(
        file_count: usize,
        output: &Path,
        pcm: &[u8],
        reference: &FormatParameters,
    ) -> Self {
        let total_bytes = pcm.len() as u64;
        let sample_count = reference.samples_in(total_bytes);
        let sample_rate = u64::from(reference.sample_rate);
        let duration_minutes = sample_count.checked_div(sample_rate).unwrap_or(0) / 60;
        let duration_secs = if sample_rate > 0 {
            sample_count as f64 / sample_rate as f64
        } else {
            0.0
        };

        ConcatSummary {
            file_count,
            output: output.to_path_buf(),
            total_bytes,
            sample_count,
            sample_rate: reference.sample_rate,
            bits_per_sample: reference.bits_per_sample,
            duration_minutes,
            duration_secs,
            sha256: sha256_hex(pcm),
        }
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    Sha256::digest(bytes)
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

/// What the concatenation did
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ConcatOutcome {
    /// Too few inputs; no output file was created
    Skipped { file_count: usize },
    Completed(ConcatSummary),
}

/// Outcome plus every diagnostic raised along the way
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConcatReport {
    pub outcome: ConcatOutcome,
    pub diagnostics: Vec<Diagnostic>,
}

impl ConcatReport {
    pub fn summary(&self) -> Option<&ConcatSummary> {
        match &self.outcome {
            ConcatOutcome::Completed(summary) => Some(summary),
            ConcatOutcome::Skipped { .. } => None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.summary().is_some()
    }

    /// Number of input files that ended up in the output
    pub fn files_processed(&self) -> usize {
        self.summary().map_or(0, |s| s.file_count)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity() == Severity::Warning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wav::Fingerprint;
    use approx::assert_relative_eq;
    use pretty_assertions::assert_eq;

    fn params(channels: u16, sample_rate: u32, bits: u16) -> FormatParameters {
        let mut bytes = [0u8; 28];
        bytes[0..4].copy_from_slice(b"WAVE");
        bytes[4..8].copy_from_slice(b"fmt ");
        bytes[8..12].copy_from_slice(&16u32.to_le_bytes());
        bytes[12..14].copy_from_slice(&1u16.to_le_bytes());
        bytes[14..16].copy_from_slice(&channels.to_le_bytes());
        bytes[16..20].copy_from_slice(&sample_rate.to_le_bytes());
        bytes[26..28].copy_from_slice(&bits.to_le_bytes());
        Fingerprint::from_bytes(bytes).params()
    }

    #[test]
    fn test_summary_statistics() {
        let pcm = vec![0u8; 4500];
        let summary = ConcatSummary::new(3, Path::new("out.pcm"), &pcm, &params(1, 16000, 16));

        assert_eq!(summary.total_bytes, 4500);
        assert_eq!(summary.sample_count, 2250);
        assert_eq!(summary.duration_minutes, 0);
        assert_relative_eq!(summary.duration_secs, 2250.0 / 16000.0);
        assert_eq!(summary.sha256.len(), 64);
    }

    #[test]
    fn test_summary_minutes_are_floored() {
        // 16-bit mono at 8 kHz: 16000 bytes per second, 150 s of audio
        let pcm = vec![0u8; 16000 * 150];
        let summary = ConcatSummary::new(2, Path::new("out.pcm"), &pcm, &params(1, 8000, 16));

        assert_eq!(summary.sample_count, 1_200_000);
        assert_eq!(summary.duration_minutes, 2);
        assert_relative_eq!(summary.duration_secs, 150.0);
    }

    #[test]
    fn test_summary_twelve_bit_samples() {
        // 1.5 bytes per sample
        let pcm = vec![0u8; 3000];
        let summary = ConcatSummary::new(2, Path::new("out.pcm"), &pcm, &params(1, 16000, 12));

        assert_eq!(summary.sample_count, 2000);
        assert_relative_eq!(summary.duration_secs, 2000.0 / 16000.0);
    }

    #[test]
    fn test_summary_sub_byte_samples() {
        let pcm = vec![0u8; 10];
        let summary = ConcatSummary::new(2, Path::new("out.pcm"), &pcm, &params(1, 0, 4));

        assert_eq!(summary.sample_count, 20);
        assert_eq!(summary.duration_minutes, 0);
        assert_eq!(summary.duration_secs, 0.0);
    }

    #[test]
    fn test_summary_zero_bit_depth() {
        let pcm = vec![0u8; 10];
        let summary = ConcatSummary::new(2, Path::new("out.pcm"), &pcm, &params(1, 16000, 0));

        assert_eq!(summary.sample_count, 0);
        assert_eq!(summary.duration_minutes, 0);
    }

    #[test]
    fn test_sha256_of_empty_input() {
        assert_eq!(
            sha256_hex(&[]),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_format_diagnostics() {
        let path = Path::new("x.wav");
        assert!(Diagnostic::for_format(path, &params(1, 48000, 24)).is_empty());

        let diagnostics = Diagnostic::for_format(path, &params(2, 22050, 8));
        assert_eq!(
            diagnostics,
            vec![
                Diagnostic::UnsupportedChannelCount {
                    path: path.to_path_buf(),
                    channels: 2
                },
                Diagnostic::UnsupportedSampleRate {
                    path: path.to_path_buf(),
                    sample_rate: 22050
                },
                Diagnostic::UnsupportedBitDepth {
                    path: path.to_path_buf(),
                    bits_per_sample: 8
                },
            ]
        );
        assert!(diagnostics.iter().all(|d| d.severity() == Severity::Warning));
    }

    #[test]
    fn test_report_serializes_with_tags() {
        let report = ConcatReport {
            outcome: ConcatOutcome::Skipped { file_count: 1 },
            diagnostics: vec![Diagnostic::InsufficientInputs { file_count: 1 }],
        };
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["outcome"]["status"], "skipped");
        assert_eq!(json["diagnostics"][0]["kind"], "insufficient_inputs");
        assert_eq!(report.files_processed(), 0);
        assert_eq!(report.warnings().count(), 0);
    }
}
