//! WAV concatenation
//!
//! Merges the PCM payloads of same-format WAV files into one headerless
//! stream. The first file is the reference: every other file must carry a
//! byte-identical fingerprint, otherwise the whole operation is aborted and
//! nothing is written.

pub mod report;

use std::fs;
use std::path::Path;

use crate::error::{Result, WavcatError};
use crate::wav::{MarkerSearch, WavSource};

pub use report::{ConcatOutcome, ConcatReport, ConcatSummary, Diagnostic, Severity};

/// Minimum number of inputs for a concatenation to do anything
pub const MIN_INPUTS: usize = 2;

/// Options for [`WavConcatenator`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConcatOptions {
    /// How each file's payload is located
    pub marker_search: MarkerSearch,
}

/// Concatenates same-format WAV files into raw PCM.
#[derive(Debug, Clone, Default)]
pub struct WavConcatenator {
    options: ConcatOptions,
}

impl WavConcatenator {
    pub fn new(options: ConcatOptions) -> Self {
        WavConcatenator { options }
    }

    /// Concatenate `files` in order and write the raw PCM to `output`.
    ///
    /// Fewer than two files is a no-op: the report carries an
    /// `InsufficientInputs` diagnostic and `output` is not created.
    ///
    /// # Arguments
    /// * `files` - Input WAV files; the first one is the format reference
    /// * `output` - Destination of the headerless PCM stream (overwritten)
    ///
    /// # Errors
    /// * `FileReadError` / `TruncatedHeader` - If an input cannot be read
    /// * `FormatMismatch` - If an input's header differs from the reference
    /// * `MarkerNotFound` - If an input has no locatable data chunk
    /// * `FileWriteError` - If `output` cannot be written
    ///
    /// On any error the output file is left untouched.
    pub fn concatenate<P: AsRef<Path>>(&self, files: &[P], output: &Path) -> Result<ConcatReport> {
        if files.len() < MIN_INPUTS {
            return Ok(ConcatReport {
                outcome: ConcatOutcome::Skipped {
                    file_count: files.len(),
                },
                diagnostics: vec![Diagnostic::InsufficientInputs {
                    file_count: files.len(),
                }],
            });
        }

        let search = self.options.marker_search;

        let reference = WavSource::open(files[0].as_ref())?;
        let mut pcm = reference.payload(search)?.to_vec();
        let reference_params = reference.params();
        let diagnostics = Diagnostic::for_format(reference.path(), &reference_params);

        for file in &files[1..] {
            let source = WavSource::open(file.as_ref())?;
            if let Some(offset) = source.fingerprint().first_difference(reference.fingerprint()) {
                return Err(WavcatError::FormatMismatch {
                    reference: reference.path().to_path_buf(),
                    reference_header: *reference.fingerprint(),
                    path: source.path().to_path_buf(),
                    header: *source.fingerprint(),
                    offset,
                });
            }

            pcm.extend_from_slice(source.payload(search)?);
        }

        fs::write(output, &pcm).map_err(|e| WavcatError::FileWriteError {
            path: output.to_path_buf(),
            source: e,
        })?;

        Ok(ConcatReport {
            outcome: ConcatOutcome::Completed(ConcatSummary::new(
                files.len(),
                output,
                &pcm,
                &reference_params,
            )),
            diagnostics,
        })
    }
}

/// Concatenate with default options (reverse marker scan).
pub fn concatenate<P: AsRef<Path>>(files: &[P], output: &Path) -> Result<ConcatReport> {
    WavConcatenator::default().concatenate(files, output)
}
