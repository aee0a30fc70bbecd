//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command. This is the only layer
//! that talks to the logger; the library hands back structured reports.

use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::concat::{
    ConcatOptions, ConcatOutcome, ConcatReport, Diagnostic, Severity, WavConcatenator,
};
use crate::discovery::find_wav_files;
use crate::error::{Result, WavcatError};
use crate::wav::{MarkerSearch, WavSource};

/// Concatenate every `.wav` file under `wav_file_path` into `output_file`.
pub fn concat(
    wav_file_path: &Path,
    output_file: &Path,
    marker_search: MarkerSearch,
    json: bool,
) -> Result<ConcatReport> {
    info!("Start concatenate wav files");

    info!("Look for wav files in {}", wav_file_path.display());
    let wav_files = find_wav_files(wav_file_path)?;
    info!(
        "Found {} wav files in {}",
        wav_files.len(),
        wav_file_path.display()
    );
    for file in &wav_files {
        debug!("  {}", file.display());
    }

    let concatenator = WavConcatenator::new(ConcatOptions { marker_search });
    let report = match concatenator.concatenate(&wav_files, output_file) {
        Ok(report) => report,
        Err(e) => {
            // The error itself is reported once, by the caller.
            for line in mismatch_details(&e) {
                warn!("{}", line);
            }
            return Err(e);
        }
    };

    log_diagnostics(&report.diagnostics);
    match &report.outcome {
        ConcatOutcome::Completed(summary) => info!(
            "Concatenated {} wav files into: {} pcm file with total length {} [min] with sampling rate {} [Hz]",
            summary.file_count,
            summary.output.display(),
            summary.duration_minutes,
            summary.sample_rate
        ),
        ConcatOutcome::Skipped { file_count } => {
            info!("Nothing written, {} wav file(s) found", file_count)
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    info!("Stop concatenate wav files");
    Ok(report)
}

/// Print the decoded header and payload size of each file.
pub fn inspect(files: &[PathBuf], marker_search: MarkerSearch) -> Result<()> {
    for path in files {
        let source = WavSource::open(path)?;
        let params = source.params();

        println!("{}", path.display());
        println!("{:-<60}", "");
        println!("  Header:          {}", source.fingerprint());
        println!(
            "  Form / chunk:    {} / {}",
            String::from_utf8_lossy(&params.form_type),
            String::from_utf8_lossy(&params.fmt_chunk_id)
        );
        println!("  Format tag:      {}", params.format_tag);
        println!("  Channels:        {}", params.channels);
        println!("  Sample rate:     {} Hz", params.sample_rate);
        println!("  Byte rate:       {}", params.byte_rate);
        println!("  Block align:     {}", params.block_align);
        println!("  Bits per sample: {}", params.bits_per_sample);

        match source.payload(marker_search) {
            Ok(payload) => println!("  Payload:         {} bytes", payload.len()),
            Err(e) => println!("  Payload:         {}", e),
        }

        for diagnostic in Diagnostic::for_format(path, &params) {
            println!("  Warning:         {}", diagnostic);
        }
        println!();
    }

    Ok(())
}

fn log_diagnostics(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        match diagnostic.severity() {
            Severity::Info => info!("{}", diagnostic),
            Severity::Warning => warn!("{}", diagnostic),
        }
    }
}

/// Both conflicting headers of a format mismatch, one line each.
fn mismatch_details(e: &WavcatError) -> Vec<String> {
    match e {
        WavcatError::FormatMismatch {
            reference,
            reference_header,
            path,
            header,
            ..
        } => vec![
            format!("reference header ({}): {}", reference.display(), reference_header),
            format!("current header   ({}): {}", path.display(), header),
        ],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wav::Fingerprint;

    #[test]
    fn test_mismatch_details_lists_both_headers() {
        let reference_header = Fingerprint::from_bytes([0x11; 28]);
        let header = Fingerprint::from_bytes([0x22; 28]);
        let err = WavcatError::FormatMismatch {
            reference: PathBuf::from("a.wav"),
            reference_header,
            path: PathBuf::from("b.wav"),
            header,
            offset: 0,
        };

        let lines = mismatch_details(&err);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("a.wav") && lines[0].contains("11111111"));
        assert!(lines[1].contains("b.wav") && lines[1].contains("22222222"));
    }

    #[test]
    fn test_other_errors_carry_no_details() {
        let err = WavcatError::MarkerNotFound {
            path: PathBuf::from("a.wav"),
        };
        assert!(mismatch_details(&err).is_empty());
    }
}
