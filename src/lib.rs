//! wavcat - concatenate same-format WAV files into raw PCM
//!
//! The first input is the format reference. Every other input must carry a
//! byte-identical 28-byte header fingerprint (offsets 8..36), otherwise the
//! operation aborts without writing anything. Payloads are appended in input
//! order and written as one headerless PCM file.
//!
//! # Layout
//!
//! - [`wav`]: fingerprint decoding and payload location
//! - [`concat`]: the concatenator and its structured report
//! - [`discovery`]: recursive `.wav` lookup
//! - [`cli`]: command-line front end

pub mod cli;
pub mod concat;
pub mod discovery;
pub mod error;
pub mod wav;

pub use concat::{concatenate, ConcatOptions, ConcatReport, WavConcatenator};
pub use error::{Result, WavcatError};
