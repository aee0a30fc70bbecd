//! WAV parsing: header fingerprint, format fields and payload location

pub mod fingerprint;
pub mod payload;
pub mod source;

pub use fingerprint::{
    Fingerprint, FormatParameters, FINGERPRINT_LEN, HEADER_LEN, SUPPORTED_BITS_PER_SAMPLE,
    SUPPORTED_CHANNELS, SUPPORTED_SAMPLE_RATES,
};
pub use payload::{locate_payload, MarkerSearch, DATA_MARKER};
pub use source::WavSource;
