//! CLI Module
//!
//! Command-line interface for wavcat.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

use crate::wav::MarkerSearch;

/// wavcat - concatenate same-format WAV files into raw PCM
#[derive(Parser, Debug)]
#[command(name = "wavcat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Logging level (RUST_LOG overrides)
    #[arg(long = "log-level", value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Concatenate every .wav file under a directory, assuming one format
    #[command(name = "concat")]
    Concat {
        /// Directory searched recursively for .wav files
        wav_file_path: PathBuf,

        /// Path of the concatenated raw PCM file
        output_file: PathBuf,

        /// How each file's data chunk is located
        #[arg(long, value_enum, default_value_t = MarkerSearch::ReverseScan)]
        marker_search: MarkerSearch,

        /// Also print the report as JSON on stdout
        #[arg(long)]
        json: bool,
    },

    /// Print the header fields and payload size of WAV files
    #[command(name = "inspect")]
    Inspect {
        /// Files to inspect
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// How each file's data chunk is located
        #[arg(long, value_enum, default_value_t = MarkerSearch::ReverseScan)]
        marker_search: MarkerSearch,
    },
}

/// Log levels accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// `log` has no level above error, so critical folds into it.
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warning => LevelFilter::Warn,
            LogLevel::Error | LogLevel::Critical => LevelFilter::Error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_concat_defaults() {
        let cli = Cli::try_parse_from(["wavcat", "concat", "wavs", "out.pcm"]).unwrap();

        assert_eq!(cli.log_level, LogLevel::Info);
        match cli.command {
            Commands::Concat {
                wav_file_path,
                output_file,
                marker_search,
                json,
            } => {
                assert_eq!(wav_file_path, PathBuf::from("wavs"));
                assert_eq!(output_file, PathBuf::from("out.pcm"));
                assert_eq!(marker_search, MarkerSearch::ReverseScan);
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "wavcat",
            "--log-level",
            "critical",
            "concat",
            "wavs",
            "out.pcm",
            "--marker-search",
            "chunk-walk",
            "--json",
        ])
        .unwrap();

        assert_eq!(cli.log_level.to_level_filter(), LevelFilter::Error);
        assert!(matches!(
            cli.command,
            Commands::Concat {
                marker_search: MarkerSearch::ChunkWalk,
                json: true,
                ..
            }
        ));
    }

    #[test]
    fn test_inspect_requires_files() {
        assert!(Cli::try_parse_from(["wavcat", "inspect"]).is_err());
    }
}
