//! wavcat CLI
//!
//! Command-line front end: discovers inputs, runs the concatenation and
//! reports the outcome through the logger.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::{error, info};

use wavcat::cli::{commands, Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logger; RUST_LOG takes precedence over --log-level
    env_logger::Builder::from_env(
        Env::default().default_filter_or(cli.log_level.to_level_filter().as_str()),
    )
    .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            if let Some(suggestion) = e
                .downcast_ref::<wavcat::WavcatError>()
                .and_then(|e| e.recovery_suggestion())
            {
                info!("{}", suggestion);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Concat {
            wav_file_path,
            output_file,
            marker_search,
            json,
        } => {
            commands::concat(&wav_file_path, &output_file, marker_search, json).with_context(
                || {
                    format!(
                        "concatenating wav files from {} into {}",
                        wav_file_path.display(),
                        output_file.display()
                    )
                },
            )?;
        }
        Commands::Inspect {
            files,
            marker_search,
        } => commands::inspect(&files, marker_search).context("inspecting wav files")?,
    }

    Ok(())
}
