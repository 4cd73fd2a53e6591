//! Core library entry for the `flutter-analyze-step` CLI.

pub mod adapters;
pub mod cassette;
pub mod classify;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod logging;
pub mod ports;
pub mod severity;

use clap::Parser;

pub use error::StepError;

/// Run the CLI with the provided arguments.
///
/// Help and version requests are printed and count as success.
///
/// # Errors
///
/// Returns an error when argument parsing fails or the step fails.
pub fn run<I, T>(args: I) -> Result<(), StepError>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if !err.use_stderr() => {
            let _ = err.print();
            return Ok(());
        }
        Err(err) => return Err(StepError::Usage(err.to_string().trim_end().to_string())),
    };
    commands::dispatch(&cli.command)
}
