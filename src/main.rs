//! Binary entrypoint for the `flutter-analyze-step` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // A local .env mirrors the step inputs CI passes as env vars. It is loaded
    // before logging so it can set RUST_LOG.
    let dotenv = dotenvy::dotenv();
    flutter_analyze_step::logging::init();

    match dotenv {
        Err(err) if !err.not_found() => {
            tracing::error!("failed to load .env: {err}");
            return ExitCode::FAILURE;
        }
        _ => {}
    }

    match flutter_analyze_step::run(std::env::args_os()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
