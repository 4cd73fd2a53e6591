//! Command dispatch and handlers.

pub mod analyze;
pub mod classify;

use std::env;
use std::path::PathBuf;

use crate::classify::{Classifier, Verdict};
use crate::cli::Command;
use crate::context::ServiceContext;
use crate::error::StepError;
use crate::severity::Severity;

/// Env var naming a cassette file to record the analyzer run into.
pub const RECORD_ENV: &str = "FLUTTER_ANALYZE_RECORD";

/// Env var naming a cassette file to replay the analyzer run from.
pub const REPLAY_ENV: &str = "FLUTTER_ANALYZE_REPLAY";

/// Dispatch a parsed command to its handler.
///
/// When `FLUTTER_ANALYZE_REPLAY` is set, the analyzer run is served from that
/// cassette. Otherwise, when `FLUTTER_ANALYZE_RECORD` is set, the live run is
/// recorded to that path.
///
/// # Errors
///
/// Returns an error if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), StepError> {
    match command {
        Command::Analyze(args) => {
            let ctx = context_from_env()?;
            let result = analyze::run(args, &ctx);
            // Write the recording even when the run failed.
            if let Some(path) = ctx.finish().map_err(|e| StepError::Cassette(e.to_string()))? {
                tracing::info!("Recording saved to: {}", path.display());
            }
            result.map(drop)
        }
        Command::Classify(args) => classify::run(args).map(drop),
    }
}

fn context_from_env() -> Result<ServiceContext, StepError> {
    if let Some(path) = env::var_os(REPLAY_ENV).filter(|v| !v.is_empty()) {
        let path = PathBuf::from(path);
        tracing::info!("Replaying analyzer run from {}", path.display());
        return ServiceContext::replaying(&path).map_err(StepError::Cassette);
    }
    if let Some(path) = env::var_os(RECORD_ENV).filter(|v| !v.is_empty()) {
        return Ok(ServiceContext::recording(&PathBuf::from(path)));
    }
    Ok(ServiceContext::live())
}

/// Turns a verdict into the step result, logging the outcome.
fn enforce(
    verdict: Verdict,
    classifier: &Classifier,
    output: &str,
    threshold: Severity,
    status: &str,
) -> Result<Verdict, StepError> {
    match verdict {
        Verdict::Pass => {
            tracing::info!("flutter analyze passed");
            Ok(verdict)
        }
        Verdict::BenignNonzeroExit => {
            tracing::warn!(
                %status,
                "flutter analyze exited nonzero with issues below '{threshold}' only, treating as success"
            );
            Ok(verdict)
        }
        Verdict::Findings => Err(StepError::Findings {
            count: classifier.findings(output, threshold).count(),
            threshold,
            status: status.to_string(),
        }),
        Verdict::UnexplainedFailure => {
            Err(StepError::CommandFailed { status: status.to_string() })
        }
    }
}
