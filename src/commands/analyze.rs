//! `flutter-analyze-step analyze` command.

use crate::classify::{Classifier, Verdict};
use crate::cli::AnalyzeArgs;
use crate::config::StepConfig;
use crate::context::ServiceContext;
use crate::error::StepError;
use crate::ports::command::CommandRunner;

use super::enforce;

/// Execute the `analyze` command.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the analyzer cannot be
/// started, or the run is classified as a failure.
pub fn run(args: &AnalyzeArgs, ctx: &ServiceContext) -> Result<Verdict, StepError> {
    let classifier = Classifier::new()?;
    let config = StepConfig::from_args(args)?;
    config.log();
    run_with_config(&config, &classifier, ctx.runner.as_ref())
}

/// Runs the analyzer for a validated configuration and enforces the verdict.
///
/// The output is echoed before any failure is returned: live by runners that
/// tee it, otherwise to stdout once the command ends.
///
/// # Errors
///
/// Returns an error if the analyzer cannot be started or the run is
/// classified as a failure.
pub fn run_with_config(
    config: &StepConfig,
    classifier: &Classifier,
    runner: &dyn CommandRunner,
) -> Result<Verdict, StepError> {
    let spec = config.command();
    let printable = spec.printable();
    tracing::info!("Running analyze");
    tracing::info!("$ {printable}");

    let output = runner
        .run(&spec)
        .map_err(|source| StepError::Spawn { command: printable, source })?;

    let text = output.combined();
    if !runner.echoes_output() && !text.is_empty() {
        println!("{text}");
    }

    let verdict = classifier.decide(output.success(), &text, config.fail_severity);
    enforce(verdict, classifier, &text, config.fail_severity, &output.status_display())
}
