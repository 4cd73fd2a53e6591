//! `flutter-analyze-step classify` command.

use std::io::Read;
use std::path::Path;

use crate::classify::{Classifier, Verdict};
use crate::cli::ClassifyArgs;
use crate::error::StepError;

use super::enforce;

/// Execute the `classify` command.
///
/// Prints the finding lines at or above the threshold, then applies the same
/// verdict policy as `analyze`.
///
/// # Errors
///
/// Returns an error if the input cannot be read or the captured run is
/// classified as a failure.
pub fn run(args: &ClassifyArgs) -> Result<Verdict, StepError> {
    let classifier = Classifier::new()?;
    let text = read_input(args.input.as_deref())?;

    for line in classifier.findings(&text, args.fail_severity) {
        println!("{line}");
    }

    let verdict = classifier.decide(args.exit_code == 0, &text, args.fail_severity);
    let status = format!("exit status {}", args.exit_code);
    enforce(verdict, &classifier, &text, args.fail_severity, &status)
}

fn read_input(path: Option<&Path>) -> Result<String, StepError> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|source| StepError::Input { origin: path.display().to_string(), source }),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .map_err(|source| StepError::Input { origin: "stdin".into(), source })?;
            Ok(text)
        }
    }
}
