//! Validated step configuration.

use std::path::PathBuf;

use crate::cli::AnalyzeArgs;
use crate::error::ConfigError;
use crate::ports::command::CommandSpec;
use crate::severity::Severity;

/// Program invoked by the step.
pub const ANALYZER_PROGRAM: &str = "flutter";

/// Subcommand always passed before the additional parameters.
pub const ANALYZE_SUBCOMMAND: &str = "analyze";

/// Step inputs after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepConfig {
    /// Existing directory the analyzer runs in.
    pub project_location: PathBuf,
    /// Extra arguments appended after `analyze`.
    pub additional_params: Vec<String>,
    /// Lowest finding level that fails the run.
    pub fail_severity: Severity,
}

impl StepConfig {
    /// Validates raw inputs.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `project_location` is missing or not an
    /// existing directory, or if `additional_params` cannot be split into
    /// shell words.
    pub fn from_args(args: &AnalyzeArgs) -> Result<Self, ConfigError> {
        let project_location =
            args.project_location.clone().ok_or(ConfigError::MissingProjectLocation)?;
        if !project_location.exists() {
            return Err(ConfigError::ProjectLocationNotFound(project_location));
        }
        if !project_location.is_dir() {
            return Err(ConfigError::ProjectLocationNotDir(project_location));
        }

        let additional_params = split_params(&args.additional_params)?;

        Ok(Self { project_location, additional_params, fail_severity: args.fail_severity })
    }

    /// The analyzer invocation: `flutter analyze <additional params>`.
    #[must_use]
    pub fn command(&self) -> CommandSpec {
        CommandSpec::new(ANALYZER_PROGRAM, self.project_location.clone())
            .args([ANALYZE_SUBCOMMAND])
            .args(self.additional_params.iter().cloned())
    }

    /// Logs the resolved inputs.
    pub fn log(&self) {
        tracing::info!(
            project_location = %self.project_location.display(),
            additional_params = ?self.additional_params,
            fail_severity = %self.fail_severity,
            "step configuration"
        );
    }
}

/// Splits a free-form parameter string into shell words.
fn split_params(raw: &str) -> Result<Vec<String>, ConfigError> {
    shlex::split(raw).ok_or_else(|| ConfigError::InvalidAdditionalParams(raw.to_string()))
}
