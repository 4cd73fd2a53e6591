//! Error types for the step.

use std::path::PathBuf;

use thiserror::Error;

use crate::severity::Severity;

/// Invalid step inputs, detected before the analyzer runs.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `project_location` was not supplied.
    #[error("project_location is required")]
    MissingProjectLocation,
    /// `project_location` does not exist.
    #[error("project_location '{}' does not exist", .0.display())]
    ProjectLocationNotFound(PathBuf),
    /// `project_location` exists but is not a directory.
    #[error("project_location '{}' is not a directory", .0.display())]
    ProjectLocationNotDir(PathBuf),
    /// `additional_params` is not valid shell-word syntax.
    #[error("failed to parse additional_params '{0}': unbalanced quotes or trailing escape")]
    InvalidAdditionalParams(String),
}

/// Every way a step run can end in failure.
#[derive(Debug, Error)]
pub enum StepError {
    /// Command-line or environment input rejected by the argument parser.
    #[error("{0}")]
    Usage(String),
    /// Step inputs failed validation.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    /// The finding patterns failed to compile.
    #[error("failed to compile finding patterns: {0}")]
    Pattern(#[from] regex::Error),
    /// The analyzer could not be started.
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        /// Printable command line.
        command: String,
        /// Underlying runner error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    /// The analyzer reported findings at or above the threshold.
    #[error("flutter analyze found {count} issue(s) at or above '{threshold}' ({status})")]
    Findings {
        /// Number of finding lines at or above the threshold.
        count: usize,
        /// Configured threshold.
        threshold: Severity,
        /// Exit status of the analyzer.
        status: String,
    },
    /// The analyzer exited nonzero without reporting any finding.
    #[error("flutter analyze failed without reporting issues ({status})")]
    CommandFailed {
        /// Exit status of the analyzer.
        status: String,
    },
    /// Captured output could not be read.
    #[error("failed to read analyzer output from {origin}: {source}")]
    Input {
        /// File path or `stdin`.
        origin: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A record/replay cassette could not be loaded or written.
    #[error("cassette error: {0}")]
    Cassette(String),
}
