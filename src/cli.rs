//! CLI argument definitions.
//!
//! Step inputs arrive as lowercase environment variables in CI; every input
//! can also be given as a flag.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::severity::Severity;

/// Top-level CLI parser for `flutter-analyze-step`.
#[derive(Debug, Parser)]
#[command(
    name = "flutter-analyze-step",
    version,
    about = "Run flutter analyze and fail the build on findings at or above a severity"
)]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run `flutter analyze` in the project and gate on finding severity.
    Analyze(AnalyzeArgs),
    /// Classify previously captured analyzer output without running anything.
    Classify(ClassifyArgs),
}

/// Inputs of the `analyze` subcommand.
#[derive(Debug, Clone, Args)]
pub struct AnalyzeArgs {
    /// Directory of the Flutter project to analyze.
    #[arg(long, env = "project_location")]
    pub project_location: Option<PathBuf>,

    /// Extra arguments for `flutter analyze`, split like a shell would.
    #[arg(
        long,
        env = "additional_params",
        default_value = "",
        hide_default_value = true,
        allow_hyphen_values = true
    )]
    pub additional_params: String,

    /// Lowest finding severity that fails the step.
    #[arg(long, value_enum, env = "fail_severity", default_value_t = Severity::Error)]
    pub fail_severity: Severity,
}

/// Inputs of the `classify` subcommand.
#[derive(Debug, Clone, Args)]
pub struct ClassifyArgs {
    /// File holding captured analyzer output; reads stdin when omitted.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Exit code the analyzer finished with.
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub exit_code: i32,

    /// Lowest finding severity that fails the step.
    #[arg(long, value_enum, env = "fail_severity", default_value_t = Severity::Error)]
    pub fail_severity: Severity,
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use crate::severity::Severity;
    use clap::Parser;

    #[test]
    fn parses_analyze_flags() {
        let cli = Cli::parse_from([
            "flutter-analyze-step",
            "analyze",
            "--project-location",
            "/src/app",
            "--additional-params",
            "--no-pub",
            "--fail-severity",
            "warning",
        ]);
        let Command::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.project_location.unwrap().to_str(), Some("/src/app"));
        assert_eq!(args.additional_params, "--no-pub");
        assert_eq!(args.fail_severity, Severity::Warning);
    }

    #[test]
    fn parses_classify_subcommand() {
        let cli = Cli::parse_from([
            "flutter-analyze-step",
            "classify",
            "--input",
            "out.txt",
            "--exit-code",
            "0",
            "--fail-severity",
            "info",
        ]);
        let Command::Classify(args) = cli.command else {
            panic!("expected classify");
        };
        assert_eq!(args.input.unwrap().to_str(), Some("out.txt"));
        assert_eq!(args.exit_code, 0);
        assert_eq!(args.fail_severity, Severity::Info);
    }

    #[test]
    fn rejects_unknown_severity() {
        let result = Cli::try_parse_from([
            "flutter-analyze-step",
            "classify",
            "--fail-severity",
            "fatal",
        ]);
        assert!(result.is_err());
    }
}
