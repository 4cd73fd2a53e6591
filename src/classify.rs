//! Classification of captured analyzer output into a pass/fail verdict.
//!
//! A nonzero exit from `flutter analyze` is not a failure on its own: the
//! analyzer also exits nonzero when it only reports informational findings.
//! The verdict therefore comes from scanning the output for finding lines at
//! or above the configured threshold.

use regex::Regex;

use crate::severity::Severity;

/// Builds the finding-line pattern for a severity alternation.
///
/// Matches lines such as
/// `error • Undefined class 'function' • lib/package.dart:3:1 • undefined_class`.
fn finding_pattern(severity_pattern: &str) -> String {
    // `\d` would also accept non-ASCII digits.
    format!(r"^{severity_pattern} .+\.dart:[0-9]+:[0-9]+")
}

/// Finding-line matchers for every severity, compiled once.
#[derive(Debug, Clone)]
pub struct Classifier {
    error: Regex,
    warning: Regex,
    info: Regex,
}

impl Classifier {
    /// Compiles the matcher for each severity.
    ///
    /// # Errors
    ///
    /// Returns an error if a pattern fails to compile.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            error: Regex::new(&finding_pattern(Severity::Error.pattern()))?,
            warning: Regex::new(&finding_pattern(Severity::Warning.pattern()))?,
            info: Regex::new(&finding_pattern(Severity::Info.pattern()))?,
        })
    }

    fn matcher(&self, threshold: Severity) -> &Regex {
        match threshold {
            Severity::Error => &self.error,
            Severity::Warning => &self.warning,
            Severity::Info => &self.info,
        }
    }

    /// Returns `true` if a single line is a finding at or above `threshold`.
    ///
    /// Surrounding whitespace is ignored.
    #[must_use]
    pub fn is_finding(&self, line: &str, threshold: Severity) -> bool {
        self.matcher(threshold).is_match(line.trim())
    }

    /// Trimmed finding lines at or above `threshold`, in output order.
    pub fn findings<'a>(
        &'a self,
        output: &'a str,
        threshold: Severity,
    ) -> impl Iterator<Item = &'a str> + 'a {
        output.split('\n').map(str::trim).filter(move |line| self.is_finding(line, threshold))
    }

    /// Returns `true` if any line of `output` is a finding at or above `threshold`.
    #[must_use]
    pub fn is_failure(&self, output: &str, threshold: Severity) -> bool {
        self.findings(output, threshold).next().is_some()
    }

    /// Returns `true` if the output carries no finding at any severity.
    ///
    /// A nonzero exit in that case is a crash or misuse, not analyzer output.
    #[must_use]
    pub fn has_unexplained_failure(&self, output: &str) -> bool {
        !self.is_failure(output, Severity::LOOSEST)
    }

    /// Returns `true` if the output carries findings at some severity, so a
    /// nonzero exit is the analyzer's own exit-code behavior.
    #[must_use]
    pub fn has_benign_nonzero_exit(&self, output: &str) -> bool {
        !self.has_unexplained_failure(output)
    }

    /// Decides the verdict for a finished command.
    #[must_use]
    pub fn decide(&self, exited_ok: bool, output: &str, threshold: Severity) -> Verdict {
        if exited_ok {
            Verdict::Pass
        } else if self.is_failure(output, threshold) {
            Verdict::Findings
        } else if self.has_benign_nonzero_exit(output) {
            Verdict::BenignNonzeroExit
        } else {
            Verdict::UnexplainedFailure
        }
    }
}

/// Outcome of classifying one analyzer run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The command exited successfully.
    Pass,
    /// Nonzero exit with findings only below the threshold.
    BenignNonzeroExit,
    /// Nonzero exit with findings at or above the threshold.
    Findings,
    /// Nonzero exit with no finding lines at all.
    UnexplainedFailure,
}

impl Verdict {
    /// Returns `true` if the run must fail.
    #[must_use]
    pub fn is_failure(self) -> bool {
        matches!(self, Self::Findings | Self::UnexplainedFailure)
    }
}
