//! Finding severity levels and the patterns they select.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Lowest finding level that fails the run.
///
/// Variants are ordered by inclusiveness: `Error < Warning < Info`, and each
/// level matches everything the levels before it match.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Only `error` findings.
    Error,
    /// `error` and `warning` findings.
    Warning,
    /// Every finding the analyzer reports.
    Info,
}

impl Severity {
    /// All severities, narrowest first.
    #[cfg(test)]
    pub(crate) const ALL: [Self; 3] = [Self::Error, Self::Warning, Self::Info];

    /// The widest threshold; any finding at all matches it.
    pub const LOOSEST: Self = Self::Info;

    /// The regex alternation of severity words matched at this threshold.
    #[must_use]
    pub const fn pattern(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "(error|warning)",
            Self::Info => "(error|warning|info)",
        }
    }

    /// Lowercase name as it appears in analyzer output and configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Returns `true` if a finding of level `other` counts at this threshold.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn includes(self, other: Self) -> bool {
        other <= self
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a severity string is not one of `error`, `warning`, `info`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid severity '{0}': expected one of error, warning, info")]
pub struct ParseSeverityError(String);

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "error" => Ok(Self::Error),
            "warning" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            other => Err(ParseSeverityError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patterns_widen_with_severity() {
        assert_eq!(Severity::Error.pattern(), "error");
        assert_eq!(Severity::Warning.pattern(), "(error|warning)");
        assert_eq!(Severity::Info.pattern(), "(error|warning|info)");
    }

    #[test]
    fn inclusion_follows_ordering() {
        assert!(Severity::Info.includes(Severity::Error));
        assert!(Severity::Info.includes(Severity::Warning));
        assert!(Severity::Warning.includes(Severity::Error));
        assert!(!Severity::Error.includes(Severity::Warning));
        assert!(!Severity::Warning.includes(Severity::Info));
        for level in Severity::ALL {
            assert!(level.includes(level));
        }
    }

    #[test]
    fn parses_known_names() {
        assert_eq!("error".parse::<Severity>().unwrap(), Severity::Error);
        assert_eq!("warning".parse::<Severity>().unwrap(), Severity::Warning);
        assert_eq!(" info ".parse::<Severity>().unwrap(), Severity::Info);
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "fatal".parse::<Severity>().unwrap_err();
        assert!(err.to_string().contains("fatal"));
        assert!("Error".parse::<Severity>().is_err());
        assert!("".parse::<Severity>().is_err());
    }

    #[test]
    fn display_matches_config_name() {
        for level in Severity::ALL {
            assert_eq!(level.to_string().parse::<Severity>().unwrap(), level);
        }
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let yaml = serde_yaml::to_string(&Severity::Warning).unwrap();
        assert_eq!(yaml.trim(), "warning");
        let parsed: Severity = serde_yaml::from_str("info").unwrap();
        assert_eq!(parsed, Severity::Info);
    }
}
