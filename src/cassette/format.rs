//! Cassette data structures for recording and replaying interactions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded interaction with an external port.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Sequence number (assigned automatically by the recorder).
    pub seq: u64,
    /// Port name (e.g. "command").
    pub port: String,
    /// Method name invoked on the port.
    pub method: String,
    /// Input data sent to the port.
    pub input: serde_json::Value,
    /// Output data returned from the port.
    pub output: serde_json::Value,
}

/// A cassette containing a sequence of recorded interactions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name for this cassette.
    pub name: String,
    /// When this cassette was recorded.
    pub recorded_at: DateTime<Utc>,
    /// Ordered list of interactions.
    pub interactions: Vec<Interaction>,
}

impl Cassette {
    /// Reads and parses a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid cassette.
    pub fn load(path: &std::path::Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read cassette file {}: {e}", path.display()))?;
        serde_yaml::from_str(&content)
            .map_err(|e| format!("Failed to parse cassette file {}: {e}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_hand_written_cassette() {
        let yaml = r#"
name: analyze-info-only
recorded_at: 2025-03-15T14:30:00Z
interactions:
  - seq: 0
    port: command
    method: run
    input:
      program: flutter
      args: [analyze]
      dir: /project
    output:
      ok:
        exit_code: 1
        stdout: "info • Unused import • lib/a.dart:1:1 • unused_import\n"
        stderr: ""
"#;
        let cassette: Cassette = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cassette.name, "analyze-info-only");
        assert_eq!(cassette.interactions.len(), 1);
        assert_eq!(cassette.interactions[0].input["args"], json!(["analyze"]));
        assert_eq!(cassette.interactions[0].output["ok"]["exit_code"], json!(1));
    }

    #[test]
    fn ignores_commit_key_in_older_cassettes() {
        let yaml = "name: old\nrecorded_at: 2025-03-15T14:30:00Z\ncommit: unknown\ninteractions: []\n";
        let cassette: Cassette = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cassette.name, "old");
        assert!(cassette.interactions.is_empty());
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Cassette::load(&dir.path().join("missing.yaml")).unwrap_err();
        assert!(err.contains("Failed to read cassette file"));
    }

    #[test]
    fn load_reports_malformed_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        std::fs::write(&path, "name: [unterminated").unwrap();
        let err = Cassette::load(&path).unwrap_err();
        assert!(err.contains("Failed to parse cassette file"));
    }
}
