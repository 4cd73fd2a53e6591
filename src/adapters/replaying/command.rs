//! Replaying adapter for the `CommandRunner` port.

use std::sync::{Mutex, PoisonError};

use super::replay_result;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::command::{CommandOutput, CommandRunner, CommandSpec};

/// Serves recorded command results from a cassette without spawning anything.
pub struct ReplayingCommandRunner {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingCommandRunner {
    /// Creates a replaying runner from a cassette replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl CommandRunner for ReplayingCommandRunner {
    fn run(
        &self,
        spec: &CommandSpec,
    ) -> Result<CommandOutput, Box<dyn std::error::Error + Send + Sync>> {
        let output = {
            let mut replayer = self.replayer.lock().unwrap_or_else(PoisonError::into_inner);
            let interaction = replayer.next_interaction("command", "run")?;
            tracing::debug!(
                seq = interaction.seq,
                command = %spec.printable(),
                "replaying recorded command"
            );
            interaction.output.clone()
        };
        replay_result(&output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    fn make_replayer(interactions: Vec<Interaction>) -> CassetteReplayer {
        let cassette = Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            interactions,
        };
        CassetteReplayer::new(&cassette)
    }

    fn analyze() -> CommandSpec {
        CommandSpec::new("flutter", "/project").args(["analyze"])
    }

    #[test]
    fn replays_recorded_output() {
        let replayer = make_replayer(vec![Interaction {
            seq: 0,
            port: "command".into(),
            method: "run".into(),
            input: json!({"program": "flutter", "args": ["analyze"], "dir": "/project"}),
            output: json!({"ok": {
                "exit_code": 1,
                "stdout": "info • Unused import • lib/a.dart:1:1 • unused_import\n",
                "stderr": ""
            }}),
        }]);
        let runner = ReplayingCommandRunner::new(replayer);
        let result = runner.run(&analyze()).unwrap();

        assert_eq!(result.exit_code, Some(1));
        assert!(result.stdout.starts_with("info • Unused import"));
    }

    #[test]
    fn replays_recorded_error() {
        let replayer = make_replayer(vec![Interaction {
            seq: 0,
            port: "command".into(),
            method: "run".into(),
            input: json!({}),
            output: json!({"err": "failed to run flutter: No such file or directory"}),
        }]);
        let runner = ReplayingCommandRunner::new(replayer);
        let err = runner.run(&analyze()).unwrap_err();

        assert!(err.to_string().contains("No such file or directory"));
    }

    #[test]
    fn exhausted_cassette_is_an_error() {
        let runner = ReplayingCommandRunner::new(make_replayer(vec![]));
        let err = runner.run(&analyze()).unwrap_err();

        assert!(!runner.echoes_output());
        assert!(err.to_string().contains("Cassette exhausted"));
    }
}
