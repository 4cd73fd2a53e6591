//! Recording adapter for the `CommandRunner` port.

use std::sync::{Arc, Mutex};

use super::record_result;
use crate::cassette::recorder::CassetteRecorder;
use crate::ports::{CommandOutput, CommandRunner, CommandSpec};

/// Records command runs while delegating to an inner runner.
pub struct RecordingCommandRunner {
    inner: Box<dyn CommandRunner>,
    recorder: Arc<Mutex<CassetteRecorder>>,
}

impl RecordingCommandRunner {
    /// Creates a recording runner wrapping the given implementation.
    pub fn new(inner: Box<dyn CommandRunner>, recorder: Arc<Mutex<CassetteRecorder>>) -> Self {
        Self { inner, recorder }
    }
}

impl CommandRunner for RecordingCommandRunner {
    fn run(
        &self,
        spec: &CommandSpec,
    ) -> Result<CommandOutput, Box<dyn std::error::Error + Send + Sync>> {
        let result = self.inner.run(spec);
        record_result(&self.recorder, "command", "run", spec, &result);
        result
    }

    fn echoes_output(&self) -> bool {
        self.inner.echoes_output()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::LiveCommandRunner;
    use crate::cassette::format::Cassette;
    use serde_json::json;

    #[test]
    fn records_run_interaction() {
        let dir = tempfile::tempdir().unwrap();
        let cassette_path = dir.path().join("command.cassette.yaml");
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&cassette_path, "test")));

        // Scope the adapter so it's dropped before we try to unwrap
        {
            let runner =
                RecordingCommandRunner::new(Box::new(LiveCommandRunner::capturing()), Arc::clone(&recorder));
            let spec = CommandSpec::new("sh", dir.path()).args(["-c", "echo hello; exit 1"]);
            let result = runner.run(&spec).unwrap();
            assert_eq!(result.exit_code, Some(1));
        }

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();

        let content = std::fs::read_to_string(&cassette_path).unwrap();
        let cassette: Cassette = serde_yaml::from_str(&content).unwrap();
        assert_eq!(cassette.interactions.len(), 1);
        let interaction = &cassette.interactions[0];
        assert_eq!(interaction.port, "command");
        assert_eq!(interaction.method, "run");
        assert_eq!(interaction.input["program"], json!("sh"));
        assert_eq!(interaction.output["ok"]["exit_code"], json!(1));
        assert_eq!(interaction.output["ok"]["stdout"], json!("hello\n"));
    }

    #[test]
    fn records_spawn_errors() {
        let dir = tempfile::tempdir().unwrap();
        let cassette_path = dir.path().join("command.cassette.yaml");
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(&cassette_path, "test")));

        {
            let runner =
                RecordingCommandRunner::new(Box::new(LiveCommandRunner::capturing()), Arc::clone(&recorder));
            let spec = CommandSpec::new("definitely-not-a-real-program-4242", dir.path());
            assert!(runner.run(&spec).is_err());
        }

        let recorder = Arc::try_unwrap(recorder).unwrap().into_inner().unwrap();
        recorder.finish().unwrap();

        let content = std::fs::read_to_string(&cassette_path).unwrap();
        let cassette: Cassette = serde_yaml::from_str(&content).unwrap();
        let err = cassette.interactions[0].output["err"].as_str().unwrap();
        assert!(!err.is_empty());
        assert_eq!(
            cassette.interactions[0].input["program"],
            json!("definitely-not-a-real-program-4242")
        );
    }

    #[test]
    fn echo_behavior_follows_inner_runner() {
        let dir = tempfile::tempdir().unwrap();
        let recorder =
            Arc::new(Mutex::new(CassetteRecorder::new(dir.path().join("c.yaml"), "test")));
        let echoing =
            RecordingCommandRunner::new(Box::new(LiveCommandRunner::echoing()), Arc::clone(&recorder));
        let capturing =
            RecordingCommandRunner::new(Box::new(LiveCommandRunner::capturing()), recorder);

        assert!(echoing.echoes_output());
        assert!(!capturing.echoes_output());
    }
}
