//! Service context bundling the port trait objects.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use crate::adapters::live::LiveCommandRunner;
use crate::adapters::recording::RecordingCommandRunner;
use crate::adapters::replaying::ReplayingCommandRunner;
use crate::cassette::format::Cassette;
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::command::CommandRunner;

/// Bundles the port trait objects into a single context.
///
/// Constructors wire up different adapter implementations (live, recording,
/// replaying).
pub struct ServiceContext {
    /// Runner used to execute the analyzer.
    pub runner: Box<dyn CommandRunner>,
    /// Cassette recorder shared with the recording runner; written on drop.
    recorder: Option<Arc<Mutex<CassetteRecorder>>>,
}

impl ServiceContext {
    /// Creates a live context that spawns real processes.
    #[must_use]
    pub fn live() -> Self {
        Self { runner: Box::new(LiveCommandRunner::echoing()), recorder: None }
    }

    /// Creates a context around an arbitrary runner.
    #[must_use]
    pub fn with_runner(runner: Box<dyn CommandRunner>) -> Self {
        Self { runner, recorder: None }
    }

    /// Creates a recording context that writes a cassette file on drop.
    ///
    /// Uses the live runner for actual work. This is the developer mechanism
    /// for capturing cassettes via the `FLUTTER_ANALYZE_RECORD` env var.
    #[must_use]
    pub fn recording(path: &Path) -> Self {
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("flutter-analyze-session")
            .to_string();
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new(path, name)));
        Self {
            runner: Box::new(RecordingCommandRunner::new(
                Box::new(LiveCommandRunner::echoing()),
                Arc::clone(&recorder),
            )),
            recorder: Some(recorder),
        }
    }

    /// Creates a replaying context from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self, String> {
        let cassette = Cassette::load(path)?;
        Ok(Self {
            runner: Box::new(ReplayingCommandRunner::new(CassetteReplayer::new(&cassette))),
            recorder: None,
        })
    }

    /// Writes the cassette now instead of on drop.
    ///
    /// Returns the cassette path, or `None` for non-recording contexts.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette cannot be written.
    pub fn finish(mut self) -> Result<Option<PathBuf>, std::io::Error> {
        self.write_cassette()
    }

    fn write_cassette(&mut self) -> Result<Option<PathBuf>, std::io::Error> {
        let Some(recorder) = self.recorder.take() else {
            return Ok(None);
        };
        // The recording runner still holds a clone of the Arc.
        let guard = recorder.lock().unwrap_or_else(PoisonError::into_inner);
        let path = guard.write()?;
        Ok(Some(path))
    }
}

impl Drop for ServiceContext {
    fn drop(&mut self) {
        if let Err(e) = self.write_cassette() {
            tracing::warn!("failed to write cassette: {e}");
        }
    }
}
