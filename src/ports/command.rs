//! Command runner port for executing the analyzer.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A program invocation: program name, arguments, and working directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    /// Program to execute, resolved through `PATH`.
    pub program: String,
    /// Arguments passed to the program.
    pub args: Vec<String>,
    /// Working directory for the child process.
    pub dir: PathBuf,
}

impl CommandSpec {
    /// Creates an invocation of `program` with no arguments.
    pub fn new(program: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self { program: program.into(), args: Vec::new(), dir: dir.into() }
    }

    /// Appends arguments.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// The command line quoted for display, e.g. `flutter analyze --no-pub`.
    #[must_use]
    pub fn printable(&self) -> String {
        let words: Vec<&str> = std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect();
        shlex::try_join(words.iter().copied()).unwrap_or_else(|_| words.join(" "))
    }
}

/// Captured result of a finished command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandOutput {
    /// Exit code, or `None` if the process was terminated by a signal.
    pub exit_code: Option<i32>,
    /// Captured standard output.
    pub stdout: String,
    /// Captured standard error.
    pub stderr: String,
}

impl CommandOutput {
    /// Returns `true` if the process exited with status zero.
    #[must_use]
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }

    /// Standard output followed by standard error, trimmed.
    #[must_use]
    pub fn combined(&self) -> String {
        let stdout = self.stdout.trim_end();
        let stderr = self.stderr.trim_end();
        match (stdout.is_empty(), stderr.is_empty()) {
            (_, true) => stdout.trim_start().to_string(),
            (true, false) => stderr.trim_start().to_string(),
            (false, false) => format!("{}\n{stderr}", stdout.trim_start()),
        }
    }

    /// Human-readable exit status, e.g. `exit status 3`.
    #[must_use]
    pub fn status_display(&self) -> String {
        match self.exit_code {
            Some(code) => format!("exit status {code}"),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Runs external programs to completion.
///
/// Abstracting execution allows the analyzer run to be recorded to and
/// replayed from a cassette.
pub trait CommandRunner: Send + Sync {
    /// Runs the command synchronously and captures its output.
    ///
    /// A nonzero exit is reported through [`CommandOutput::exit_code`], not
    /// as an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the program cannot be spawned.
    fn run(
        &self,
        spec: &CommandSpec,
    ) -> Result<CommandOutput, Box<dyn std::error::Error + Send + Sync>>;

    /// Returns `true` if [`run`](Self::run) already copies the child's output
    /// to this process's stdout and stderr while it runs.
    fn echoes_output(&self) -> bool {
        false
    }
}
