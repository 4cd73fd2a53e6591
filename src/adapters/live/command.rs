//! Live command runner using `std::process::Command`.

use std::io::{self, Read, Write};
use std::process::{Command, Stdio};
use std::thread;

use crate::ports::command::{CommandOutput, CommandRunner, CommandSpec};

/// Live command runner that spawns the real program.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiveCommandRunner {
    echo: bool,
}

impl LiveCommandRunner {
    /// Captures output without showing it.
    #[must_use]
    pub const fn capturing() -> Self {
        Self { echo: false }
    }

    /// Captures output and tees it to stdout/stderr as the child writes it.
    #[must_use]
    pub const fn echoing() -> Self {
        Self { echo: true }
    }

    fn run_echoing(spec: &CommandSpec) -> io::Result<CommandOutput> {
        let mut child = Command::new(&spec.program)
            .args(&spec.args)
            .current_dir(&spec.dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        let (Some(stdout), Some(stderr)) = (child.stdout.take(), child.stderr.take()) else {
            return Err(io::Error::other("child output was not piped"));
        };
        // Both pipes must drain concurrently or a chatty child blocks.
        let stderr_reader = thread::spawn(move || tee(stderr, io::stderr()));
        let stdout = tee(stdout, io::stdout());
        let stderr = stderr_reader
            .join()
            .map_err(|_| io::Error::other("stderr reader panicked"))?;
        let status = child.wait()?;

        Ok(CommandOutput { exit_code: status.code(), stdout: stdout?, stderr: stderr? })
    }
}

/// Copies `reader` to `sink` chunk by chunk and returns everything read.
fn tee(mut reader: impl Read, mut sink: impl Write) -> io::Result<String> {
    let mut captured = Vec::new();
    let mut buf = [0_u8; 8192];
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        captured.extend_from_slice(&buf[..n]);
        // A closed terminal must not lose the captured copy.
        let _ = sink.write_all(&buf[..n]).and_then(|()| sink.flush());
    }
    Ok(String::from_utf8_lossy(&captured).into_owned())
}

impl CommandRunner for LiveCommandRunner {
    fn run(
        &self,
        spec: &CommandSpec,
    ) -> Result<CommandOutput, Box<dyn std::error::Error + Send + Sync>> {
        if self.echo {
            return Ok(Self::run_echoing(spec)?);
        }
        let output = Command::new(&spec.program)
            .args(&spec.args)
            .current_dir(&spec.dir)
            .output()?;
        Ok(CommandOutput {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    fn echoes_output(&self) -> bool {
        self.echo
    }
}
