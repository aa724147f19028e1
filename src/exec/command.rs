// src/exec/command.rs

use std::process::{ExitStatus, Stdio};

use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tracing::{debug, info};

use crate::config::ConfigFile;
use crate::errors::CaptureError;

/// Default size of the internal read chunk, in bytes.
///
/// This only controls how much is pulled from the pipe per read; it is
/// never a cap on the total amount of output captured.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// The interpreter used to run command strings.
///
/// A `Shell` is a program plus the leading arguments that make it accept a
/// command line as its final argument: `sh -c` on Unix, `cmd /C` on
/// Windows. Tests and callers can point it at a different interpreter.
#[derive(Debug, Clone)]
pub struct Shell {
    program: String,
    args: Vec<String>,
}

impl Shell {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// The default shell for the current platform.
    pub fn platform_default() -> Self {
        if cfg!(windows) {
            Self::new("cmd", vec!["/C".to_string()])
        } else {
            Self::new("sh", vec!["-c".to_string()])
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Build the `tokio::process::Command` for one command string.
    ///
    /// The command string is passed as a single argument, so the shell (not
    /// cmdcap) interprets any metacharacters in it. Environment and working
    /// directory are inherited from the parent.
    fn command(&self, command_line: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd.arg(command_line);
        cmd
    }
}

/// Result of a successful run: everything the child wrote to stdout, plus
/// how it exited.
#[derive(Debug)]
pub struct Capture {
    /// The concatenated stdout bytes, in the order the child produced them.
    /// Raw bytes; no encoding is assumed and nothing is appended.
    pub stdout: Vec<u8>,

    /// The child's exit status.
    pub status: ExitStatus,
}

impl Capture {
    /// Exit code of the child, or `-1` if it was terminated without one
    /// (e.g. by a signal).
    pub fn exit_code(&self) -> i32 {
        self.status.code().unwrap_or(-1)
    }

    pub fn success(&self) -> bool {
        self.status.success()
    }
}

/// Reusable handle that runs command strings and captures their stdout.
#[derive(Debug, Clone)]
pub struct Executor {
    shell: Shell,
    chunk_size: usize,
}

impl Executor {
    pub fn new(shell: Shell) -> Self {
        Self {
            shell,
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }

    /// Override the internal read chunk size.
    ///
    /// A zero chunk would never make progress, so the size is clamped to at
    /// least 1.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Build an executor from a loaded (and validated) config file.
    pub fn from_config(cfg: &ConfigFile) -> Self {
        Self::new(Shell::new(
            cfg.shell.program.clone(),
            cfg.shell.args.clone(),
        ))
        .with_chunk_size(cfg.capture.chunk_size)
    }

    /// Run one command string and capture its standard output to
    /// completion.
    ///
    /// Blocks (awaits) until the child closes stdout, then reaps the child
    /// and returns the capture together with the exit status. stderr is
    /// inherited from the parent, so unless the command string redirects
    /// it, child error text goes straight to our stderr and is never mixed
    /// into the returned buffer.
    pub async fn run(&self, command: &str) -> Result<Capture, CaptureError> {
        info!(shell = %self.shell.program, cmd = %command, "spawning shell command");

        let mut cmd = self.shell.command(command);
        cmd.stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true);

        let mut child = cmd.spawn().map_err(|source| CaptureError::Spawn {
            shell: self.shell.program.clone(),
            command: command.to_string(),
            source,
        })?;

        // We always request a piped stdout, so the pipe should be present;
        // surface a structured error rather than panic if it is not.
        let mut stdout = child.stdout.take().ok_or_else(|| CaptureError::Pipe {
            command: command.to_string(),
        })?;

        // Drain stdout in fixed-size chunks into a growable buffer until
        // end-of-stream. Growth is checked so running out of memory aborts
        // the capture instead of truncating it. If an error bails out of
        // this loop, dropping the child kills and reaps it (kill_on_drop).
        let mut captured: Vec<u8> = Vec::new();
        let mut chunk = vec![0u8; self.chunk_size];

        loop {
            let n = stdout
                .read(&mut chunk)
                .await
                .map_err(|source| CaptureError::Read {
                    command: command.to_string(),
                    source,
                })?;
            if n == 0 {
                break;
            }

            captured
                .try_reserve(n)
                .map_err(|_| CaptureError::Allocation {
                    command: command.to_string(),
                    captured: captured.len(),
                })?;
            captured.extend_from_slice(&chunk[..n]);

            debug!(cmd = %command, read = n, total = captured.len(), "stdout chunk");
        }
        drop(stdout);

        let status = child.wait().await.map_err(|source| CaptureError::Wait {
            command: command.to_string(),
            source,
        })?;

        info!(
            cmd = %command,
            bytes = captured.len(),
            exit_code = status.code().unwrap_or(-1),
            success = status.success(),
            "command finished"
        );

        Ok(Capture {
            stdout: captured,
            status,
        })
    }
}

/// Run one command with the platform default shell and default chunk size.
///
/// Convenience wrapper around [`Executor::run`] for callers that don't
/// need to configure anything.
pub async fn run_command(command: &str) -> Result<Capture, CaptureError> {
    Executor::new(Shell::platform_default()).run(command).await
}
