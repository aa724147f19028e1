// src/errors.rs

//! Crate-wide error types.
//!
//! Application-level code (config loading, CLI wiring) uses `anyhow` with
//! context, re-exported here. The capture path has a structured error type,
//! [`CaptureError`], because callers need to tell a failed spawn apart from
//! a command that ran and simply produced nothing.

use std::io;

use thiserror::Error;

pub use anyhow::{Error, Result};

/// Errors from running a command and capturing its standard output.
///
/// A command that spawns, runs, and writes zero bytes is *not* an error;
/// it is a successful capture with an empty buffer.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// The shell process could not be created at all (interpreter missing,
    /// resource exhaustion, ...). Distinct from a command that ran and
    /// produced no output.
    #[error("failed to spawn '{shell}' for command '{command}': {source}")]
    Spawn {
        shell: String,
        command: String,
        #[source]
        source: io::Error,
    },

    /// The child's stdout pipe was not available after a successful spawn.
    #[error("stdout pipe unavailable for command '{command}'")]
    Pipe { command: String },

    /// Reading from the child's stdout stream failed mid-capture.
    #[error("reading stdout of command '{command}': {source}")]
    Read {
        command: String,
        #[source]
        source: io::Error,
    },

    /// Waiting for the child to exit failed.
    #[error("waiting for command '{command}': {source}")]
    Wait {
        command: String,
        #[source]
        source: io::Error,
    },

    /// The capture buffer could not grow to hold more output. The capture
    /// is abandoned rather than silently truncated.
    #[error("capture buffer could not grow past {captured} bytes for command '{command}'")]
    Allocation { command: String, captured: usize },
}
