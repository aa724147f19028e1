// src/exec/mod.rs

//! Process execution and stdout capture.
//!
//! This module is responsible for actually running command strings through
//! the platform shell, using `tokio::process::Command`, and collecting the
//! child's standard output into an owned buffer.
//!
//! - [`command`] owns the [`Shell`] / [`Executor`] types and the chunked
//!   read loop that drains stdout until end-of-stream.

pub mod command;

pub use command::{Capture, DEFAULT_CHUNK_SIZE, Executor, Shell, run_command};
