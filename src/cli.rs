// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `cmdcap`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "cmdcap",
    version,
    about = "Run a shell command and capture its standard output.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// If omitted, `Cmdcap.toml` in the current working directory is used
    /// when it exists; otherwise built-in defaults apply. An explicitly
    /// given path must exist.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Write the captured bytes to this file instead of stdout.
    #[arg(long, value_name = "PATH")]
    pub out: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `CMDCAP_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve config, print the shell settings, but don't execute anything.
    #[arg(long)]
    pub dry_run: bool,

    /// The command to execute.
    ///
    /// All trailing words are joined with spaces and handed to the shell as
    /// a single command string (same semantics as `sh -c "..."`), so shell
    /// metacharacters are interpreted by the shell, not by cmdcap.
    #[arg(value_name = "COMMAND", trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

impl CliArgs {
    /// The trailing words joined into the single command string passed to
    /// the shell.
    pub fn command_line(&self) -> String {
        self.command.join(" ")
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
