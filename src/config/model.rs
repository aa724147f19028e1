// src/config/model.rs

use serde::Deserialize;

use crate::exec::DEFAULT_CHUNK_SIZE;

/// Top-level configuration as read from a TOML file:
///
/// ```toml
/// [shell]
/// program = "bash"
/// args = ["-lc"]
///
/// [capture]
/// chunk_size = 8192
/// ```
///
/// All sections are optional and have platform-appropriate defaults, so an
/// empty (or absent) file is a valid configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ConfigFile {
    /// Shell interpreter settings from `[shell]`.
    #[serde(default)]
    pub shell: ShellSection,

    /// Capture tuning from `[capture]`.
    #[serde(default)]
    pub capture: CaptureSection,
}

/// `[shell]` section.
///
/// The program and leading arguments used to interpret command strings.
/// The command string itself is always appended as one final argument.
#[derive(Debug, Clone, Deserialize)]
pub struct ShellSection {
    /// Interpreter program (default: `sh` on Unix, `cmd` on Windows).
    #[serde(default = "default_shell_program")]
    pub program: String,

    /// Leading arguments (default: `["-c"]` on Unix, `["/C"]` on Windows).
    #[serde(default = "default_shell_args")]
    pub args: Vec<String>,
}

fn default_shell_program() -> String {
    if cfg!(windows) { "cmd" } else { "sh" }.to_string()
}

fn default_shell_args() -> Vec<String> {
    vec![if cfg!(windows) { "/C" } else { "-c" }.to_string()]
}

impl Default for ShellSection {
    fn default() -> Self {
        Self {
            program: default_shell_program(),
            args: default_shell_args(),
        }
    }
}

/// `[capture]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct CaptureSection {
    /// Internal read chunk size in bytes.
    ///
    /// Tuning knob only: it controls how much is pulled from the stdout
    /// pipe per read, never how much output is captured in total.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

impl Default for CaptureSection {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
        }
    }
}
