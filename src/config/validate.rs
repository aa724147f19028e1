// src/config/validate.rs

use anyhow::{Result, anyhow};

use crate::config::model::ConfigFile;

/// Run basic semantic validation against a loaded configuration.
///
/// This checks:
/// - `shell.program` is non-empty
/// - no `shell.args` entry is empty
/// - `capture.chunk_size >= 1`
///
/// It does **not** check that the shell program actually exists; that
/// surfaces naturally as a spawn error at run time.
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    validate_shell(cfg)?;
    validate_capture(cfg)?;
    Ok(())
}

fn validate_shell(cfg: &ConfigFile) -> Result<()> {
    if cfg.shell.program.trim().is_empty() {
        return Err(anyhow!("[shell].program must be a non-empty program name"));
    }

    for (i, arg) in cfg.shell.args.iter().enumerate() {
        if arg.is_empty() {
            return Err(anyhow!("[shell].args[{}] must not be an empty string", i));
        }
    }

    Ok(())
}

fn validate_capture(cfg: &ConfigFile) -> Result<()> {
    if cfg.capture.chunk_size == 0 {
        return Err(anyhow!("[capture].chunk_size must be >= 1 (got 0)"));
    }
    Ok(())
}
