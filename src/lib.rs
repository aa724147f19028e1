// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::ConfigFile;
use crate::config::loader::load_or_default;
use crate::exec::{Capture, Executor};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading (optional `Cmdcap.toml`)
/// - the executor that spawns the shell and captures stdout
/// - output delivery (stdout or `--out` file)
///
/// Returns the child's exit code so `main` can propagate it as the
/// process exit status.
pub async fn run(args: CliArgs) -> Result<i32> {
    let cfg = load_or_default(args.config.as_deref().map(Path::new))?;

    if args.dry_run {
        print_dry_run(&cfg);
        return Ok(0);
    }

    let command = args.command_line();
    if command.is_empty() {
        bail!("no command given (pass the command words after the flags)");
    }

    let executor = Executor::from_config(&cfg);
    let capture = executor.run(&command).await?;

    write_capture(&capture, args.out.as_deref())?;

    let code = capture.exit_code();
    debug!(exit_code = code, "propagating child exit code");
    Ok(code)
}

/// Deliver the captured bytes verbatim, either to a file or to our own
/// stdout. No re-encoding: the capture is raw bytes, not text.
fn write_capture(capture: &Capture, out: Option<&str>) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, &capture.stdout)
                .with_context(|| format!("writing captured output to {:?}", path))?;
            info!(path = %path, bytes = capture.stdout.len(), "captured output written");
        }
        None => {
            let mut stdout = std::io::stdout();
            stdout
                .write_all(&capture.stdout)
                .context("writing captured output to stdout")?;
            stdout.flush().context("flushing stdout")?;
        }
    }
    Ok(())
}

/// Simple dry-run output: print the resolved shell and capture settings.
fn print_dry_run(cfg: &ConfigFile) {
    println!("cmdcap dry-run");
    println!("  shell.program = {}", cfg.shell.program);
    println!("  shell.args = {:?}", cfg.shell.args);
    println!("  capture.chunk_size = {}", cfg.capture.chunk_size);

    debug!("dry-run complete (no execution)");
}
