use std::error::Error;
use std::path::Path;

use cmdcap::config::{ConfigFile, load_and_validate, load_or_default, validate_config};
use cmdcap::exec::DEFAULT_CHUNK_SIZE;

type TestResult = Result<(), Box<dyn Error>>;

fn write_config(dir: &tempfile::TempDir, contents: &str) -> Result<std::path::PathBuf, Box<dyn Error>> {
    let path = dir.path().join("Cmdcap.toml");
    std::fs::write(&path, contents)?;
    Ok(path)
}

#[test]
fn empty_file_yields_platform_defaults() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = write_config(&dir, "")?;

    let cfg = load_and_validate(&path)?;

    if cfg!(windows) {
        assert_eq!(cfg.shell.program, "cmd");
        assert_eq!(cfg.shell.args, vec!["/C".to_string()]);
    } else {
        assert_eq!(cfg.shell.program, "sh");
        assert_eq!(cfg.shell.args, vec!["-c".to_string()]);
    }
    assert_eq!(cfg.capture.chunk_size, DEFAULT_CHUNK_SIZE);

    Ok(())
}

#[test]
fn sections_override_defaults() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = write_config(
        &dir,
        r#"
[shell]
program = "bash"
args = ["-lc"]

[capture]
chunk_size = 64
"#,
    )?;

    let cfg = load_and_validate(&path)?;

    assert_eq!(cfg.shell.program, "bash");
    assert_eq!(cfg.shell.args, vec!["-lc".to_string()]);
    assert_eq!(cfg.capture.chunk_size, 64);

    Ok(())
}

#[test]
fn partial_section_keeps_remaining_defaults() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = write_config(&dir, "[capture]\nchunk_size = 128\n")?;

    let cfg = load_and_validate(&path)?;

    assert_eq!(cfg.capture.chunk_size, 128);
    assert!(!cfg.shell.program.is_empty());

    Ok(())
}

#[test]
fn zero_chunk_size_is_rejected() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = write_config(&dir, "[capture]\nchunk_size = 0\n")?;

    let err = load_and_validate(&path).expect_err("chunk_size = 0 must fail validation");
    assert!(err.to_string().contains("chunk_size"));

    Ok(())
}

#[test]
fn empty_shell_program_is_rejected() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = write_config(&dir, "[shell]\nprogram = \"\"\n")?;

    let err = load_and_validate(&path).expect_err("empty program must fail validation");
    assert!(err.to_string().contains("program"));

    Ok(())
}

#[test]
fn empty_shell_arg_is_rejected() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = write_config(&dir, "[shell]\nprogram = \"sh\"\nargs = [\"-c\", \"\"]\n")?;

    let err = load_and_validate(&path).expect_err("empty arg must fail validation");
    assert!(err.to_string().contains("args"));

    Ok(())
}

#[test]
fn invalid_toml_is_a_parse_error() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = write_config(&dir, "[shell\nprogram = ")?;

    assert!(load_and_validate(&path).is_err());

    Ok(())
}

#[test]
fn explicit_missing_config_path_is_an_error() {
    let missing = Path::new("/definitely/not/a/real/Cmdcap.toml");
    assert!(load_or_default(Some(missing)).is_err());
}

#[test]
fn default_config_validates() {
    assert!(validate_config(&ConfigFile::default()).is_ok());
}
