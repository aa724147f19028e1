use cmdcap::errors::CaptureError;
use cmdcap::exec::{Executor, Shell, run_command};

#[tokio::test]
async fn nonexistent_interpreter_is_a_spawn_error() {
    let shell = Shell::new(
        "/definitely/not/a/real/shell-zzz",
        vec!["-c".to_string()],
    );
    let executor = Executor::new(shell);

    let err = executor
        .run("echo hi")
        .await
        .expect_err("spawning a missing interpreter must fail");

    assert!(matches!(err, CaptureError::Spawn { .. }));
}

#[tokio::test]
async fn spawn_error_names_the_shell_and_command() {
    let shell = Shell::new(
        "/definitely/not/a/real/shell-zzz",
        vec!["-c".to_string()],
    );

    let err = Executor::new(shell)
        .run("echo hi")
        .await
        .expect_err("spawn must fail");

    let msg = err.to_string();
    assert!(msg.contains("/definitely/not/a/real/shell-zzz"));
    assert!(msg.contains("echo hi"));
}

#[tokio::test]
async fn spawn_failure_is_distinct_from_empty_output() {
    // Same command string: through a working shell it is an Ok empty
    // capture, through a broken interpreter it is a CaptureError. Callers
    // can always tell the two apart.
    let ok = run_command("exit 0").await.expect("default shell works");
    assert!(ok.stdout.is_empty());

    let broken = Shell::new("/definitely/not/a/real/shell-zzz", vec!["-c".to_string()]);
    let err = Executor::new(broken).run("exit 0").await;
    assert!(err.is_err());
}
