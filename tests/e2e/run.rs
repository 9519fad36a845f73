//! `hookshed run`: executing hooks without installing them

use super::helpers::*;
use anyhow::Result;
use std::fs;
use std::io::Write;
use std::process::Stdio;

#[test]
fn test_run_succeeds_for_passing_hook() -> Result<()> {
    let repo = create_project_with_hooks()?;

    let output = hookshed(repo.path(), &["run", "pre-commit"])?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(!repo.path().join(".git/hooks/pre-commit").exists());
    Ok(())
}

#[test]
fn test_run_returns_hook_exit_code() -> Result<()> {
    let repo = create_temp_git_repo()?;
    write_hook(repo.path(), "githooks/gate.toml", "Gate", "pre-commit", "echo nope >&2; exit 3")?;

    let output = hookshed(repo.path(), &["run", "pre-commit"])?;

    assert_eq!(output.status.code(), Some(3));
    assert!(stderr(&output).contains("nope"));
    Ok(())
}

#[test]
fn test_run_debug_shows_step_output() -> Result<()> {
    let repo = create_project_with_hooks()?;

    let quiet = hookshed(repo.path(), &["run", "pre-commit"])?;
    assert!(!stdout(&quiet).contains("pre-commit ran"));

    let debug = hookshed(repo.path(), &["run", "pre-commit", "--debug"])?;
    assert!(debug.status.success());
    assert!(stdout(&debug).contains("pre-commit ran"));
    Ok(())
}

#[test]
fn test_run_passes_stdin_payload() -> Result<()> {
    let repo = create_temp_git_repo()?;
    let hook = r#"
[[hook]]
id = "PrePush"
name = "pre-push"

[[hook.steps]]
kind = "shell"
script = "read local_ref rest; test \"$local_ref\" = refs/heads/main"
stdin = true
"#;
    fs::create_dir_all(repo.path().join("githooks"))?;
    fs::write(repo.path().join("githooks/pre_push.toml"), hook)?;

    let mut child = hookshed_command(repo.path(), &["run", "pre-push"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    if let Some(mut input) = child.stdin.take() {
        input.write_all(b"refs/heads/main abc refs/heads/main def\n")?;
    }
    let output = child.wait_with_output()?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    Ok(())
}

#[test]
fn test_run_unknown_hook_fails() -> Result<()> {
    let repo = create_project_with_hooks()?;

    let output = hookshed(repo.path(), &["run", "post-checkout"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Hook 'post-checkout' not found"));
    Ok(())
}

#[test]
fn test_run_broken_hook_is_caught() -> Result<()> {
    let repo = create_temp_git_repo()?;
    let hook = r#"
[[hook]]
id = "Broken"
name = "pre-commit"

[[hook.steps]]
kind = "shell"
script = "true"
cwd = "does/not/exist"
"#;
    fs::create_dir_all(repo.path().join("githooks"))?;
    fs::write(repo.path().join("githooks/broken.toml"), hook)?;

    let output = hookshed(repo.path(), &["run", "pre-commit"])?;
    let err = stderr(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(err.contains("Unexpected error in hook 'pre-commit'"));
    assert!(err.contains("does/not/exist"));
    Ok(())
}
