//! Installed delegator scripts, invoked directly and by git itself

use super::helpers::*;
use anyhow::Result;
use serial_test::serial;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn run_script(script: &Path, cwd: &Path, stdin: &str) -> Result<Output> {
    let mut child = Command::new(script)
        .current_dir(cwd)
        .env("HOOKSHED_BIN", BIN)
        .env_remove("HOOKSHED_LOG")
        .env_remove("HOOKSHED_DEBUG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;
    if let Some(mut input) = child.stdin.take() {
        input.write_all(stdin.as_bytes())?;
    }
    Ok(child.wait_with_output()?)
}

#[test]
#[serial]
fn test_delegator_survives_repository_rename() -> Result<()> {
    let parent = TempDir::new()?;
    let original = parent.path().join("project");
    fs::create_dir_all(&original)?;
    init_git_repo(&original)?;
    write_hook(
        &original,
        "githooks/pre_commit.toml",
        "PreCommit",
        "pre-commit",
        "touch \"$HOOKSHED_PROJECT_ROOT/ran\"",
    )?;
    assert!(hookshed(&original, &["install", "pre-commit"])?.status.success());

    let moved = parent.path().join("renamed");
    fs::rename(&original, &moved)?;
    let nested = moved.join("src/deep");
    fs::create_dir_all(&nested)?;

    let output = run_script(&moved.join(".git/hooks/pre-commit"), &nested, "")?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(moved.join("ran").exists());
    assert!(!original.exists());
    Ok(())
}

#[test]
#[serial]
fn test_delegator_from_outside_the_repository() -> Result<()> {
    let repo = create_temp_git_repo()?;
    write_hook(
        repo.path(),
        "githooks/pre_commit.toml",
        "PreCommit",
        "pre-commit",
        "touch \"$HOOKSHED_PROJECT_ROOT/ran\"",
    )?;
    assert!(hookshed(repo.path(), &["install", "pre-commit"])?.status.success());

    let elsewhere = TempDir::new()?;
    let output = run_script(&repo.path().join(".git/hooks/pre-commit"), elsewhere.path(), "")?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(repo.path().join("ran").exists());
    Ok(())
}

#[test]
#[serial]
fn test_delegator_propagates_hook_exit_code() -> Result<()> {
    let repo = create_temp_git_repo()?;
    write_hook(repo.path(), "githooks/gate.toml", "Gate", "pre-commit", "exit 7")?;
    assert!(hookshed(repo.path(), &["install", "pre-commit"])?.status.success());

    let output = run_script(&repo.path().join(".git/hooks/pre-commit"), repo.path(), "")?;

    assert_eq!(output.status.code(), Some(7));
    Ok(())
}

#[test]
#[serial]
fn test_delegator_reports_missing_module() -> Result<()> {
    let repo = create_project_with_hooks()?;
    assert!(hookshed(repo.path(), &["install", "pre-commit"])?.status.success());
    fs::remove_file(repo.path().join("githooks/pre_commit.toml"))?;

    let output = run_script(&repo.path().join(".git/hooks/pre-commit"), repo.path(), "")?;
    let err = stderr(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(err.contains("Could not find project root containing githooks.pre_commit"));
    assert!(err.contains("githooks/pre_commit.toml"));
    Ok(())
}

#[test]
#[serial]
fn test_delegator_forwards_stdin() -> Result<()> {
    let repo = create_temp_git_repo()?;
    let hook = r#"
[[hook]]
id = "PrePush"
name = "pre-push"

[[hook.steps]]
kind = "shell"
script = "cat > \"$HOOKSHED_PROJECT_ROOT/payload\""
stdin = true
"#;
    fs::create_dir_all(repo.path().join("githooks"))?;
    fs::write(repo.path().join("githooks/pre_push.toml"), hook)?;
    assert!(hookshed(repo.path(), &["install", "pre-push"])?.status.success());

    let payload = "refs/heads/main 1111 refs/heads/main 2222\n";
    let output = run_script(&repo.path().join(".git/hooks/pre-push"), repo.path(), payload)?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(fs::read_to_string(repo.path().join("payload"))?, payload);
    Ok(())
}

#[test]
#[serial]
fn test_git_commit_runs_installed_hook() -> Result<()> {
    let repo = create_temp_git_repo()?;
    write_hook(repo.path(), "githooks/gate.toml", "Gate", "pre-commit", "exit 1")?;
    assert!(hookshed(repo.path(), &["install", "pre-commit"])?.status.success());

    let commit = |message: &str| {
        Command::new("git")
            .args(["commit", "--allow-empty", "-q", "-m", message])
            .current_dir(repo.path())
            .env("HOOKSHED_BIN", BIN)
            .output()
    };

    assert!(!commit("blocked")?.status.success());

    write_hook(repo.path(), "githooks/gate.toml", "Gate", "pre-commit", "exit 0")?;
    let allowed = commit("allowed")?;
    assert!(allowed.status.success(), "stderr: {}", stderr(&allowed));
    Ok(())
}
