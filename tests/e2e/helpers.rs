//! Test helper functions for E2E tests

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

pub const BIN: &str = env!("CARGO_BIN_EXE_hookshed");

/// Creates a temporary git repository
///
/// Returns a TempDir that must be kept in scope for the lifetime of the test
pub fn create_temp_git_repo() -> Result<TempDir> {
    let temp = TempDir::new().context("Failed to create temp directory")?;
    init_git_repo(temp.path())?;
    Ok(temp)
}

pub fn init_git_repo(dir: &Path) -> Result<()> {
    for args in [
        &["init", "-q"][..],
        &["config", "user.email", "test@test.com"],
        &["config", "user.name", "Test User"],
        &["config", "commit.gpgsign", "false"],
    ] {
        git(dir, args)?;
    }
    Ok(())
}

pub fn git(dir: &Path, args: &[&str]) -> Result<Output> {
    Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .with_context(|| format!("Failed to run git {}", args.join(" ")))
}

/// A `[[hook]]` table with a single shell step.
pub fn hook_toml(id: &str, name: &str, script: &str) -> String {
    format!(
        "[[hook]]\nid = \"{id}\"\nname = \"{name}\"\n\n[[hook.steps]]\nkind = \"shell\"\nscript = '''\n{script}\n'''\n"
    )
}

/// Write a hook file at `relative` under `root`, creating directories.
pub fn write_hook(root: &Path, relative: &str, id: &str, name: &str, script: &str) -> Result<()> {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, hook_toml(id, name, script))
        .with_context(|| format!("Failed to write {}", path.display()))
}

/// Run the hookshed binary in `dir` with a clean logging environment.
pub fn hookshed(dir: &Path, args: &[&str]) -> Result<Output> {
    hookshed_command(dir, args)
        .stdin(Stdio::null())
        .output()
        .context("Failed to run hookshed")
}

pub fn hookshed_command(dir: &Path, args: &[&str]) -> Command {
    let mut command = Command::new(BIN);
    command
        .args(args)
        .current_dir(dir)
        .env_remove("HOOKSHED_LOG")
        .env_remove("HOOKSHED_DEBUG")
        .env("NO_COLOR", "1");
    command
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// A repository with `githooks/pre_commit.toml` and `githooks/pre_push.toml`.
pub fn create_project_with_hooks() -> Result<TempDir> {
    let temp = create_temp_git_repo()?;
    write_hook(
        temp.path(),
        "githooks/pre_commit.toml",
        "PreCommit",
        "pre-commit",
        "echo pre-commit ran",
    )?;
    write_hook(
        temp.path(),
        "githooks/pre_push.toml",
        "PrePush",
        "pre-push",
        "echo pre-push ran",
    )?;
    Ok(temp)
}
