//! Git command runner abstraction
//!
//! Centralizes how git is invoked so callers get consistent error context.

use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::{Command, Output, Stdio};

/// Whether a `git` executable can be found on `PATH`.
pub fn git_available() -> bool {
    which::which("git").is_ok()
}

/// Run a git command and return the raw Output.
///
/// # Arguments
/// * `args` - Git command arguments (e.g., `&["rev-parse", "--show-toplevel"]`)
/// * `cwd` - Working directory for the git command
pub fn run_git(args: &[&str], cwd: &Path) -> Result<Output> {
    Command::new("git")
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .output()
        .with_context(|| format!("Failed to execute: git {}", args.join(" ")))
}

/// Run a git command, check for success, and return stdout as a trimmed String.
///
/// On failure, bails with the stderr content.
pub fn run_git_checked(args: &[&str], cwd: &Path) -> Result<String> {
    let output = run_git(args, cwd)?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let cmd = args.first().unwrap_or(&"");
        bail!("git {cmd} failed: {}", stderr.trim());
    }
    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Run a git command and return true if exit code is 0.
///
/// Spawn failures and non-zero exits both yield false.
pub fn run_git_bool(args: &[&str], cwd: &Path) -> bool {
    run_git(args, cwd)
        .map(|output| output.status.success())
        .unwrap_or(false)
}
