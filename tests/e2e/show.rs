//! `hookshed show` and shell completions

use super::helpers::*;
use anyhow::Result;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_show_classifies_installed_scripts() -> Result<()> {
    let repo = create_project_with_hooks()?;
    assert!(hookshed(repo.path(), &["install", "pre-commit"])?.status.success());
    fs::write(
        repo.path().join(".git/hooks/post-merge"),
        "#!/bin/sh\necho handwritten\n",
    )?;

    let output = hookshed(repo.path(), &["show"])?;
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(out.contains("Installed hooks:"));
    assert!(out.contains("pre-commit (via hookshed)"));
    assert!(out.contains("post-merge (external)"));
    assert!(!out.contains(".sample"));
    Ok(())
}

#[test]
fn test_show_json() -> Result<()> {
    let repo = create_project_with_hooks()?;
    assert!(hookshed(repo.path(), &["install", "pre-push"])?.status.success());

    let output = hookshed(repo.path(), &["show", "--json"])?;
    let installed: serde_json::Value = serde_json::from_slice(&output.stdout)?;

    assert_eq!(installed[0]["name"], "pre-push");
    assert_eq!(installed[0]["managed"], true);
    Ok(())
}

#[test]
fn test_show_with_nothing_installed() -> Result<()> {
    let repo = create_temp_git_repo()?;

    let output = hookshed(repo.path(), &["show"])?;

    assert!(output.status.success());
    assert!(stdout(&output).contains("No hooks installed"));
    Ok(())
}

#[test]
fn test_show_outside_repository_fails() -> Result<()> {
    let temp = TempDir::new()?;
    if temp.path().ancestors().skip(1).any(|d| d.join(".git").exists()) {
        return Ok(());
    }

    let output = hookshed(temp.path(), &["show"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: Not a git repository"));
    Ok(())
}

#[test]
fn test_completions_for_supported_shells() -> Result<()> {
    let temp = TempDir::new()?;
    for shell in ["bash", "zsh", "fish"] {
        let output = hookshed(temp.path(), &["completions", shell])?;
        assert!(output.status.success(), "{shell}");
        assert!(stdout(&output).contains("hookshed"), "{shell}");
    }

    let output = hookshed(temp.path(), &["completions", "powershell"])?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unsupported shell"));
    Ok(())
}
