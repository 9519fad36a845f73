//! `install` and `uninstall` through the CLI

use super::helpers::*;
use anyhow::Result;
use std::collections::BTreeSet;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

fn hooks_listing(repo: &Path) -> Result<BTreeSet<String>> {
    let mut names = BTreeSet::new();
    for entry in fs::read_dir(repo.join(".git/hooks"))? {
        names.insert(entry?.file_name().to_string_lossy().into_owned());
    }
    Ok(names)
}

#[test]
fn test_install_creates_executable_delegator() -> Result<()> {
    let repo = create_project_with_hooks()?;

    let output = hookshed(repo.path(), &["install", "pre-commit"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).contains("Installed hook: pre-commit"));

    let script = repo.path().join(".git/hooks/pre-commit");
    let content = fs::read_to_string(&script)?;
    assert!(content.starts_with("#!/bin/sh"));
    assert!(content.contains("githooks.pre_commit"));
    assert!(content.contains("PreCommit"));
    assert!(!content.contains(&repo.path().display().to_string()));
    assert_eq!(fs::metadata(&script)?.permissions().mode() & 0o755, 0o755);
    Ok(())
}

#[test]
fn test_install_uninstall_round_trip_restores_hooks_dir() -> Result<()> {
    let repo = create_project_with_hooks()?;
    let before = hooks_listing(repo.path())?;

    assert!(hookshed(repo.path(), &["install", "pre-push"])?.status.success());
    assert!(hooks_listing(repo.path())?.contains("pre-push"));

    let output = hookshed(repo.path(), &["uninstall", "pre-push"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(hooks_listing(repo.path())?, before);

    let again = hookshed(repo.path(), &["uninstall", "pre-push"])?;
    assert_eq!(again.status.code(), Some(1));
    assert!(stderr(&again).contains("Failed to uninstall hook 'pre-push'"));
    Ok(())
}

#[test]
fn test_reinstall_overwrites_external_script() -> Result<()> {
    let repo = create_project_with_hooks()?;
    let script = repo.path().join(".git/hooks/pre-commit");
    fs::write(&script, "#!/bin/sh\necho handwritten\n")?;

    assert!(hookshed(repo.path(), &["install", "pre-commit"])?.status.success());
    assert!(hookshed(repo.path(), &["install", "pre-commit"])?.status.success());

    assert!(!fs::read_to_string(&script)?.contains("handwritten"));
    Ok(())
}

#[test]
fn test_install_unknown_hook_explains_where_it_looked() -> Result<()> {
    let repo = create_project_with_hooks()?;

    let output = hookshed(repo.path(), &["install", "post-merge"])?;
    let err = stderr(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(err.contains("Error: Hook 'post-merge' not found"));
    assert!(err.contains("Could not find hooks under:"));
    assert!(err.contains("(no *_hook.toml files found)"));
    assert!(err.contains("(found 2 .toml files)"));
    assert!(!repo.path().join(".git/hooks/post-merge").exists());
    Ok(())
}

#[test]
fn test_install_with_duplicates_writes_nothing() -> Result<()> {
    let repo = create_project_with_hooks()?;
    write_hook(repo.path(), "githooks/other.toml", "Other", "pre-commit", "true")?;

    let output = hookshed(repo.path(), &["install", "pre-commit"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Duplicate hook implementations"));
    assert!(!repo.path().join(".git/hooks/pre-commit").exists());
    Ok(())
}

#[test]
fn test_install_from_subdirectory() -> Result<()> {
    let repo = create_project_with_hooks()?;
    let nested = repo.path().join("src/deep");
    fs::create_dir_all(&nested)?;

    let output = hookshed(&nested, &["install", "pre-commit"])?;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(repo.path().join(".git/hooks/pre-commit").is_file());
    Ok(())
}

#[test]
fn test_install_outside_repository_fails() -> Result<()> {
    let temp = tempfile::TempDir::new()?;
    if temp.path().ancestors().skip(1).any(|d| d.join(".git").exists()) {
        return Ok(());
    }
    write_hook(temp.path(), "githooks/pre_commit.toml", "PreCommit", "pre-commit", "true")?;

    let output = hookshed(temp.path(), &["install", "pre-commit"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Not a git repository"));
    Ok(())
}
