//! `hookshed seed`: bundled example hooks

use super::helpers::*;
use anyhow::Result;
use std::fs;

#[test]
fn test_seed_lists_examples() -> Result<()> {
    let repo = create_temp_git_repo()?;

    let output = hookshed(repo.path(), &["seed"])?;
    let out = stdout(&output);

    assert!(output.status.success());
    assert!(out.contains("Available example hooks:"));
    assert!(out.contains("pre_commit_rustfmt"));
    assert!(out.contains("pre_push_tests"));
    Ok(())
}

#[test]
fn test_seeded_example_is_discovered() -> Result<()> {
    let repo = create_temp_git_repo()?;

    let output = hookshed(repo.path(), &["seed", "pre_push_tests"])?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(repo.path().join("githooks/pre_push_tests.toml").is_file());

    let list = hookshed(repo.path(), &["list"])?;
    assert!(stdout(&list).contains("pre-push"));
    Ok(())
}

#[test]
fn test_seed_refuses_to_overwrite() -> Result<()> {
    let repo = create_temp_git_repo()?;
    let target = repo.path().join("githooks/pre_commit_rustfmt.toml");
    fs::create_dir_all(target.parent().unwrap())?;
    fs::write(&target, "# local edits\n")?;

    let output = hookshed(repo.path(), &["seed", "pre_commit_rustfmt"])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("already exists"));
    assert_eq!(fs::read_to_string(&target)?, "# local edits\n");
    Ok(())
}

#[test]
fn test_seed_unknown_example() -> Result<()> {
    let repo = create_temp_git_repo()?;

    let output = hookshed(repo.path(), &["seed", "nonexistent"])?;
    let err = stderr(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(err.contains("Example 'nonexistent' not found"));
    assert!(err.contains("pre_push_tests"));
    Ok(())
}
