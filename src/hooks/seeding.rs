//! Bundled example hooks that can be copied into a project

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use super::loader::SOURCE_EXTENSION;
use super::project::{find_project_root, DEFAULT_SEARCH_DIR};
use crate::git::find_git_root;

pub struct Example {
    pub name: &'static str,
    pub content: &'static str,
}

const EXAMPLES: &[Example] = &[
    Example {
        name: "commit_msg_conventional",
        content: include_str!("../../resources/examples/commit_msg_conventional.toml"),
    },
    Example {
        name: "pre_commit_rustfmt",
        content: include_str!("../../resources/examples/pre_commit_rustfmt.toml"),
    },
    Example {
        name: "pre_push_tests",
        content: include_str!("../../resources/examples/pre_push_tests.toml"),
    },
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded(PathBuf),
    UnknownExample,
    AlreadyExists(PathBuf),
    NoProjectRoot,
}

/// Names of the bundled examples, sorted.
pub fn available_examples() -> Vec<&'static str> {
    let mut names: Vec<_> = EXAMPLES.iter().map(|e| e.name).collect();
    names.sort_unstable();
    names
}

pub fn find_example(name: &str) -> Option<&'static Example> {
    EXAMPLES.iter().find(|e| e.name == name)
}

/// Where an example lands inside `root`.
pub fn target_path(root: &Path, name: &str) -> PathBuf {
    root.join(DEFAULT_SEARCH_DIR)
        .join(format!("{name}.{SOURCE_EXTENSION}"))
}

/// Copy example `name` into the `githooks/` directory of the project that
/// encloses `start`, or of the repository when there is no project yet.
/// Never overwrites an existing file.
pub fn seed(name: &str, start: &Path) -> Result<SeedOutcome> {
    let Some(example) = find_example(name) else {
        warn!("Example '{name}' is not available");
        return Ok(SeedOutcome::UnknownExample);
    };

    let Some(root) = find_project_root(start).or_else(|| find_git_root(start)) else {
        warn!("Project root not found, cannot seed hook");
        return Ok(SeedOutcome::NoProjectRoot);
    };

    let target = target_path(&root, name);
    if target.exists() {
        warn!("Target hook '{name}' already exists");
        return Ok(SeedOutcome::AlreadyExists(target));
    }

    let dir = root.join(DEFAULT_SEARCH_DIR);
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    fs::write(&target, example.content)
        .with_context(|| format!("Failed to write {}", target.display()))?;

    info!("Seeded hook '{name}' to {}", target.display());
    Ok(SeedOutcome::Seeded(target))
}
