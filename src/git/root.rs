//! Repository root and hook slot resolution

use std::path::{Path, PathBuf};

use tracing::debug;

use super::runner::{git_available, run_git_checked};
use crate::error::{HookError, Result};

/// Find the root of the git working tree enclosing `start`.
///
/// Asks git first and only trusts the answer when a `.git` entry actually
/// exists there; otherwise walks up from `start` looking for `.git`.
/// Returns `None` outside a repository, which is a normal outcome.
pub fn find_git_root(start: &Path) -> Option<PathBuf> {
    query_git_toplevel(start).or_else(|| walk_up_for_git(start))
}

fn query_git_toplevel(start: &Path) -> Option<PathBuf> {
    if !git_available() {
        return None;
    }

    match run_git_checked(&["rev-parse", "--show-toplevel"], start) {
        Ok(top) if !top.is_empty() => {
            let top = PathBuf::from(top);
            if top.join(".git").exists() {
                Some(canonical(&top))
            } else {
                debug!("git reported {} but it has no .git entry", top.display());
                None
            }
        }
        Ok(_) => None,
        Err(e) => {
            debug!("git root query failed: {e:#}");
            None
        }
    }
}

fn walk_up_for_git(start: &Path) -> Option<PathBuf> {
    let start = canonical(start);
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

/// The directory git reads hook scripts from for the repository at `git_root`.
///
/// Git is asked via `rev-parse --git-path hooks`, which honours
/// `core.hooksPath`, linked worktrees and submodules. A `.git` directory is
/// passed explicitly so git never answers for an enclosing repository.
/// `.git/hooks` is used only when git is unavailable or cannot answer.
pub fn hooks_dir(git_root: &Path) -> PathBuf {
    let dot_git = git_root.join(".git");
    let fallback = dot_git.join("hooks");
    if !git_available() {
        return fallback;
    }

    let git_dir = format!("--git-dir={}", dot_git.display());
    let mut args = Vec::with_capacity(4);
    if dot_git.is_dir() {
        args.push(git_dir.as_str());
    }
    args.extend(["rev-parse", "--git-path", "hooks"]);

    match run_git_checked(&args, git_root) {
        Ok(path) if !path.is_empty() => git_root.join(path),
        Ok(_) => fallback,
        Err(e) => {
            debug!("git hooks path query failed: {e:#}");
            fallback
        }
    }
}

/// Resolve the hook slot directory, distinguishing "not a repository" from
/// "repository without a hooks directory".
pub fn require_hooks_dir(start: &Path) -> Result<PathBuf> {
    let git_root = find_git_root(start).ok_or(HookError::RepositoryNotFound)?;
    let dir = hooks_dir(&git_root);
    if !dir.is_dir() {
        return Err(HookError::HookSlotDirectoryMissing(dir));
    }
    Ok(dir)
}
