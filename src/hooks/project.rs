//! Project root lookup
//!
//! The project root bounds legacy hook discovery and is where module
//! identifiers are anchored. It is distinct from the git root, although the
//! two usually coincide.

use std::path::{Path, PathBuf};

use super::loader::module_relative_path;

pub const PROJECT_CONFIG_FILE: &str = "hookshed.toml";
pub const DEFAULT_SEARCH_DIR: &str = "githooks";
/// Hook files directly under the project root with this suffix are discovered
/// without any search path configuration.
pub const LEGACY_HOOK_SUFFIX: &str = "_hook.toml";

/// Nearest ancestor of `start` (inclusive) holding a `hookshed.toml` file or
/// a `githooks/` directory.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let start = start.canonicalize().unwrap_or_else(|_| start.to_path_buf());
    start
        .ancestors()
        .find(|dir| dir.join(PROJECT_CONFIG_FILE).is_file() || dir.join(DEFAULT_SEARCH_DIR).is_dir())
        .map(Path::to_path_buf)
}

/// Nearest ancestor of `start` that is a repository root and contains the
/// source file of `module`, mirroring what an installed delegator searches
/// for at run time.
pub fn find_module_root(module: &str, start: &Path) -> Option<PathBuf> {
    let relative = module_relative_path(module);
    let start = start.canonicalize().unwrap_or_else(|_| start.to_path_buf());
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists() && dir.join(&relative).is_file())
        .map(Path::to_path_buf)
}
