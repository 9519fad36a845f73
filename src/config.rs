//! Project configuration
//!
//! An optional `hookshed.toml` at the project root:
//!
//! ```toml
//! search_paths = ["githooks", "tools/hooks"]
//! log_level = "debug"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{HookError, Result};
use crate::hooks::project::{DEFAULT_SEARCH_DIR, PROJECT_CONFIG_FILE};

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Relative entries are resolved against the project root
    #[serde(default)]
    pub search_paths: Vec<PathBuf>,
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Config {
    /// Load `hookshed.toml` from `project_root`. A missing file is the
    /// default configuration; an unreadable or invalid one is an error.
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = project_root.join(PROJECT_CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }

        let invalid = |reason: String| HookError::Config {
            path: path.clone(),
            reason,
        };

        let content = fs::read_to_string(&path).map_err(|e| invalid(e.to_string()))?;
        let config: Config = toml::from_str(&content).map_err(|e| invalid(e.to_string()))?;

        if let Some(level) = &config.log_level {
            if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
                return Err(invalid(format!(
                    "unknown log_level '{level}', expected one of: {}",
                    LOG_LEVELS.join(", ")
                )));
            }
        }

        Ok(config)
    }
}

/// Decide which directories discovery searches.
///
/// Command-line entries win and are relative to `cwd`. Otherwise the
/// configured entries are used, relative to the project root. Without either
/// the default `githooks` directory is searched under the project root, or
/// under `cwd` when there is no project.
pub fn resolve_search_paths(
    cli_paths: &[PathBuf],
    cwd: &Path,
    project_root: Option<&Path>,
    config: &Config,
) -> Vec<PathBuf> {
    if !cli_paths.is_empty() {
        return cli_paths.iter().map(|p| absolutize(p, cwd)).collect();
    }

    let base = project_root.unwrap_or(cwd);
    if !config.search_paths.is_empty() {
        return config
            .search_paths
            .iter()
            .map(|p| absolutize(p, base))
            .collect();
    }

    vec![base.join(DEFAULT_SEARCH_DIR)]
}

fn absolutize(path: &Path, base: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
