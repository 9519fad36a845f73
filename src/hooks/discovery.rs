//! Hook discovery
//!
//! One discovery session resolves the search directories, loads every hook
//! source file it finds, then groups the whole registry by declared hook
//! name. A name claimed by more than one implementation fails the session;
//! a partial map is never returned.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::loader::{ModuleLoader, SOURCE_EXTENSION};
use super::project::LEGACY_HOOK_SUFFIX;
use super::registry::{HookHandle, HookRegistry};
use crate::error::{DuplicateHook, HookError, Result};

/// Hook name to the implementation that answers to it.
pub type HookMap = BTreeMap<String, HookHandle>;

#[derive(Debug)]
pub struct HookDiscoveryService {
    cwd: PathBuf,
    project_root: Option<PathBuf>,
    search_paths: Vec<PathBuf>,
    loader: ModuleLoader,
    registry: HookRegistry,
    discovered: Option<HookMap>,
}

impl HookDiscoveryService {
    /// `search_paths` may be absolute or relative to `cwd`.
    pub fn new(cwd: &Path, project_root: Option<PathBuf>, search_paths: Vec<PathBuf>) -> Self {
        Self {
            cwd: cwd.to_path_buf(),
            project_root,
            search_paths,
            loader: ModuleLoader::new(),
            registry: HookRegistry::new(),
            discovered: None,
        }
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn project_root(&self) -> Option<&Path> {
        self.project_root.as_deref()
    }

    pub fn search_paths(&self) -> &[PathBuf] {
        &self.search_paths
    }

    /// Replace the search paths and forget the memoized result.
    ///
    /// Modules already loaded stay loaded and their implementations stay
    /// registered; the next session re-validates the full registry.
    pub fn set_search_paths(&mut self, search_paths: Vec<PathBuf>) {
        self.search_paths = search_paths;
        self.discovered = None;
    }

    /// Search paths as absolute directories, in configured order.
    pub fn search_dirs(&self) -> Vec<PathBuf> {
        self.search_paths
            .iter()
            .map(|path| {
                if path.is_absolute() {
                    path.clone()
                } else {
                    self.cwd.join(path)
                }
            })
            .collect()
    }

    pub fn loader(&self) -> &ModuleLoader {
        &self.loader
    }

    pub fn registry(&self) -> &HookRegistry {
        &self.registry
    }

    /// Discover all hooks, reusing the previous result of this session.
    pub fn discover_hooks(&mut self) -> Result<HookMap> {
        if let Some(hooks) = &self.discovered {
            return Ok(hooks.clone());
        }

        let Some(project_root) = self.project_root.clone() else {
            debug!("No project root, no hooks available");
            return Ok(HookMap::new());
        };

        for file in self.candidate_files(&project_root) {
            let handles = self.loader.load_file(&file, &project_root)?;
            self.registry.register(handles);
        }

        let hooks = self.group_by_name(&project_root)?;
        debug!("Discovered {} hook(s)", hooks.len());
        self.discovered = Some(hooks.clone());
        Ok(hooks)
    }

    fn candidate_files(&self, project_root: &Path) -> Vec<PathBuf> {
        let mut files = legacy_hook_files(project_root);
        for dir in self.search_dirs() {
            files.extend(source_files(&dir));
        }
        files
    }

    fn group_by_name(&self, project_root: &Path) -> Result<HookMap> {
        let mut groups: BTreeMap<String, Vec<&HookHandle>> = BTreeMap::new();
        for handle in self.registry.handles() {
            let name = handle.instantiate().name().to_string();
            groups.entry(name).or_default().push(handle);
        }

        let duplicates: Vec<DuplicateHook> = groups
            .iter()
            .filter(|(_, handles)| handles.len() > 1)
            .flat_map(|(name, handles)| {
                handles.iter().map(move |handle| DuplicateHook {
                    name: name.clone(),
                    identifier: handle.identifier(),
                    location: self
                        .loader
                        .find_module_file(handle.module(), Some(project_root)),
                })
            })
            .collect();

        if !duplicates.is_empty() {
            return Err(HookError::DuplicateHookName(duplicates));
        }

        Ok(groups
            .into_iter()
            .filter_map(|(name, handles)| handles.first().map(|h| (name, (*h).clone())))
            .collect())
    }
}

/// `*_hook.toml` files directly under the project root.
pub fn legacy_hook_files(project_root: &Path) -> Vec<PathBuf> {
    glob_files(project_root, &format!("*{LEGACY_HOOK_SUFFIX}"))
}

/// Hook source files directly inside `dir`. Subdirectories are not searched.
pub fn source_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }
    glob_files(dir, &format!("*.{SOURCE_EXTENSION}"))
}

fn glob_files(dir: &Path, pattern: &str) -> Vec<PathBuf> {
    let full = format!(
        "{}/{pattern}",
        glob::Pattern::escape(&dir.to_string_lossy())
    );
    match glob::glob(&full) {
        Ok(paths) => paths.flatten().filter(|p| p.is_file()).collect(),
        Err(e) => {
            debug!("Invalid glob pattern {full}: {e}");
            Vec::new()
        }
    }
}
