//! Loading hook source files by module identifier
//!
//! A module identifier names a hook source file relative to a search root:
//! `githooks/pre_commit.toml` under the project root is `githooks.pre_commit`.
//! The loader keeps an ordered, duplicate-free list of search roots and a
//! cache of modules it has already loaded, so loading the same identifier
//! twice hands its implementations out only once.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

use tracing::debug;

use crate::error::{HookError, Result};
use crate::hooks::registry::HookHandle;
use crate::models::HookModule;

pub const SOURCE_EXTENSION: &str = "toml";
pub const NAMESPACE_SEPARATOR: char = '.';

/// Convert a source file path into the identifier it has relative to `base`.
///
/// Purely lexical. Returns `None` when `file` is not under `base` or a path
/// component cannot be part of an identifier.
pub fn module_id_for_path(file: &Path, base: &Path) -> Option<String> {
    let relative = file.strip_prefix(base).ok()?.with_extension("");
    let mut parts = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(part) => {
                let part = part.to_str()?;
                if part.is_empty() || part.contains(NAMESPACE_SEPARATOR) {
                    return None;
                }
                parts.push(part.to_string());
            }
            _ => return None,
        }
    }
    if parts.is_empty() {
        return None;
    }
    Some(parts.join(&NAMESPACE_SEPARATOR.to_string()))
}

/// The path, relative to a search root, a module identifier refers to.
pub fn module_relative_path(module: &str) -> PathBuf {
    let mut path: PathBuf = module.split(NAMESPACE_SEPARATOR).collect();
    path.set_extension(SOURCE_EXTENSION);
    path
}

/// A parsed hook source file.
#[derive(Debug, Clone)]
pub struct LoadedModule {
    pub id: String,
    pub origin: PathBuf,
    pub module: HookModule,
}

impl LoadedModule {
    pub fn handles(&self) -> Vec<HookHandle> {
        self.module
            .hooks
            .iter()
            .map(|definition| {
                HookHandle::new(&self.id, &self.origin, Arc::new(definition.clone()))
            })
            .collect()
    }

    pub fn handle(&self, implementation: &str) -> Option<HookHandle> {
        self.module.find(implementation).map(|definition| {
            HookHandle::new(&self.id, &self.origin, Arc::new(definition.clone()))
        })
    }
}

#[derive(Debug, Default)]
pub struct ModuleLoader {
    search_roots: Vec<PathBuf>,
    loaded: BTreeMap<String, Arc<LoadedModule>>,
}

impl ModuleLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `dir` to the search roots unless it is already present.
    ///
    /// Returns true when the root was added.
    pub fn add_search_root(&mut self, dir: &Path) -> bool {
        let dir = canonical(dir);
        if self.search_roots.contains(&dir) {
            return false;
        }
        debug!("Adding module search root {}", dir.display());
        self.search_roots.push(dir);
        true
    }

    pub fn search_roots(&self) -> &[PathBuf] {
        &self.search_roots
    }

    pub fn is_loaded(&self, module: &str) -> bool {
        self.loaded.contains_key(module)
    }

    /// Load a hook source file, naming it relative to `base` when the file
    /// lives under it and by its bare file stem otherwise.
    ///
    /// Returns the implementations the file declares the first time it is
    /// loaded and an empty list on every later call.
    pub fn load_file(&mut self, file: &Path, base: &Path) -> Result<Vec<HookHandle>> {
        let file = canonical(file);
        let base = canonical(base);

        let (root, module) = match module_id_for_path(&file, &base) {
            Some(module) => (base, module),
            None => {
                let root = file.parent().map(Path::to_path_buf).unwrap_or_default();
                let module = module_id_for_path(&file, &root).ok_or_else(|| {
                    HookError::ModuleLoadFailure {
                        module: file.display().to_string(),
                        path: file.clone(),
                        reason: format!(
                            "file name cannot be used as a module identifier (no '{NAMESPACE_SEPARATOR}' allowed)"
                        ),
                    }
                })?;
                (root, module)
            }
        };

        self.add_search_root(&root);

        if self.is_loaded(&module) {
            debug!("Module {module} already loaded");
            return Ok(Vec::new());
        }

        let loaded = self.parse_file(&module, &file)?;
        Ok(loaded.handles())
    }

    /// Load a module by identifier from the search roots, reusing the cache.
    pub fn load(&mut self, module: &str) -> Result<Arc<LoadedModule>> {
        if let Some(loaded) = self.loaded.get(module) {
            return Ok(Arc::clone(loaded));
        }

        let path = self
            .locate(module)
            .ok_or_else(|| HookError::ModuleLoadFailure {
                module: module.to_string(),
                path: module_relative_path(module),
                reason: "module not found on the search path".to_string(),
            })?;
        self.parse_file(module, &path)
    }

    fn parse_file(&mut self, module: &str, path: &Path) -> Result<Arc<LoadedModule>> {
        let fail = |reason: String| HookError::ModuleLoadFailure {
            module: module.to_string(),
            path: path.to_path_buf(),
            reason,
        };

        let text = fs::read_to_string(path).map_err(|e| fail(e.to_string()))?;
        let parsed = HookModule::parse(&text).map_err(fail)?;

        debug!(
            "Loaded module {module} from {} ({} hook(s))",
            path.display(),
            parsed.hooks.len()
        );

        let loaded = Arc::new(LoadedModule {
            id: module.to_string(),
            origin: path.to_path_buf(),
            module: parsed,
        });
        self.loaded.insert(module.to_string(), Arc::clone(&loaded));
        Ok(loaded)
    }

    /// The file a module identifier resolves to: its recorded origin when
    /// loaded, otherwise the first search root that contains it.
    pub fn locate(&self, module: &str) -> Option<PathBuf> {
        if let Some(loaded) = self.loaded.get(module) {
            return Some(loaded.origin.clone());
        }
        let relative = module_relative_path(module);
        self.search_roots
            .iter()
            .map(|root| root.join(&relative))
            .find(|candidate| candidate.is_file())
    }

    /// Display form of a module's source file: relative to `project_root`
    /// when possible, absolute otherwise, `None` when it cannot be found.
    pub fn find_module_file(&self, module: &str, project_root: Option<&Path>) -> Option<String> {
        let path = self.locate(module)?;
        if let Some(root) = project_root {
            if let Ok(relative) = path.strip_prefix(canonical(root)) {
                return Some(relative.display().to_string());
            }
        }
        Some(path.display().to_string())
    }
}

fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}
