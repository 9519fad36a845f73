//! Embedding entry point
//!
//! [`HookApi`] wires project root lookup, configuration, discovery and the
//! lifecycle manager together for one working directory. The CLI is a thin
//! layer over it.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::{resolve_search_paths, Config};
use crate::error::Result;
use crate::git::{classify_installed_hooks, find_git_root, require_hooks_dir};
use crate::hooks::{
    hook_not_found_message, seed, HookDiscoveryService, HookLifecycleManager, HookMap,
    SeedOutcome,
};

/// A discovered hook as shown to users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HookSummary {
    pub name: String,
    pub module: String,
    pub implementation: String,
    pub description: Option<String>,
    pub location: Option<String>,
}

/// An entry of the hook slot directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstalledHook {
    pub name: String,
    pub managed: bool,
}

#[derive(Debug)]
pub struct HookApi {
    cwd: PathBuf,
    config: Config,
    lifecycle: HookLifecycleManager,
}

impl HookApi {
    /// Set up for `cwd`, reading `hookshed.toml` when there is a project.
    /// `search_paths` from the command line take precedence over the
    /// configuration.
    pub fn new(cwd: &Path, search_paths: &[PathBuf]) -> Result<Self> {
        let project_root = crate::hooks::find_project_root(cwd);
        let config = match &project_root {
            Some(root) => Config::load(root)?,
            None => Config::default(),
        };
        let search_paths = resolve_search_paths(search_paths, cwd, project_root.as_deref(), &config);
        Ok(Self::with_parts(cwd, project_root, search_paths, config))
    }

    pub fn with_parts(
        cwd: &Path,
        project_root: Option<PathBuf>,
        search_paths: Vec<PathBuf>,
        config: Config,
    ) -> Self {
        let discovery = HookDiscoveryService::new(cwd, project_root, search_paths);
        Self {
            cwd: cwd.to_path_buf(),
            config,
            lifecycle: HookLifecycleManager::new(discovery),
        }
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn project_root(&self) -> Option<&Path> {
        self.lifecycle.discovery().project_root()
    }

    pub fn search_paths(&self) -> &[PathBuf] {
        self.lifecycle.discovery().search_paths()
    }

    pub fn set_search_paths(&mut self, search_paths: Vec<PathBuf>) {
        self.lifecycle.discovery_mut().set_search_paths(search_paths);
    }

    pub fn git_root(&self) -> Option<PathBuf> {
        find_git_root(&self.cwd)
    }

    pub fn discover_hooks(&mut self) -> Result<HookMap> {
        self.lifecycle.discovery_mut().discover_hooks()
    }

    /// Discovered hook names, sorted.
    pub fn list_hooks(&mut self) -> Result<Vec<String>> {
        Ok(self.discover_hooks()?.into_keys().collect())
    }

    pub fn hook_summaries(&mut self) -> Result<Vec<HookSummary>> {
        let hooks = self.discover_hooks()?;
        let discovery = self.lifecycle.discovery();
        Ok(hooks
            .into_iter()
            .map(|(name, handle)| HookSummary {
                location: discovery
                    .loader()
                    .find_module_file(handle.module(), discovery.project_root()),
                description: handle.definition().description.clone(),
                module: handle.module().to_string(),
                implementation: handle.implementation().to_string(),
                name,
            })
            .collect())
    }

    pub fn has_hook(&mut self, name: &str) -> Result<bool> {
        Ok(self.discover_hooks()?.contains_key(name))
    }

    pub fn hook_not_found_message(&self, name: &str) -> String {
        hook_not_found_message(self.lifecycle.discovery(), name)
    }

    pub fn install_hook(&mut self, name: &str) -> Result<bool> {
        self.lifecycle.install(name)
    }

    pub fn uninstall_hook(&mut self, name: &str) -> Result<bool> {
        self.lifecycle.uninstall(name)
    }

    pub fn run_hook(&mut self, name: &str) -> Result<i32> {
        self.lifecycle.run(name)
    }

    /// Scripts in the hook slot directory and whether this tool wrote them.
    pub fn installed_hooks(&self) -> Result<Vec<InstalledHook>> {
        let hooks_dir = require_hooks_dir(&self.cwd)?;
        Ok(classify(classify_installed_hooks(&hooks_dir)))
    }

    pub fn seed_example(&self, name: &str) -> anyhow::Result<SeedOutcome> {
        seed(name, &self.cwd)
    }
}

fn classify(installed: BTreeMap<String, bool>) -> Vec<InstalledHook> {
    installed
        .into_iter()
        .map(|(name, managed)| InstalledHook { name, managed })
        .collect()
}
