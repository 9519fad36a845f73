//! Install, uninstall and run discovered hooks
//!
//! Discovery-time failures (duplicate names, broken modules) come back as
//! `Err`. Everything else that can go wrong here is an expected state such
//! as "not in a repository" or "not installed", so it is logged and reported
//! as `Ok(false)` or a failing exit code.

use std::fs;
use std::path::Path;

use tracing::{error, info, warn};

use super::delegator::DelegatorArtifact;
use super::discovery::HookDiscoveryService;
use super::hook::run_hook;
use super::loader::ModuleLoader;
use super::project::find_module_root;
use super::registry::HookHandle;
use crate::error::{HookError, Result};
use crate::git::require_hooks_dir;
use crate::models::{HookContext, EXIT_FAILURE};

#[derive(Debug)]
pub struct HookLifecycleManager {
    discovery: HookDiscoveryService,
}

impl HookLifecycleManager {
    pub fn new(discovery: HookDiscoveryService) -> Self {
        Self { discovery }
    }

    pub fn discovery(&self) -> &HookDiscoveryService {
        &self.discovery
    }

    pub fn discovery_mut(&mut self) -> &mut HookDiscoveryService {
        &mut self.discovery
    }

    fn lookup(&mut self, name: &str) -> Result<Option<HookHandle>> {
        let hooks = self.discovery.discover_hooks()?;
        let handle = hooks.get(name).cloned();
        if handle.is_none() {
            warn!("Hook '{name}' not found in discovered hooks");
        }
        Ok(handle)
    }

    /// Write the delegator for `name` into the hook slot directory,
    /// replacing any script already there.
    pub fn install(&mut self, name: &str) -> Result<bool> {
        let Some(handle) = self.lookup(name)? else {
            return Ok(false);
        };

        let hooks_dir = match require_hooks_dir(self.discovery.cwd()) {
            Ok(dir) => dir,
            Err(e) => {
                error!("{e}");
                return Ok(false);
            }
        };

        if find_module_root(handle.module(), self.discovery.cwd()).is_none() {
            error!("{}", HookError::ProjectRootNotFound(handle.module().to_string()));
            return Ok(false);
        }

        let artifact =
            DelegatorArtifact::new(&hooks_dir, name, handle.module(), handle.implementation());
        if let Err(e) = artifact.write() {
            error!("{e}");
            return Ok(false);
        }

        info!("Installed hook: {name}");
        Ok(true)
    }

    /// Remove the installed script for `name`. Removing a hook that is not
    /// installed is reported, not escalated.
    pub fn uninstall(&mut self, name: &str) -> Result<bool> {
        if self.lookup(name)?.is_none() {
            return Ok(false);
        }

        let hooks_dir = match require_hooks_dir(self.discovery.cwd()) {
            Ok(dir) => dir,
            Err(e) => {
                error!("{e}");
                return Ok(false);
            }
        };

        let script = hooks_dir.join(name);
        if !script.exists() {
            warn!("Hook script not found: {}", script.display());
            return Ok(false);
        }

        if let Err(e) = fs::remove_file(&script) {
            error!("Failed to uninstall hook {name}: {e}");
            return Ok(false);
        }

        info!("Uninstalled hook: {name}");
        Ok(true)
    }

    /// Run `name` in-process with the payload piped to this process.
    pub fn run(&mut self, name: &str) -> Result<i32> {
        let project_root = self.discovery.project_root().map(Path::to_path_buf);
        let context = match HookContext::from_stdin(name, project_root) {
            Ok(context) => context,
            Err(e) => {
                error!("Failed to read hook input: {e}");
                return Ok(EXIT_FAILURE);
            }
        };
        self.run_with_context(name, &context)
    }

    pub fn run_with_context(&mut self, name: &str, context: &HookContext) -> Result<i32> {
        let Some(handle) = self.lookup(name)? else {
            return Ok(EXIT_FAILURE);
        };
        let hook = handle.instantiate();
        Ok(run_hook(hook.as_ref(), context))
    }
}

/// Entry point of an installed delegator: load `module` from `root` and run
/// one implementation from it, without a discovery session.
pub fn execute_module(root: &Path, module: &str, implementation: &str) -> i32 {
    let handle = match resolve_implementation(root, module, implementation) {
        Ok(handle) => handle,
        Err(e) => {
            error!("{e}");
            return EXIT_FAILURE;
        }
    };

    let hook = handle.instantiate();
    let context = match HookContext::from_stdin(hook.name(), Some(root.to_path_buf())) {
        Ok(context) => context,
        Err(e) => {
            error!("Failed to read hook input: {e}");
            return EXIT_FAILURE;
        }
    };
    run_hook(hook.as_ref(), &context)
}

/// Load `module` with `root` as the only search root and pick one
/// implementation out of it.
pub fn resolve_implementation(root: &Path, module: &str, implementation: &str) -> Result<HookHandle> {
    let mut loader = ModuleLoader::new();
    loader.add_search_root(root);

    let loaded = loader.load(module)?;
    loaded
        .handle(implementation)
        .ok_or_else(|| HookError::ModuleLoadFailure {
            module: module.to_string(),
            path: loaded.origin.clone(),
            reason: format!("no hook implementation '{implementation}'"),
        })
}
