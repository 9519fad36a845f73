//! Registered hook implementations
//!
//! The registry is an explicit, append-only list owned by the discovery
//! service. It is filled by calling [`HookRegistry::register`] with the
//! handles returned from each new module load and is always read in full.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::hook::{GitHook, StepHook};
use crate::models::HookDefinition;

/// Everything needed to instantiate one implementation again later.
#[derive(Debug, Clone)]
pub struct HookHandle {
    module: String,
    implementation: String,
    origin: PathBuf,
    definition: Arc<HookDefinition>,
}

impl HookHandle {
    pub fn new(module: &str, origin: &Path, definition: Arc<HookDefinition>) -> Self {
        Self {
            module: module.to_string(),
            implementation: definition.id.clone(),
            origin: origin.to_path_buf(),
            definition,
        }
    }

    /// Module identifier the implementation was loaded from.
    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn implementation(&self) -> &str {
        &self.implementation
    }

    /// `<module>.<implementation>`
    pub fn identifier(&self) -> String {
        format!("{}.{}", self.module, self.implementation)
    }

    pub fn origin(&self) -> &Path {
        &self.origin
    }

    pub fn definition(&self) -> &HookDefinition {
        &self.definition
    }

    /// Build a runnable hook. Takes no arguments; all configuration comes
    /// from the definition.
    pub fn instantiate(&self) -> Box<dyn GitHook> {
        Box::new(StepHook::new(Arc::clone(&self.definition)))
    }
}

#[derive(Debug, Default)]
pub struct HookRegistry {
    handles: Vec<HookHandle>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, handles: impl IntoIterator<Item = HookHandle>) {
        self.handles.extend(handles);
    }

    /// Every handle registered so far, in registration order.
    pub fn handles(&self) -> &[HookHandle] {
        &self.handles
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}
