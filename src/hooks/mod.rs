//! Hook discovery, delegation and lifecycle

pub mod delegator;
pub mod diagnostics;
pub mod discovery;
pub mod hook;
pub mod lifecycle;
pub mod loader;
pub mod project;
pub mod registry;
pub mod seeding;

pub use delegator::{render, DelegatorArtifact};
pub use diagnostics::hook_not_found_message;
pub use discovery::{HookDiscoveryService, HookMap};
pub use hook::{run_hook, GitHook, StepHook};
pub use lifecycle::{execute_module, resolve_implementation, HookLifecycleManager};
pub use loader::{module_id_for_path, module_relative_path, ModuleLoader};
pub use project::{find_module_root, find_project_root};
pub use registry::{HookHandle, HookRegistry};
pub use seeding::{available_examples, seed, SeedOutcome};
