//! `hookshed run` and the hidden `hookshed exec` used by installed hooks

use std::path::Path;

use anyhow::Result;

use super::ensure_hook_exists;
use crate::api::HookApi;
use crate::hooks::execute_module;

/// Run a discovered hook in-process, without installing it.
pub fn execute(api: &mut HookApi, name: &str) -> Result<i32> {
    ensure_hook_exists(api, name)?;
    Ok(api.run_hook(name)?)
}

/// Run one implementation of one module on behalf of a delegator script.
pub fn delegated(root: &Path, module: &str, implementation: &str) -> Result<i32> {
    Ok(execute_module(root, module, implementation))
}
