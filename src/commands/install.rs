//! `hookshed install` and `hookshed uninstall`

use anyhow::{bail, Result};

use super::ensure_hook_exists;
use crate::api::HookApi;

pub fn install(api: &mut HookApi, name: &str) -> Result<i32> {
    ensure_hook_exists(api, name)?;
    if !api.install_hook(name)? {
        bail!("Failed to install hook '{name}'");
    }
    Ok(0)
}

pub fn uninstall(api: &mut HookApi, name: &str) -> Result<i32> {
    ensure_hook_exists(api, name)?;
    if !api.uninstall_hook(name)? {
        bail!("Failed to uninstall hook '{name}'");
    }
    Ok(0)
}
