//! CLI command implementations
//!
//! Each command returns the process exit code. Errors are printed by the
//! binary as `Error: <message>` and exit with 1.

pub mod install;
pub mod list;
pub mod run;
pub mod seed;
pub mod show;

use anyhow::{bail, Result};

use crate::api::HookApi;

/// Fail with the "where did we look" explanation unless `name` is known.
pub(crate) fn ensure_hook_exists(api: &mut HookApi, name: &str) -> Result<()> {
    if !api.has_hook(name)? {
        bail!("{}", api.hook_not_found_message(name));
    }
    Ok(())
}
