//! `hookshed show`: what is currently installed in the hook slot directory

use anyhow::Result;
use colored::Colorize;

use crate::api::HookApi;
use crate::error::HookError;

pub fn execute(api: &HookApi, json: bool) -> Result<i32> {
    let installed = match api.installed_hooks() {
        Ok(installed) => installed,
        Err(HookError::HookSlotDirectoryMissing(path)) => {
            if json {
                println!("[]");
            } else {
                println!("No hooks directory found ({})", path.display());
            }
            return Ok(0);
        }
        Err(e) => return Err(e.into()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&installed)?);
        return Ok(0);
    }

    if installed.is_empty() {
        println!("No hooks installed");
        return Ok(0);
    }

    println!("{}", "Installed hooks:".bold());
    for hook in &installed {
        let source = if hook.managed {
            "via hookshed".green()
        } else {
            "external".yellow()
        };
        println!("  - {} ({source})", hook.name);
    }

    Ok(0)
}
