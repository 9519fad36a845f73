//! `hookshed list`

use anyhow::Result;
use colored::Colorize;

use crate::api::HookApi;

pub fn execute(api: &mut HookApi, json: bool) -> Result<i32> {
    let hooks = api.hook_summaries()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&hooks)?);
        return Ok(0);
    }

    if hooks.is_empty() {
        println!("No hooks found");
        return Ok(0);
    }

    println!("{}", "Available hooks:".bold());
    for hook in &hooks {
        let source = hook
            .location
            .clone()
            .unwrap_or_else(|| hook.module.clone());
        println!(
            "  - {} {}",
            hook.name.cyan(),
            format!("({}.{} in {source})", hook.module, hook.implementation).dimmed()
        );
        if let Some(description) = &hook.description {
            println!("      {description}");
        }
    }

    Ok(0)
}
