//! `hookshed seed`: copy a bundled example hook into the project

use anyhow::{bail, Result};
use colored::Colorize;

use crate::api::HookApi;
use crate::hooks::{available_examples, SeedOutcome};

pub fn execute(api: &HookApi, example: Option<&str>) -> Result<i32> {
    let Some(name) = example else {
        println!("{}", "Available example hooks:".bold());
        for example in available_examples() {
            println!("  - {example}");
        }
        return Ok(0);
    };

    match api.seed_example(name)? {
        SeedOutcome::Seeded(path) => {
            println!("{} Seeded example '{name}' to {}", "✓".green(), path.display());
            Ok(0)
        }
        SeedOutcome::UnknownExample => bail!(
            "Example '{name}' not found. Available examples: {}",
            available_examples().join(", ")
        ),
        SeedOutcome::AlreadyExists(path) => {
            bail!("Example '{name}' already exists at {}", path.display())
        }
        SeedOutcome::NoProjectRoot => {
            bail!("Failed to seed example '{name}'. Project root not found.")
        }
    }
}
