use anyhow::{Context, Result};
use clap::CommandFactory;
use hookshed::api::HookApi;
use hookshed::commands::{install, list, run, seed, show};
use hookshed::completions::{generate_completions, Shell};
use hookshed::logging::{self, LogSettings};
use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::types::{Cli, Commands};

pub fn dispatch(cli: Cli) -> Result<i32> {
    let settings = LogSettings {
        debug: cli.debug,
        trace: cli.trace,
        config_level: None,
    };

    match cli.command {
        Commands::Completions { shell } => {
            let shell = Shell::from_str(&shell)?;
            generate_completions(&mut Cli::command(), shell);
            Ok(0)
        }
        Commands::Exec {
            root,
            module,
            implementation,
        } => {
            logging::init(&settings);
            run::delegated(&root, &module, &implementation)
        }
        Commands::List { json } => with_api(&cli.search_paths, settings, |api| list::execute(api, json)),
        Commands::Show { json } => with_api(&cli.search_paths, settings, |api| show::execute(api, json)),
        Commands::Install { name } => {
            with_api(&cli.search_paths, settings, |api| install::install(api, &name))
        }
        Commands::Uninstall { name } => {
            with_api(&cli.search_paths, settings, |api| install::uninstall(api, &name))
        }
        Commands::Run { name } => with_api(&cli.search_paths, settings, |api| run::execute(api, &name)),
        Commands::Seed { example } => {
            with_api(&cli.search_paths, settings, |api| seed::execute(api, example.as_deref()))
        }
    }
}

/// Build the API for the current directory, then start logging with the
/// project's configured level.
fn with_api(
    search_paths: &[PathBuf],
    mut settings: LogSettings,
    command: impl FnOnce(&mut HookApi) -> Result<i32>,
) -> Result<i32> {
    let cwd = env::current_dir().context("Failed to determine the current directory")?;
    let mut api = build_api(&cwd, search_paths)?;

    settings.config_level = api.config().log_level.clone();
    logging::init(&settings);

    command(&mut api)
}

fn build_api(cwd: &Path, search_paths: &[PathBuf]) -> Result<HookApi> {
    Ok(HookApi::new(cwd, search_paths)?)
}
