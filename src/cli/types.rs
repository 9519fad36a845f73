use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hookshed")]
#[command(about = "Discover, install and run git hooks defined in your project", long_about = None)]
#[command(version)]
#[command(subcommand_help_heading = "Commands")]
pub struct Cli {
    /// Directory to search for hook files; repeatable, relative to the current directory
    #[arg(long = "search-path", value_name = "DIR", global = true)]
    pub search_paths: Vec<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Enable trace logging
    #[arg(long, global = true)]
    pub trace: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all hooks defined in the project
    List {
        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Show installed git hooks and whether hookshed manages them
    Show {
        /// Print machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Install a hook into .git/hooks
    Install {
        /// Hook name, e.g. pre-commit
        name: String,
    },

    /// Remove an installed hook from .git/hooks
    Uninstall {
        /// Hook name, e.g. pre-commit
        name: String,
    },

    /// Run a hook now, without installing it
    ///
    /// Anything piped to stdin is passed to the hook as its event payload.
    Run {
        /// Hook name, e.g. pre-push
        name: String,
    },

    /// Copy a bundled example hook into githooks/, or list the examples
    Seed {
        /// Example name; omit to list the available examples
        example: Option<String>,
    },

    /// Generate shell completions
    ///
    /// Usage: eval "$(hookshed completions bash)"
    Completions {
        /// Shell type (bash, zsh, fish)
        shell: String,
    },

    /// Run a hook implementation on behalf of an installed hook script
    #[command(hide = true)]
    Exec {
        /// Project root located by the hook script
        #[arg(long)]
        root: PathBuf,

        /// Module identifier, e.g. githooks.pre_commit
        module: String,

        /// Implementation identifier, e.g. PreCommit
        implementation: String,
    },
}
