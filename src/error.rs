//! Error taxonomy for discovery, installation and execution of hooks.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// One implementation taking part in a hook name collision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateHook {
    /// Declared hook name shared by every colliding implementation
    pub name: String,
    /// `<module>.<implementation>`
    pub identifier: String,
    /// Source file, relative to the project root when possible
    pub location: Option<String>,
}

impl fmt::Display for DuplicateHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{} ({location})", self.identifier),
            None => write!(f, "{}", self.identifier),
        }
    }
}

#[derive(Error, Debug)]
pub enum HookError {
    #[error("Not a git repository")]
    RepositoryNotFound,

    #[error("Hooks directory not found: {}", .0.display())]
    HookSlotDirectoryMissing(PathBuf),

    #[error("Could not find project root containing {0}")]
    ProjectRootNotFound(String),

    #[error("{}", format_duplicates(.0))]
    DuplicateHookName(Vec<DuplicateHook>),

    #[error("Hook '{0}' not found")]
    HookNameNotFound(String),

    #[error("Failed to load hook module '{module}' from {}: {reason}", .path.display())]
    ModuleLoadFailure {
        module: String,
        path: PathBuf,
        reason: String,
    },

    #[error("Failed to write hook script {}: {source}", .path.display())]
    ArtifactWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unexpected error in hook '{hook}': {message}")]
    UnhandledHookExecution { hook: String, message: String },

    #[error("Invalid configuration in {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, HookError>;

/// Renders every collision grouped by hook name, in the order the
/// duplicates were collected.
fn format_duplicates(duplicates: &[DuplicateHook]) -> String {
    let mut lines = Vec::new();
    let mut current: Option<&str> = None;

    for duplicate in duplicates {
        if current != Some(duplicate.name.as_str()) {
            lines.push(format!(
                "Duplicate hook implementations found for '{}':",
                duplicate.name
            ));
            current = Some(duplicate.name.as_str());
        }
        lines.push(format!("  - {duplicate}"));
    }

    lines.join("\n")
}
