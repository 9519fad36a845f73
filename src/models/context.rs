//! Execution context handed to a hook

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

/// What a hook knows about the event that triggered it.
///
/// Git feeds some hooks (pre-push, post-rewrite, ...) their payload on
/// stdin; those lines are captured once, up front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookContext {
    pub hook_name: String,
    pub stdin_lines: Vec<String>,
    pub project_root: Option<PathBuf>,
}

impl HookContext {
    /// Build a context from the process stdin. An interactive terminal
    /// yields an empty payload instead of blocking.
    pub fn from_stdin(hook_name: &str, project_root: Option<PathBuf>) -> io::Result<Self> {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            return Ok(Self::empty(hook_name).with_project_root(project_root));
        }
        Self::from_reader(hook_name, stdin.lock(), project_root)
    }

    pub fn from_reader(
        hook_name: &str,
        mut reader: impl Read,
        project_root: Option<PathBuf>,
    ) -> io::Result<Self> {
        let mut payload = String::new();
        reader.read_to_string(&mut payload)?;

        let trimmed = payload.trim();
        let stdin_lines = if trimmed.is_empty() {
            Vec::new()
        } else {
            trimmed.lines().map(String::from).collect()
        };

        Ok(Self {
            hook_name: hook_name.to_string(),
            stdin_lines,
            project_root,
        })
    }

    pub fn empty(hook_name: &str) -> Self {
        Self {
            hook_name: hook_name.to_string(),
            ..Self::default()
        }
    }

    pub fn with_project_root(mut self, project_root: Option<PathBuf>) -> Self {
        self.project_root = project_root;
        self
    }

    pub fn stdin_line(&self, index: usize) -> Option<&str> {
        self.stdin_lines.get(index).map(String::as_str)
    }

    pub fn has_stdin(&self) -> bool {
        !self.stdin_lines.is_empty()
    }

    /// The payload as it should be replayed to a child process.
    pub fn stdin_payload(&self) -> String {
        if self.stdin_lines.is_empty() {
            return String::new();
        }
        let mut payload = self.stdin_lines.join("\n");
        payload.push('\n');
        payload
    }
}
