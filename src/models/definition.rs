//! On-disk schema of a hook source file
//!
//! A hook source file is TOML with one `[[hook]]` table per implementation:
//!
//! ```toml
//! [[hook]]
//! id = "PreCommit"
//! name = "pre-commit"
//!
//! [[hook.steps]]
//! kind = "command"
//! run = ["cargo", "fmt", "--check"]
//! skip_if_missing = true
//! ```

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

const MODULE_KEYS: &[&str] = &["hook"];
const HOOK_KEYS: &[&str] = &["id", "name", "description", "fail_fast", "steps"];
const COMMAND_STEP_KEYS: &[&str] = &["kind", "run", "name", "cwd", "env", "stdin", "skip_if_missing"];
const SHELL_STEP_KEYS: &[&str] = &["kind", "script", "name", "cwd", "env", "stdin", "skip_if_missing"];
const LOG_STEP_KEYS: &[&str] = &["kind", "message", "level"];

/// Parsed contents of one hook source file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookModule {
    #[serde(default, rename = "hook")]
    pub hooks: Vec<HookDefinition>,
}

/// A single hook implementation declared in a source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookDefinition {
    /// Implementation identifier, unique within its file
    pub id: String,
    /// Git event the hook binds to; not tied to the file name
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Stop at the first failing step
    #[serde(default = "default_fail_fast")]
    pub fail_fast: bool,
    #[serde(default)]
    pub steps: Vec<Step>,
}

fn default_fail_fast() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Step {
    /// Run a program with an explicit argument vector
    Command {
        run: Vec<String>,
        #[serde(flatten)]
        options: StepOptions,
    },
    /// Run a snippet through `sh -c`
    Shell {
        script: String,
        #[serde(flatten)]
        options: StepOptions,
    },
    /// Emit a message through the hook's logger
    Log {
        message: String,
        #[serde(default)]
        level: StepLevel,
    },
}

/// Settings shared by the process-spawning step kinds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOptions {
    #[serde(default)]
    pub name: Option<String>,
    /// Working directory, relative to the project root
    #[serde(default)]
    pub cwd: Option<String>,
    #[serde(default)]
    pub env: BTreeMap<String, String>,
    /// Forward the hook's stdin payload to the child process
    #[serde(default)]
    pub stdin: bool,
    /// Treat "command not found" as a skipped, successful step
    #[serde(default)]
    pub skip_if_missing: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepLevel {
    #[default]
    Info,
    Warn,
    Error,
}

impl Step {
    /// Human readable label used in log lines.
    pub fn label(&self) -> String {
        match self {
            Step::Command { run, options } => options
                .name
                .clone()
                .unwrap_or_else(|| run.join(" ")),
            Step::Shell { script, options } => options
                .name
                .clone()
                .unwrap_or_else(|| script.lines().next().unwrap_or_default().to_string()),
            Step::Log { message, .. } => message.clone(),
        }
    }
}

impl HookModule {
    /// Parse and validate the text of a hook source file.
    ///
    /// Unknown keys are rejected. Step options are flattened into the step
    /// tables, so serde alone would ignore a misspelt option.
    pub fn parse(text: &str) -> Result<Self, String> {
        let module: HookModule = toml::from_str(text).map_err(|e| e.to_string())?;
        let table: toml::Table = toml::from_str(text).map_err(|e| e.to_string())?;
        check_known_keys(&table)?;
        module.validate()?;
        Ok(module)
    }

    fn validate(&self) -> Result<(), String> {
        let mut seen = HashSet::new();

        for hook in &self.hooks {
            if !is_valid_identifier(&hook.id) {
                return Err(format!(
                    "invalid hook id '{}': use letters, digits and underscores only",
                    hook.id
                ));
            }
            if hook.name.trim().is_empty() {
                return Err(format!("hook '{}' declares an empty name", hook.id));
            }
            if !is_valid_hook_name(&hook.name) {
                return Err(format!(
                    "hook '{}' declares name '{}', which is not a plain file name",
                    hook.id, hook.name
                ));
            }
            if !seen.insert(hook.id.as_str()) {
                return Err(format!("hook id '{}' is declared more than once", hook.id));
            }
            for step in &hook.steps {
                if let Step::Command { run, .. } = step {
                    if run.is_empty() {
                        return Err(format!(
                            "hook '{}' has a command step with an empty `run` list",
                            hook.id
                        ));
                    }
                }
            }
        }

        Ok(())
    }

    pub fn find(&self, id: &str) -> Option<&HookDefinition> {
        self.hooks.iter().find(|hook| hook.id == id)
    }
}

/// Hook names become file names in the hook slot directory.
fn is_valid_hook_name(name: &str) -> bool {
    !matches!(name, "." | "..") && !name.contains(['/', '\\', '\0'])
}

fn check_known_keys(table: &toml::Table) -> Result<(), String> {
    reject_unknown_keys(table, MODULE_KEYS, "hook file")?;

    for hook in tables(table.get("hook")) {
        let id = hook.get("id").and_then(toml::Value::as_str).unwrap_or("?");
        reject_unknown_keys(hook, HOOK_KEYS, &format!("hook '{id}'"))?;

        for (index, step) in tables(hook.get("steps")).enumerate() {
            let allowed = match step.get("kind").and_then(toml::Value::as_str) {
                Some("command") => COMMAND_STEP_KEYS,
                Some("shell") => SHELL_STEP_KEYS,
                Some("log") => LOG_STEP_KEYS,
                _ => continue,
            };
            reject_unknown_keys(step, allowed, &format!("step {} of hook '{id}'", index + 1))?;
        }
    }

    Ok(())
}

fn tables(value: Option<&toml::Value>) -> impl Iterator<Item = &toml::Table> {
    value
        .and_then(toml::Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(toml::Value::as_table)
}

fn reject_unknown_keys(table: &toml::Table, allowed: &[&str], what: &str) -> Result<(), String> {
    match table.keys().find(|key| !allowed.contains(&key.as_str())) {
        Some(key) => Err(format!(
            "unknown key '{key}' in {what}; expected one of: {}",
            allowed.join(", ")
        )),
        None => Ok(()),
    }
}

fn is_valid_identifier(id: &str) -> bool {
    let mut chars = id.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
