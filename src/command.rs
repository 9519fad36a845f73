//! Subprocess execution for hook steps
//!
//! Unlike the git helpers in [`crate::git::runner`], this runner never
//! returns an error: spawn failures are folded into a failing
//! [`CommandResult`] so a step can decide how to report them.

use std::collections::BTreeMap;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;

use tracing::debug;

use crate::models::CommandResult;

/// Runs external programs with optional working directory, stdin and env.
#[derive(Debug, Clone, Default)]
pub struct CommandRunner {
    env: BTreeMap<String, String>,
}

/// A single invocation.
#[derive(Debug, Clone, Default)]
pub struct CommandSpec<'a> {
    pub args: &'a [String],
    pub cwd: Option<&'a Path>,
    pub stdin: Option<&'a str>,
    pub env: Option<&'a BTreeMap<String, String>>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Environment applied to every command started by this runner.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn run(&self, args: &[String], cwd: Option<&Path>) -> CommandResult {
        self.run_spec(&CommandSpec {
            args,
            cwd,
            ..CommandSpec::default()
        })
    }

    pub fn run_spec(&self, spec: &CommandSpec<'_>) -> CommandResult {
        let command_line = spec.args.to_vec();
        let Some((program, rest)) = spec.args.split_first() else {
            return CommandResult::spawn_failed(
                command_line,
                &std::io::Error::new(ErrorKind::InvalidInput, "empty command"),
            );
        };

        debug!("Executing: {}", spec.args.join(" "));

        let mut command = Command::new(program);
        command
            .args(rest)
            .envs(&self.env)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .stdin(if spec.stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            });
        if let Some(env) = spec.env {
            command.envs(env);
        }
        if let Some(cwd) = spec.cwd {
            command.current_dir(cwd);
        }

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return CommandResult::not_found(command_line)
            }
            Err(e) => return CommandResult::spawn_failed(command_line, &e),
        };

        // Feed stdin from its own thread while wait_with_output drains
        // stdout/stderr; writing first deadlocks once both pipes fill.
        let writer = match (spec.stdin, child.stdin.take()) {
            (Some(input), Some(mut stdin)) => {
                let input = input.to_owned();
                let program = program.clone();
                Some(thread::spawn(move || {
                    // A child that exits without reading its stdin is not an error.
                    if let Err(e) = stdin.write_all(input.as_bytes()) {
                        if e.kind() != ErrorKind::BrokenPipe {
                            debug!("Failed to write stdin for {program}: {e}");
                        }
                    }
                }))
            }
            _ => None,
        };

        let output = child.wait_with_output();
        if let Some(writer) = writer {
            if writer.join().is_err() {
                debug!("stdin writer for {program} panicked");
            }
        }

        match output {
            Ok(output) => {
                let exit_code = output.status.code().unwrap_or(-1);
                CommandResult {
                    success: output.status.success(),
                    exit_code,
                    stdout: String::from_utf8_lossy(&output.stdout).to_string(),
                    stderr: String::from_utf8_lossy(&output.stderr).to_string(),
                    command: command_line,
                }
            }
            Err(e) => CommandResult::spawn_failed(command_line, &e),
        }
    }
}

/// Resolve a step's working directory against the project root.
pub fn resolve_cwd(project_root: Option<&Path>, cwd: Option<&str>) -> Option<PathBuf> {
    match (project_root, cwd) {
        (_, Some(dir)) if Path::new(dir).is_absolute() => Some(PathBuf::from(dir)),
        (Some(root), Some(dir)) => Some(root.join(dir)),
        (Some(root), None) => Some(root.to_path_buf()),
        (None, Some(dir)) => Some(PathBuf::from(dir)),
        (None, None) => None,
    }
}
