//! Outcomes of hook and command execution

use serde::Serialize;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
/// Exit code reported when the program to run does not exist
pub const EXIT_COMMAND_NOT_FOUND: i32 = 127;

/// Outcome of a single hook execution.
///
/// `exit_code == 0` holds exactly when `success` is true. Constructors
/// normalize contradictory input towards `success`, so a result can never
/// claim success with a failing exit code or vice versa.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HookResult {
    success: bool,
    message: Option<String>,
    exit_code: i32,
}

impl HookResult {
    pub fn new(success: bool, message: Option<String>, exit_code: i32) -> Self {
        let exit_code = match (success, exit_code) {
            (true, _) => EXIT_SUCCESS,
            (false, EXIT_SUCCESS) => EXIT_FAILURE,
            (false, code) => code,
        };
        Self {
            success,
            message,
            exit_code,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(true, Some(message.into()), EXIT_SUCCESS)
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(false, Some(message.into()), EXIT_FAILURE)
    }

    pub fn failure_with_code(message: impl Into<String>, exit_code: i32) -> Self {
        Self::new(false, Some(message.into()), exit_code)
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }
}

/// Captured outcome of an external command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    pub command: Vec<String>,
}

impl CommandResult {
    pub fn not_found(command: Vec<String>) -> Self {
        let program = command.first().cloned().unwrap_or_default();
        Self {
            success: false,
            exit_code: EXIT_COMMAND_NOT_FOUND,
            stdout: String::new(),
            stderr: format!("Command not found: {program}"),
            command,
        }
    }

    pub fn spawn_failed(command: Vec<String>, error: &std::io::Error) -> Self {
        Self {
            success: false,
            exit_code: EXIT_FAILURE,
            stdout: String::new(),
            stderr: format!("Error executing command: {error}"),
            command,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.exit_code == EXIT_COMMAND_NOT_FOUND
    }
}
