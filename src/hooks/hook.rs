//! The hook capability and its step-driven implementation

use std::sync::Arc;

use anyhow::{bail, Result};
use tracing::{debug, error, info, info_span, warn};

use crate::command::{resolve_cwd, CommandRunner, CommandSpec};
use crate::error::HookError;
use crate::models::{
    CommandResult, HookContext, HookDefinition, HookResult, Step, StepLevel, StepOptions,
    EXIT_FAILURE,
};

/// Environment variable carrying the hook name into every step.
pub const HOOK_NAME_ENV: &str = "HOOKSHED_HOOK_NAME";
/// Environment variable carrying the project root into every step, when known.
pub const PROJECT_ROOT_ENV: &str = "HOOKSHED_PROJECT_ROOT";

/// Anything that can answer to a git hook event.
///
/// `execute` returning `Err` means the hook itself broke, as opposed to a
/// check that ran and failed, which is an `Ok` with a failing [`HookResult`].
pub trait GitHook {
    fn name(&self) -> &str;
    fn execute(&self, context: &HookContext) -> Result<HookResult>;
}

/// A hook backed by the steps of a [`HookDefinition`].
#[derive(Debug, Clone)]
pub struct StepHook {
    definition: Arc<HookDefinition>,
    runner: CommandRunner,
}

enum StepOutcome {
    Passed,
    Skipped,
    Failed { exit_code: i32, message: String },
}

impl StepHook {
    pub fn new(definition: Arc<HookDefinition>) -> Self {
        Self {
            definition,
            runner: CommandRunner::new(),
        }
    }

    fn runner_for(&self, context: &HookContext) -> CommandRunner {
        let runner = self
            .runner
            .clone()
            .with_env(HOOK_NAME_ENV, self.definition.name.as_str());
        match &context.project_root {
            Some(root) => runner.with_env(PROJECT_ROOT_ENV, root.display().to_string()),
            None => runner,
        }
    }

    fn run_step(
        &self,
        step: &Step,
        context: &HookContext,
        runner: &CommandRunner,
    ) -> Result<StepOutcome> {
        match step {
            Step::Log { message, level } => {
                match level {
                    StepLevel::Info => info!("{message}"),
                    StepLevel::Warn => warn!("{message}"),
                    StepLevel::Error => error!("{message}"),
                }
                Ok(StepOutcome::Passed)
            }
            Step::Command { run, options } => self.spawn(run, options, context, runner),
            Step::Shell { script, options } => {
                let args = vec!["sh".to_string(), "-c".to_string(), script.clone()];
                self.spawn(&args, options, context, runner)
            }
        }
    }

    fn spawn(
        &self,
        args: &[String],
        options: &StepOptions,
        context: &HookContext,
        runner: &CommandRunner,
    ) -> Result<StepOutcome> {
        let cwd = resolve_cwd(context.project_root.as_deref(), options.cwd.as_deref());
        if let Some(dir) = &cwd {
            if !dir.is_dir() {
                bail!("working directory {} does not exist", dir.display());
            }
        }

        let payload = options.stdin.then(|| context.stdin_payload());
        let result = runner.run_spec(&CommandSpec {
            args,
            cwd: cwd.as_deref(),
            stdin: payload.as_deref(),
            env: Some(&options.env),
        });

        Ok(self.judge(&result, options))
    }

    fn judge(&self, result: &CommandResult, options: &StepOptions) -> StepOutcome {
        if result.success {
            for line in result.stdout.lines() {
                debug!("{line}");
            }
            return StepOutcome::Passed;
        }

        if result.is_not_found() && options.skip_if_missing {
            warn!("{}, skipping", result.stderr.trim());
            return StepOutcome::Skipped;
        }

        for line in result.stdout.lines().chain(result.stderr.lines()) {
            error!("{line}");
        }
        StepOutcome::Failed {
            exit_code: result.exit_code,
            message: format!(
                "`{}` failed with exit code {}",
                result.command.join(" "),
                result.exit_code
            ),
        }
    }
}

impl GitHook for StepHook {
    fn name(&self) -> &str {
        &self.definition.name
    }

    fn execute(&self, context: &HookContext) -> Result<HookResult> {
        let runner = self.runner_for(context);
        let total = self.definition.steps.len();
        let mut first_failure: Option<(i32, String)> = None;
        let mut skipped = 0;

        for (index, step) in self.definition.steps.iter().enumerate() {
            debug!("Step {}/{total}: {}", index + 1, step.label());

            match self.run_step(step, context, &runner)? {
                StepOutcome::Passed => {}
                StepOutcome::Skipped => skipped += 1,
                StepOutcome::Failed { exit_code, message } => {
                    if self.definition.fail_fast {
                        return Ok(HookResult::failure_with_code(message, exit_code));
                    }
                    first_failure.get_or_insert((exit_code, message));
                }
            }
        }

        if let Some((exit_code, message)) = first_failure {
            return Ok(HookResult::failure_with_code(message, exit_code));
        }

        let message = match skipped {
            0 => format!("{total} step(s) passed"),
            n => format!("{} step(s) passed, {n} skipped", total - n),
        };
        Ok(HookResult::success(message))
    }
}

/// Execute a hook and reduce the outcome to a process exit code.
///
/// An `Err` from the hook is logged with its full cause chain and becomes
/// [`EXIT_FAILURE`]; it never propagates.
pub fn run_hook(hook: &dyn GitHook, context: &HookContext) -> i32 {
    let span = info_span!("hook", hook = hook.name());
    let _enter = span.enter();

    match hook.execute(context) {
        Ok(result) => {
            match (result.is_success(), result.message()) {
                (true, Some(message)) => info!("{message}"),
                (false, Some(message)) => error!("{message}"),
                _ => {}
            }
            result.exit_code()
        }
        Err(e) => {
            let failure = HookError::UnhandledHookExecution {
                hook: hook.name().to_string(),
                message: e.to_string(),
            };
            error!("{failure}");
            for cause in e.chain().skip(1) {
                error!("  caused by: {cause}");
            }
            EXIT_FAILURE
        }
    }
}
