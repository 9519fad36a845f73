//! Data types shared by discovery, execution and the CLI.

pub mod context;
pub mod definition;
pub mod result;

pub use context::HookContext;
pub use definition::{HookDefinition, HookModule, Step, StepLevel, StepOptions};
pub use result::{
    CommandResult, HookResult, EXIT_COMMAND_NOT_FOUND, EXIT_FAILURE, EXIT_SUCCESS,
};
