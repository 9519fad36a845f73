//! Git hooks defined as TOML files inside a project, discovered by name and
//! installed as small self-locating scripts.
//!
//! Hook files live in `githooks/` (or any configured search directory):
//!
//! ```toml
//! [[hook]]
//! id = "PreCommit"
//! name = "pre-commit"
//!
//! [[hook.steps]]
//! kind = "command"
//! run = ["cargo", "fmt", "--check"]
//! ```
//!
//! `hookshed install pre-commit` writes `.git/hooks/pre-commit`, a POSIX
//! shell script that finds the repository again on every run and hands over
//! to `hookshed exec`.

pub mod api;
pub mod command;
pub mod commands;
pub mod completions;
pub mod config;
pub mod error;
pub mod git;
pub mod hooks;
pub mod logging;
pub mod models;

pub use api::HookApi;
pub use error::{HookError, Result};
