//! Git repository queries used by hook installation
//!
//! This module provides:
//! - Repository root resolution (git query with a filesystem fallback)
//! - Hook slot directory lookup
//! - Classification of scripts already installed in the hook slot

pub mod installed;
pub mod root;
pub mod runner;

pub use installed::{classify_installed_hooks, is_tool_managed_script};
pub use root::{find_git_root, hooks_dir, require_hooks_dir};
