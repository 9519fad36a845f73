//! Explaining a failed hook lookup

use super::discovery::{legacy_hook_files, source_files, HookDiscoveryService};
use super::loader::SOURCE_EXTENSION;
use super::project::LEGACY_HOOK_SUFFIX;
use crate::error::HookError;

/// Describe where discovery looked for `hook_name` and what it found there.
pub fn hook_not_found_message(service: &HookDiscoveryService, hook_name: &str) -> String {
    let mut lines = vec![
        HookError::HookNameNotFound(hook_name.to_string()).to_string(),
        "Could not find hooks under:".to_string(),
    ];

    if let Some(root) = service.project_root() {
        let count = legacy_hook_files(root).len();
        let detail = match count {
            0 => format!("no *{LEGACY_HOOK_SUFFIX} files found"),
            n => format!("found {n} *{LEGACY_HOOK_SUFFIX} files"),
        };
        lines.push(format!("  - {} ({detail})", root.display()));
    }

    for dir in service.search_dirs() {
        let detail = if !dir.is_dir() {
            "directory does not exist".to_string()
        } else {
            match source_files(&dir).len() {
                0 => format!("no .{SOURCE_EXTENSION} files found"),
                n => format!("found {n} .{SOURCE_EXTENSION} files"),
            }
        };
        lines.push(format!("  - {} ({detail})", dir.display()));
    }

    lines.join("\n")
}
