//! Delegator scripts installed into the git hook slot
//!
//! Git runs hooks as bare executables, from wherever it likes, with no idea
//! where the hook definitions live. The delegator is a small POSIX shell
//! script that rediscovers the repository root on every run, using only its
//! own location and `git` itself, and then hands over to
//! `hookshed exec`. The only values baked into it are the module identifier
//! and the implementation identifier, so a clone or a moved checkout keeps
//! working without reinstalling.

use std::borrow::Cow;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use crate::error::{HookError, Result};
use crate::hooks::loader::module_relative_path;

/// Present in every generated script; used to recognise our own hooks.
pub const TOOL_MARKER: &str = "hookshed";
/// Name of the root-locating shell function, the second ownership marker.
pub const ROOT_LOCATOR_MARKER: &str = "find_repo_root";
/// Overrides the binary the delegator hands over to.
pub const BIN_ENV: &str = "HOOKSHED_BIN";

const TEMPLATE: &str = r#"#!/bin/sh
# Git hook delegator generated by hookshed.
# Reinstall with `hookshed install <hook>` instead of editing this file.

HOOKSHED_MODULE={module}
HOOKSHED_IMPLEMENTATION={implementation}
HOOKSHED_MODULE_FILE={module_file}

is_project_root() {
    [ -e "$1/.git" ] && [ -f "$1/$HOOKSHED_MODULE_FILE" ]
}

find_repo_root() {
    root=$(git rev-parse --show-toplevel 2>/dev/null)
    if [ -n "$root" ] && is_project_root "$root"; then
        printf '%s\n' "$root"
        return 0
    fi

    dir=$(CDPATH= cd -- "$(dirname -- "$0")" && pwd -P) || return 1
    while :; do
        if is_project_root "$dir"; then
            printf '%s\n' "$dir"
            return 0
        fi
        [ "$dir" = "/" ] && return 1
        dir=$(dirname -- "$dir")
    done
}

root=$(find_repo_root)
if [ -z "$root" ]; then
    echo "Error: Could not find project root containing $HOOKSHED_MODULE" >&2
    echo "Looked for module file: $HOOKSHED_MODULE_FILE" >&2
    exit 1
fi

bin=${HOOKSHED_BIN:-hookshed}
if ! command -v "$bin" >/dev/null 2>&1; then
    echo "Error: '$bin' not found; put hookshed on PATH or set HOOKSHED_BIN" >&2
    exit 1
fi

exec "$bin" exec --root "$root" "$HOOKSHED_MODULE" "$HOOKSHED_IMPLEMENTATION"
"#;

/// Render the delegator for one implementation.
pub fn render(module: &str, implementation: &str) -> String {
    let module_file = module_relative_path(module);
    TEMPLATE
        .replace("{module_file}", &quote(&module_file.to_string_lossy()))
        .replace("{module}", &quote(module))
        .replace("{implementation}", &quote(implementation))
}

fn quote(value: &str) -> String {
    shell_escape::unix::escape(Cow::Borrowed(value)).into_owned()
}

/// A rendered delegator and the slot it belongs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelegatorArtifact {
    pub path: PathBuf,
    pub content: String,
}

impl DelegatorArtifact {
    pub fn new(hooks_dir: &Path, hook_name: &str, module: &str, implementation: &str) -> Self {
        Self {
            path: hooks_dir.join(hook_name),
            content: render(module, implementation),
        }
    }

    /// Write the script, replacing whatever is there, and mark it executable.
    pub fn write(&self) -> Result<()> {
        let fail = |source| HookError::ArtifactWriteFailure {
            path: self.path.clone(),
            source,
        };

        fs::write(&self.path, &self.content).map_err(fail)?;
        fs::set_permissions(&self.path, fs::Permissions::from_mode(0o755)).map_err(fail)?;
        Ok(())
    }
}
