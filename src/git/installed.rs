//! Classification of scripts already present in the hook slot directory

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::hooks::delegator::{ROOT_LOCATOR_MARKER, TOOL_MARKER};

/// Check whether script content was generated by this tool.
pub fn is_tool_managed_script(content: &str) -> bool {
    content.contains(TOOL_MARKER) && content.contains(ROOT_LOCATOR_MARKER)
}

/// Map every installed hook script in `hooks_dir` to whether this tool owns it.
///
/// Git's `*.sample` templates are skipped. Unreadable or non-UTF-8 files are
/// reported as externally managed instead of failing the whole listing.
pub fn classify_installed_hooks(hooks_dir: &Path) -> BTreeMap<String, bool> {
    let mut installed = BTreeMap::new();

    let entries = match fs::read_dir(hooks_dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("Cannot read {}: {e}", hooks_dir.display());
            return installed;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.ends_with(".sample") {
            continue;
        }

        let owned = match fs::read_to_string(&path) {
            Ok(content) => is_tool_managed_script(&content),
            Err(e) => {
                debug!("Treating {} as external: {e}", path.display());
                false
            }
        };
        installed.insert(name.to_string(), owned);
    }

    installed
}
