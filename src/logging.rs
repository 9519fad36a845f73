//! Log subscriber setup
//!
//! Errors go to stderr and everything else to stdout, so a hook's progress
//! shows up in the normal `git commit` output while failures stay visible
//! when stdout is redirected.

use std::env;

use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

/// Full `EnvFilter` directive; overrides every other setting.
pub const LOG_ENV: &str = "HOOKSHED_LOG";
/// Truthy values turn on debug logging, including inside installed hooks.
pub const DEBUG_ENV: &str = "HOOKSHED_DEBUG";

#[derive(Debug, Clone, Default)]
pub struct LogSettings {
    pub debug: bool,
    pub trace: bool,
    pub config_level: Option<String>,
}

impl LogSettings {
    /// The level used when `HOOKSHED_LOG` is unset.
    pub fn level(&self) -> String {
        if self.trace {
            "trace".to_string()
        } else if self.debug || debug_from_env() {
            "debug".to_string()
        } else {
            self.config_level
                .clone()
                .unwrap_or_else(|| "info".to_string())
        }
    }
}

pub fn debug_from_env() -> bool {
    env::var(DEBUG_ENV).is_ok_and(|value| is_truthy(&value))
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init(settings: &LogSettings) {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(settings.level()));

    let writer = std::io::stderr
        .with_max_level(Level::ERROR)
        .or_else(std::io::stdout);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(false)
        .without_time()
        .try_init();
}
