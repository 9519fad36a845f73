//! Shell completion scripts

use anyhow::{anyhow, Result};
use clap::Command;
use clap_complete::{generate, shells};
use std::io;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
}

impl FromStr for Shell {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bash" => Ok(Shell::Bash),
            "zsh" => Ok(Shell::Zsh),
            "fish" => Ok(Shell::Fish),
            _ => Err(anyhow!(
                "Unsupported shell: {s}. Supported shells: bash, zsh, fish"
            )),
        }
    }
}

/// Write the completion script for `cmd` to stdout.
///
/// ```no_run
/// use clap::Command;
/// use hookshed::completions::{generate_completions, Shell};
///
/// let mut cmd = Command::new("hookshed");
/// generate_completions(&mut cmd, Shell::Zsh);
/// ```
pub fn generate_completions(cmd: &mut Command, shell: Shell) {
    let bin_name = cmd.get_name().to_string();
    let mut out = io::stdout();

    match shell {
        Shell::Bash => generate(shells::Bash, cmd, bin_name, &mut out),
        Shell::Zsh => generate(shells::Zsh, cmd, bin_name, &mut out),
        Shell::Fish => generate(shells::Fish, cmd, bin_name, &mut out),
    }
}

/// Render the completion script for `cmd` into a string.
pub fn render_completions(cmd: &mut Command, shell: Shell) -> String {
    let bin_name = cmd.get_name().to_string();
    let mut buf = Vec::new();

    match shell {
        Shell::Bash => generate(shells::Bash, cmd, bin_name, &mut buf),
        Shell::Zsh => generate(shells::Zsh, cmd, bin_name, &mut buf),
        Shell::Fish => generate(shells::Fish, cmd, bin_name, &mut buf),
    }
    String::from_utf8_lossy(&buf).into_owned()
}
