mod cli;

use clap::Parser;
use colored::Colorize;
use std::process;

use cli::dispatch::dispatch;
use cli::types::Cli;

fn main() {
    let cli = Cli::parse();

    let code = match dispatch(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", "Error:".red().bold());
            1
        }
    };

    process::exit(code);
}
