//! # Commit Hooks CLI
//!
//! This is the binary entry point for the `commit-hooks` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Executing the appropriate subcommand based on the parsed arguments.
//! - Translating the command result into the process exit code: hook
//!   conventions give exit codes meaning (1 means "files were rewritten,
//!   re-stage and retry"; a failed git query forwards git's own code).
//!
//! The core logic is defined in the `commit_hooks` library crate, ensuring
//! that the binary is a thin wrapper around the reusable functionality.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    let code = cli.execute()?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
