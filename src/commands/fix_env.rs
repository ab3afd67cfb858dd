//! # Fix-Env Command Implementation
//!
//! This module implements the `fix-env` subcommand, which normalizes conda
//! `environment.yml` files before they are committed.
//!
//! ## Functionality
//!
//! - **Prefix Removal**: Drops the machine-local `prefix` entry conda
//!   writes into exported environments.
//! - **Dependency Sort**: Canonically sorts the `dependencies` subtree,
//!   including the nested `pip:` package list.
//! - **Exit Codes**: Same convention as `sort-yaml` (0 clean, 1 rewritten).

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use commit_hooks::{environment, rewrite};

/// Normalize conda environment files
#[derive(Args, Debug)]
pub struct FixEnvArgs {
    /// Files to fix.
    #[arg(value_name = "FILE")]
    pub filenames: Vec<PathBuf>,
}

/// Execute the `fix-env` command.
///
/// Returns exit code 0 when every file was already normalized, 1 when any
/// file was rewritten.
pub fn execute(args: FixEnvArgs) -> Result<i32> {
    let mut retval = 0;

    for filename in &args.filenames {
        let changed = rewrite::rewrite_yaml_file(filename, environment::normalize_environment)
            .with_context(|| format!("Failed to fix `{}`", filename.display()))?;

        if changed {
            println!("Fixing file `{}`", filename.display());
            retval = 1;
        }
    }

    Ok(retval)
}
