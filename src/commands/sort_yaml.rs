//! # Sort-YAML Command Implementation
//!
//! This module implements the `sort-yaml` subcommand, which reorders
//! mapping keys (and, in recursive mode, nested mappings and sequences) in
//! YAML files into a canonical ascending order.
//!
//! ## Functionality
//!
//! - **Canonical Sort**: See `commit_hooks::sort` for the ordering rules.
//! - **Key Restriction**: `-k/--key` limits sorting to named top-level keys.
//! - **Exit Codes**:
//!   - 0: Every file was already in canonical form
//!   - 1: At least one file was rewritten (re-stage and retry)
//!
//! This command is designed for use as a pre-commit hook on files whose
//! ordering is pure noise in review, such as dependency lists.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use commit_hooks::{rewrite, sort};

/// Canonically sort mappings in YAML files
#[derive(Args, Debug)]
pub struct SortYamlArgs {
    /// Files to fix.
    #[arg(value_name = "FILE")]
    pub filenames: Vec<PathBuf>,

    /// Sort nested mappings and sequences too, not just the top level.
    #[arg(short, long)]
    pub recursive: bool,

    /// Restrict sorting to the given top-level keys (repeatable).
    #[arg(short, long = "key", value_name = "KEY")]
    pub key: Vec<String>,
}

/// Execute the `sort-yaml` command.
///
/// Returns exit code 0 when every file was already canonical, 1 when any
/// file was rewritten.
pub fn execute(args: SortYamlArgs) -> Result<i32> {
    let mut retval = 0;

    for filename in &args.filenames {
        let changed = rewrite::rewrite_yaml_file(filename, |doc| {
            sort::sort_document(doc, &args.key, args.recursive)
        })
        .with_context(|| format!("Failed to fix `{}`", filename.display()))?;

        if changed {
            println!("Fixing file `{}`", filename.display());
            retval = 1;
        }
    }

    Ok(retval)
}
