//! # Tag Command Implementation
//!
//! This module implements the `tag` subcommand, which inspects the staged
//! file paths and prefixes the commit message with directory-derived tags.
//!
//! ## Functionality
//!
//! - **Staged-file query**: Asks git for the paths staged for this commit.
//! - **Tag derivation**: Groups the paths by truncated parent directory and
//!   picks at most `--tags` labels (see `commit_hooks::tags`).
//! - **Message rewrite**: Merges the derived tags with any bracket already
//!   present and rewrites only that leading segment of the message file.
//!
//! Designed to run as a `prepare-commit-msg` (or `commit-msg`) hook: a
//! commit too scattered to summarize is left untagged rather than aborted,
//! and a failed git query forwards git's own exit code so the hook
//! machinery sees the original failure.

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;

use commit_hooks::error::Error;
use commit_hooks::{git, message, tags};

/// Tag the commit message with the directories touched by the staged changes
#[derive(Args, Debug)]
pub struct TagArgs {
    /// Path to the commit message file to rewrite.
    #[arg(value_name = "COMMIT_MSG_FILE")]
    pub commit_msg_file: PathBuf,

    /// Path prefix to strip before grouping (repeatable, first match wins).
    #[arg(short, long = "prefix", value_name = "PREFIX")]
    pub prefix: Vec<PathBuf>,

    /// Maximum number of leading path components used to group files.
    #[arg(short, long, value_name = "N", default_value_t = 2)]
    pub depth: usize,

    /// Maximum number of distinct tags to accept.
    #[arg(short, long, value_name = "N", default_value_t = 2)]
    pub tags: usize,
}

/// Execute the `tag` command.
///
/// Returns the process exit code: 0 on success (including the no-op case
/// where no tags could be derived), or the git query's own exit code when
/// listing staged files fails.
pub fn execute(args: TagArgs) -> Result<i32> {
    let files = match git::staged_files() {
        Ok(files) => files,
        Err(Error::GitCommand {
            command,
            code,
            stderr,
        }) => {
            log::error!("{} exited with code {}", command, code);
            eprint!("{}", stderr);
            return Ok(code);
        }
        Err(err) => return Err(err.into()),
    };

    let derived = tags::derive_tags(&files, args.tags, args.depth, &args.prefix);
    if derived.is_empty() {
        log::debug!("no tags derived from {} staged file(s)", files.len());
        return Ok(0);
    }

    let msg_file = &args.commit_msg_file;
    let original = fs::read_to_string(msg_file)
        .with_context(|| format!("Failed to read commit message file `{}`", msg_file.display()))?;

    if let Some(rewritten) = message::apply_tags(&original, &derived)? {
        fs::write(msg_file, rewritten).with_context(|| {
            format!("Failed to write commit message file `{}`", msg_file.display())
        })?;
    }

    Ok(0)
}
