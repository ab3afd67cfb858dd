use std::path::PathBuf;
use std::process::Command;

use crate::error::{Error, Result};

/// The staged-file query run before tagging a commit.
const DIFF_INDEX_ARGS: [&str; 5] = ["diff-index", "-z", "--cached", "HEAD", "--name-only"];

/// List the file paths staged for the current commit.
///
/// This uses the system git command, so repository discovery, worktrees and
/// hook execution context behave exactly as they do for the surrounding
/// `git commit` invocation. Paths are repository-relative.
///
/// # Errors
///
/// Returns `Error::GitCommand` when the query exits non-zero (for example
/// outside a repository, or before the first commit when `HEAD` does not
/// resolve). The variant carries git's own exit code so the caller can
/// forward it unchanged.
pub fn staged_files() -> Result<Vec<PathBuf>> {
    let output = Command::new("git").args(DIFF_INDEX_ARGS).output()?;

    if !output.status.success() {
        return Err(Error::GitCommand {
            command: format!("git {}", DIFF_INDEX_ARGS.join(" ")),
            code: output.status.code().unwrap_or(1),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(parse_name_list(&output.stdout))
}

/// Split NUL-separated `--name-only -z` output into paths.
///
/// Empty chunks (the trailing NUL, or an empty diff) are dropped.
fn parse_name_list(stdout: &[u8]) -> Vec<PathBuf> {
    stdout
        .split(|byte| *byte == 0)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| PathBuf::from(String::from_utf8_lossy(chunk).into_owned()))
        .collect()
}
