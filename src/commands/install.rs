//! # Hook Install Command Implementation
//!
//! This module implements the `install`, `uninstall` and `status`
//! subcommands, which manage the git hook that runs the commit tagger.
//! Installing writes a `prepare-commit-msg` script that invokes
//! `commit-hooks tag` with the configured grouping options, so the tagger
//! works without any external hook framework.
//!
//! A marker comment identifies hooks written by this tool; a hook without
//! the marker is never overwritten (without `--force`) or removed.

use anyhow::Result;
use clap::Args;
use std::fs;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Hook marker comment to identify commit-hooks hooks
const HOOK_MARKER: &str = "# commit-hooks-hook";

/// The hook this tool manages. `prepare-commit-msg` receives the message
/// file path as its first argument.
const HOOK_NAME: &str = "prepare-commit-msg";

/// Arguments for hook installation
#[derive(Args, Debug)]
pub struct InstallArgs {
    /// Path to the Git repository (defaults to current directory)
    #[arg(long, value_name = "DIR")]
    pub repo: Option<PathBuf>,

    /// Path prefix the hook should strip before grouping (repeatable)
    #[arg(short, long = "prefix", value_name = "PREFIX")]
    pub prefix: Vec<PathBuf>,

    /// Maximum grouping depth baked into the hook
    #[arg(short, long, value_name = "N", default_value_t = 2)]
    pub depth: usize,

    /// Maximum tag count baked into the hook
    #[arg(short, long, value_name = "N", default_value_t = 2)]
    pub tags: usize,

    /// Overwrite existing hook if present
    #[arg(long)]
    pub force: bool,
}

/// Arguments for hook uninstallation
#[derive(Args, Debug)]
pub struct UninstallArgs {
    /// Path to the Git repository (defaults to current directory)
    #[arg(long, value_name = "DIR")]
    pub repo: Option<PathBuf>,
}

/// Arguments for status check
#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Path to the Git repository (defaults to current directory)
    #[arg(long, value_name = "DIR")]
    pub repo: Option<PathBuf>,
}

/// Generate the prepare-commit-msg hook script
fn generate_hook_script(prefixes: &[PathBuf], depth: usize, tags: usize) -> String {
    let mut flags = format!("--depth {} --tags {}", depth, tags);
    for prefix in prefixes {
        flags.push_str(&format!(" --prefix {}", prefix.display()));
    }

    format!(
        r#"#!/bin/sh
{HOOK_MARKER}
# This hook was installed by commit-hooks to tag commit messages with the
# directories touched by each commit.
#
# To uninstall: commit-hooks uninstall
# To reinstall: commit-hooks install

# Check if commit-hooks is available
if ! command -v commit-hooks >/dev/null 2>&1; then
    echo "Warning: commit-hooks not found in PATH, skipping commit tagging"
    exit 0
fi

commit-hooks tag {flags} "$1"
"#
    )
}

/// Find the .git directory for a repository
fn find_git_dir(repo_path: &Path) -> Result<PathBuf> {
    let git_dir = repo_path.join(".git");

    if git_dir.is_dir() {
        Ok(git_dir)
    } else if git_dir.is_file() {
        // Worktree or submodule - .git is a file pointing to the actual git dir
        let content = fs::read_to_string(&git_dir)?;
        let gitdir = content
            .strip_prefix("gitdir: ")
            .ok_or_else(|| anyhow::anyhow!("Invalid .git file format"))?
            .trim();

        let path = if Path::new(gitdir).is_absolute() {
            PathBuf::from(gitdir)
        } else {
            repo_path.join(gitdir)
        };

        Ok(path)
    } else {
        Err(anyhow::anyhow!(
            "Not a Git repository: {}",
            repo_path.display()
        ))
    }
}

/// Install the prepare-commit-msg hook
pub fn execute_install(args: InstallArgs) -> Result<()> {
    let repo_path = args
        .repo
        .unwrap_or_else(|| std::env::current_dir().expect("Failed to get current directory"));

    let git_dir = find_git_dir(&repo_path)?;
    let hooks_dir = git_dir.join("hooks");
    let hook_path = hooks_dir.join(HOOK_NAME);

    // Create hooks directory if it doesn't exist
    if !hooks_dir.exists() {
        fs::create_dir_all(&hooks_dir)?;
    }

    // Check for existing hook
    if hook_path.exists() {
        let existing_content = fs::read_to_string(&hook_path)?;

        if existing_content.contains(HOOK_MARKER) {
            if args.force {
                println!("Overwriting existing commit-hooks hook...");
            } else {
                println!("commit-hooks hook already installed. Use --force to overwrite.");
                return Ok(());
            }
        } else if args.force {
            // Backup existing hook
            let backup_path = hooks_dir.join(format!("{}.backup", HOOK_NAME));
            fs::rename(&hook_path, &backup_path)?;
            println!("Backed up existing hook to: {}", backup_path.display());
        } else {
            anyhow::bail!(
                "A {} hook already exists (not from commit-hooks). \
                 Use --force to overwrite (existing hook will be backed up).",
                HOOK_NAME
            );
        }
    }

    // Write the hook script
    let hook_content = generate_hook_script(&args.prefix, args.depth, args.tags);
    fs::write(&hook_path, &hook_content)?;

    // Make executable on Unix
    #[cfg(unix)]
    {
        let mut perms = fs::metadata(&hook_path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&hook_path, perms)?;
    }

    println!("Installed {} hook: {}", HOOK_NAME, hook_path.display());
    println!();
    println!(
        "The hook will tag each commit message with at most {} director{} (depth {}).",
        args.tags,
        if args.tags == 1 { "y" } else { "ies" },
        args.depth
    );

    Ok(())
}

/// Uninstall the prepare-commit-msg hook
pub fn execute_uninstall(args: UninstallArgs) -> Result<()> {
    let repo_path = args
        .repo
        .unwrap_or_else(|| std::env::current_dir().expect("Failed to get current directory"));

    let git_dir = find_git_dir(&repo_path)?;
    let hook_path = git_dir.join("hooks").join(HOOK_NAME);

    if !hook_path.exists() {
        println!("No {} hook found.", HOOK_NAME);
        return Ok(());
    }

    let content = fs::read_to_string(&hook_path)?;

    if !content.contains(HOOK_MARKER) {
        println!(
            "The {} hook was not installed by commit-hooks. Not removing.",
            HOOK_NAME
        );
        return Ok(());
    }

    fs::remove_file(&hook_path)?;
    println!("Uninstalled {} hook: {}", HOOK_NAME, hook_path.display());

    // Check for backup
    let backup_path = git_dir.join("hooks").join(format!("{}.backup", HOOK_NAME));
    if backup_path.exists() {
        println!("Note: A backup hook exists at: {}", backup_path.display());
        println!(
            "You may want to restore it with: mv {} {}",
            backup_path.display(),
            hook_path.display()
        );
    }

    Ok(())
}

/// Show hook installation status
pub fn execute_status(args: StatusArgs) -> Result<()> {
    let repo_path = args
        .repo
        .unwrap_or_else(|| std::env::current_dir().expect("Failed to get current directory"));

    let git_dir = find_git_dir(&repo_path)?;
    let hook_path = git_dir.join("hooks").join(HOOK_NAME);

    if !hook_path.exists() {
        println!("Status: Not installed");
        println!();
        println!("Run 'commit-hooks install' to install the {} hook.", HOOK_NAME);
        return Ok(());
    }

    let content = fs::read_to_string(&hook_path)?;

    if content.contains(HOOK_MARKER) {
        println!("Status: Installed");
        println!("Hook path: {}", hook_path.display());
    } else {
        println!("Status: Other hook present (not commit-hooks)");
        println!("Hook path: {}", hook_path.display());
    }

    Ok(())
}
