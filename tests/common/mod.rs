//! Shared test utilities for E2E tests.
//!
//! This module provides common fixtures and helper functions to reduce
//! duplication across test files.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let repo = GitRepo::new();
//!     repo.stage_file("pkg/io/reader.py");
//!     // ... test code
//! }
//! ```

use std::path::{Path, PathBuf};
use std::process::Command;

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    pub use assert_cmd::cargo::cargo_bin_cmd;
    pub use assert_fs::prelude::*;
    #[allow(unused_imports)]
    pub use assert_fs::TempDir;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::GitRepo;
}

/// A throwaway git repository with an initial commit, for staging files
/// against.
///
/// `git diff-index --cached HEAD` needs a resolvable `HEAD`, so the fixture
/// creates an empty initial commit up front.
pub struct GitRepo {
    temp: assert_fs::TempDir,
}

#[allow(dead_code)]
impl GitRepo {
    pub fn new() -> Self {
        let temp = assert_fs::TempDir::new().unwrap();
        let repo = GitRepo { temp };
        repo.git(&["init", "-q"]);
        repo.git(&["config", "user.email", "hooks@example.com"]);
        repo.git(&["config", "user.name", "Hooks Test"]);
        repo.git(&["config", "commit.gpgsign", "false"]);
        repo.git(&["commit", "--allow-empty", "-q", "-m", "initial"]);
        repo
    }

    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Create a file (with parent directories) and stage it.
    pub fn stage_file(&self, relative: &str) {
        let path = self.temp.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, "contents\n").unwrap();
        self.git(&["add", relative]);
    }

    /// Write a commit message file inside the repository and return its path.
    pub fn write_message(&self, contents: &str) -> PathBuf {
        let path = self.temp.path().join("COMMIT_EDITMSG");
        std::fs::write(&path, contents).unwrap();
        path
    }

    /// Run a git command in the repository, asserting success.
    pub fn git(&self, args: &[&str]) {
        let status = Command::new("git")
            .args(args)
            .current_dir(self.temp.path())
            .status()
            .expect("failed to run git");
        assert!(status.success(), "git {:?} failed", args);
    }
}
