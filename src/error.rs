//! # Error Handling
//!
//! Centralized error handling for the `commit-hooks` library, built on
//! `thiserror`. The `Error` enum covers the failure modes of the hook
//! utilities:
//!
//! - Git command execution failures (the staged-file query).
//! - I/O errors while reading or rewriting files.
//! - YAML parsing and serialization errors.
//! - Regex errors.
//!
//! The `Result` type alias is used to return `Result<T, Error>` from
//! library functions, making it easy to propagate errors up the call stack.
//! Command implementations translate these into process exit codes via
//! [`Error::exit_code`].

use thiserror::Error;

/// Main error type for commit-hooks operations
#[derive(Error, Debug)]
pub enum Error {
    /// An error occurred while executing a Git command.
    ///
    /// Carries the command's exit code so callers can forward it verbatim
    /// as the process exit code, per the hook contract.
    #[error("Git command failed: {command} (exit code {code}): {stderr}")]
    GitCommand {
        command: String,
        code: i32,
        stderr: String,
    },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A YAML parsing or serialization error, wrapped from `serde_yaml::Error`.
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A regular expression error, wrapped from `regex::Error`.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}

impl Error {
    /// The process exit code this error maps to.
    ///
    /// A failed git invocation forwards its own exit code unchanged; every
    /// other error is a general failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::GitCommand { code, .. } => *code,
            _ => 1,
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
