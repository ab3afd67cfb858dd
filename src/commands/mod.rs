//! # CLI Command Implementations
//!
//! This module contains the implementation for each subcommand of the
//! `commit-hooks` command-line tool. Each subcommand is defined in its own
//! file to keep the logic separated and maintainable.
//!
//! ## Structure
//!
//! Each command module typically contains:
//! - An `Args` struct that defines the command-specific arguments and
//!   options, derived using `clap`.
//! - An `execute` function that takes the parsed `Args` and performs the
//!   command's logic, calling into the `commit_hooks` library.
//!
//! Commands with hook exit-code semantics (`tag`, `sort-yaml`, `fix-env`)
//! return the exit code they want the process to end with; the rest return
//! plain results.

pub mod completions;
pub mod fix_env;
pub mod install;
pub mod sort_yaml;
pub mod tag;
