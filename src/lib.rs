//! # Commit Hooks Library
//!
//! This library provides the core functionality for the `commit-hooks` git
//! hook utilities: deriving directory tags from staged changes and
//! canonically sorting YAML documents. It is designed to be used by the
//! `commit-hooks` command-line tool but can also be integrated into other
//! applications that want the same transformations.
//!
//! ## Quick Example
//!
//! ```
//! use std::path::PathBuf;
//! use commit_hooks::tags::derive_tags;
//!
//! let files = [
//!     PathBuf::from("pkg/io/reader.py"),
//!     PathBuf::from("pkg/io/writer.py"),
//! ];
//!
//! // Two files under the same directory collapse into one tag
//! let tags = derive_tags(&files, 2, 2, &[]);
//! assert_eq!(tags, ["pkg/io"]);
//! ```
//!
//! ## Core Concepts
//!
//! The library is built around a few key concepts:
//!
//! - **Tag Derivation (`tags`)**: Groups staged file paths by truncated
//!   parent directory and picks the most specific grouping that fits under
//!   the tag cap.
//! - **Message Rewriting (`message`)**: Parses and rewrites the optional
//!   leading `[tag1,tag2]` bracket of a commit message, merging new tags
//!   with existing ones and never touching the body.
//! - **Canonical Sorting (`sort`)**: Recursively reorders YAML mappings and
//!   sequences into a deterministic order, pinning merge keys first.
//! - **Environment Normalization (`environment`)**: Conda-specific cleanup
//!   built on the sorter.
//! - **Rewrite Cycle (`rewrite`)**: The shared read-transform-write loop
//!   that only touches files whose canonical form differs from what is on
//!   disk.
//! - **Git Query (`git`)**: Lists the staged file paths via the system git
//!   command.
//!
//! Each hook invocation constructs everything fresh from version-control
//! output; nothing persists across invocations except the files rewritten
//! on disk.

pub mod environment;
pub mod error;
pub mod git;
pub mod message;
pub mod rewrite;
pub mod sort;
pub mod tags;

#[cfg(test)]
mod sort_proptest;
