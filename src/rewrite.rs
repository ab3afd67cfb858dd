//! # File Rewrite Cycle
//!
//! The read-transform-write loop shared by the YAML fixing commands:
//! parse the file, apply an in-memory transformation, and write back only
//! when the serialized result differs from the original text. The new
//! content is fully computed before any write happens, so a failure never
//! leaves a partially-written file behind.

use std::fs;
use std::path::Path;

use serde_yaml::Value;

use crate::error::Result;

/// Apply `transform` to the parsed document and rewrite the file if needed.
///
/// Returns `true` when the file was rewritten, `false` when the serialized
/// result matched the existing content byte for byte.
///
/// # Errors
///
/// Fails on unreadable files, invalid YAML, or write errors. A parse
/// failure happens before any write, leaving the file untouched.
pub fn rewrite_yaml_file<F>(path: &Path, transform: F) -> Result<bool>
where
    F: FnOnce(&mut Value),
{
    let old_contents = fs::read_to_string(path)?;
    let mut doc: Value = serde_yaml::from_str(&old_contents)?;

    transform(&mut doc);

    let new_contents = serde_yaml::to_string(&doc)?;
    if new_contents == old_contents {
        return Ok(false);
    }

    fs::write(path, new_contents)?;
    Ok(true)
}
