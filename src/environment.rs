//! # Conda Environment File Normalization
//!
//! Canonicalization applied to `environment.yml` files before commit: the
//! machine-local `prefix` entry is dropped, and the `dependencies` list is
//! sorted so diffs stay small when packages are added. The `pip:` block
//! inside `dependencies` sorts among the package specs by its key, and its
//! own package list is sorted too.

use log::warn;
use serde_yaml::Value;

use crate::sort;

/// Machine-local path conda writes into exported environments.
const PREFIX_KEY: &str = "prefix";

/// The dependency list sorted by this fixer.
const DEPENDENCIES_KEY: &str = "dependencies";

/// Normalize a parsed conda environment document in place.
///
/// Removes the top-level `prefix` entry if present and recursively sorts
/// the `dependencies` subtree. Other top-level keys (`name`, `channels`,
/// ...) are left exactly as written. Non-mapping documents are skipped.
pub fn normalize_environment(doc: &mut Value) {
    let Some(map) = doc.as_mapping_mut() else {
        warn!("Environment document is not a mapping, leaving unchanged");
        return;
    };

    map.remove(PREFIX_KEY);

    if let Some(dependencies) = map.get_mut(DEPENDENCIES_KEY) {
        sort::sort_value(dependencies, true, true);
    }
}
