//! # Directory Tag Derivation
//!
//! Given the file paths staged for a commit, derive a small set of directory
//! labels summarizing which areas of the repository the commit touches.
//!
//! ## Grouping
//!
//! Files are grouped by the leading components of their parent directory,
//! truncated to a depth. Grouping prefers the deepest depth whose distinct
//! group count still fits under the tag cap (`pkg/subpkg` beats `pkg` when
//! it fits), then falls back to shallower depths for commits spread across
//! many subdirectories of the same top-level area. A commit that is too
//! scattered at every depth gets no tags at all rather than a misleading
//! partial label set.
//!
//! ## Prefix stripping
//!
//! An ordered list of path prefixes can be stripped before grouping (for
//! example `-p python/src`), so tags describe the logical package rather
//! than the repository layout. The first matching prefix wins, and files
//! grouped under different prefixes never share a tag candidate even when
//! the remaining components coincide.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

/// Grouping key for one staged file: which configured prefix stripped it
/// (`None` when no prefix matched) and the parent-directory components
/// truncated to the grouping depth.
///
/// Two files share a group iff both fields are equal; the rendered tag
/// ignores the prefix identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct TagCandidate {
    prefix: Option<usize>,
    dirs: Vec<String>,
}

/// Strip the first configured prefix the path is relative to.
///
/// Returns the index of the matching prefix and the remainder. A path that
/// matches no prefix is returned unmodified with `None` identity.
fn strip_first_prefix<'a>(path: &'a Path, prefixes: &[PathBuf]) -> (Option<usize>, &'a Path) {
    for (index, prefix) in prefixes.iter().enumerate() {
        if let Ok(rest) = path.strip_prefix(prefix) {
            return (Some(index), rest);
        }
    }
    (None, path)
}

/// Parent-directory components of `path`, as strings.
///
/// Only normal components survive; a bare filename yields an empty vector.
fn parent_components(path: &Path) -> Vec<String> {
    match path.parent() {
        Some(parent) => parent
            .components()
            .filter_map(|component| match component {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect(),
        None => Vec::new(),
    }
}

/// Count tag candidates at one grouping depth, preserving first-seen order.
///
/// Files whose parent directory is empty after prefix stripping are
/// excluded: a file at the matched root never produces a tag.
fn count_at_depth(
    stripped: &[(Option<usize>, Vec<String>)],
    depth: usize,
) -> Vec<(TagCandidate, usize)> {
    let mut counts: Vec<(TagCandidate, usize)> = Vec::new();
    let mut index: HashMap<TagCandidate, usize> = HashMap::new();

    for (prefix, dirs) in stripped {
        let truncated: Vec<String> = dirs.iter().take(depth).cloned().collect();
        if truncated.is_empty() {
            continue;
        }
        let candidate = TagCandidate {
            prefix: *prefix,
            dirs: truncated,
        };
        match index.get(&candidate) {
            Some(&position) => counts[position].1 += 1,
            None => {
                index.insert(candidate.clone(), counts.len());
                counts.push((candidate, 1));
            }
        }
    }

    counts
}

/// Derive at most `max_tags` directory tags from the staged file list.
///
/// Tries each grouping depth from `max_depth` down to 1 and keeps the first
/// one whose distinct group count fits under `max_tags`. Tags are rendered
/// as slash-joined directory components, ordered by descending occurrence
/// count with ties kept in first-encountered order.
///
/// Returns an empty vector when no depth fits under the cap, or when every
/// file sits at the (stripped) repository root.
pub fn derive_tags(
    files: &[PathBuf],
    max_tags: usize,
    max_depth: usize,
    prefixes: &[PathBuf],
) -> Vec<String> {
    let stripped: Vec<(Option<usize>, Vec<String>)> = files
        .iter()
        .map(|file| {
            let (prefix, rest) = strip_first_prefix(file, prefixes);
            (prefix, parent_components(rest))
        })
        .collect();

    for depth in (1..=max_depth).rev() {
        let mut counts = count_at_depth(&stripped, depth);
        if counts.len() > max_tags {
            continue;
        }
        if counts.is_empty() {
            break;
        }

        // Stable sort keeps first-seen order within equal counts.
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        let mut tags: Vec<String> = Vec::new();
        for (candidate, _) in counts {
            let tag = candidate.dirs.join("/");
            if !tags.contains(&tag) {
                tags.push(tag);
            }
        }
        return tags;
    }

    Vec::new()
}
