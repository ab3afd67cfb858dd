//! # Commit Message Tag Line
//!
//! Parsing and rewriting of the optional leading tag bracket in a commit
//! message (`[tag1,tag2] rest of message`). Only the bracket is ever
//! rewritten; the message body is preserved verbatim. A bracket that does
//! not match the expected shape is not an error: the whole text is treated
//! as the body.

use regex::Regex;

use crate::error::Result;

/// Matches a leading `[tags] body` line. The body capture spans the rest of
/// the message, newlines included.
const TAG_LINE_PATTERN: &str = r"(?s)^\s*\[([^\[\]]*)\]\s*(.*)$";

/// Split a commit message into its leading tag list and body.
///
/// A missing or malformed bracket yields an empty tag list with the whole
/// message as the body. Tags are comma-separated inside the bracket;
/// surrounding whitespace is trimmed and empty entries dropped.
pub fn split_tags(message: &str) -> Result<(Vec<String>, String)> {
    let tag_line = Regex::new(TAG_LINE_PATTERN)?;

    match tag_line.captures(message) {
        Some(captures) => {
            let tags = captures[1]
                .split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect();
            Ok((tags, captures[2].to_string()))
        }
        None => Ok((Vec::new(), message.to_string())),
    }
}

/// Merge previously-applied tags with newly derived ones.
///
/// Existing tags keep their positions; derived tags are appended in
/// derivation order, skipping duplicates. The result is deterministic and
/// duplicate-free.
pub fn merge_tags(existing: &[String], derived: &[String]) -> Vec<String> {
    let mut merged = existing.to_vec();
    for tag in derived {
        if !merged.contains(tag) {
            merged.push(tag.clone());
        }
    }
    merged
}

/// Render a message with its leading tag list.
pub fn render(tags: &[String], body: &str) -> String {
    if tags.is_empty() {
        body.to_string()
    } else {
        format!("[{}] {}", tags.join(","), body)
    }
}

/// Apply newly derived tags to a commit message.
///
/// Returns the rewritten message, or `None` when the message does not need
/// to change: no tags were derived, or the merged tag list renders exactly
/// what is already there.
pub fn apply_tags(message: &str, derived: &[String]) -> Result<Option<String>> {
    if derived.is_empty() {
        return Ok(None);
    }

    let (existing, body) = split_tags(message)?;
    let merged = merge_tags(&existing, derived);
    let rewritten = render(&merged, &body);

    if rewritten == message {
        return Ok(None);
    }
    Ok(Some(rewritten))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    mod split_tags_tests {
        use super::*;

        #[test]
        fn test_split_message_with_tags() {
            let (parsed, body) = split_tags("[a/b,a/c] Fix bug").unwrap();
            assert_eq!(parsed, tags(&["a/b", "a/c"]));
            assert_eq!(body, "Fix bug");
        }

        #[test]
        fn test_split_message_without_tags() {
            let (parsed, body) = split_tags("Fix bug").unwrap();
            assert!(parsed.is_empty());
            assert_eq!(body, "Fix bug");
        }

        #[test]
        fn test_split_leading_whitespace_before_bracket() {
            let (parsed, body) = split_tags("  [a] Fix bug").unwrap();
            assert_eq!(parsed, tags(&["a"]));
            assert_eq!(body, "Fix bug");
        }

        #[test]
        fn test_split_malformed_bracket_is_body() {
            let (parsed, body) = split_tags("[unclosed Fix bug").unwrap();
            assert!(parsed.is_empty());
            assert_eq!(body, "[unclosed Fix bug");
        }

        #[test]
        fn test_split_preserves_multiline_body() {
            let (parsed, body) = split_tags("[a] Subject\n\nLonger description.\n").unwrap();
            assert_eq!(parsed, tags(&["a"]));
            assert_eq!(body, "Subject\n\nLonger description.\n");
        }

        #[test]
        fn test_split_empty_bracket() {
            let (parsed, body) = split_tags("[] Fix bug").unwrap();
            assert!(parsed.is_empty());
            assert_eq!(body, "Fix bug");
        }

        #[test]
        fn test_split_trims_tag_whitespace() {
            let (parsed, _) = split_tags("[a/b, a/c] Fix").unwrap();
            assert_eq!(parsed, tags(&["a/b", "a/c"]));
        }
    }

    mod merge_tags_tests {
        use super::*;

        #[test]
        fn test_merge_keeps_existing_order() {
            let merged = merge_tags(&tags(&["a/b"]), &tags(&["a/c"]));
            assert_eq!(merged, tags(&["a/b", "a/c"]));
        }

        #[test]
        fn test_merge_is_duplicate_free() {
            let merged = merge_tags(&tags(&["a/b", "a/c"]), &tags(&["a/c", "a/d"]));
            assert_eq!(merged, tags(&["a/b", "a/c", "a/d"]));
        }

        #[test]
        fn test_merge_with_no_existing() {
            let merged = merge_tags(&[], &tags(&["a"]));
            assert_eq!(merged, tags(&["a"]));
        }
    }

    mod apply_tags_tests {
        use super::*;

        #[test]
        fn test_apply_prepends_to_plain_message() {
            let rewritten = apply_tags("Fix bug", &tags(&["a/b"])).unwrap();
            assert_eq!(rewritten.as_deref(), Some("[a/b] Fix bug"));
        }

        #[test]
        fn test_apply_unions_with_existing_tags() {
            let rewritten = apply_tags("[a/b] Fix bug", &tags(&["a/c"])).unwrap();
            assert_eq!(rewritten.as_deref(), Some("[a/b,a/c] Fix bug"));
        }

        #[test]
        fn test_apply_no_derived_tags_is_noop() {
            let rewritten = apply_tags("[a/b] Fix bug", &[]).unwrap();
            assert_eq!(rewritten, None);
        }

        #[test]
        fn test_apply_already_tagged_is_noop() {
            let rewritten = apply_tags("[a/b] Fix bug", &tags(&["a/b"])).unwrap();
            assert_eq!(rewritten, None);
        }

        #[test]
        fn test_apply_preserves_body_verbatim() {
            let message = "Subject line\n\nBody with [brackets] inside.\n";
            let rewritten = apply_tags(message, &tags(&["pkg"])).unwrap().unwrap();
            assert_eq!(rewritten, "[pkg] Subject line\n\nBody with [brackets] inside.\n");
        }

        #[test]
        fn test_apply_to_empty_message() {
            let rewritten = apply_tags("", &tags(&["pkg"])).unwrap();
            assert_eq!(rewritten.as_deref(), Some("[pkg] "));
        }
    }
}
