//! # Canonical YAML Sorting
//!
//! Recursive, in-place sorting of parsed YAML trees with support for
//! restricting the sort to named top-level keys.
//!
//! ## Ordering rules
//!
//! - Mapping keys are reordered ascending under a deterministic total order
//!   over YAML values (type rank first, then natural per-type comparison),
//!   so mixed-type keys never depend on input order.
//! - A sequence element sorts by its own value, except that a mapping
//!   element sorts by its *first* key. A list of "blocks" (mappings whose
//!   first field is a name) therefore sorts by name alongside plain
//!   scalars.
//! - The YAML merge key (`<<`), which the parser resolves into an ordinary
//!   `<<` entry, is pinned to the first position of its mapping so
//!   inheritance stays readable after reordering.
//!
//! Sorting is idempotent: applying it twice yields the same tree, and the
//! same serialized bytes, as applying it once.

use std::cmp::Ordering;

use log::warn;
use serde_yaml::{Mapping, Value};

/// YAML merge key, resolved by the parser into an ordinary `<<` entry.
const MERGE_KEY: &str = "<<";

/// Rank used to order values of different YAML types relative to each other.
fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Sequence(_) => 4,
        Value::Mapping(_) => 5,
        Value::Tagged(_) => 6,
    }
}

/// Deterministic total order over YAML values.
///
/// Same-type values compare naturally (numbers numerically, strings
/// lexicographically, sequences elementwise, mappings by first key);
/// mixed types order by type rank.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Sequence(x), Value::Sequence(y)) => {
            for (ex, ey) in x.iter().zip(y.iter()) {
                let ord = compare_values(ex, ey);
                if ord != Ordering::Equal {
                    return ord;
                }
            }
            x.len().cmp(&y.len())
        }
        (Value::Mapping(x), Value::Mapping(y)) => {
            match (x.iter().next(), y.iter().next()) {
                (Some((kx, _)), Some((ky, _))) => compare_values(kx, ky),
                (Some(_), None) => Ordering::Greater,
                (None, Some(_)) => Ordering::Less,
                (None, None) => Ordering::Equal,
            }
        }
        (Value::Tagged(x), Value::Tagged(y)) => x
            .tag
            .to_string()
            .cmp(&y.tag.to_string())
            .then_with(|| compare_values(&x.value, &y.value)),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

/// Sort key for a node used as a sequence element: a mapping sorts by its
/// first key (in current order), any other node by its own value.
fn sort_key(value: &Value) -> &Value {
    match value {
        Value::Mapping(map) => match map.iter().next() {
            Some((key, _)) => key,
            None => value,
        },
        _ => value,
    }
}

/// Compare two sequence elements by their sort keys.
fn compare_elements(a: &Value, b: &Value) -> Ordering {
    compare_values(sort_key(a), sort_key(b))
}

/// Whether a mapping key is the YAML merge key.
fn is_merge_key(key: &Value) -> bool {
    matches!(key, Value::String(text) if text == MERGE_KEY)
}

/// Reorder a mapping's keys ascending, keeping a merge key first.
fn sort_mapping(map: &mut Mapping, recursive: bool, sort_lists: bool) {
    let mut entries: Vec<(Value, Value)> = std::mem::take(map).into_iter().collect();

    if recursive {
        for (_, value) in entries.iter_mut() {
            sort_value(value, recursive, sort_lists);
        }
    }

    entries.sort_by(|(ka, _), (kb, _)| match (is_merge_key(ka), is_merge_key(kb)) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => compare_values(ka, kb),
    });

    for (key, value) in entries {
        map.insert(key, value);
    }
}

/// Recursively sort a YAML node in place.
///
/// Mappings get their keys reordered; sequences are sorted by element sort
/// key when `sort_lists` is set. With `recursive` unset only the outermost
/// container is reordered (and sequence elements are left untouched).
pub fn sort_value(value: &mut Value, recursive: bool, sort_lists: bool) {
    match value {
        Value::Sequence(elements) => {
            if recursive {
                for element in elements.iter_mut() {
                    sort_value(element, recursive, sort_lists);
                }
            }
            if sort_lists {
                elements.sort_by(compare_elements);
            }
        }
        Value::Mapping(map) => sort_mapping(map, recursive, sort_lists),
        _ => {}
    }
}

/// Sort a parsed document, optionally restricted to named top-level keys.
///
/// With `keys` non-empty, only `doc[key]` is sorted for each named key
/// (missing keys are skipped with a warning); otherwise the whole document
/// is sorted. `recursive` selects top-level-only vs full-tree sorting.
pub fn sort_document(doc: &mut Value, keys: &[String], recursive: bool) {
    if keys.is_empty() {
        sort_value(doc, recursive, true);
        return;
    }

    for key in keys {
        match doc.get_mut(key.as_str()) {
            Some(subtree) => sort_value(subtree, recursive, true),
            None => warn!("Key `{}` not present in document, skipping", key),
        }
    }
}
