//! Property-based tests for the sorting and tagging cores.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::sort::sort_value;
    use crate::tags::derive_tags;
    use proptest::prelude::*;
    use serde_yaml::{Mapping, Value};
    use std::path::PathBuf;

    /// Strategy producing small, arbitrarily nested YAML trees.
    fn yaml_value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            (-1000i64..1000).prop_map(|n| Value::Number(n.into())),
            "[a-z]{1,8}".prop_map(Value::String),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Sequence),
                prop::collection::vec(("[a-z]{1,6}", inner), 0..4).prop_map(|entries| {
                    let mut map = Mapping::new();
                    for (key, value) in entries {
                        map.insert(Value::String(key), value);
                    }
                    Value::Mapping(map)
                }),
            ]
        })
    }

    /// Strategy producing repository-relative file path lists.
    fn path_list() -> impl Strategy<Value = Vec<PathBuf>> {
        prop::collection::vec(
            "[a-z]{1,4}(/[a-z]{1,4}){0,4}".prop_map(PathBuf::from),
            0..12,
        )
    }

    // ============================================================================
    // sort_value property tests
    // ============================================================================

    proptest! {
        /// Property: recursive sorting is idempotent on the tree
        #[test]
        fn sort_is_idempotent(mut value in yaml_value()) {
            sort_value(&mut value, true, true);
            let once = value.clone();
            sort_value(&mut value, true, true);
            prop_assert_eq!(value, once);
        }

        /// Property: sorting a serialized-and-reparsed document again
        /// produces byte-identical output (the §8 idempotence contract at
        /// the file level)
        #[test]
        fn sort_dump_roundtrip_is_stable(mut value in yaml_value()) {
            sort_value(&mut value, true, true);
            let first_dump = serde_yaml::to_string(&value).unwrap();

            let mut reparsed: Value = serde_yaml::from_str(&first_dump).unwrap();
            sort_value(&mut reparsed, true, true);
            prop_assert_eq!(serde_yaml::to_string(&reparsed).unwrap(), first_dump);
        }

        /// Property: sorting never loses or invents mapping entries
        #[test]
        fn sort_preserves_mapping_size(value in yaml_value()) {
            let mut sorted = value.clone();
            sort_value(&mut sorted, true, true);
            if let (Value::Mapping(before), Value::Mapping(after)) = (&value, &sorted) {
                prop_assert_eq!(before.len(), after.len());
            }
        }

        /// Property: non-recursive sorting of a mapping leaves every value
        /// structurally unchanged
        #[test]
        fn non_recursive_sort_keeps_values(value in yaml_value()) {
            let mut sorted = value.clone();
            sort_value(&mut sorted, false, false);
            if let (Value::Mapping(before), Value::Mapping(after)) = (&value, &sorted) {
                for (key, val) in before {
                    prop_assert_eq!(Some(val), after.get(key));
                }
            }
        }
    }

    // ============================================================================
    // derive_tags property tests
    // ============================================================================

    proptest! {
        /// Property: the number of tags never exceeds the cap
        #[test]
        fn tag_count_respects_cap(
            files in path_list(),
            max_tags in 1usize..4,
            max_depth in 1usize..4,
        ) {
            let tags = derive_tags(&files, max_tags, max_depth, &[]);
            prop_assert!(tags.len() <= max_tags);
        }

        /// Property: derive_tags is deterministic
        #[test]
        fn derive_tags_is_deterministic(files in path_list()) {
            let first = derive_tags(&files, 2, 2, &[]);
            let second = derive_tags(&files, 2, 2, &[]);
            prop_assert_eq!(first, second);
        }

        /// Property: files without a parent directory never produce tags
        #[test]
        fn root_files_never_tag(names in prop::collection::vec("[a-z]{1,8}", 0..8)) {
            let files: Vec<PathBuf> = names.iter().map(PathBuf::from).collect();
            let tags = derive_tags(&files, 2, 2, &[]);
            prop_assert!(tags.is_empty());
        }

        /// Property: every returned tag is a prefix of some file's directory
        /// path
        #[test]
        fn tags_come_from_input_paths(files in path_list()) {
            let tags = derive_tags(&files, 2, 2, &[]);
            for tag in &tags {
                let found = files.iter().any(|file| {
                    file.parent()
                        .map(|parent| parent.starts_with(tag))
                        .unwrap_or(false)
                });
                prop_assert!(found, "tag '{}' does not match any input path", tag);
            }
        }
    }
}
