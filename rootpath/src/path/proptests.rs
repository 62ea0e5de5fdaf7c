//! Property-based tests for path handling.
//!
//! Note: The normalize and absolute modules already carry light property
//! tests. This module runs heavier generators mixing both root families,
//! both separators and dot segments.

use super::normalize::{combine, normalize_path};
use super::{AbsolutePath, Root};
use crate::error::Error;
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        8 => "[a-zA-Z0-9_-]{1,12}",
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
    ]
}

fn root_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just("/".to_string()), "[A-Za-z]".prop_map(|l| format!("{l}:"))]
}

// Raw rooted input with mixed separators and dot segments
fn raw_path_strategy() -> impl Strategy<Value = String> {
    (
        root_strategy(),
        prop::collection::vec((segment_strategy(), prop::sample::select(vec!["/", "\\", "//"])), 0..10),
    )
        .prop_map(|(root, parts)| {
            let mut path = root;
            for (segment, separator) in parts {
                path.push_str(separator);
                path.push_str(&segment);
            }
            path
        })
}

fn hash_of(path: &AbsolutePath) -> u64 {
    let mut hasher = DefaultHasher::new();
    path.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 5000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Normalization is idempotent: normalize(normalize(p)) == normalize(p)
    #[test]
    fn normalization_idempotent(path in raw_path_strategy()) {
        if let Ok(once) = normalize_path(&path, None) {
            prop_assert_eq!(normalize_path(&once, None).unwrap(), once);
        }
    }

    // Failures on rooted input are only ever traversal failures
    #[test]
    fn rooted_input_fails_only_on_traversal(path in raw_path_strategy()) {
        match normalize_path(&path, None) {
            Ok(_) | Err(Error::TraversalAboveRoot { .. }) => {}
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    // Normalized output keeps the root and uses only its separator
    #[test]
    fn normalized_output_is_canonical(path in raw_path_strategy()) {
        if let Ok(normalized) = normalize_path(&path, None) {
            let root = Root::detect(&path).unwrap();
            prop_assert_eq!(Root::detect(&normalized), Some(root));

            let foreign = if root.separator() == '/' { '\\' } else { '/' };
            prop_assert!(!normalized.contains(foreign));

            let tail = &normalized[root.len()..];
            for segment in tail.split(root.separator()).filter(|s| !s.is_empty()) {
                prop_assert_ne!(segment, ".");
                prop_assert_ne!(segment, "..");
            }
            prop_assert!(!tail.contains(&format!("{0}{0}", root.separator())));
        }
    }

    // Equal values hash equally
    #[test]
    fn eq_implies_same_hash(path in raw_path_strategy()) {
        if let Ok(value) = AbsolutePath::new(&path) {
            let shouted = AbsolutePath::new(path.to_uppercase());
            if let Ok(shouted) = shouted {
                if value == shouted {
                    prop_assert_eq!(hash_of(&value), hash_of(&shouted));
                }
                if value.root().is_case_insensitive() {
                    prop_assert_eq!(value, shouted);
                }
            }
        }
    }

    // Combining then normalizing matches joining on the value type
    #[test]
    fn combine_agrees_with_join(base in raw_path_strategy(), suffix in "[a-z]{1,8}(/[a-z]{1,8}){0,3}") {
        if let Ok(value) = AbsolutePath::new(&base) {
            let combined = combine(value.as_str(), &suffix, None).unwrap();
            let expected = AbsolutePath::new(combined).unwrap();
            prop_assert_eq!(value.join(&suffix).unwrap(), expected);
        }
    }

    // Walking ancestors always ends at the bare root
    #[test]
    fn ancestors_end_at_root(path in raw_path_strategy()) {
        if let Ok(value) = AbsolutePath::new(&path) {
            let last = value.ancestors().last().unwrap();
            prop_assert!(last.is_root());
            prop_assert_eq!(last.as_str(), value.root().bare());
        }
    }
}
